use super::*;

#[test]
fn page_urls_localize_current_and_alternate() {
    let urls = page_urls("https://playstarhold.com", "/terms", Language::Fr);
    assert_eq!(urls.current, "https://playstarhold.com/fr/terms");
    assert_eq!(urls.alternate, "https://playstarhold.com/en/terms");
    assert_eq!(urls.default_lang, "https://playstarhold.com/en/terms");
}

#[test]
fn page_urls_handle_the_root_path() {
    let urls = page_urls("https://playstarhold.com", "/", Language::En);
    assert_eq!(urls.current, "https://playstarhold.com/en");
    assert_eq!(urls.alternate, "https://playstarhold.com/fr");
}
