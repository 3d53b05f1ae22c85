use super::*;

#[test]
fn invalid_prefix_is_replaced_by_default_language() {
    assert_eq!(default_language_redirect("/de/play", "", ""), "/en/play");
    assert_eq!(default_language_redirect("/xyz", "", ""), "/en");
}

#[test]
fn redirect_preserves_query_and_hash() {
    assert_eq!(
        default_language_redirect("/de", "?action=login", "#features"),
        "/en?action=login#features"
    );
}

#[test]
fn redirect_keeps_nested_sub_paths() {
    assert_eq!(default_language_redirect("/bad/reset-password", "?k=tok", ""), "/en/reset-password?k=tok");
}
