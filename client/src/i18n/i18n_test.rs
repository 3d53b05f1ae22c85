use super::*;

#[test]
fn language_parses_path_prefixes() {
    assert_eq!(language_from_path("/en/play"), Some(Language::En));
    assert_eq!(language_from_path("/fr"), Some(Language::Fr));
    assert_eq!(language_from_path("/de/play"), None);
    assert_eq!(language_from_path("/"), None);
}

#[test]
fn strip_language_prefix_keeps_sub_path() {
    assert_eq!(strip_language_prefix("/en/play"), "/play");
    assert_eq!(strip_language_prefix("/fr"), "/");
    assert_eq!(strip_language_prefix("/terms"), "/terms");
    assert_eq!(strip_language_prefix("/"), "/");
}

#[test]
fn localized_path_replaces_existing_prefix() {
    assert_eq!(localized_path(Language::Fr, "/en/play"), "/fr/play");
    assert_eq!(localized_path(Language::En, "/play"), "/en/play");
    assert_eq!(localized_path(Language::Fr, "/"), "/fr");
}

#[test]
fn switch_language_path_round_trips() {
    let there = switch_language_path("/en/terms", Language::Fr);
    assert_eq!(there, "/fr/terms");
    assert_eq!(switch_language_path(&there, Language::En), "/en/terms");
}

#[test]
fn tables_are_complete_per_language() {
    for language in Language::ALL {
        let t = language.table();
        assert!(!t.common.error.is_empty());
        assert!(!t.auth.login.submit.is_empty());
        assert!(!t.home.hero_title.is_empty());
        assert_eq!(t.home.features.len(), 3);
    }
}

#[test]
fn other_language_is_the_alternate() {
    assert_eq!(Language::En.other(), Language::Fr);
    assert_eq!(Language::Fr.other(), Language::En);
}

#[test]
fn current_language_cell_round_trips() {
    set_current_language(Language::Fr);
    assert_eq!(current_language(), Language::Fr);
    set_current_language(DEFAULT_LANGUAGE);
    assert_eq!(current_language(), DEFAULT_LANGUAGE);
}
