use super::*;

#[test]
fn private_routes_block_unauthenticated_visitors() {
    assert!(private_route_blocked(false));
    assert!(!private_route_blocked(true));
}

#[test]
fn public_routes_block_authenticated_users() {
    assert!(public_route_blocked(true));
    assert!(!public_route_blocked(false));
}

#[test]
fn login_entry_is_the_localized_modal_url() {
    assert_eq!(login_entry_path(Language::En), "/en?action=login");
    assert_eq!(login_entry_path(Language::Fr), "/fr?action=login");
}

#[test]
fn authenticated_home_is_the_localized_play_page() {
    assert_eq!(authenticated_home_path(Language::Fr), "/fr/play");
}
