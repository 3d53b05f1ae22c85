use super::*;

#[test]
fn query_param_reads_with_and_without_leading_question_mark() {
    assert_eq!(query_param("?action=login&k=abc", "k").as_deref(), Some("abc"));
    assert_eq!(query_param("action=login", "action").as_deref(), Some("login"));
    assert_eq!(query_param("?action=login", "missing"), None);
}

#[test]
fn requested_action_parses_known_actions() {
    assert_eq!(requested_action("?action=login"), Some(AuthAction::Login));
    assert_eq!(requested_action("?action=password-reset-token"), Some(AuthAction::PasswordResetToken));
    assert_eq!(requested_action("?action=frobnicate"), None);
    assert_eq!(requested_action(""), None);
}

#[test]
fn modal_opens_only_for_modal_actions() {
    assert!(AuthAction::Login.opens_modal());
    assert!(AuthAction::Register.opens_modal());
    assert!(AuthAction::PasswordReset.opens_modal());
    assert!(!AuthAction::PasswordResetToken.opens_modal());
    assert!(!AuthAction::EmailValidation.opens_modal());
}

#[test]
fn open_action_query_preserves_unrelated_params() {
    assert_eq!(
        open_action_query("?utm=x&action=login", AuthAction::Register),
        "utm=x&action=register"
    );
}

#[test]
fn open_action_query_drops_stale_token() {
    assert_eq!(
        open_action_query("?action=password-reset-token&k=abc", AuthAction::Login),
        "action=login"
    );
}

#[test]
fn close_auth_query_removes_only_auth_params() {
    assert_eq!(close_auth_query("?action=login&utm=x&k=abc"), "utm=x");
    assert_eq!(close_auth_query("?action=login"), "");
}

#[test]
fn token_flow_query_formats_token() {
    assert_eq!(token_flow_query(Some("abc")), "k=abc");
    assert_eq!(token_flow_query(None), "");
}

#[test]
fn href_omits_empty_parts() {
    assert_eq!(href("/en", "", ""), "/en");
    assert_eq!(href("/en", "action=login", "#top"), "/en?action=login#top");
}
