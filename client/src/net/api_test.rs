use super::*;

#[test]
fn request_opts_default_runs_the_refresh_step() {
    assert!(!RequestOpts::default().skip_auth_refresh);
}

#[test]
fn skip_opts_bypass_the_refresh_step() {
    assert!(RequestOpts::skip().skip_auth_refresh);
}

#[test]
fn password_reset_validate_path_carries_token() {
    assert_eq!(
        password_reset_validate_path("one-time-token"),
        "/account/password-reset/validate?token=one-time-token"
    );
}
