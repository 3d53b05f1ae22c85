use super::*;

#[test]
fn network_failure_reads_as_server_unreachable() {
    let err = ApiError::Network("timeout".to_owned());
    assert_eq!(
        login_error_message(Language::En, &err),
        Language::En.table().common.server_unreachable
    );
}

#[test]
fn unauthorized_with_account_state_code_gets_specific_message() {
    let t = Language::En.table();
    for (code, expected) in [
        ("Created account", t.auth.account_state.created_account),
        ("Banned account", t.auth.account_state.banned_account),
        ("Disabled account", t.auth.account_state.disabled_account),
    ] {
        let err = ApiError::Status { status: 401, message: Some(code.to_owned()) };
        assert_eq!(login_error_message(Language::En, &err), expected);
    }
}

#[test]
fn plain_unauthorized_reads_as_bad_credentials() {
    let err = ApiError::Status { status: 401, message: Some("whatever".to_owned()) };
    assert_eq!(login_error_message(Language::En, &err), Language::En.table().auth.login.error);
    let err = ApiError::Status { status: 401, message: None };
    assert_eq!(login_error_message(Language::En, &err), Language::En.table().auth.login.error);
}

#[test]
fn other_statuses_read_as_generic_error() {
    let err = ApiError::Status { status: 500, message: None };
    assert_eq!(login_error_message(Language::Fr, &err), Language::Fr.table().common.error);
}
