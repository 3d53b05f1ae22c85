use super::*;

#[test]
fn endpoint_url_appends_lang_param() {
    assert_eq!(endpoint_url("/api", "/auth/login", "en"), "/api/auth/login?lang=en");
}

#[test]
fn endpoint_url_extends_existing_query() {
    assert_eq!(
        endpoint_url("/api", "/account/password-reset/validate?token=abc", "fr"),
        "/api/account/password-reset/validate?token=abc&lang=fr"
    );
}

#[test]
fn success_statuses_pass_body_through() {
    assert_eq!(response_outcome(200, "ok").expect("2xx is success"), "ok");
    assert_eq!(response_outcome(201, r#"{"accessToken":"t"}"#).expect("2xx is success"), r#"{"accessToken":"t"}"#);
}

#[test]
fn status_errors_carry_server_message_code() {
    let err = response_outcome(401, r#"{"message":"Banned account"}"#).expect_err("401 is an error");
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.message_code(), Some("Banned account"));
}

#[test]
fn status_errors_tolerate_unparseable_bodies() {
    let err = response_outcome(500, "<html>oops</html>").expect_err("500 is an error");
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.message_code(), None);
}

#[test]
fn precondition_failed_maps_to_field_errors() {
    let err = response_outcome(412, r#"{"errors":{"username":"already taken"}}"#).expect_err("412 is an error");
    let errors = err.field_errors().expect("validation carries a field map");
    assert_eq!(errors.get("username").map(String::as_str), Some("already taken"));
}

#[test]
fn parse_json_wraps_decode_failures() {
    let err = parse_json::<super::super::types::TokenResponse>("not json").expect_err("must fail");
    assert!(matches!(err, ApiError::Decode(_)));
}
