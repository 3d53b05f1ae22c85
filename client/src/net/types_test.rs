use super::*;

#[test]
fn user_deserializes_camel_case_wire_shape() {
    let user: User = serde_json::from_str(
        r#"{"id":1,"username":"cmdr","email":"cmdr@example.com","emailValidated":true,"createdAt":"2025-01-01T00:00:00Z"}"#,
    )
    .expect("valid user");
    assert_eq!(user.id, 1);
    assert_eq!(user.username, "cmdr");
    assert!(user.email_validated);
    assert_eq!(user.created_at.as_deref(), Some("2025-01-01T00:00:00Z"));
}

#[test]
fn user_optional_fields_default() {
    let user: User =
        serde_json::from_str(r#"{"id":2,"username":"cmdr","email":"cmdr@example.com"}"#).expect("valid user");
    assert!(!user.email_validated);
    assert!(user.created_at.is_none());
}

#[test]
fn token_response_reads_access_token() {
    let body: TokenResponse = serde_json::from_str(r#"{"accessToken":"tok-123"}"#).expect("valid body");
    assert_eq!(body.access_token, "tok-123");
}

#[test]
fn login_request_serializes_camel_case() {
    let dto = LoginRequest {
        username_or_email: "cmdr".to_owned(),
        password: "hunter2!".to_owned(),
    };
    let json = serde_json::to_value(&dto).expect("serializable");
    assert_eq!(json["usernameOrEmail"], "cmdr");
    assert_eq!(json["password"], "hunter2!");
}

#[test]
fn password_change_serializes_previous_password_key() {
    let dto = PasswordChangeRequest {
        previous_password: "old".to_owned(),
        password: "new".to_owned(),
        confirm_password: "new".to_owned(),
    };
    let json = serde_json::to_value(&dto).expect("serializable");
    assert!(json.get("previousPassword").is_some());
}

#[test]
fn error_body_defaults_when_fields_missing() {
    let body: ErrorBody = serde_json::from_str("{}").expect("valid body");
    assert!(body.message.is_none());
    assert!(body.errors.is_empty());

    let body: ErrorBody =
        serde_json::from_str(r#"{"message":"Banned account","errors":{"email":"taken"}}"#).expect("valid body");
    assert_eq!(body.message.as_deref(), Some("Banned account"));
    assert_eq!(body.errors.get("email").map(String::as_str), Some("taken"));
}
