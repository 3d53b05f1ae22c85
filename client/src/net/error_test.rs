use super::*;

#[test]
fn status_is_reported_per_variant() {
    let err = ApiError::Status { status: 401, message: None };
    assert_eq!(err.status(), Some(401));
    assert!(err.is_unauthorized());

    let err = ApiError::Validation { errors: HashMap::new() };
    assert_eq!(err.status(), Some(412));

    assert_eq!(ApiError::Network("down".to_owned()).status(), None);
}

#[test]
fn message_code_only_on_status_errors() {
    let err = ApiError::Status { status: 401, message: Some("Banned account".to_owned()) };
    assert_eq!(err.message_code(), Some("Banned account"));
    assert_eq!(ApiError::Decode("bad json".to_owned()).message_code(), None);
}

#[test]
fn field_errors_only_on_validation() {
    let mut errors = HashMap::new();
    errors.insert("email".to_owned(), "already taken".to_owned());
    let err = ApiError::Validation { errors };
    assert_eq!(err.field_errors().and_then(|e| e.get("email")).map(String::as_str), Some("already taken"));
    assert!(ApiError::Network("down".to_owned()).field_errors().is_none());
}
