use super::*;

fn validate(username: &str, email: &str, password: &str, confirm: &str) -> HashMap<String, String> {
    validate_registration(Language::En, username, email, password, confirm)
}

#[test]
fn accepts_a_complete_valid_registration() {
    let errors = validate("cmdr42", "cmdr@example.com", "Starhold1!", "Starhold1!");
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
}

#[test]
fn requires_every_field() {
    let errors = validate("", "", "", "");
    assert_eq!(errors.len(), 4);
    for key in ["username", "email", "password", "confirmPassword"] {
        assert_eq!(errors.get(key).map(String::as_str), Some(Language::En.table().validation.required));
    }
}

#[test]
fn rejects_invalid_username() {
    let errors = validate("a", "cmdr@example.com", "Starhold1!", "Starhold1!");
    assert!(errors.contains_key("username"));
}

#[test]
fn rejects_forbidden_email_domain() {
    let errors = validate("cmdr42", "cmdr@mailinator.com", "Starhold1!", "Starhold1!");
    assert_eq!(
        errors.get("email").map(String::as_str),
        Some(Language::En.table().validation.forbidden_email_domain)
    );
}

#[test]
fn weak_password_reports_rule_text() {
    let errors = validate("cmdr42", "cmdr@example.com", "weak", "weak");
    let message = errors.get("password").expect("password error");
    assert!(message.contains(Language::En.table().auth.password_rules.min_length));
}

#[test]
fn mismatched_confirmation_is_flagged_on_confirm_field() {
    let errors = validate("cmdr42", "cmdr@example.com", "Starhold1!", "Starhold2!");
    assert_eq!(
        errors.get("confirmPassword").map(String::as_str),
        Some(Language::En.table().validation.password_mismatch)
    );
    assert!(!errors.contains_key("password"));
}
