use super::*;

fn sample_user() -> User {
    User {
        id: 1,
        username: "cmdr".to_owned(),
        email: "cmdr@example.com".to_owned(),
        email_validated: true,
        created_at: None,
    }
}

#[test]
fn authenticated_requires_both_token_and_user() {
    assert!(is_authenticated(&Some("tok".to_owned()), &Some(sample_user())));
}

#[test]
fn token_alone_is_not_authenticated() {
    assert!(!is_authenticated(&Some("tok".to_owned()), &None));
}

#[test]
fn user_alone_is_not_authenticated() {
    assert!(!is_authenticated(&None, &Some(sample_user())));
}

#[test]
fn neither_is_not_authenticated() {
    assert!(!is_authenticated(&None, &None));
}
