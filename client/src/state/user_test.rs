use std::sync::{Arc, Mutex};

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
fn starts_empty() {
    assert!(UserStore::new().get().is_none());
}

#[test]
fn set_and_clear_notify_subscribers() {
    let users = UserStore::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    users.subscribe(move |u| sink.lock().expect("test lock").push(u.clone()));

    users.set(Some(sample_user()));
    users.set(None);

    let seen = seen.lock().expect("test lock");
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].as_ref().map(|u| u.username.as_str()), Some("cmdr"));
    assert!(seen[1].is_none());
}
