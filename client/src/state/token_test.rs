use std::sync::{Arc, Mutex};

use super::*;
use crate::util::storage::MemoryStorage;

#[test]
fn starts_from_persisted_value() {
    let backend = MemoryStorage::new();
    backend.write("tok-persisted");
    let tokens = TokenStore::new(Arc::new(backend));
    assert_eq!(tokens.get().as_deref(), Some("tok-persisted"));
}

#[test]
fn starts_empty_without_persisted_value() {
    let tokens = TokenStore::new(Arc::new(MemoryStorage::new()));
    assert_eq!(tokens.get(), None);
}

#[test]
fn set_persists_and_survives_reinitialization() {
    let backend = MemoryStorage::new();
    let tokens = TokenStore::new(Arc::new(backend.clone()));
    tokens.set(Some("tok-123".to_owned()));

    // Simulate a page reload: a fresh cache over the same backend.
    let reloaded = TokenStore::new(Arc::new(backend));
    assert_eq!(reloaded.get().as_deref(), Some("tok-123"));
}

#[test]
fn clearing_removes_the_persisted_value() {
    let backend = MemoryStorage::new();
    let tokens = TokenStore::new(Arc::new(backend.clone()));
    tokens.set(Some("tok-123".to_owned()));
    tokens.set(None);

    assert_eq!(tokens.get(), None);
    let reloaded = TokenStore::new(Arc::new(backend));
    assert_eq!(reloaded.get(), None);
}

#[test]
fn set_notifies_with_new_value() {
    let tokens = TokenStore::new(Arc::new(MemoryStorage::new()));
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    tokens.subscribe(move |t| sink.lock().expect("test lock").push(t.clone()));

    tokens.set(Some("a".to_owned()));
    tokens.set(None);
    assert_eq!(*seen.lock().expect("test lock"), vec![Some("a".to_owned()), None]);
}

#[test]
fn persistence_happens_before_notification() {
    let backend = MemoryStorage::new();
    let tokens = TokenStore::new(Arc::new(backend.clone()));
    let observed = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&observed);
    tokens.subscribe(move |_| {
        *sink.lock().expect("test lock") = backend.read();
    });

    tokens.set(Some("tok-123".to_owned()));
    assert_eq!(observed.lock().expect("test lock").as_deref(), Some("tok-123"));
}
