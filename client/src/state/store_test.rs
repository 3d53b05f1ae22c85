use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

#[test]
fn get_returns_initial_value() {
    let store = Store::new(Some(7));
    assert_eq!(store.get(), Some(7));
    let empty: Store<i32> = Store::new(None);
    assert_eq!(empty.get(), None);
}

#[test]
fn set_notifies_subscribers_synchronously() {
    let store = Store::new(None);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    store.subscribe(move |v: &Option<i32>| sink.lock().expect("test lock").push(*v));

    store.set(Some(1));
    store.set(None);
    assert_eq!(*seen.lock().expect("test lock"), vec![Some(1), None]);
}

#[test]
fn subscribe_does_not_replay_current_value() {
    let store = Store::new(Some(1));
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    store.subscribe(move |_: &Option<i32>| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn unsubscribe_stops_notifications() {
    let store = Store::new(None);
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let id = store.subscribe(move |_: &Option<i32>| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    store.set(Some(1));
    store.unsubscribe(id);
    store.set(Some(2));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn notify_subscribers_replays_unchanged_value() {
    let store = Store::new(Some(5));
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    store.subscribe(move |v: &Option<i32>| sink.lock().expect("test lock").push(*v));

    store.notify_subscribers();
    assert_eq!(*seen.lock().expect("test lock"), vec![Some(5)]);
}

#[test]
fn subscriber_may_read_the_store_reentrantly() {
    let store = Store::new(None);
    let reader = store.clone();
    let seen = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&seen);
    store.subscribe(move |_: &Option<i32>| {
        *sink.lock().expect("test lock") = reader.get();
    });

    store.set(Some(9));
    assert_eq!(*seen.lock().expect("test lock"), Some(9));
}

#[test]
fn clones_share_state() {
    let store = Store::new(None);
    let other = store.clone();
    store.set(Some(3));
    assert_eq!(other.get(), Some(3));
}
