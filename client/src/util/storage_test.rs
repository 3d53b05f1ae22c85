use super::*;

#[test]
fn memory_storage_round_trips_a_value() {
    let storage = MemoryStorage::new();
    assert!(storage.read().is_none());
    storage.write("tok-abc");
    assert_eq!(storage.read().as_deref(), Some("tok-abc"));
}

#[test]
fn memory_storage_clear_removes_value() {
    let storage = MemoryStorage::new();
    storage.write("tok-abc");
    storage.clear();
    assert!(storage.read().is_none());
}

#[test]
fn memory_storage_clones_share_state() {
    let storage = MemoryStorage::new();
    let other = storage.clone();
    storage.write("shared");
    assert_eq!(other.read().as_deref(), Some("shared"));
}

#[test]
fn access_token_key_is_environment_qualified() {
    assert!(access_token_key().starts_with("sh_access_token_"));
}
