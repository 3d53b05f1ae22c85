//! Access-token cache.
//!
//! Holds the one live bearer token. Writes go through the durable backend
//! before subscribers run, so a reload started by a subscriber already sees
//! the persisted state. Only the auth controller mutates this cache.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use std::sync::Arc;

use super::store::{Store, SubscriptionId};
use crate::util::storage::TokenStorage;

/// The token cache: an observable store plus one persisted string.
#[derive(Clone)]
pub struct TokenStore {
    store: Store<String>,
    storage: Arc<dyn TokenStorage>,
}

impl TokenStore {
    /// Build the cache, seeding it from the persisted value if present.
    #[must_use]
    pub fn new(storage: Arc<dyn TokenStorage>) -> Self {
        let initial = storage.read();
        Self { store: Store::new(initial), storage }
    }

    #[must_use]
    pub fn get(&self) -> Option<String> {
        self.store.get()
    }

    /// Replace the token: persist (or clear) the durable copy, then notify.
    pub fn set(&self, token: Option<String>) {
        match &token {
            Some(value) => self.storage.write(value),
            None => self.storage.clear(),
        }
        self.store.set(token);
    }

    pub fn subscribe(&self, callback: impl Fn(&Option<String>) + Send + Sync + 'static) -> SubscriptionId {
        self.store.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.store.unsubscribe(id)
    }

    pub fn notify_subscribers(&self) {
        self.store.notify_subscribers()
    }
}
