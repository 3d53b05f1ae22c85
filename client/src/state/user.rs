//! Authenticated-user cache.
//!
//! Same observable contract as the token cache, but never persisted: the
//! profile is always re-fetched from the server, so the cache starts empty
//! on every load. Only the auth controller mutates it.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use super::store::{Store, SubscriptionId};
use crate::net::types::User;

#[derive(Clone)]
pub struct UserStore {
    store: Store<User>,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    #[must_use]
    pub fn new() -> Self {
        Self { store: Store::new(None) }
    }

    #[must_use]
    pub fn get(&self) -> Option<User> {
        self.store.get()
    }

    pub fn set(&self, user: Option<User>) {
        self.store.set(user)
    }

    pub fn subscribe(&self, callback: impl Fn(&Option<User>) + Send + Sync + 'static) -> SubscriptionId {
        self.store.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.store.unsubscribe(id)
    }
}
