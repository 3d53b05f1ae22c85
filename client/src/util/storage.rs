//! Durable storage backend for the access token.
//!
//! DESIGN
//! ======
//! The token cache persists exactly one string value. Persistence is behind
//! the `TokenStorage` trait so the browser build writes through
//! `localStorage` while tests and SSR use an in-memory backend, letting the
//! cache logic run unchanged in every environment.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::sync::{Arc, Mutex, PoisonError};

/// Environment-qualified `localStorage` key for the access token.
///
/// The qualifier keeps tokens from different deployments (development,
/// staging, production) from shadowing each other on a shared origin.
pub fn access_token_key() -> String {
    format!("sh_access_token_{}", option_env!("PUBLIC_ENV").unwrap_or("development"))
}

/// Backend holding at most one persisted token string.
pub trait TokenStorage: Send + Sync {
    /// Read the persisted token, if any.
    fn read(&self) -> Option<String>;
    /// Persist `token`, replacing any previous value.
    fn write(&self, token: &str);
    /// Remove the persisted value.
    fn clear(&self);
}

/// `localStorage`-backed storage. Inert outside the browser.
pub struct BrowserStorage {
    key: String,
}

impl BrowserStorage {
    #[must_use]
    pub fn new(key: String) -> Self {
        Self { key }
    }
}

impl TokenStorage for BrowserStorage {
    fn read(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(&self.key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &self.key;
            None
        }
    }

    fn write(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.set_item(&self.key, token);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.key, token);
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.remove_item(&self.key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &self.key;
        }
    }
}

/// In-memory storage for tests and server-side rendering.
///
/// Clones share the same cell, so a test can hand the same backend to two
/// consecutive cache instances to simulate a page reload.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    value: Arc<Mutex<Option<String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStorage for MemoryStorage {
    fn read(&self) -> Option<String> {
        self.value.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn write(&self, token: &str) {
        *self.value.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.value.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
