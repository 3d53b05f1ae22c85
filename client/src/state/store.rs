//! Observable single-value store.
//!
//! DESIGN
//! ======
//! Each cache in the session layer is "exactly one current value, observable
//! by many": subscribers are invoked synchronously on every mutation, in a
//! plain callback list rather than a reactive graph, so the session core has
//! no framework dependency and tests can observe it directly. Handles are
//! cheap clones sharing one inner state; all mutation goes through [`set`].
//!
//! [`set`]: Store::set

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::{Arc, Mutex, PoisonError};

type Callback<T> = Arc<dyn Fn(&Option<T>) + Send + Sync>;

/// Identifies one subscription for later removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(u64);

struct Inner<T> {
    value: Option<T>,
    subscribers: Vec<(u64, Callback<T>)>,
    next_id: u64,
}

/// A process-wide observable cell holding at most one `T`.
pub struct Store<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T: Clone> Store<T> {
    #[must_use]
    pub fn new(initial: Option<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner { value: initial, subscribers: Vec::new(), next_id: 0 })),
        }
    }

    /// Current value; no side effects.
    #[must_use]
    pub fn get(&self) -> Option<T> {
        self.lock().value.clone()
    }

    /// Replace the value and synchronously notify every subscriber.
    pub fn set(&self, value: Option<T>) {
        {
            let mut inner = self.lock();
            inner.value = value;
        }
        self.notify_subscribers();
    }

    /// Register `callback` for every subsequent mutation. The current value
    /// is not replayed; callers needing it read [`get`](Self::get) first.
    pub fn subscribe(&self, callback: impl Fn(&Option<T>) + Send + Sync + 'static) -> SubscriptionId {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push((id, Arc::new(callback)));
        SubscriptionId(id)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.lock().subscribers.retain(|(sub_id, _)| *sub_id != id.0);
    }

    /// Invoke every subscriber with the current value, even when unchanged.
    /// Used once at startup so late-mounted observers see the initial state.
    pub fn notify_subscribers(&self) {
        // Snapshot outside the lock: callbacks may re-enter get()/subscribe().
        let (value, callbacks) = {
            let inner = self.lock();
            (inner.value.clone(), inner.subscribers.iter().map(|(_, cb)| Arc::clone(cb)).collect::<Vec<_>>())
        };
        for callback in callbacks {
            callback(&value);
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
