//! Fire-and-forget task spawning.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controller operations like the profile fetch are fire-and-forget: callers
//! observe completion through cache subscriptions, never by awaiting. In the
//! browser this maps to `leptos::task::spawn_local`. Unit tests drive a
//! deterministic thread-local executor instead, stepping it with [`tick`] to
//! interleave overlapping operations at will. During SSR the futures are
//! dropped: every spawned flow is browser-only.

use std::future::Future;

#[cfg(feature = "hydrate")]
pub fn spawn<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    leptos::task::spawn_local(fut);
}

#[cfg(all(not(feature = "hydrate"), not(test)))]
pub fn spawn<F>(_fut: F)
where
    F: Future<Output = ()> + 'static,
{
    // Server-side rendering never runs auth flows; nothing to schedule.
}

#[cfg(all(not(feature = "hydrate"), test))]
pub use test_pool::{spawn, tick};

#[cfg(all(not(feature = "hydrate"), test))]
mod test_pool {
    use std::cell::RefCell;
    use std::future::Future;

    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;

    thread_local! {
        static POOL: RefCell<LocalPool> = RefCell::new(LocalPool::new());
    }

    pub fn spawn<F>(fut: F)
    where
        F: Future<Output = ()> + 'static,
    {
        POOL.with(|pool| {
            pool.borrow()
                .spawner()
                .spawn_local(fut)
                .expect("test executor rejected task");
        });
    }

    /// Run every spawned task until all are complete or pending.
    pub fn tick() {
        POOL.with(|pool| {
            pool.borrow_mut().run_until_stalled();
        });
    }
}
