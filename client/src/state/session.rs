//! Session coordination: login, logout, silent refresh, profile fetch.
//!
//! DESIGN
//! ======
//! `AuthController` is the only writer to the token and user caches. It is
//! generic over [`AuthGateway`] — the three server calls it needs — so unit
//! tests drive it with a scripted gateway while the app wires in the real
//! HTTP one. Handles are cheap clones over shared state; the controller is
//! constructed once at the composition root and passed through context.
//!
//! CONCURRENCY
//! ===========
//! Everything runs on the browser's single thread, but each server call is a
//! suspension point. The two cross-operation flags are flipped in the
//! synchronous sections around those awaits: `fetching_user` closes the
//! window for overlapping profile fetches, and `initialized` distinguishes
//! "no token yet at startup" from "token explicitly cleared by logout".
//! Concurrent `refresh_auth` calls from simultaneous outgoing requests are
//! *not* deduplicated — each call decides independently and may issue its
//! own refresh request. TODO: share one in-flight refresh future between
//! concurrent callers so fan-out bursts issue a single refresh request.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::token::TokenStore;
use super::user::UserStore;
use crate::net::error::ApiError;
use crate::net::types::User;
use crate::util::{jwt, task};

/// The server operations the session layer depends on.
///
/// Implementations attach no bearer credential to `refresh` and `revoke`
/// (the refresh cookie authenticates those) and must never re-enter the
/// refresh logic themselves.
pub trait AuthGateway {
    /// Exchange the refresh cookie for a new access token.
    fn refresh(&self) -> impl Future<Output = Result<String, ApiError>>;
    /// Invalidate the server-side session, presenting whatever bearer the
    /// client still holds.
    fn revoke(&self, bearer: Option<String>) -> impl Future<Output = Result<(), ApiError>>;
    /// Fetch the authenticated profile, with the given bearer credential.
    fn fetch_profile(&self, bearer: Option<String>) -> impl Future<Output = Result<User, ApiError>>;
}

/// Orchestrates the token and user caches. See module docs.
pub struct AuthController<G> {
    gateway: Arc<G>,
    tokens: TokenStore,
    users: UserStore,
    initialized: Arc<AtomicBool>,
    fetching_user: Arc<AtomicBool>,
}

impl<G> Clone for AuthController<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            tokens: self.tokens.clone(),
            users: self.users.clone(),
            initialized: Arc::clone(&self.initialized),
            fetching_user: Arc::clone(&self.fetching_user),
        }
    }
}

impl<G: AuthGateway + 'static> AuthController<G> {
    #[must_use]
    pub fn new(gateway: G, tokens: TokenStore, users: UserStore) -> Self {
        Self {
            gateway: Arc::new(gateway),
            tokens,
            users,
            initialized: Arc::new(AtomicBool::new(false)),
            fetching_user: Arc::new(AtomicBool::new(false)),
        }
    }

    #[must_use]
    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    #[must_use]
    pub fn users(&self) -> &UserStore {
        &self.users
    }

    /// Mark the controller initialized and replay the startup token state to
    /// subscribers that mounted before this call. Invoked exactly once,
    /// before any route that depends on the session renders.
    pub fn init_auth(&self) {
        self.tokens.notify_subscribers();
        self.initialized.store(true, Ordering::SeqCst);
        log::debug!("auth initialized");
    }

    /// Silent-refresh step run before every authenticated request.
    ///
    /// Returns a token that is good for at least the refresh window, or
    /// `None` when the session is gone. A refresh failure clears both caches
    /// — the session cannot be recovered client-side.
    pub async fn refresh_auth(&self) -> Option<String> {
        log::debug!("auth refresh start");
        let current = self.tokens.get();

        // After an explicit logout there is nothing to refresh with; only
        // the pre-init startup path may try a cookie-only refresh.
        if current.is_none() && self.initialized.load(Ordering::SeqCst) {
            log::warn!("no token in memory, refusing refresh");
            return None;
        }

        let need_refresh = match &current {
            None => true,
            Some(token) => jwt::needs_refresh(token, jwt::now_unix_secs()),
        };
        if !need_refresh {
            return current;
        }

        match self.gateway.refresh().await {
            Ok(token) => {
                self.tokens.set(Some(token.clone()));
                Some(token)
            }
            Err(err) => {
                log::warn!("token refresh failed, dropping session: {err}");
                self.tokens.set(None);
                self.users.set(None);
                None
            }
        }
    }

    /// Fetch the profile into the user cache, fire-and-forget.
    ///
    /// At most one fetch is in flight: the guard flag is taken before the
    /// task is spawned and released on every exit path, so a second caller
    /// cannot slip in between. Completion is observed through the user
    /// cache, never awaited.
    pub fn fetch_user(&self) {
        if self.fetching_user.swap(true, Ordering::SeqCst) {
            log::warn!("profile fetch already in flight, skipping");
            return;
        }
        let this = self.clone();
        task::spawn(async move {
            let bearer = this.refresh_auth().await;
            if bearer.is_none() {
                log::warn!("access token not found, fetching profile without credentials");
            }
            match this.gateway.fetch_profile(bearer).await {
                Ok(user) => {
                    log::debug!("fetched profile for {}", user.username);
                    this.users.set(Some(user));
                }
                Err(err) => log::error!("profile fetch failed: {err}"),
            }
            this.fetching_user.store(false, Ordering::SeqCst);
        });
    }

    /// Store a freshly issued token and start the profile fetch.
    pub fn login(&self, token: String) {
        self.tokens.set(Some(token));
        self.fetch_user();
    }

    /// Revoke the server session and clear both caches. The local clear
    /// happens regardless of whether the revoke reached the server.
    pub async fn logout(&self) {
        if let Err(err) = self.gateway.revoke(self.tokens.get()).await {
            log::warn!("server logout failed: {err}");
        }
        self.tokens.set(None);
        self.users.set(None);
    }
}
