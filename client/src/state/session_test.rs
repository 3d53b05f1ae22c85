use std::cell::{Cell, RefCell};
use std::sync::{Arc, Mutex};

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use futures::channel::oneshot;
use futures::executor::block_on;

use super::*;
use crate::util::storage::{MemoryStorage, TokenStorage};
use crate::util::task;

fn token_with_exp(exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"u1","exp":{exp}}}"#));
    format!("{header}.{payload}.sig")
}

fn sample_user() -> User {
    User {
        id: 1,
        username: "cmdr".to_owned(),
        email: "cmdr@example.com".to_owned(),
        email_validated: true,
        created_at: None,
    }
}

/// Scripted gateway recording every call.
#[derive(Default)]
struct MockGateway {
    refresh_calls: Cell<usize>,
    refresh_fails: Cell<bool>,
    refresh_token: RefCell<Option<String>>,
    revoke_calls: Cell<usize>,
    revoke_fails: Cell<bool>,
    profile_calls: Cell<usize>,
    profile_fails: Cell<bool>,
    profile_gate: RefCell<Option<oneshot::Receiver<()>>>,
    last_profile_bearer: RefCell<Option<Option<String>>>,
}

impl AuthGateway for MockGateway {
    async fn refresh(&self) -> Result<String, ApiError> {
        self.refresh_calls.set(self.refresh_calls.get() + 1);
        if self.refresh_fails.get() {
            return Err(ApiError::Status { status: 401, message: None });
        }
        Ok(self.refresh_token.borrow().clone().unwrap_or_else(|| "tok-refreshed".to_owned()))
    }

    async fn revoke(&self, _bearer: Option<String>) -> Result<(), ApiError> {
        self.revoke_calls.set(self.revoke_calls.get() + 1);
        if self.revoke_fails.get() {
            return Err(ApiError::Network("connection reset".to_owned()));
        }
        Ok(())
    }

    async fn fetch_profile(&self, bearer: Option<String>) -> Result<User, ApiError> {
        self.profile_calls.set(self.profile_calls.get() + 1);
        *self.last_profile_bearer.borrow_mut() = Some(bearer);
        if let Some(gate) = self.profile_gate.borrow_mut().take() {
            let _ = gate.await;
        }
        if self.profile_fails.get() {
            return Err(ApiError::Status { status: 401, message: None });
        }
        Ok(sample_user())
    }
}

fn controller(gateway: MockGateway) -> (AuthController<MockGateway>, MemoryStorage) {
    let backend = MemoryStorage::new();
    let tokens = TokenStore::new(Arc::new(backend.clone()));
    (AuthController::new(gateway, tokens, UserStore::new()), backend)
}

fn far_future() -> i64 {
    jwt::now_unix_secs() + 3_600
}

// =============================================================
// refresh_auth
// =============================================================

#[test]
fn refuses_refresh_without_token_once_initialized() {
    let (auth, _) = controller(MockGateway::default());
    auth.init_auth();

    assert_eq!(block_on(auth.refresh_auth()), None);
    assert_eq!(auth.gateway.refresh_calls.get(), 0);
}

#[test]
fn refreshes_from_cookie_before_initialization() {
    let (auth, _) = controller(MockGateway::default());

    let token = block_on(auth.refresh_auth());
    assert_eq!(token.as_deref(), Some("tok-refreshed"));
    assert_eq!(auth.gateway.refresh_calls.get(), 1);
    assert_eq!(auth.tokens().get().as_deref(), Some("tok-refreshed"));
}

#[test]
fn refreshes_near_expiry_token_exactly_once() {
    let (auth, _) = controller(MockGateway::default());
    auth.init_auth();
    auth.tokens().set(Some(token_with_exp(jwt::now_unix_secs() + 30)));

    let token = block_on(auth.refresh_auth());
    assert_eq!(token.as_deref(), Some("tok-refreshed"));
    assert_eq!(auth.gateway.refresh_calls.get(), 1);
    assert_eq!(auth.tokens().get().as_deref(), Some("tok-refreshed"));
}

#[test]
fn refreshes_malformed_token_like_near_expiry() {
    let (auth, _) = controller(MockGateway::default());
    auth.init_auth();
    auth.tokens().set(Some("garbage".to_owned()));

    let token = block_on(auth.refresh_auth());
    assert_eq!(token.as_deref(), Some("tok-refreshed"));
    assert_eq!(auth.gateway.refresh_calls.get(), 1);
}

#[test]
fn keeps_fresh_token_without_network_call() {
    let (auth, _) = controller(MockGateway::default());
    auth.init_auth();
    let fresh = token_with_exp(far_future());
    auth.tokens().set(Some(fresh.clone()));

    assert_eq!(block_on(auth.refresh_auth()).as_deref(), Some(fresh.as_str()));
    assert_eq!(auth.gateway.refresh_calls.get(), 0);
}

#[test]
fn refresh_failure_cascades_to_full_logout() {
    let gateway = MockGateway::default();
    gateway.refresh_fails.set(true);
    let (auth, backend) = controller(gateway);
    auth.init_auth();
    auth.tokens().set(Some("garbage".to_owned()));
    auth.users().set(Some(sample_user()));

    assert_eq!(block_on(auth.refresh_auth()), None);
    assert_eq!(auth.tokens().get(), None);
    assert!(auth.users().get().is_none());
    assert!(backend.read().is_none());
}

// =============================================================
// fetch_user
// =============================================================

#[test]
fn fetch_user_is_single_flight() {
    let gateway = MockGateway::default();
    let (gate_tx, gate_rx) = oneshot::channel();
    *gateway.profile_gate.borrow_mut() = Some(gate_rx);
    let (auth, _) = controller(gateway);
    auth.init_auth();
    auth.tokens().set(Some(token_with_exp(far_future())));

    auth.fetch_user();
    auth.fetch_user();
    task::tick();

    // First fetch parked on the gate; second call was refused outright.
    assert_eq!(auth.gateway.profile_calls.get(), 1);
    assert!(auth.users().get().is_none());

    gate_tx.send(()).expect("receiver alive");
    task::tick();
    assert_eq!(auth.users().get().map(|u| u.username), Some("cmdr".to_owned()));

    // Flag released: a later fetch goes through again.
    auth.fetch_user();
    task::tick();
    assert_eq!(auth.gateway.profile_calls.get(), 2);
}

#[test]
fn fetch_user_attaches_refreshed_bearer() {
    let (auth, _) = controller(MockGateway::default());
    auth.init_auth();
    auth.tokens().set(Some("garbage".to_owned()));

    auth.fetch_user();
    task::tick();

    let bearer = auth.gateway.last_profile_bearer.borrow().clone().expect("profile called");
    assert_eq!(bearer.as_deref(), Some("tok-refreshed"));
}

#[test]
fn fetch_user_failure_leaves_user_cache_untouched_and_releases_flag() {
    let gateway = MockGateway::default();
    gateway.profile_fails.set(true);
    let (auth, _) = controller(gateway);
    auth.init_auth();
    auth.tokens().set(Some(token_with_exp(far_future())));

    auth.fetch_user();
    task::tick();
    assert!(auth.users().get().is_none());

    auth.gateway.profile_fails.set(false);
    auth.fetch_user();
    task::tick();
    assert!(auth.users().get().is_some());
}

// =============================================================
// login / logout / init
// =============================================================

#[test]
fn login_sets_token_synchronously_then_fetches_user() {
    let gateway = MockGateway::default();
    *gateway.refresh_token.borrow_mut() = Some("tok-123".to_owned());
    let (auth, _) = controller(gateway);
    auth.init_auth();

    auth.login("tok-123".to_owned());
    assert_eq!(auth.tokens().get().as_deref(), Some("tok-123"));
    assert!(auth.users().get().is_none());

    task::tick();
    let user = auth.users().get().expect("profile fetched");
    assert_eq!(user.id, 1);
    assert_eq!(user.username, "cmdr");
}

#[test]
fn logout_clears_both_caches_even_when_revoke_fails() {
    let gateway = MockGateway::default();
    gateway.revoke_fails.set(true);
    let (auth, backend) = controller(gateway);
    auth.init_auth();
    auth.tokens().set(Some(token_with_exp(far_future())));
    auth.users().set(Some(sample_user()));

    block_on(auth.logout());

    assert_eq!(auth.gateway.revoke_calls.get(), 1);
    assert_eq!(auth.tokens().get(), None);
    assert!(auth.users().get().is_none());
    assert!(backend.read().is_none());
}

#[test]
fn init_auth_replays_startup_token_to_early_subscribers() {
    let backend = MemoryStorage::new();
    backend.write("tok-persisted");
    let tokens = TokenStore::new(Arc::new(backend));
    let auth = AuthController::new(MockGateway::default(), tokens, UserStore::new());

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    auth.tokens().subscribe(move |t| sink.lock().expect("test lock").push(t.clone()));

    auth.init_auth();
    assert_eq!(*seen.lock().expect("test lock"), vec![Some("tok-persisted".to_owned())]);
}
