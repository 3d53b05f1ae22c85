//! Reactive bridge from the session caches into the Leptos tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthProvider` is the composition root for the session layer: it builds
//! the caches, controller, and API client, mirrors the caches into signals,
//! and exposes `{ authenticated, user }` to descendants. The token value
//! itself is never put in context — components that need a credential go
//! through the controller.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::api::{Api, Auth, HttpGateway};
use crate::net::types::User;
use crate::state::session::AuthController;
use crate::state::token::TokenStore;
use crate::state::user::UserStore;
use crate::util::storage::{BrowserStorage, access_token_key};

/// What the UI tree sees of the session.
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// True only while both a token and a fetched profile are present.
    pub authenticated: Signal<bool>,
    pub user: Signal<Option<User>>,
}

/// Shorthand for components consuming the session context.
#[must_use]
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

/// The `authenticated` derivation: both caches non-null, nothing less.
#[must_use]
pub fn is_authenticated(token: &Option<String>, user: &Option<User>) -> bool {
    token.is_some() && user.is_some()
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let tokens = TokenStore::new(Arc::new(BrowserStorage::new(access_token_key())));
    let users = UserStore::new();
    let auth: Auth = AuthController::new(HttpGateway, tokens.clone(), users.clone());
    let api = Api::new(auth.clone());

    let token_sig = RwSignal::new(tokens.get());
    let user_sig = RwSignal::new(users.get());

    let token_sub = tokens.subscribe(move |t| token_sig.set(t.clone()));
    let user_sub = users.subscribe(move |u| user_sig.set(u.clone()));
    on_cleanup({
        let tokens = tokens.clone();
        let users = users.clone();
        move || {
            tokens.unsubscribe(token_sub);
            users.unsubscribe(user_sub);
        }
    });

    auth.init_auth();

    // Page reload with a persisted token: complete the session without a
    // fresh login by fetching the profile proactively.
    if token_sig.get_untracked().is_some() && user_sig.get_untracked().is_none() {
        auth.fetch_user();
    }

    let authenticated = Memo::new(move |_| is_authenticated(&token_sig.get(), &user_sig.get()));
    Effect::new(move || {
        log::debug!("authenticated updated to {}", authenticated.get());
    });

    provide_context(auth);
    provide_context(api);
    provide_context(AuthContext { authenticated: authenticated.into(), user: user_sig.into() });

    children()
}
