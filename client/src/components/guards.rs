//! Route guards over the derived `authenticated` state.
//!
//! Both guards are pure functions of the current value: no state of their
//! own, no memory of prior decisions. The decision helpers are split out so
//! the redirect policy is testable without rendering.

#[cfg(test)]
#[path = "guards_test.rs"]
mod guards_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::i18n::{Language, localized_path, use_language};
use crate::state::provider::use_auth;
use crate::util::search_params::{ACTION_PARAM, AuthAction};

/// Where unauthenticated visitors are sent: the login modal on the landing
/// page, in the visitor's language.
#[must_use]
pub fn login_entry_path(language: Language) -> String {
    format!(
        "{}?{}={}",
        localized_path(language, "/"),
        ACTION_PARAM,
        AuthAction::Login.as_str()
    )
}

/// Where signed-in users land when they hit a public-only route.
#[must_use]
pub fn authenticated_home_path(language: Language) -> String {
    localized_path(language, "/play")
}

#[must_use]
pub fn private_route_blocked(authenticated: bool) -> bool {
    !authenticated
}

#[must_use]
pub fn public_route_blocked(authenticated: bool) -> bool {
    authenticated
}

/// Renders children only for authenticated users; anyone else is redirected
/// to the login entry point and can come back after signing in.
#[component]
pub fn PrivateRoute(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let lang = use_language();

    view! {
        <Show
            when=move || !private_route_blocked(auth.authenticated.get())
            fallback=move || view! { <Redirect path=login_entry_path(lang.language.get())/> }
        >
            {children()}
        </Show>
    }
}

/// Renders children only for signed-out visitors; authenticated users are
/// sent to the game instead.
#[component]
pub fn PublicRoute(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let lang = use_language();

    view! {
        <Show
            when=move || !public_route_blocked(auth.authenticated.get())
            fallback=move || view! { <Redirect path=authenticated_home_path(lang.language.get())/> }
        >
            {children()}
        </Show>
    }
}
