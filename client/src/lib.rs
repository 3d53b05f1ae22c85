//! # client
//!
//! Leptos + WASM front-end for the Starhold marketing and account site:
//! localized landing and legal pages, the authentication flows against the
//! remote account API, the account panel, and the page that boots the Unity
//! WebGL build.
//!
//! The session core — token/user caches, auth controller, and the
//! token-refresh interceptor — lives in `state` and `net` and runs natively
//! for tests; everything browser-specific is behind the `hydrate` feature.

#![recursion_limit = "512"]

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

pub mod app;
pub mod components;
pub mod config;
pub mod i18n;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Log filter for the browser console, compile-time configured.
#[must_use]
pub fn log_level(configured: Option<&str>) -> log::Level {
    match configured {
        Some("error") => log::Level::Error,
        Some("warn") => log::Level::Warn,
        Some("debug") => log::Level::Debug,
        Some("trace") => log::Level::Trace,
        _ => log::Level::Info,
    }
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log_level(option_env!("PUBLIC_LOG_LEVEL")));
    leptos::mount::hydrate_body(app::App);
}
