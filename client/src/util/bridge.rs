//! Auth bridge for the embedded game runtime.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Unity build cannot share the page's module scope, so it reaches the
//! session layer through one well-known global: `window.__starholdAuth`
//! exposes `getFreshToken()`, which resolves to a just-refreshed access
//! token (or `null` when the session is gone). The bridge is installed when
//! a user is present and removed when they log out or the owning component
//! unmounts; no other globals are touched.

#[cfg(feature = "hydrate")]
use std::cell::RefCell;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "hydrate")]
use crate::state::session::{AuthController, AuthGateway};

pub const BRIDGE_GLOBAL: &str = "__starholdAuth";
pub const BRIDGE_METHOD: &str = "getFreshToken";

#[cfg(feature = "hydrate")]
thread_local! {
    static INSTALLED: RefCell<Option<Closure<dyn Fn() -> js_sys::Promise>>> = const { RefCell::new(None) };
}

/// Install the bridge, replacing any previous installation.
#[cfg(feature = "hydrate")]
pub fn install<G: AuthGateway + 'static>(auth: AuthController<G>) {
    let Some(window) = web_sys::window() else { return };

    let closure = Closure::wrap(Box::new(move || -> js_sys::Promise {
        let auth = auth.clone();
        wasm_bindgen_futures::future_to_promise(async move {
            log::debug!("token refresh requested through the game bridge");
            Ok(match auth.refresh_auth().await {
                Some(token) => JsValue::from_str(&token),
                None => JsValue::NULL,
            })
        })
    }) as Box<dyn Fn() -> js_sys::Promise>);

    let bridge = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&bridge, &JsValue::from_str(BRIDGE_METHOD), closure.as_ref().unchecked_ref());
    let _ = js_sys::Reflect::set(&window, &JsValue::from_str(BRIDGE_GLOBAL), &bridge);

    INSTALLED.with(|slot| *slot.borrow_mut() = Some(closure));
}

/// Remove the bridge and release its callback.
#[cfg(feature = "hydrate")]
pub fn remove() {
    if let Some(window) = web_sys::window() {
        let _ = js_sys::Reflect::delete_property(&window, &JsValue::from_str(BRIDGE_GLOBAL));
    }
    INSTALLED.with(|slot| slot.borrow_mut().take());
}
