//! Splash overlay shown until the client takes over.
//!
//! Rendered into the SSR output and removed by the first client-side
//! effect, so visitors see the branded loader instead of a blank page while
//! the WASM bundle initializes.

use leptos::prelude::*;

use crate::config::SITE_NAME;

#[component]
pub fn BootOverlay() -> impl IntoView {
    let ready = RwSignal::new(false);
    Effect::new(move || ready.set(true));

    view! {
        <Show when=move || !ready.get()>
            <div class="app-boot" aria-hidden="true">
                <div class="app-boot__content">
                    <span class="app-boot__logo">{SITE_NAME}</span>
                    <div class="app-boot__bar">
                        <div class="app-boot__bar-fill"></div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
