//! Language-scoped page chrome.
//!
//! The layout owns the `:lang` route segment: it validates the prefix,
//! provides the language context, and frames every page with the header and
//! footer. Invalid prefixes redirect to the default language, keeping the
//! rest of the path, query, and hash.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_router::components::{Outlet, Redirect};
use leptos_router::hooks::{use_location, use_params_map};

use super::footer::Footer;
use super::header::Header;
use crate::i18n::{DEFAULT_LANGUAGE, Language, provide_language};
use crate::util::search_params::href;

/// Redirect target for a path whose leading segment is not a language:
/// the mistyped segment is dropped, the default language takes its place,
/// and the remaining sub-path, query, and hash survive.
#[must_use]
pub fn default_language_redirect(pathname: &str, search: &str, hash: &str) -> String {
    let rest: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).skip(1).collect();
    let pathname = if rest.is_empty() {
        format!("/{}", DEFAULT_LANGUAGE.as_str())
    } else {
        format!("/{}/{}", DEFAULT_LANGUAGE.as_str(), rest.join("/"))
    };
    href(&pathname, search.trim_start_matches('?'), hash)
}

#[component]
pub fn Layout() -> impl IntoView {
    let params = use_params_map();
    let location = use_location();

    let language = Signal::derive(move || {
        params.with(|p| p.get("lang").as_deref().and_then(Language::parse))
    });
    provide_language(Signal::derive(move || language.get().unwrap_or(DEFAULT_LANGUAGE)));

    view! {
        <Show
            when=move || language.get().is_some()
            fallback=move || {
                let target = default_language_redirect(
                    &location.pathname.get(),
                    &location.search.get(),
                    &location.hash.get(),
                );
                view! { <Redirect path=target/> }
            }
        >
            <div class="site">
                <Header/>
                <main class="site__main">
                    <Outlet/>
                </main>
                <Footer/>
            </div>
        </Show>
    }
}
