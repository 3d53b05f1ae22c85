//! Per-page document metadata.
//!
//! Sets the title, description, canonical URL, Open Graph properties, and
//! `hreflang` alternates for one page. URL derivation is pure; the tags
//! themselves render through `leptos_meta`, which works in SSR output and
//! patches the live `<head>` after hydration.

#[cfg(test)]
#[path = "seo_test.rs"]
mod seo_test;

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::config::site_base_url;
use crate::i18n::{Language, localized_path};

/// Absolute URLs for one page in every language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageUrls {
    pub current: String,
    pub alternate: String,
    pub default_lang: String,
}

/// Derive the canonical/alternate URL set for `sub_path` (the path without
/// its language prefix, e.g. `"/play"`).
#[must_use]
pub fn page_urls(base: &str, sub_path: &str, language: Language) -> PageUrls {
    PageUrls {
        current: format!("{base}{}", localized_path(language, sub_path)),
        alternate: format!("{base}{}", localized_path(language.other(), sub_path)),
        default_lang: format!("{base}{}", localized_path(Language::default(), sub_path)),
    }
}

#[component]
pub fn PageMeta(
    title: &'static str,
    description: &'static str,
    /// Path without language prefix, e.g. `"/terms"`.
    sub_path: &'static str,
    language: Language,
) -> impl IntoView {
    let urls = page_urls(site_base_url(), sub_path, language);
    let alternate = language.other();

    view! {
        <Title text=title/>
        <Meta name="description" content=description/>
        <Meta property="og:title" content=title/>
        <Meta property="og:description" content=description/>
        <Meta property="og:type" content="website"/>
        <Meta property="og:url" content=urls.current.clone()/>
        <Meta property="og:locale" content=language.locale()/>
        <Meta property="og:locale:alternate" content=alternate.locale()/>
        <Link rel="canonical" href=urls.current.clone()/>
        <Link rel="alternate" hreflang=language.as_str() href=urls.current/>
        <Link rel="alternate" hreflang=alternate.as_str() href=urls.alternate/>
        <Link rel="alternate" hreflang="x-default" href=urls.default_lang/>
    }
}
