//! Localization: languages, typed string tables, and path helpers.
//!
//! DESIGN
//! ======
//! The active language is the leading path segment (`/en/...`, `/fr/...`);
//! unknown prefixes fall back to the default language. Lookups are plain
//! field accesses on complete per-language tables — there is no key-miss
//! code path. A process-wide copy of the active language feeds the `lang`
//! query parameter on API calls, where no reactive context is available.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

pub mod keys;

mod en;
mod fr;

use std::sync::atomic::{AtomicU8, Ordering};

use leptos::prelude::*;

use self::keys::TranslationKeys;

/// Languages the site ships. The default must stay first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Language {
    #[default]
    En = 0,
    Fr = 1,
}

pub const DEFAULT_LANGUAGE: Language = Language::En;

impl Language {
    pub const ALL: [Self; 2] = [Self::En, Self::Fr];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    /// Open Graph locale tag.
    #[must_use]
    pub fn locale(self) -> &'static str {
        match self {
            Self::En => "en_US",
            Self::Fr => "fr_FR",
        }
    }

    /// Native-language label for the switcher.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Fr => "Français",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "en" => Some(Self::En),
            "fr" => Some(Self::Fr),
            _ => None,
        }
    }

    /// The complete string table for this language.
    #[must_use]
    pub fn table(self) -> &'static TranslationKeys {
        match self {
            Self::En => &en::EN,
            Self::Fr => &fr::FR,
        }
    }

    /// The one other language, for alternate links and the switcher.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::En => Self::Fr,
            Self::Fr => Self::En,
        }
    }
}

static CURRENT_LANGUAGE: AtomicU8 = AtomicU8::new(DEFAULT_LANGUAGE as u8);

/// Record the active language for non-reactive consumers (the API layer).
pub fn set_current_language(language: Language) {
    CURRENT_LANGUAGE.store(language as u8, Ordering::SeqCst);
}

#[must_use]
pub fn current_language() -> Language {
    match CURRENT_LANGUAGE.load(Ordering::SeqCst) {
        1 => Language::Fr,
        _ => Language::En,
    }
}

/// Language carried by the leading path segment, if it is a valid one.
#[must_use]
pub fn language_from_path(path: &str) -> Option<Language> {
    path.split('/').find(|s| !s.is_empty()).and_then(Language::parse)
}

/// `path` without its language prefix; always starts with `/`.
#[must_use]
pub fn strip_language_prefix(path: &str) -> String {
    let mut segments = path.split('/').filter(|s| !s.is_empty());
    let rest: Vec<&str> = match segments.next() {
        Some(first) if Language::parse(first).is_some() => segments.collect(),
        Some(first) => std::iter::once(first).chain(segments).collect(),
        None => Vec::new(),
    };
    if rest.is_empty() { "/".to_owned() } else { format!("/{}", rest.join("/")) }
}

/// `path` re-rooted under `language`, replacing any existing prefix.
#[must_use]
pub fn localized_path(language: Language, path: &str) -> String {
    let rest = strip_language_prefix(path);
    if rest == "/" {
        format!("/{}", language.as_str())
    } else {
        format!("/{}{rest}", language.as_str())
    }
}

/// The same page in the other language, preserving the sub-path.
#[must_use]
pub fn switch_language_path(path: &str, target: Language) -> String {
    localized_path(target, path)
}

/// Pick the initial language from the browser's preferences.
#[must_use]
pub fn detect_language() -> Language {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Some(tag) = window.navigator().language() {
                let lowered = tag.to_ascii_lowercase();
                for language in Language::ALL {
                    if lowered.starts_with(language.as_str()) {
                        return language;
                    }
                }
            }
        }
    }
    DEFAULT_LANGUAGE
}

/// What components consume: the active language plus lookup helpers.
#[derive(Clone, Copy)]
pub struct LanguageContext {
    pub language: Signal<Language>,
}

impl LanguageContext {
    /// The string table for the active language. Reactive.
    #[must_use]
    pub fn t(&self) -> &'static TranslationKeys {
        self.language.get().table()
    }

    /// Localize an app path under the active language.
    #[must_use]
    pub fn localized(&self, path: &str) -> String {
        localized_path(self.language.get(), path)
    }
}

/// Provide the language context and keep the process-wide copy in sync.
pub fn provide_language(language: Signal<Language>) {
    set_current_language(language.get_untracked());
    Effect::new(move || set_current_language(language.get()));
    provide_context(LanguageContext { language });
}

/// Shorthand for components consuming the language context.
#[must_use]
pub fn use_language() -> LanguageContext {
    expect_context::<LanguageContext>()
}
