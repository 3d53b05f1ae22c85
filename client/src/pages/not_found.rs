//! 404 page, inside or outside the language scope.

use leptos::prelude::*;

use crate::i18n::{DEFAULT_LANGUAGE, LanguageContext, localized_path};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    // The global catch-all renders outside the layout, where no language
    // context exists; fall back to the default language there.
    let lang = use_context::<LanguageContext>();
    let language = move || lang.map_or(DEFAULT_LANGUAGE, |l| l.language.get());
    let t = move || language().table();

    view! {
        <section class="not-found">
            <h1 class="not-found__title">{move || t().not_found.title}</h1>
            <p class="not-found__body">{move || t().not_found.body}</p>
            <a class="not-found__link" href=move || localized_path(language(), "/")>
                {move || t().not_found.back_home}
            </a>
        </section>
    }
}
