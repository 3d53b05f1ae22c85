//! Legal pages rendered from the typed per-language content tables.

use leptos::prelude::*;

use crate::components::seo::PageMeta;
use crate::i18n::keys::LegalDoc;
use crate::i18n::use_language;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegalKind {
    Terms,
    Privacy,
    Cookies,
}

impl LegalKind {
    fn doc(self, t: &'static crate::i18n::keys::TranslationKeys) -> &'static LegalDoc {
        match self {
            Self::Terms => &t.legal.terms,
            Self::Privacy => &t.legal.privacy,
            Self::Cookies => &t.legal.cookies,
        }
    }

    fn sub_path(self) -> &'static str {
        match self {
            Self::Terms => "/terms",
            Self::Privacy => "/privacy",
            Self::Cookies => "/cookies",
        }
    }
}

#[component]
fn LegalDocView(kind: LegalKind) -> impl IntoView {
    let lang = use_language();

    view! {
        {move || {
            let doc = kind.doc(lang.t());
            view! {
                <PageMeta
                    title=doc.title
                    description=doc.title
                    sub_path=kind.sub_path()
                    language=lang.language.get()
                />
            }
        }}

        <article class="legal">
            {move || {
                let doc = kind.doc(lang.t());
                view! {
                    <h1 class="legal__title">{doc.title}</h1>
                    <p class="legal__updated">{doc.updated}</p>
                    {doc
                        .sections
                        .iter()
                        .map(|section| {
                            view! {
                                <section class="legal__section">
                                    <h2 class="legal__heading">{section.heading}</h2>
                                    <p class="legal__body">{section.body}</p>
                                </section>
                            }
                        })
                        .collect::<Vec<_>>()}
                }
            }}
        </article>
    }
}

#[component]
pub fn TermsPage() -> impl IntoView {
    view! { <LegalDocView kind=LegalKind::Terms/> }
}

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! { <LegalDocView kind=LegalKind::Privacy/> }
}

#[component]
pub fn CookiesPage() -> impl IntoView {
    view! { <LegalDocView kind=LegalKind::Cookies/> }
}
