//! Landing page: hero, feature highlights, community call-to-action.
//!
//! Also hosts the auth modal, so `/{lang}?action=...` deep links open the
//! right form on top of the marketing content.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::auth_modal::AuthModal;
use crate::components::seo::PageMeta;
use crate::i18n::use_language;
use crate::state::provider::use_auth;
use crate::util::search_params::{AuthAction, href, open_action_query};

#[component]
pub fn HomePage() -> impl IntoView {
    let lang = use_language();
    let auth = use_auth();
    let location = use_location();
    let navigate = use_navigate();

    // Callback: Copy, so the buttons inside reactive blocks can share it.
    let open_action = Callback::new(move |action: AuthAction| {
        let target = href(
            &location.pathname.get_untracked(),
            &open_action_query(&location.search.get_untracked(), action),
            &location.hash.get_untracked(),
        );
        navigate(&target, NavigateOptions::default());
    });

    view! {
        {move || {
            let t = lang.t();
            view! {
                <PageMeta
                    title=t.home.meta_title
                    description=t.home.meta_description
                    sub_path="/"
                    language=lang.language.get()
                />
            }
        }}

        <section class="hero">
            <h1 class="hero__title">{move || lang.t().home.hero_title}</h1>
            <p class="hero__subtitle">{move || lang.t().home.hero_subtitle}</p>
            <Show
                when=move || auth.authenticated.get()
                fallback=move || {
                    view! {
                        <button
                            type="button"
                            class="hero__cta"
                            on:click=move |_| open_action.run(AuthAction::Register)
                        >
                            {move || lang.t().home.hero_cta}
                        </button>
                    }
                }
            >
                <a class="hero__cta" href=move || lang.localized("/play")>
                    {move || lang.t().home.hero_cta_play}
                </a>
            </Show>
        </section>

        <section class="features" id="features">
            <h2 class="features__title">{move || lang.t().home.features_title}</h2>
            <div class="features__grid">
                {move || {
                    lang.t()
                        .home
                        .features
                        .iter()
                        .map(|feature| {
                            view! {
                                <article class="features__card">
                                    <h3 class="features__card-title">{feature.title}</h3>
                                    <p class="features__card-body">{feature.body}</p>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </section>

        <section class="community">
            <h2 class="community__title">{move || lang.t().home.community_title}</h2>
            <p class="community__body">{move || lang.t().home.community_body}</p>
            <Show when=move || !auth.authenticated.get()>
                <button
                    type="button"
                    class="community__cta"
                    on:click=move |_| open_action.run(AuthAction::Register)
                >
                    {move || lang.t().home.community_cta}
                </button>
            </Show>
        </section>

        <AuthModal/>
    }
}
