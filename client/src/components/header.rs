//! Site header: brand, primary navigation, language switcher, account area.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::account_manager::AccountManager;
use crate::config::SITE_NAME;
use crate::i18n::{switch_language_path, use_language};
use crate::state::provider::use_auth;
use crate::util::search_params::href;

#[component]
pub fn Header() -> impl IntoView {
    let lang = use_language();
    let auth = use_auth();
    let location = use_location();

    let switch_href = move || {
        let target = lang.language.get().other();
        href(
            &switch_language_path(&location.pathname.get(), target),
            location.search.get().trim_start_matches('?'),
            &location.hash.get(),
        )
    };

    view! {
        <header class="header">
            <a class="header__brand" href=move || lang.localized("/")>
                {SITE_NAME}
            </a>

            <nav class="header__nav">
                <a class="header__link" href=move || lang.localized("/")>
                    {move || lang.t().nav.home}
                </a>
                <Show when=move || auth.authenticated.get()>
                    <a class="header__link" href=move || lang.localized("/play")>
                        {move || lang.t().nav.play}
                    </a>
                </Show>
            </nav>

            <div class="header__side">
                <a class="header__lang" href=switch_href>
                    {move || lang.language.get().other().label()}
                </a>
                <AccountManager/>
            </div>
        </header>
    }
}
