//! Header account area: sign-in/sign-up entry points or the user menu.
//!
//! While a user is signed in this component also owns the game auth bridge:
//! installed when the profile appears, removed on logout and on unmount, so
//! the embedded runtime can always reach a fresh token exactly as long as a
//! session exists.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use super::user_profile_modal::UserProfileModal;
use crate::i18n::use_language;
use crate::net::api::Api;
use crate::state::provider::use_auth;
use crate::util::search_params::{AuthAction, href, open_action_query};

#[component]
pub fn AccountManager() -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show when=move || auth.authenticated.get() fallback=|| view! { <AccountLoggedOut/> }>
            <AccountLoggedIn/>
        </Show>
    }
}

#[component]
fn AccountLoggedOut() -> impl IntoView {
    let lang = use_language();
    let location = use_location();
    let navigate = use_navigate();

    let open_action = move |action: AuthAction| {
        let target = href(
            &location.pathname.get_untracked(),
            &open_action_query(&location.search.get_untracked(), action),
            &location.hash.get_untracked(),
        );
        navigate(&target, NavigateOptions::default());
    };
    let to_login = open_action.clone();
    let to_register = open_action;

    view! {
        <div class="account account--out">
            <button type="button" class="account__login" on:click=move |_| to_login(AuthAction::Login)>
                {move || lang.t().nav.login}
            </button>
            <button
                type="button"
                class="account__signup"
                on:click=move |_| to_register(AuthAction::Register)
            >
                {move || lang.t().nav.signup}
            </button>
        </div>
    }
}

#[component]
fn AccountLoggedIn() -> impl IntoView {
    let lang = use_language();
    let auth = use_auth();
    let api = expect_context::<Api>();

    let menu_open = RwSignal::new(false);
    let profile_open = RwSignal::new(false);
    let logging_out = RwSignal::new(false);

    // Game auth bridge lifecycle: present exactly while a user is.
    #[cfg(feature = "hydrate")]
    {
        let api = api.clone();
        Effect::new(move || {
            if auth.user.get().is_some() {
                crate::util::bridge::install(api.auth().clone());
            } else {
                crate::util::bridge::remove();
            }
        });
        on_cleanup(crate::util::bridge::remove);
    }

    let display_name = move || {
        auth.user
            .get()
            .map_or_else(|| "—".to_owned(), |u| if u.username.is_empty() { u.email } else { u.username })
    };

    let on_logout = move |_| {
        if logging_out.get_untracked() {
            return;
        }
        logging_out.set(true);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                api.auth().logout().await;
                logging_out.set(false);
                menu_open.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &api;
        }
    };

    view! {
        <div class="account account--in">
            <button
                type="button"
                class="account__name"
                on:click=move |_| menu_open.update(|v| *v = !*v)
            >
                {display_name}
            </button>

            <Show when=move || menu_open.get()>
                <div class="account__menu">
                    <button
                        type="button"
                        class="account__menu-item"
                        on:click=move |_| {
                            profile_open.set(true);
                            menu_open.set(false);
                        }
                    >
                        {move || lang.t().auth.account.profile}
                    </button>
                    <button
                        type="button"
                        class="account__menu-item"
                        disabled=move || logging_out.get()
                        on:click=on_logout.clone()
                    >
                        {move || {
                            let t = lang.t();
                            if logging_out.get() { t.auth.account.logout_loading } else { t.auth.account.logout }
                        }}
                    </button>
                </div>
            </Show>

            <Show when=move || profile_open.get()>
                <UserProfileModal on_close=Callback::new(move |()| profile_open.set(false))/>
            </Show>
        </div>
    }
}
