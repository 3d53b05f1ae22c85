//! Login form.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::i18n::{Language, use_language};
use crate::net::api::Api;
use crate::net::error::ApiError;
use crate::util::search_params::{AuthAction, href, open_action_query};

/// Map a login failure onto user-facing text. A 401 may carry an
/// account-state code that deserves a more specific message than
/// "incorrect credentials".
#[must_use]
pub fn login_error_message(language: Language, err: &ApiError) -> &'static str {
    let t = language.table();
    match err {
        ApiError::Network(_) => t.common.server_unreachable,
        ApiError::Status { status: 401, message } => match message.as_deref() {
            Some("Created account") => t.auth.account_state.created_account,
            Some("Banned account") => t.auth.account_state.banned_account,
            Some("Disabled account") => t.auth.account_state.disabled_account,
            _ => t.auth.login.error,
        },
        _ => t.common.error,
    }
}

#[component]
pub fn LoginForm() -> impl IntoView {
    let lang = use_language();
    let api = expect_context::<Api>();
    let location = use_location();
    let navigate = use_navigate();

    let login_or_email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<&'static str>);

    let is_valid = Memo::new(move |_| !login_or_email.get().trim().is_empty() && !password.get().is_empty());

    let open_action = {
        let navigate = navigate.clone();
        move |action: AuthAction| {
            let target = href(
                &location.pathname.get_untracked(),
                &open_action_query(&location.search.get_untracked(), action),
                &location.hash.get_untracked(),
            );
            navigate(&target, NavigateOptions::default());
        }
    };
    let to_register = open_action.clone();
    let to_password_reset = open_action;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !is_valid.get_untracked() || loading.get_untracked() {
            return;
        }
        loading.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            let identifier = login_or_email.get_untracked().trim().to_owned();
            let secret = password.get_untracked();
            leptos::task::spawn_local(async move {
                match api.login(&identifier, &secret).await {
                    Ok(token) => {
                        api.auth().login(token);
                        navigate(
                            &lang.localized("/play"),
                            NavigateOptions { replace: true, ..Default::default() },
                        );
                    }
                    Err(err) => {
                        log::error!("login failed: {err}");
                        error.set(Some(login_error_message(lang.language.get_untracked(), &err)));
                        loading.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &api;
            let _ = &navigate;
        }
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <Show when=move || error.get().is_some()>
                <div class="auth-form__error">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <label class="auth-form__label">
                {move || lang.t().auth.login.username_or_email}
                <input
                    class="auth-form__input"
                    type="text"
                    name="loginOrEmail"
                    prop:value=move || login_or_email.get()
                    on:input=move |ev| {
                        login_or_email.set(event_target_value(&ev));
                        error.set(None);
                    }
                    disabled=move || loading.get()
                />
            </label>

            <label class="auth-form__label">
                {move || lang.t().auth.login.password}
                <div class="auth-form__password">
                    <input
                        class="auth-form__input"
                        type=move || if show_password.get() { "text" } else { "password" }
                        name="password"
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            password.set(event_target_value(&ev));
                            error.set(None);
                        }
                        disabled=move || loading.get()
                    />
                    <button
                        type="button"
                        class="auth-form__toggle"
                        on:click=move |_| show_password.update(|v| *v = !*v)
                    >
                        {move || if show_password.get() { "🙈" } else { "👁" }}
                    </button>
                </div>
            </label>

            <button
                type="submit"
                class="auth-form__submit"
                disabled=move || !is_valid.get() || loading.get()
            >
                {move || {
                    let t = lang.t();
                    if loading.get() { t.auth.login.loading } else { t.auth.login.submit }
                }}
            </button>

            <div class="auth-form__links">
                <span>{move || lang.t().auth.login.no_account} " "</span>
                <button type="button" class="auth-form__link" on:click=move |_| to_register(AuthAction::Register)>
                    {move || lang.t().auth.login.create_account}
                </button>
                <button
                    type="button"
                    class="auth-form__link"
                    on:click=move |_| to_password_reset(AuthAction::PasswordReset)
                >
                    {move || lang.t().auth.login.forgot_password}
                </button>
            </div>
        </form>
    }
}
