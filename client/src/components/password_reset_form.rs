//! Password-reset form for visitors arriving from the reset email.
//!
//! The one-time token (`?k=`) is checked against the server before the form
//! is shown, so an expired link fails fast instead of after typing.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use super::guards::login_entry_path;
#[cfg(feature = "hydrate")]
use crate::config::REDIRECT_DELAY_MS;
use crate::i18n::use_language;
use crate::net::api::Api;
#[cfg(feature = "hydrate")]
use crate::net::error::ApiError;
#[cfg(feature = "hydrate")]
use crate::net::types::PasswordResetConfirm;
use crate::util::search_params::{TOKEN_PARAM, query_param};
use crate::util::validators::validate_password;

#[component]
pub fn PasswordResetForm() -> impl IntoView {
    let lang = use_language();
    let api = expect_context::<Api>();
    let location = use_location();
    let navigate = use_navigate();

    let validating = RwSignal::new(true);
    let token_valid = RwSignal::new(false);
    let loading = RwSignal::new(false);
    let done = RwSignal::new(false);
    let error = RwSignal::new(None::<&'static str>);
    let password_error = RwSignal::new(None::<String>);

    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());

    let token = {
        let location = location.clone();
        move || query_param(&location.search.get_untracked(), TOKEN_PARAM)
    };
    let token_for_submit = token.clone();

    // Validate the one-time token once, on mount.
    {
        let api = api.clone();
        Effect::new(move || {
            let Some(token) = token() else {
                error.set(Some(lang.t().auth.password_reset.invalid_token));
                validating.set(false);
                return;
            };
            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    match api.validate_password_reset_token(&token).await {
                        Ok(()) => token_valid.set(true),
                        Err(err) => {
                            log::error!("reset token validation failed: {err}");
                            error.set(Some(lang.t().auth.password_reset.invalid_token));
                        }
                    }
                    validating.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&api, &token);
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() || !token_valid.get_untracked() {
            return;
        }
        let t = lang.t();
        let password = new_password.get_untracked();
        let issues = validate_password(&password);
        if !issues.is_empty() {
            password_error.set(Some(
                issues
                    .into_iter()
                    .map(|i| super::register_form::password_issue_message(lang.language.get_untracked(), i))
                    .collect::<Vec<_>>()
                    .join(" "),
            ));
            return;
        }
        if password != confirm_password.get_untracked() {
            password_error.set(Some(t.validation.password_mismatch.to_owned()));
            return;
        }
        password_error.set(None);
        loading.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            let Some(token) = token_for_submit() else { return };
            let dto = PasswordResetConfirm {
                token,
                password,
                confirm_password: confirm_password.get_untracked(),
            };
            leptos::task::spawn_local(async move {
                match api.confirm_password_reset(&dto).await {
                    Ok(()) => {
                        done.set(true);
                        gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                        navigate(
                            &login_entry_path(lang.language.get_untracked()),
                            NavigateOptions { replace: true, ..Default::default() },
                        );
                    }
                    Err(err) => {
                        log::error!("password reset failed: {err}");
                        let t = lang.t();
                        error.set(Some(match err {
                            ApiError::Network(_) => t.common.server_unreachable,
                            _ => t.auth.password_reset.error,
                        }));
                        loading.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &navigate);
        }
    };

    let navigate_back = use_navigate();
    let back_to_login = move |_| {
        navigate_back(
            &login_entry_path(lang.language.get_untracked()),
            NavigateOptions { replace: true, ..Default::default() },
        );
    };

    view! {
        <div class="auth-card">
            <h1 class="auth-card__title">{move || lang.t().auth.password_reset.title}</h1>

            <Show when=move || validating.get()>
                <p class="auth-form__muted">{move || lang.t().common.loading}</p>
            </Show>

            <Show when=move || done.get()>
                <div class="auth-form__success">
                    <p>{move || lang.t().auth.password_reset.changed}</p>
                    <p class="auth-form__muted">{move || lang.t().auth.password_reset.redirect}</p>
                </div>
            </Show>

            <Show when=move || !validating.get() && !done.get() && !token_valid.get()>
                <div class="auth-form__error">
                    {move || error.get().unwrap_or(lang.t().auth.password_reset.invalid_token)}
                </div>
                <button type="button" class="auth-form__submit" on:click=back_to_login.clone()>
                    {move || lang.t().common.back}
                </button>
            </Show>

            <Show when=move || !validating.get() && !done.get() && token_valid.get()>
                <form class="auth-form" on:submit=on_submit.clone()>
                    <Show when=move || error.get().is_some()>
                        <div class="auth-form__error">{move || error.get().unwrap_or_default()}</div>
                    </Show>

                    <label class="auth-form__label">
                        {move || lang.t().auth.password_reset.new_password}
                        <input
                            class="auth-form__input"
                            type="password"
                            name="newPassword"
                            prop:value=move || new_password.get()
                            on:input=move |ev| {
                                new_password.set(event_target_value(&ev));
                                password_error.set(None);
                            }
                            disabled=move || loading.get()
                        />
                    </label>

                    <label class="auth-form__label">
                        {move || lang.t().auth.password_reset.confirm_password}
                        <input
                            class="auth-form__input"
                            type="password"
                            name="confirmPassword"
                            prop:value=move || confirm_password.get()
                            on:input=move |ev| {
                                confirm_password.set(event_target_value(&ev));
                                password_error.set(None);
                            }
                            disabled=move || loading.get()
                        />
                    </label>

                    <Show when=move || password_error.get().is_some()>
                        <span class="auth-form__field-error">
                            {move || password_error.get().unwrap_or_default()}
                        </span>
                    </Show>

                    <button type="submit" class="auth-form__submit" disabled=move || loading.get()>
                        {move || {
                            let t = lang.t();
                            if loading.get() { t.common.loading } else { t.auth.password_reset.confirm_submit }
                        }}
                    </button>
                </form>
            </Show>
        </div>
    }
}
