//! Email-validation landing: confirms the address with the emailed token.
//!
//! Runs automatically on mount — the visitor arrives here from the
//! validation mail and should not have to do anything but watch.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use super::guards::login_entry_path;
#[cfg(feature = "hydrate")]
use crate::config::REDIRECT_DELAY_MS;
use crate::i18n::use_language;
use crate::net::api::Api;
use crate::util::search_params::{TOKEN_PARAM, query_param};

#[component]
pub fn EmailValidationForm() -> impl IntoView {
    let lang = use_language();
    let api = expect_context::<Api>();
    let location = use_location();
    let navigate = use_navigate();

    let validating = RwSignal::new(true);
    let success = RwSignal::new(false);
    let error = RwSignal::new(None::<&'static str>);

    {
        let api = api.clone();
        let navigate = navigate.clone();
        Effect::new(move || {
            let token = query_param(&location.search.get_untracked(), TOKEN_PARAM);
            let Some(token) = token else {
                error.set(Some(lang.t().auth.email_validation.invalid_token));
                validating.set(false);
                return;
            };
            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    match api.validate_email(&token).await {
                        Ok(()) => {
                            success.set(true);
                            validating.set(false);
                            gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                            navigate(
                                &login_entry_path(lang.language.get_untracked()),
                                NavigateOptions { replace: true, ..Default::default() },
                            );
                        }
                        Err(err) => {
                            log::error!("email validation failed: {err}");
                            error.set(Some(lang.t().auth.email_validation.invalid_token));
                            validating.set(false);
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&api, &navigate, &token);
            }
        });
    }

    let back = move |_| {
        navigate(
            &login_entry_path(lang.language.get_untracked()),
            NavigateOptions { replace: true, ..Default::default() },
        );
    };

    view! {
        <div class="auth-card">
            <h1 class="auth-card__title">{move || lang.t().auth.email_validation.title}</h1>

            <Show when=move || validating.get()>
                <p class="auth-form__muted">{move || lang.t().auth.email_validation.validating}</p>
                <div class="auth-card__spinner" aria-hidden="true"></div>
            </Show>

            <Show when=move || !validating.get() && success.get()>
                <div class="auth-form__success">
                    <p>{move || lang.t().auth.email_validation.success}</p>
                    <p class="auth-form__muted">{move || lang.t().auth.email_validation.redirect}</p>
                </div>
            </Show>

            <Show when=move || !validating.get() && !success.get()>
                <div class="auth-form__error">
                    {move || error.get().unwrap_or(lang.t().auth.email_validation.error)}
                </div>
                <button type="button" class="auth-form__submit" on:click=back.clone()>
                    {move || lang.t().common.back}
                </button>
            </Show>
        </div>
    }
}
