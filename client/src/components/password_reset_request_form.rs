//! "Forgot password" form: asks the server to send a reset email.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

#[cfg(feature = "hydrate")]
use crate::config::REDIRECT_DELAY_MS;
use crate::i18n::use_language;
use crate::net::api::Api;
#[cfg(feature = "hydrate")]
use crate::net::error::ApiError;
#[cfg(feature = "hydrate")]
use crate::util::search_params::{AuthAction, href, open_action_query};
use crate::util::validators::is_valid_email;

#[component]
pub fn PasswordResetRequestForm() -> impl IntoView {
    let lang = use_language();
    let api = expect_context::<Api>();
    let location = use_location();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let sent = RwSignal::new(false);
    let error = RwSignal::new(None::<&'static str>);

    let is_valid = Memo::new(move |_| is_valid_email(email.get().trim()));

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
            let location = location.clone();
            let address = email.get_untracked().trim().to_owned();
            leptos::task::spawn_local(async move {
                match api.request_password_reset(&address).await {
                    Ok(()) => {
                        sent.set(true);
                        gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                        let target = href(
                            &location.pathname.get_untracked(),
                            &open_action_query(&location.search.get_untracked(), AuthAction::Login),
                            &location.hash.get_untracked(),
                        );
                        navigate(&target, NavigateOptions::default());
                    }
                    Err(err) => {
                        log::error!("password reset request failed: {err}");
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
            let _ = (&api, &navigate, &location);
        }
    };

    view! {
        <Show
            when=move || !sent.get()
            fallback=move || {
                view! {
                    <div class="auth-form__success">
                        <p>{move || lang.t().auth.password_reset.success}</p>
                        <p class="auth-form__muted">{move || lang.t().auth.password_reset.redirect}</p>
                    </div>
                }
            }
        >
            <form class="auth-form" on:submit=on_submit.clone()>
                <Show when=move || error.get().is_some()>
                    <div class="auth-form__error">{move || error.get().unwrap_or_default()}</div>
                </Show>

                <label class="auth-form__label">
                    {move || lang.t().auth.password_reset.email}
                    <input
                        class="auth-form__input"
                        type="email"
                        name="email"
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            email.set(event_target_value(&ev));
                            error.set(None);
                        }
                        disabled=move || loading.get()
                    />
                </label>

                <button
                    type="submit"
                    class="auth-form__submit"
                    disabled=move || !is_valid.get() || loading.get()
                >
                    {move || {
                        let t = lang.t();
                        if loading.get() { t.common.loading } else { t.auth.password_reset.submit }
                    }}
                </button>
            </form>
        </Show>
    }
}
