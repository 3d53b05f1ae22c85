//! Account panel: profile details, email change, password change, deletion.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use super::guards::login_entry_path;
#[cfg(feature = "hydrate")]
use crate::config::REDIRECT_DELAY_MS;
#[cfg(feature = "hydrate")]
use crate::i18n::localized_path;
use crate::i18n::use_language;
use crate::net::api::Api;
#[cfg(feature = "hydrate")]
use crate::net::error::ApiError;
#[cfg(feature = "hydrate")]
use crate::net::types::PasswordChangeRequest;
use crate::state::provider::use_auth;
use crate::util::validators::{has_forbidden_domain, is_valid_email, validate_password};

#[component]
pub fn UserProfileModal(on_close: Callback<()>) -> impl IntoView {
    let lang = use_language();

    view! {
        <div class="profile-modal">
            <button
                type="button"
                class="profile-modal__backdrop"
                aria-label=move || lang.t().common.close
                on:click=move |_| on_close.run(())
            ></button>

            <div class="profile-modal__dialog" role="dialog" aria-modal="true">
                <button
                    type="button"
                    class="profile-modal__close"
                    aria-label=move || lang.t().common.close
                    on:click=move |_| on_close.run(())
                >
                    "×"
                </button>

                <AccountDetails/>
                <EmailChange/>
                <PasswordChange/>
                <AccountDeletion/>
            </div>
        </div>
    }
}

#[component]
fn AccountDetails() -> impl IntoView {
    let lang = use_language();
    let auth = use_auth();

    let username = move || auth.user.get().map(|u| u.username).unwrap_or_default();
    let email = move || auth.user.get().map(|u| u.email).unwrap_or_default();
    let member_since = move || auth.user.get().and_then(|u| u.created_at);
    let validated = move || auth.user.get().is_some_and(|u| u.email_validated);

    view! {
        <section class="profile-section">
            <h3 class="profile-section__title">{move || lang.t().auth.account.details_title}</h3>
            <div class="profile-section__row">
                <span class="profile-section__label">{move || lang.t().auth.account.username_label}</span>
                <span class="profile-section__value">{username}</span>
            </div>
            <div class="profile-section__row">
                <span class="profile-section__label">{move || lang.t().auth.account.email_label}</span>
                <span class="profile-section__value">{email}</span>
            </div>
            <Show when=move || member_since().is_some()>
                <div class="profile-section__row">
                    <span class="profile-section__label">{move || lang.t().auth.account.member_since}</span>
                    <span class="profile-section__value">{move || member_since().unwrap_or_default()}</span>
                </div>
            </Show>
            <Show when=move || !validated()>
                <p class="profile-section__warning">{move || lang.t().auth.account.email_not_validated}</p>
            </Show>
        </section>
    }
}

#[component]
fn EmailChange() -> impl IntoView {
    let lang = use_language();
    let auth = use_auth();
    let api = expect_context::<Api>();

    let new_email = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<&'static str>);
    let success = RwSignal::new(false);

    // Reactive inline validation, matching the server's rules.
    let field_error = Memo::new(move |_| {
        let value = new_email.get();
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        let t = lang.t();
        if !is_valid_email(value) {
            return Some(t.validation.invalid_email);
        }
        if auth.user.get().is_some_and(|u| u.email == value) {
            return Some(t.auth.account.email_change_same_error);
        }
        if has_forbidden_domain(value) {
            return Some(t.auth.account.forbidden_domain);
        }
        None
    });

    let submit = move |_| {
        let address = new_email.get_untracked().trim().to_owned();
        if address.is_empty() || field_error.get_untracked().is_some() || loading.get_untracked() {
            return;
        }
        loading.set(true);
        error.set(None);
        success.set(false);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.change_email(&address).await {
                    Ok(()) => {
                        success.set(true);
                        new_email.set(String::new());
                    }
                    Err(err) => {
                        log::error!("email change failed: {err}");
                        let t = lang.t();
                        error.set(Some(match err {
                            ApiError::Network(_) => t.common.server_unreachable,
                            _ => t.common.error,
                        }));
                    }
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &api;
        }
    };

    view! {
        <section class="profile-section">
            <h3 class="profile-section__title">{move || lang.t().auth.account.email_change_title}</h3>

            <Show when=move || success.get()>
                <div class="auth-form__success">{move || lang.t().auth.account.email_change_success}</div>
            </Show>
            <Show when=move || error.get().is_some()>
                <div class="auth-form__error">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <label class="auth-form__label">
                {move || lang.t().auth.account.new_email}
                <input
                    class="auth-form__input"
                    type="email"
                    prop:value=move || new_email.get()
                    on:input=move |ev| new_email.set(event_target_value(&ev))
                    disabled=move || loading.get()
                />
                <Show when=move || field_error.get().is_some()>
                    <span class="auth-form__field-error">{move || field_error.get().unwrap_or_default()}</span>
                </Show>
            </label>

            <button
                type="button"
                class="auth-form__submit"
                disabled=move || loading.get() || field_error.get().is_some() || new_email.get().trim().is_empty()
                on:click=submit
            >
                {move || lang.t().auth.account.email_change_submit}
            </button>
        </section>
    }
}

#[component]
fn PasswordChange() -> impl IntoView {
    let lang = use_language();
    let api = expect_context::<Api>();
    let navigate = use_navigate();

    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<&'static str>);
    let success = RwSignal::new(false);

    let rule_error = Memo::new(move |_| {
        let password = new_password.get();
        if password.is_empty() {
            return None;
        }
        let issues = validate_password(&password);
        if issues.is_empty() {
            None
        } else {
            Some(
                issues
                    .into_iter()
                    .map(|i| super::register_form::password_issue_message(lang.language.get(), i))
                    .collect::<Vec<_>>()
                    .join(" "),
            )
        }
    });
    let mismatch = Memo::new(move |_| {
        !confirm_password.get().is_empty() && new_password.get() != confirm_password.get()
    });
    let form_valid = Memo::new(move |_| {
        !current_password.get().is_empty()
            && !new_password.get().is_empty()
            && !confirm_password.get().is_empty()
            && rule_error.get().is_none()
            && !mismatch.get()
    });

    let submit = move |_| {
        if !form_valid.get_untracked() || loading.get_untracked() {
            return;
        }
        loading.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            let dto = PasswordChangeRequest {
                previous_password: current_password.get_untracked(),
                password: new_password.get_untracked(),
                confirm_password: confirm_password.get_untracked(),
            };
            leptos::task::spawn_local(async move {
                match api.change_password(&dto).await {
                    Ok(()) => {
                        success.set(true);
                        // The old sessions are invalid now; sign out locally
                        // and come back through the login form.
                        gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                        api.auth().logout().await;
                        navigate(
                            &login_entry_path(lang.language.get_untracked()),
                            NavigateOptions { replace: true, ..Default::default() },
                        );
                    }
                    Err(err) => {
                        log::error!("password change failed: {err}");
                        let t = lang.t();
                        error.set(Some(match &err {
                            ApiError::Network(_) => t.common.server_unreachable,
                            e if e.is_unauthorized() => t.validation.password_mismatch,
                            _ => t.common.error,
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

    let password_field = move |label: fn(&'static crate::i18n::keys::TranslationKeys) -> &'static str,
                               signal: RwSignal<String>| {
        view! {
            <label class="auth-form__label">
                {move || label(lang.t())}
                <input
                    class="auth-form__input"
                    type="password"
                    prop:value=move || signal.get()
                    on:input=move |ev| signal.set(event_target_value(&ev))
                    disabled=move || loading.get()
                />
            </label>
        }
    };

    view! {
        <section class="profile-section">
            <h3 class="profile-section__title">{move || lang.t().auth.account.password_change_title}</h3>

            <Show when=move || success.get()>
                <div class="auth-form__success">{move || lang.t().auth.account.password_change_success}</div>
            </Show>
            <Show when=move || error.get().is_some()>
                <div class="auth-form__error">{move || error.get().unwrap_or_default()}</div>
            </Show>

            {password_field(|t| t.auth.account.current_password, current_password)}
            {password_field(|t| t.auth.account.new_password, new_password)}
            {password_field(|t| t.auth.account.confirm_password, confirm_password)}

            <Show when=move || rule_error.get().is_some()>
                <span class="auth-form__field-error">{move || rule_error.get().unwrap_or_default()}</span>
            </Show>
            <Show when=move || mismatch.get()>
                <span class="auth-form__field-error">{move || lang.t().validation.password_mismatch}</span>
            </Show>

            <button
                type="button"
                class="auth-form__submit"
                disabled=move || !form_valid.get() || loading.get()
                on:click=submit
            >
                {move || lang.t().auth.account.password_change_submit}
            </button>
        </section>
    }
}

#[component]
fn AccountDeletion() -> impl IntoView {
    let lang = use_language();
    let api = expect_context::<Api>();
    let navigate = use_navigate();

    let confirming = RwSignal::new(false);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<&'static str>);
    let success = RwSignal::new(false);

    let on_delete = move |_| {
        if !confirming.get_untracked() || loading.get_untracked() {
            return;
        }
        loading.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api.delete_account().await {
                    Ok(()) => {
                        success.set(true);
                        confirming.set(false);
                        gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                        api.auth().logout().await;
                        navigate(
                            &localized_path(lang.language.get_untracked(), "/"),
                            NavigateOptions { replace: true, ..Default::default() },
                        );
                    }
                    Err(err) => {
                        log::error!("account deletion failed: {err}");
                        let t = lang.t();
                        error.set(Some(match err {
                            ApiError::Network(_) => t.common.server_unreachable,
                            _ => t.common.error,
                        }));
                        confirming.set(false);
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

    view! {
        <section class="profile-section profile-section--danger">
            <h3 class="profile-section__title">{move || lang.t().auth.account.danger_zone_title}</h3>

            <Show when=move || success.get()>
                <div class="auth-form__success">{move || lang.t().auth.account.delete_success}</div>
            </Show>
            <Show when=move || error.get().is_some()>
                <div class="auth-form__error">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <Show
                when=move || confirming.get()
                fallback=move || {
                    view! {
                        <button
                            type="button"
                            class="auth-form__submit auth-form__submit--danger"
                            on:click=move |_| confirming.set(true)
                        >
                            {move || lang.t().auth.account.delete_account}
                        </button>
                    }
                }
            >
                <p class="profile-section__warning">{move || lang.t().auth.account.delete_warning}</p>
                <div class="profile-section__actions">
                    <button
                        type="button"
                        class="auth-form__submit auth-form__submit--danger"
                        disabled=move || loading.get()
                        on:click=on_delete.clone()
                    >
                        {move || lang.t().common.confirm}
                    </button>
                    <button
                        type="button"
                        class="auth-form__submit"
                        disabled=move || loading.get()
                        on:click=move |_| confirming.set(false)
                    >
                        {move || lang.t().common.cancel}
                    </button>
                </div>
            </Show>
        </section>
    }
}
