//! Registration form with client-side validation and server field errors.

#[cfg(test)]
#[path = "register_form_test.rs"]
mod register_form_test;

use std::collections::HashMap;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

#[cfg(feature = "hydrate")]
use crate::config::REDIRECT_DELAY_MS;
use crate::i18n::{Language, use_language};
use crate::net::api::Api;
#[cfg(feature = "hydrate")]
use crate::net::error::ApiError;
#[cfg(feature = "hydrate")]
use crate::net::types::RegisterRequest;
#[cfg(feature = "hydrate")]
use crate::util::search_params::{AuthAction, href, open_action_query};
use crate::util::validators::{
    PasswordIssue, has_forbidden_domain, is_valid_email, is_valid_username, validate_password,
};

/// Localized text for a password rule violation.
#[must_use]
pub fn password_issue_message(language: Language, issue: PasswordIssue) -> &'static str {
    let rules = &language.table().auth.password_rules;
    match issue {
        PasswordIssue::MinLength => rules.min_length,
        PasswordIssue::CharTypes => rules.char_types,
    }
}

/// Client-side validation: returns per-field errors keyed like the form
/// inputs (and like the server's own 412 field map).
#[must_use]
pub fn validate_registration(
    language: Language,
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> HashMap<String, String> {
    let t = language.table();
    let mut errors = HashMap::new();

    if username.trim().is_empty() {
        errors.insert("username".to_owned(), t.validation.required.to_owned());
    } else if !is_valid_username(username.trim()) {
        errors.insert("username".to_owned(), t.validation.invalid_username.to_owned());
    }

    if email.trim().is_empty() {
        errors.insert("email".to_owned(), t.validation.required.to_owned());
    } else if !is_valid_email(email.trim()) {
        errors.insert("email".to_owned(), t.validation.invalid_email.to_owned());
    } else if has_forbidden_domain(email.trim()) {
        errors.insert("email".to_owned(), t.validation.forbidden_email_domain.to_owned());
    }

    if password.is_empty() {
        errors.insert("password".to_owned(), t.validation.required.to_owned());
    } else {
        let issues = validate_password(password);
        if !issues.is_empty() {
            let message = issues
                .into_iter()
                .map(|i| password_issue_message(language, i))
                .collect::<Vec<_>>()
                .join(" ");
            errors.insert("password".to_owned(), message);
        }
    }

    if confirm_password.is_empty() {
        errors.insert("confirmPassword".to_owned(), t.validation.required.to_owned());
    } else if password != confirm_password {
        errors.insert("confirmPassword".to_owned(), t.validation.password_mismatch.to_owned());
    }

    errors
}

#[component]
pub fn RegisterForm() -> impl IntoView {
    let lang = use_language();
    let api = expect_context::<Api>();
    let location = use_location();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let loading = RwSignal::new(false);
    let registered = RwSignal::new(false);
    let error = RwSignal::new(None::<&'static str>);
    let field_errors = RwSignal::new(HashMap::<String, String>::new());

    let field_error = move |name: &'static str| field_errors.with(|e| e.get(name).cloned());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let errors = validate_registration(
            lang.language.get_untracked(),
            &username.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm_password.get_untracked(),
        );
        if !errors.is_empty() {
            field_errors.set(errors);
            return;
        }
        field_errors.set(HashMap::new());
        loading.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            let location = location.clone();
            let dto = RegisterRequest {
                username: username.get_untracked().trim().to_owned(),
                email: email.get_untracked().trim().to_owned(),
                password: password.get_untracked(),
                confirm_password: confirm_password.get_untracked(),
            };
            leptos::task::spawn_local(async move {
                match api.register(&dto).await {
                    Ok(()) => {
                        registered.set(true);
                        gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                        let target = href(
                            &location.pathname.get_untracked(),
                            &open_action_query(&location.search.get_untracked(), AuthAction::Login),
                            &location.hash.get_untracked(),
                        );
                        navigate(&target, NavigateOptions::default());
                    }
                    Err(err) => {
                        log::error!("registration failed: {err}");
                        let t = lang.t();
                        match err {
                            ApiError::Validation { errors } => {
                                field_errors.set(errors);
                                error.set(Some(t.common.error));
                            }
                            ApiError::Network(_) => error.set(Some(t.common.server_unreachable)),
                            _ => error.set(Some(t.auth.register.error)),
                        }
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

    let text_field = move |name: &'static str,
                           label: fn(&'static crate::i18n::keys::TranslationKeys) -> &'static str,
                           kind: &'static str,
                           signal: RwSignal<String>| {
        view! {
            <label class="auth-form__label">
                {move || label(lang.t())}
                <input
                    class="auth-form__input"
                    type=kind
                    name=name
                    prop:value=move || signal.get()
                    on:input=move |ev| {
                        signal.set(event_target_value(&ev));
                        field_errors.update(|e| {
                            e.remove(name);
                        });
                        error.set(None);
                    }
                    disabled=move || loading.get()
                />
                <Show when=move || field_error(name).is_some()>
                    <span class="auth-form__field-error">{move || field_error(name).unwrap_or_default()}</span>
                </Show>
            </label>
        }
    };

    view! {
        <Show
            when=move || !registered.get()
            fallback=move || {
                view! {
                    <div class="auth-form__success">
                        <p>{move || lang.t().auth.register.success}</p>
                        <p class="auth-form__muted">{move || lang.t().auth.password_reset.redirect}</p>
                    </div>
                }
            }
        >
            <form class="auth-form" on:submit=on_submit.clone()>
                <Show when=move || error.get().is_some()>
                    <div class="auth-form__error">{move || error.get().unwrap_or_default()}</div>
                </Show>

                {text_field("username", |t| t.auth.register.username, "text", username)}
                {text_field("email", |t| t.auth.register.email, "email", email)}

                <label class="auth-form__label">
                    {move || lang.t().auth.register.password}
                    <div class="auth-form__password">
                        <input
                            class="auth-form__input"
                            type=move || if show_password.get() { "text" } else { "password" }
                            name="password"
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                password.set(event_target_value(&ev));
                                field_errors.update(|e| {
                                    e.remove("password");
                                });
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
                    <Show when=move || field_error("password").is_some()>
                        <span class="auth-form__field-error">
                            {move || field_error("password").unwrap_or_default()}
                        </span>
                    </Show>
                </label>

                {text_field("confirmPassword", |t| t.auth.register.confirm_password, "password", confirm_password)}

                <button type="submit" class="auth-form__submit" disabled=move || loading.get()>
                    {move || {
                        let t = lang.t();
                        if loading.get() { t.auth.register.loading } else { t.auth.register.submit }
                    }}
                </button>
            </form>
        </Show>
    }
}
