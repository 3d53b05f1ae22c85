//! Modal hosting the login / register / password-reset-request forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! The visible form is selected by the `?action=` query parameter, so auth
//! deep links work from anywhere. The two token-carrying actions are not
//! modal forms: they redirect to their dedicated routes, keeping the
//! one-time token. Closing the modal strips only the auth parameters.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use super::login_form::LoginForm;
use super::password_reset_request_form::PasswordResetRequestForm;
use super::register_form::RegisterForm;
use crate::i18n::use_language;
use crate::state::provider::use_auth;
use crate::util::search_params::{
    AuthAction, TOKEN_PARAM, close_auth_query, href, query_param, requested_action, token_flow_query,
};

#[component]
pub fn AuthModal() -> impl IntoView {
    let lang = use_language();
    let auth = use_auth();
    let location = use_location();

    let action = Memo::new({
        let location = location.clone();
        move |_| requested_action(&location.search.get())
    });
    let open = Memo::new(move |_| action.get().is_some_and(AuthAction::opens_modal));

    // Token flows live on dedicated routes; forward them there with the
    // one-time token intact.
    let navigate = use_navigate();
    Effect::new({
        let location = location.clone();
        move || {
            let target = match action.get() {
                Some(AuthAction::PasswordResetToken) => "/reset-password",
                Some(AuthAction::EmailValidation) => "/validate-email",
                _ => return,
            };
            let token = query_param(&location.search.get(), TOKEN_PARAM);
            let query = token_flow_query(token.as_deref());
            navigate(
                &href(&lang.localized(target), &query, ""),
                NavigateOptions { replace: true, ..Default::default() },
            );
        }
    });

    // A successful login makes `authenticated` flip while the modal is
    // open; hand the user straight to the game.
    let navigate = use_navigate();
    Effect::new(move || {
        if open.get() && auth.authenticated.get() {
            navigate(&lang.localized("/play"), NavigateOptions { replace: true, ..Default::default() });
        }
    });

    let navigate = use_navigate();
    let close = Callback::new(move |()| {
        let target = href(
            &location.pathname.get_untracked(),
            &close_auth_query(&location.search.get_untracked()),
            &location.hash.get_untracked(),
        );
        navigate(&target, NavigateOptions { replace: true, ..Default::default() });
    });

    let title = move || {
        let t = lang.t();
        match action.get() {
            Some(AuthAction::Register) => t.auth.register.title,
            Some(AuthAction::PasswordReset) => t.auth.password_reset.title,
            _ => t.auth.login.title,
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="auth-modal">
                <button
                    type="button"
                    class="auth-modal__backdrop"
                    aria-label=move || lang.t().common.close
                    on:click=move |_| close.run(())
                ></button>

                <div class="auth-modal__dialog" role="dialog" aria-modal="true">
                    <button
                        type="button"
                        class="auth-modal__close"
                        aria-label=move || lang.t().common.close
                        on:click=move |_| close.run(())
                    >
                        "×"
                    </button>
                    <h2 class="auth-modal__title">{title}</h2>
                    {move || match action.get() {
                        Some(AuthAction::Register) => view! { <RegisterForm/> }.into_any(),
                        Some(AuthAction::PasswordReset) => view! { <PasswordResetRequestForm/> }.into_any(),
                        _ => view! { <LoginForm/> }.into_any(),
                    }}
                </div>
            </div>
        </Show>
    }
}
