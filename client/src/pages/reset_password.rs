//! Dedicated route for the emailed password-reset link.

use leptos::prelude::*;

use crate::components::password_reset_form::PasswordResetForm;
use crate::components::seo::PageMeta;
use crate::i18n::use_language;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let lang = use_language();

    view! {
        {move || {
            let t = lang.t();
            view! {
                <PageMeta
                    title=t.auth.password_reset.title
                    description=t.auth.password_reset.title
                    sub_path="/reset-password"
                    language=lang.language.get()
                />
            }
        }}

        <section class="auth-page">
            <PasswordResetForm/>
        </section>
    }
}
