//! Dedicated route for the emailed address-validation link.

use leptos::prelude::*;

use crate::components::email_validation_form::EmailValidationForm;
use crate::components::seo::PageMeta;
use crate::i18n::use_language;

#[component]
pub fn ValidateEmailPage() -> impl IntoView {
    let lang = use_language();

    view! {
        {move || {
            let t = lang.t();
            view! {
                <PageMeta
                    title=t.auth.email_validation.title
                    description=t.auth.email_validation.title
                    sub_path="/validate-email"
                    language=lang.language.get()
                />
            }
        }}

        <section class="auth-page">
            <EmailValidationForm/>
        </section>
    }
}
