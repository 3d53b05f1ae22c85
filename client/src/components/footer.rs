//! Site footer: legal links, community link, copyright.

use leptos::prelude::*;

use crate::config::{COMPANY_NAME, DISCORD_URL};
use crate::i18n::use_language;

#[component]
pub fn Footer() -> impl IntoView {
    let lang = use_language();

    view! {
        <footer class="footer">
            <nav class="footer__links">
                <a class="footer__link" href=move || lang.localized("/terms")>
                    {move || lang.t().footer.terms}
                </a>
                <a class="footer__link" href=move || lang.localized("/privacy")>
                    {move || lang.t().footer.privacy}
                </a>
                <a class="footer__link" href=move || lang.localized("/cookies")>
                    {move || lang.t().footer.cookies}
                </a>
                <a class="footer__link" href=DISCORD_URL rel="noopener" target="_blank">
                    "Discord"
                </a>
            </nav>
            <p class="footer__copyright">
                {format!("© {COMPANY_NAME}. ")}
                {move || lang.t().footer.rights}
            </p>
        </footer>
    }
}
