//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::{ParamSegment, StaticSegment, WildcardSegment};

use crate::components::boot::BootOverlay;
use crate::components::guards::PublicRoute;
use crate::components::layout::Layout;
use crate::config::SITE_NAME;
use crate::i18n::{detect_language, use_language};
use crate::pages::home::HomePage;
use crate::pages::legal::{CookiesPage, PrivacyPage, TermsPage};
use crate::pages::not_found::NotFoundPage;
use crate::pages::play::PlayPage;
use crate::pages::reset_password::ResetPasswordPage;
use crate::pages::validate_email::ValidateEmailPage;
use crate::state::provider::AuthProvider;
use crate::util::search_params::{ACTION_PARAM, AuthAction, TOKEN_PARAM, href, query_param, requested_action};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root component: session provider, boot overlay, and the route table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/starhold.css"/>
        <Title text=SITE_NAME/>

        <AuthProvider>
            <BootOverlay/>
            <Router>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=RootRedirect/>
                    <ParentRoute path=ParamSegment("lang") view=Layout>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("play") view=PlayPage/>
                        <Route
                            path=StaticSegment("auth")
                            view=|| {
                                view! {
                                    <PublicRoute>
                                        <AuthEntryRedirect/>
                                    </PublicRoute>
                                }
                            }
                        />
                        // Legacy auth paths from before the query-driven modal.
                        <Route
                            path=StaticSegment("login")
                            view=|| view! { <LegacyActionRedirect action=AuthAction::Login/> }
                        />
                        <Route
                            path=StaticSegment("signup")
                            view=|| view! { <LegacyActionRedirect action=AuthAction::Register/> }
                        />
                        <Route
                            path=StaticSegment("forgot-password")
                            view=|| view! { <LegacyActionRedirect action=AuthAction::PasswordReset/> }
                        />
                        <Route path=StaticSegment("terms") view=TermsPage/>
                        <Route path=StaticSegment("privacy") view=PrivacyPage/>
                        <Route path=StaticSegment("cookies") view=CookiesPage/>
                        <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>
                        <Route path=StaticSegment("validate-email") view=ValidateEmailPage/>
                        <Route path=WildcardSegment("any") view=NotFoundPage/>
                    </ParentRoute>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

/// `/` → the visitor's language home.
#[component]
fn RootRedirect() -> impl IntoView {
    let target = format!("/{}", detect_language().as_str());
    view! { <Redirect path=target/> }
}

/// `/{lang}/auth` → the landing page with the requested form open,
/// carrying any one-time token along.
#[component]
fn AuthEntryRedirect() -> impl IntoView {
    let lang = use_language();
    let location = use_location();

    let search = location.search.get_untracked();
    let action = requested_action(&search).unwrap_or(AuthAction::Login);
    let mut query = format!("{ACTION_PARAM}={}", action.as_str());
    if let Some(token) = query_param(&search, TOKEN_PARAM) {
        query.push_str(&format!("&{TOKEN_PARAM}={token}"));
    }
    let target = href(&lang.localized("/"), &query, "");

    view! { <Redirect path=target/> }
}

/// Old-style `/login`-like paths → the query-driven modal.
#[component]
fn LegacyActionRedirect(action: AuthAction) -> impl IntoView {
    let lang = use_language();
    let target = href(
        &lang.localized("/"),
        &format!("{ACTION_PARAM}={}", action.as_str()),
        "",
    );
    view! { <Redirect path=target/> }
}
