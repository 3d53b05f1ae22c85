//! Game page: boots the Unity WebGL build inside the authenticated shell.

use leptos::prelude::*;

use crate::components::guards::PrivateRoute;
use crate::components::seo::PageMeta;
use crate::i18n::use_language;
#[cfg(feature = "hydrate")]
use crate::util::unity;

#[component]
pub fn PlayPage() -> impl IntoView {
    view! {
        <PrivateRoute>
            <GameCanvas/>
        </PrivateRoute>
    }
}

#[component]
fn GameCanvas() -> impl IntoView {
    let lang = use_language();

    let progress = RwSignal::new(0.0_f64);
    let ready = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let active_version = RwSignal::new(None::<String>);

    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    // Resolve the active version, then inject the loader. Runs once after
    // the canvas is in the DOM.
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if active_version.get_untracked().is_some() {
                return;
            }
            leptos::task::spawn_local(async move {
                let manifest_url = unity::active_version_url();
                match unity::fetch_active_version(&manifest_url).await {
                    Ok(version) => {
                        active_version.set(Some(version.clone()));
                        let config = unity::unity_config(&manifest_url, &version);
                        unity::boot(
                            &config,
                            &canvas,
                            move |p| progress.set(p),
                            move |outcome| match outcome {
                                Ok(()) => ready.set(true),
                                Err(message) => {
                                    log::error!("unity boot failed: {message}");
                                    error.set(Some(message));
                                }
                            },
                        );
                    }
                    Err(message) => {
                        log::error!("active version lookup failed: {message}");
                        error.set(Some(message));
                    }
                }
            });
        });
        on_cleanup(unity::quit);
    }

    let on_fullscreen = move |_| {
        #[cfg(feature = "hydrate")]
        unity::set_fullscreen();
    };

    let progress_percent = move || format!("{}%", (progress.get() * 100.0).floor());

    view! {
        {move || {
            let t = lang.t();
            view! {
                <PageMeta
                    title=t.play.meta_title
                    description=t.home.meta_description
                    sub_path="/play"
                    language=lang.language.get()
                />
            }
        }}

        <section class="play-page">
            <canvas class="play-page__canvas" id="unity-canvas" tabindex="1" node_ref=canvas_ref></canvas>

            <Show when=move || !ready.get() && error.get().is_none()>
                <div class="play-page__loader">
                    <div class="play-page__loader-bar">
                        <div class="play-page__loader-fill" style:width=progress_percent></div>
                    </div>
                    <p class="play-page__loader-text">
                        {move || {
                            let t = lang.t();
                            match active_version.get() {
                                Some(version) => format!("{} {version}", t.play.loading_game),
                                None => t.play.loading_version.to_owned(),
                            }
                        }}
                    </p>
                </div>
            </Show>

            <Show when=move || error.get().is_some()>
                <div class="play-page__error">
                    {move || {
                        format!("{}: {}", lang.t().play.failed, error.get().unwrap_or_default())
                    }}
                </div>
            </Show>

            <Show when=move || ready.get()>
                <button type="button" class="play-page__fullscreen" on:click=on_fullscreen>
                    {move || lang.t().play.fullscreen}
                </button>
            </Show>
        </section>
    }
}
