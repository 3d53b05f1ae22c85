//! Static host for the Starhold front-end.
//!
//! Renders the SSR shell and serves the compiled WASM/site assets — nothing
//! more. All account operations go straight from the browser to the remote
//! account API; this process owns no business endpoints and no state.

use axum::Router;
use leptos::config::get_configuration;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let conf = get_configuration(None).expect("invalid leptos configuration");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let routes = generate_route_list(client::app::App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || client::app::shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(client::app::shell))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .with_state(leptos_options);

    tracing::info!(%addr, "starhold site listening");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");
    axum::serve(listener, app).await.expect("server failed");
}
