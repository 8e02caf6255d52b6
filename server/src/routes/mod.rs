//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the small JSON API with Leptos SSR rendering under a
//! single Axum router. Compiled client assets are served from `/pkg`.


pub mod auth;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use client::site::SitePage;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// API routes that do not depend on Leptos rendering.
pub fn api_routes() -> Router {
    Router::new()
        .route("/api/auth/me", get(auth::me))
        .route("/healthz", get(healthz))
}

/// Permanent redirects from `/page/` to `/page` for every non-root page.
///
/// The Leptos route list only registers the canonical paths, so a trailing
/// slash would otherwise fall through to the not-found handler.
pub fn canonical_redirects() -> Router {
    SitePage::ALL.into_iter().filter(|page| page.path() != "/").fold(Router::new(), |router, page| {
        let canonical = page.path();
        router.route(&format!("{canonical}/"), get(move || async move { Redirect::permanent(canonical) }))
    })
}

/// Full site: API routes + Leptos SSR pages + `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// `[[workspace.metadata.leptos]]` section or cargo-leptos environment).
pub fn app() -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    Ok(site_router(conf.leptos_options))
}

/// Build the full router from already-loaded Leptos options.
pub fn site_router(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);
    tracing::debug!(count = routes.len(), "leptos routes generated");

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(client::app::shell))
        .with_state(leptos_options.clone());

    // Serve Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    api_routes()
        .merge(canonical_redirects())
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
