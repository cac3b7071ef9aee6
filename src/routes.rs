//! Top-level router configuration combining API, redirect and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`            - Frontend form page (public)
//! - `GET  /{code}`      - Short link redirect (public)
//! - `GET  /health`      - Health check (public)
//! - `/api/*`            - RPC-style API (listing requires a Bearer token)
//! - `/static/*`         - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on the API subtree
//! - **Authentication** - Bearer token on identity-gated routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// Static routes (`/health`, `/`) take priority over the `/{code}` redirect
/// capture; reserved slug validation keeps generated and custom codes from
/// shadowing them.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_router = api::routes::public_routes()
        .merge(api::routes::protected_routes().route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::layer,
        )))
        .layer(rate_limit::api_layer());

    let router = Router::new()
        .merge(web::routes::public_routes())
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/api", api_router)
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
