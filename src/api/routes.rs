//! API route configuration.
//!
//! The create, resolve and stats operations are public; listing a user's
//! links requires Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    create_link_handler, list_links_handler, resolve_handler, stats_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes callable without an identity.
///
/// # Endpoints
///
/// - `POST /shorten`          - Create a short link (optional identity)
/// - `GET  /resolve/{code}`   - Structured resolve result
/// - `GET  /stats/{code}`     - Link statistics
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(create_link_handler))
        .route("/resolve/{code}", get(resolve_handler))
        .route("/stats/{code}", get(stats_handler))
}

/// Identity-gated routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `GET /links` - Paginated listing of the caller's links
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/links", get(list_links_handler))
}
