//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::application::services::Resolution;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Response
///
/// - Found: `301 Moved Permanently` with the original URL in `Location`
/// - Missing, inactive or expired: `404 Not Found` with the structured
///   JSON error body
///
/// A successful redirect counts as an access (click counter, last-accessed
/// timestamp), best-effort.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Response, AppError> {
    match state.link_service.resolve(&code).await? {
        Resolution::Found { original_url } => Ok((
            StatusCode::MOVED_PERMANENTLY,
            [(header::LOCATION, original_url)],
        )
            .into_response()),
        Resolution::NotFound => Err(AppError::not_found(
            "Short link not found",
            json!({ "code": code }),
        )),
    }
}
