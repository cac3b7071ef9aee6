//! Handler for the structured resolve endpoint.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::resolve::ResolveResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Longest code accepted before the input counts as malformed.
const MAX_CODE_LENGTH: usize = 64;

/// Resolves a short code to its original URL without redirecting.
///
/// # Endpoint
///
/// `GET /api/resolve/{code}`
///
/// # Response
///
/// A miss is a structured negative result, never an error:
///
/// ```json
/// { "found": false, "original_url": "" }
/// ```
///
/// A hit counts as an access (click counter, last-accessed timestamp).
///
/// # Errors
///
/// - `400 Bad Request` - malformed code (empty or oversized)
pub async fn resolve_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<ResolveResponse>, AppError> {
    if code.is_empty() || code.len() > MAX_CODE_LENGTH {
        return Err(AppError::bad_request(
            "Malformed short code",
            json!({ "max_length": MAX_CODE_LENGTH }),
        ));
    }

    let resolution = state.link_service.resolve(&code).await?;

    Ok(Json(ResolveResponse::from(resolution)))
}
