//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves statistics for a specific short link.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// Looks the link up without the active filter, so statistics remain
/// available for deactivated and expired links.
///
/// # Errors
///
/// - `404 Not Found` - no link uses the code
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let link = state.link_service.get_stats(&code).await?;

    Ok(Json(StatsResponse::from(link)))
}
