//! Handlers for link creation and listing.

use axum::{
    Extension, Json,
    extract::{Query, State},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::links::{
    CreateLinkRequest, CreateLinkResponse, LinkSummary, ListLinksResponse, PaginationParams,
};
use crate::api::middleware::auth::MaybeUser;
use crate::application::services::AuthContext;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Authentication
///
/// Optional. Anonymous callers get unowned links; a presented bearer token
/// must validate and associates the link with the caller.
///
/// # Request Body
///
/// ```json
/// {
///   "original_url": "https://example.com",
///   "custom_slug": "my-link",              // optional
///   "expires_at": "2027-01-01T00:00:00Z"   // optional
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request` - empty or malformed URL, invalid slug
/// - `401 Unauthorized` - invalid bearer token presented
/// - `409 Conflict` - custom slug already taken
/// - `500 Internal Server Error` - code generation exhausted
pub async fn create_link_handler(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<Json<CreateLinkResponse>, AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .create_short_link(
            &payload.original_url,
            payload.custom_slug,
            user.map(|u| u.id),
            payload.expires_at,
        )
        .await?;

    Ok(Json(CreateLinkResponse::from_link(link, &state.base_url)))
}

/// Lists the authenticated caller's links, newest first.
///
/// # Endpoint
///
/// `GET /api/links?page=1&limit=10`
///
/// # Query Parameters
///
/// - `page` (optional): page number, ≥ 1 (default: 1)
/// - `limit` (optional): items per page, 1-100 (default: 10)
///
/// # Response
///
/// ```json
/// { "urls": [ ... ], "total": 15, "page": 1, "limit": 10 }
/// ```
///
/// The total is recomputed on every call.
///
/// # Errors
///
/// - `400 Bad Request` - pagination parameters out of range
/// - `401 Unauthorized` - missing or invalid bearer token
pub async fn list_links_handler(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ListLinksResponse>, AppError> {
    let (page, limit) = params
        .validate()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let link_page = state
        .link_service
        .list_user_links(ctx.user.id, page, limit)
        .await?;

    Ok(Json(ListLinksResponse {
        urls: link_page.links.into_iter().map(LinkSummary::from).collect(),
        total: link_page.total,
        page,
        limit,
    }))
}
