//! Bearer token authentication middleware and extractors.
//!
//! Identity is never taken from client-supplied headers directly: the raw
//! bearer token is resolved server-side into an [`AuthContext`] and attached
//! to the request, and identity-gated handlers read only that context.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;
use serde_json::json;

use crate::application::services::AuthContext;
use crate::domain::entities::User;
use crate::{error::AppError, state::AppState};

/// Authenticates requests using Bearer tokens from the Authorization header.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// # Authentication Flow
///
/// 1. Extract token from `Authorization` header
/// 2. Resolve it to an [`AuthContext`] via the auth service
/// 3. Insert the context into request extensions
/// 4. Continue to the handler
///
/// # Errors
///
/// Returns `401 Unauthorized` if the header is missing or malformed, or the
/// token is unknown or revoked.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| missing_header_error())?;

    let ctx = st.auth_service.authenticate(&token).await?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(ctx);

    Ok(next.run(req).await)
}

/// Optional-identity extractor for endpoints that allow anonymous callers.
///
/// - No `Authorization` header: anonymous (`None`)
/// - Header present: the token must validate; an invalid token is rejected
///   rather than downgraded to anonymous
pub struct MaybeUser(pub Option<User>);

impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if !parts.headers.contains_key(header::AUTHORIZATION) {
            return Ok(MaybeUser(None));
        }

        let AuthBearer(token) = AuthBearer::from_request_parts(parts, &())
            .await
            .map_err(|_| missing_header_error())?;

        let ctx = state.auth_service.authenticate(&token).await?;

        Ok(MaybeUser(Some(ctx.user)))
    }
}

fn missing_header_error() -> AppError {
    AppError::unauthorized(
        "Unauthorized",
        json!({ "reason": "Authorization header is missing or invalid" }),
    )
}
