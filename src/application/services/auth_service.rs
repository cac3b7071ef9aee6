//! Authentication service for API token validation.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::repositories::{TokenRepository, UserRepository};
use crate::error::AppError;
use serde_json::json;

type HmacSha256 = Hmac<Sha256>;

/// Server-verified identity attached to identity-gated operations.
///
/// An `AuthContext` only exists after a bearer token has been validated
/// against stored credentials; handlers never derive identity from
/// client-supplied headers directly.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user: User,
}

/// Hashes a raw token with HMAC-SHA256 under the server signing secret.
///
/// Returns a 64-character lowercase hex-encoded MAC. Shared by the request
/// path and the `admin` CLI so both sides store and compare the same value.
pub fn hash_token(signing_secret: &str, token: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(signing_secret.as_bytes())
        .expect("HMAC accepts any key length");
    mac.update(token.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Service for authenticating API requests via Bearer tokens.
///
/// Tokens are hashed with HMAC-SHA256 (keyed by `signing_secret`) before
/// storage and comparison. An attacker with read-only access to the database
/// cannot verify or forge tokens without the server-side secret.
pub struct AuthService<T: TokenRepository, U: UserRepository> {
    token_repository: Arc<T>,
    user_repository: Arc<U>,
    signing_secret: String,
}

impl<T: TokenRepository, U: UserRepository> AuthService<T, U> {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `token_repository` - token storage
    /// - `user_repository` - user lookup for resolved tokens
    /// - `signing_secret` - HMAC key; must match the value used when tokens
    ///   were issued
    pub fn new(token_repository: Arc<T>, user_repository: Arc<U>, signing_secret: String) -> Self {
        Self {
            token_repository,
            user_repository,
            signing_secret,
        }
    }

    /// Resolves a raw bearer token to an authentication context.
    ///
    /// On success, stamps the token's `last_used_at` for auditability
    /// (best-effort).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is unknown, revoked,
    /// or its owning user no longer exists.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn authenticate(&self, token: &str) -> Result<AuthContext, AppError> {
        let token_hash = hash_token(&self.signing_secret, token);

        let Some(stored) = self.token_repository.find_valid(&token_hash).await? else {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Invalid or revoked token" }),
            ));
        };

        let Some(user) = self.user_repository.find_by_id(stored.user_id).await? else {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Token owner not found" }),
            ));
        };

        let _ = self.token_repository.touch_last_used(&token_hash).await;

        Ok(AuthContext { user })
    }
}
