//! Repository trait for API token storage and validation.

use crate::domain::entities::ApiToken;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for API tokens.
///
/// Raw tokens never reach the database; callers pass the HMAC-SHA256 hash
/// computed by the authentication service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Stores a new token hash for a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] on a hash collision (effectively
    /// impossible, but surfaced rather than swallowed).
    /// Returns [`AppError::Internal`] on other database errors.
    async fn insert(
        &self,
        user_id: i64,
        token_hash: &str,
        label: &str,
    ) -> Result<ApiToken, AppError>;

    /// Finds a non-revoked token by its hash.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_valid(&self, token_hash: &str) -> Result<Option<ApiToken>, AppError>;

    /// Stamps `last_used_at` for monitoring.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn touch_last_used(&self, token_hash: &str) -> Result<(), AppError>;

    /// Revokes all tokens with the given label.
    ///
    /// Returns the number of tokens revoked.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn revoke_by_label(&self, label: &str) -> Result<u64, AppError>;

    /// Lists all tokens, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<ApiToken>, AppError>;
}
