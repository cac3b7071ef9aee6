//! Repository trait for short link data access.

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new short link.
    ///
    /// The `short_links_short_code_key` unique constraint is the
    /// authoritative uniqueness check; callers treat any pre-insert
    /// existence check as advisory only.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code already exists
    /// (active or inactive alike).
    /// Returns [`AppError::Internal`] on other database errors.
    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLink, AppError>;

    /// Finds a link by its short code, regardless of active state.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError>;

    /// Finds a link by its short code where `is_active` is true.
    ///
    /// Expiry is not filtered here; callers check it on the entity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_active_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError>;

    /// Returns whether any link (active or not) uses the given code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists(&self, code: &str) -> Result<bool, AppError>;

    /// Records an access: increments the click counter and stamps
    /// `last_accessed_at`.
    ///
    /// The update is a single atomic statement but is not transactional
    /// with the preceding lookup; a lost update under concurrency is
    /// acceptable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn record_access(&self, id: i64) -> Result<(), AppError>;

    /// Lists a user's links ordered by creation time descending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_user(
        &self,
        user_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<ShortLink>, AppError>;

    /// Counts a user's links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_by_user(&self, user_id: i64) -> Result<i64, AppError>;

    /// Cheap connectivity probe used by the health endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the database is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
