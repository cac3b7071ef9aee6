//! User and API token entities.

use chrono::{DateTime, Utc};

/// A registered account that can own short links.
///
/// Users are read-only from the link-management flow; the only mutation is
/// ownership association at link creation time.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input data for registering a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub image: Option<String>,
}

/// A stored API token. Only the HMAC hash of the raw token is persisted.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ApiToken {
    pub id: i64,
    pub user_id: i64,
    pub label: String,
    pub created_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
    pub revoked: bool,
}
