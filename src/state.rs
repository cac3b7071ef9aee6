//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{AuthService, LinkService};
use crate::infrastructure::persistence::{PgLinkRepository, PgTokenRepository, PgUserRepository};

/// Link service wired to the PostgreSQL repository.
pub type AppLinkService = LinkService<PgLinkRepository>;

/// Auth service wired to the PostgreSQL repositories.
pub type AppAuthService = AuthService<PgTokenRepository, PgUserRepository>;

/// Application state shared across all request handlers.
///
/// Services are constructed once at startup and injected explicitly; there is
/// no global database handle.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<AppLinkService>,
    pub auth_service: Arc<AppAuthService>,
    /// Public base URL used to build canonical short URLs (no trailing slash).
    pub base_url: String,
}
