//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ShortLink;

/// Statistics for a specific short link.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub title: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
    pub last_accessed_at: Option<DateTime<Utc>>,
    pub is_active: bool,
}

impl From<ShortLink> for StatsResponse {
    fn from(link: ShortLink) -> Self {
        Self {
            id: link.id,
            short_code: link.short_code,
            original_url: link.original_url,
            title: link.title,
            click_count: link.click_count,
            created_at: link.created_at,
            last_accessed_at: link.last_accessed_at,
            is_active: link.is_active,
        }
    }
}
