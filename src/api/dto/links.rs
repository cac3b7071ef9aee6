//! DTOs for link creation and listing endpoints.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::ShortLink;

/// Compiled regex for custom slug validation.
static CUSTOM_SLUG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").unwrap());

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// The original URL to shorten. A missing scheme defaults to HTTPS.
    #[validate(length(min = 1, message = "URL is required"))]
    pub original_url: String,

    /// Optional user-chosen short code.
    #[validate(length(min = 4, max = 32))]
    #[validate(regex(path = "*CUSTOM_SLUG_REGEX"))]
    pub custom_slug: Option<String>,

    /// Optional expiry timestamp. After this time the link stops resolving.
    pub expires_at: Option<DateTime<Utc>>,
}

/// Response for a created link.
#[derive(Debug, Serialize)]
pub struct CreateLinkResponse {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    /// Canonical short URL: configured base URL + `/` + code.
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl CreateLinkResponse {
    pub fn from_link(link: ShortLink, base_url: &str) -> Self {
        Self {
            short_url: format!("{}/{}", base_url, link.short_code),
            id: link.id,
            short_code: link.short_code,
            original_url: link.original_url,
            created_at: link.created_at,
            expires_at: link.expires_at,
        }
    }
}

/// One link in a user's listing.
#[derive(Debug, Serialize)]
pub struct LinkSummary {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl From<ShortLink> for LinkSummary {
    fn from(link: ShortLink) -> Self {
        Self {
            id: link.id,
            short_code: link.short_code,
            original_url: link.original_url,
            title: link.title,
            created_at: link.created_at,
        }
    }
}

/// Paginated listing of a user's links.
#[derive(Debug, Serialize)]
pub struct ListLinksResponse {
    pub urls: Vec<LinkSummary>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}

/// Pagination query parameters.
///
/// Uses `serde_with` to parse numbers from query strings.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<i64>,
}

impl PaginationParams {
    /// Validates pagination parameters.
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `limit`: 10
    ///
    /// # Validation
    ///
    /// - Page must be ≥ 1
    /// - Limit must be between 1 and 100
    ///
    /// # Returns
    ///
    /// `(page, limit)` for the listing query.
    pub fn validate(&self) -> Result<(i64, i64), String> {
        let page = self.page.unwrap_or(1);
        let limit = self.limit.unwrap_or(10);

        if page < 1 {
            return Err("Page must be greater than 0".to_string());
        }

        if !(1..=100).contains(&limit) {
            return Err("Limit must be between 1 and 100".to_string());
        }

        Ok((page, limit))
    }
}
