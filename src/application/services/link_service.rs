//! Link creation, resolution and retrieval service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::http::TitleFetcher;
use crate::utils::code_generator::{generate_code, validate_custom_slug};
use crate::utils::url_normalizer::normalize_url;

/// Collision retry bound for generated codes.
///
/// The configured code space makes repeated collisions an anomaly, so
/// exhausting the attempts is reported as an internal error.
const MAX_CODE_ATTEMPTS: usize = 5;

/// Outcome of resolving a short code.
///
/// A miss is a structured negative result, not an error, so the HTTP
/// boundary decides the status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found { original_url: String },
    NotFound,
}

/// One page of a user's links plus the recomputed total.
#[derive(Debug, Clone)]
pub struct LinkPage {
    pub links: Vec<ShortLink>,
    pub total: i64,
}

/// Service for creating, resolving and listing shortened links.
///
/// Handles URL normalization, slug validation, code generation with collision
/// retry, and best-effort title lookup. The repository's unique constraint is
/// the authoritative uniqueness check; pre-insert existence checks only exist
/// to fail fast.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    title_fetcher: Arc<dyn TitleFetcher>,
    code_length: usize,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(
        link_repository: Arc<L>,
        title_fetcher: Arc<dyn TitleFetcher>,
        code_length: usize,
    ) -> Self {
        Self {
            link_repository,
            title_fetcher,
            code_length,
        }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `original_url` - the URL to shorten; a missing scheme defaults to HTTPS
    /// - `custom_slug` - optional user-chosen short code
    /// - `owner_id` - the authenticated caller, if any (anonymous links allowed)
    /// - `expires_at` - optional expiry timestamp
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL or custom slug is invalid.
    /// Returns [`AppError::Conflict`] if the custom slug is already taken.
    /// Returns [`AppError::Internal`] if code generation keeps colliding.
    pub async fn create_short_link(
        &self,
        original_url: &str,
        custom_slug: Option<String>,
        owner_id: Option<i64>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<ShortLink, AppError> {
        let normalized_url = normalize_url(original_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        if let Some(slug) = custom_slug {
            validate_custom_slug(&slug)?;

            // Advisory fast-path only; the unique constraint at insert time
            // is what actually guarantees uniqueness.
            if self.link_repository.exists(&slug).await? {
                return Err(slug_conflict(&slug));
            }

            let title = self.display_title(&normalized_url).await;
            let new_link = NewShortLink {
                short_code: slug.clone(),
                original_url: normalized_url,
                title,
                user_id: owner_id,
                expires_at,
            };

            return self.link_repository.insert(new_link).await.map_err(|e| match e {
                AppError::Conflict { .. } => slug_conflict(&slug),
                other => other,
            });
        }

        let title = self.display_title(&normalized_url).await;
        self.insert_with_generated_code(normalized_url, title, owner_id, expires_at)
            .await
    }

    /// Resolves a short code to its original URL.
    ///
    /// A hit increments the click counter and stamps the last access time;
    /// both are best-effort and a failure never turns a hit into a miss.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] only on lookup failures; a missing,
    /// inactive or expired link is [`Resolution::NotFound`].
    pub async fn resolve(&self, code: &str) -> Result<Resolution, AppError> {
        let Some(link) = self.link_repository.find_active_by_code(code).await? else {
            return Ok(Resolution::NotFound);
        };

        if !link.is_resolvable() {
            return Ok(Resolution::NotFound);
        }

        if let Err(e) = self.link_repository.record_access(link.id).await {
            tracing::warn!("Failed to record access for {}: {e}", link.short_code);
        }

        Ok(Resolution::Found {
            original_url: link.original_url,
        })
    }

    /// Retrieves a link by code for its statistics, without the active filter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link uses the code.
    pub async fn get_stats(&self, code: &str) -> Result<ShortLink, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Lists one page of a user's links, newest first, with the total count.
    ///
    /// The total is recomputed on every call, so pages can shift under
    /// concurrent insertion.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_user_links(
        &self,
        user_id: i64,
        page: i64,
        limit: i64,
    ) -> Result<LinkPage, AppError> {
        let offset = (page - 1) * limit;

        let (links, total) = tokio::join!(
            self.link_repository.list_by_user(user_id, offset, limit),
            self.link_repository.count_by_user(user_id)
        );

        Ok(LinkPage {
            links: links?,
            total: total?,
        })
    }

    /// Database connectivity probe for the health endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the database is unreachable.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.link_repository.ping().await
    }

    /// Fetches the page title, falling back to the URL itself.
    async fn display_title(&self, url: &str) -> String {
        self.title_fetcher
            .page_title(url)
            .await
            .unwrap_or_else(|| url.to_string())
    }

    /// Inserts with a freshly generated code, retrying on collision.
    ///
    /// A collision can surface either from the advisory existence check or
    /// from the insert itself losing the race; both consume an attempt.
    async fn insert_with_generated_code(
        &self,
        original_url: String,
        title: String,
        owner_id: Option<i64>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<ShortLink, AppError> {
        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = generate_code(self.code_length);

            if self.link_repository.exists(&code).await? {
                continue;
            }

            let new_link = NewShortLink {
                short_code: code,
                original_url: original_url.clone(),
                title: title.clone(),
                user_id: owner_id,
                expires_at,
            };

            match self.link_repository.insert(new_link).await {
                Ok(link) => return Ok(link),
                Err(AppError::Conflict { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate a unique short code",
            json!({ "attempts": MAX_CODE_ATTEMPTS }),
        ))
    }
}

fn slug_conflict(slug: &str) -> AppError {
    AppError::conflict("Custom slug already exists", json!({ "slug": slug }))
}
