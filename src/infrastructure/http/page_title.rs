//! Best-effort page title retrieval for newly shortened URLs.
//!
//! Title lookup is purely cosmetic: any network error, non-success status or
//! missing `<title>` tag degrades to `None` and the caller falls back to the
//! URL itself. Failures are never propagated.

use async_trait::async_trait;
use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;

static TITLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>([^<]*)</title>").unwrap());

/// Abstraction over outbound title lookup.
///
/// # Implementations
///
/// - [`HttpTitleFetcher`] - fetches the page over HTTP(S)
/// - [`NullTitleFetcher`] - always returns `None` (tests, offline mode)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TitleFetcher: Send + Sync {
    /// Returns the page title for `url`, or `None` on any failure.
    async fn page_title(&self, url: &str) -> Option<String>;
}

/// Fetches page titles with a bounded-timeout HTTP client.
pub struct HttpTitleFetcher {
    client: reqwest::Client,
}

impl HttpTitleFetcher {
    /// Creates a fetcher whose requests abort after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("shortlink-bot/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();

        Self { client }
    }
}

#[async_trait]
impl TitleFetcher for HttpTitleFetcher {
    async fn page_title(&self, url: &str) -> Option<String> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("Title fetch failed for {url}: {e}");
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::debug!("Title fetch for {url} returned {}", response.status());
            return None;
        }

        let html = response.text().await.ok()?;
        extract_title(&html)
    }
}

/// No-op fetcher for tests and deployments without outbound access.
pub struct NullTitleFetcher;

#[async_trait]
impl TitleFetcher for NullTitleFetcher {
    async fn page_title(&self, _url: &str) -> Option<String> {
        None
    }
}

/// Extracts the first non-empty `<title>` text from an HTML document.
fn extract_title(html: &str) -> Option<String> {
    let captures = TITLE_REGEX.captures(html)?;
    let title = captures.get(1)?.as_str().trim();

    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}
