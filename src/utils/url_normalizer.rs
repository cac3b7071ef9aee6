//! URL normalization and sanitization utilities.
//!
//! Ensures consistent URL representation before storage: a missing scheme
//! defaults to HTTPS, hostnames are lowercased, fragments and default ports
//! are removed.

use url::Url;

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("Failed to normalize URL: {0}")]
    NormalizationFailed(String),
}

/// Normalizes a URL to a canonical form.
///
/// # Normalization Rules
///
/// 1. **Whitespace**: Leading and trailing whitespace is trimmed
/// 2. **Scheme defaulting**: `example.com` becomes `https://example.com`
/// 3. **Protocol**: Only HTTP and HTTPS are allowed
/// 4. **Hostname**: Converted to lowercase
/// 5. **Default ports**: Removed (80 for HTTP, 443 for HTTPS)
/// 6. **Fragments**: Removed (e.g., `#section`)
/// 7. **Bare roots**: The canonical trailing slash is dropped, so
///    `https://example.com/` stores as `https://example.com`
/// 8. **Query parameters and path**: Preserved as-is
///
/// # Security
///
/// Rejects potentially dangerous protocols like `javascript:`, `data:`,
/// `file:`, etc.
///
/// # Errors
///
/// Returns [`UrlNormalizationError::Empty`] for blank input.
/// Returns [`UrlNormalizationError::InvalidFormat`] for malformed URLs.
/// Returns [`UrlNormalizationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlNormalizationError::Empty);
    }

    let mut url = match Url::parse(trimmed) {
        Ok(url) => url,
        // Scheme-less input like "example.com/path" parses as relative.
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse(&format!("https://{trimmed}"))
                .map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?
        }
        Err(e) => return Err(UrlNormalizationError::InvalidFormat(e.to_string())),
    };

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    if let Some(host) = url.host_str() {
        let host_lowercase = host.to_ascii_lowercase();
        url.set_host(Some(&host_lowercase)).map_err(|_| {
            UrlNormalizationError::NormalizationFailed("Failed to set normalized host".to_string())
        })?;
    } else {
        return Err(UrlNormalizationError::InvalidFormat(
            "URL has no host".to_string(),
        ));
    }

    url.set_fragment(None);

    let is_default_port = matches!(
        (url.scheme(), url.port()),
        ("http", Some(80)) | ("https", Some(443))
    );
    if is_default_port {
        url.set_port(None).map_err(|_| {
            UrlNormalizationError::NormalizationFailed("Failed to remove default port".to_string())
        })?;
    }

    let mut normalized = url.to_string();
    if url.path() == "/" && url.query().is_none() && normalized.ends_with('/') {
        normalized.pop();
    }

    Ok(normalized)
}
