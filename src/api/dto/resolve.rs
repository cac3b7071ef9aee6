//! DTOs for the resolve endpoint.

use serde::Serialize;

use crate::application::services::Resolution;

/// Structured resolve result.
///
/// A miss is not an error: `found` is false and `original_url` is empty so
/// the caller decides the HTTP status.
#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub found: bool,
    pub original_url: String,
}

impl From<Resolution> for ResolveResponse {
    fn from(resolution: Resolution) -> Self {
        match resolution {
            Resolution::Found { original_url } => Self {
                found: true,
                original_url,
            },
            Resolution::NotFound => Self {
                found: false,
                original_url: String::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_carries_url() {
        let response = ResolveResponse::from(Resolution::Found {
            original_url: "https://example.com".to_string(),
        });
        assert!(response.found);
        assert_eq!(response.original_url, "https://example.com");
    }

    #[test]
    fn test_not_found_has_empty_url() {
        let response = ResolveResponse::from(Resolution::NotFound);
        assert!(!response.found);
        assert!(response.original_url.is_empty());
    }
}
