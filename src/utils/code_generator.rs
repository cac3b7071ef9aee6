//! Short code generation and validation utilities.
//!
//! Provides random code generation from a fixed alphabet and validation for
//! user-provided custom slugs.

use crate::error::AppError;
use rand::Rng;
use serde_json::json;

/// Alphabet used for generated short codes.
///
/// Lowercase letters and digits keep codes case-insensitive-friendly and
/// unambiguous in URLs.
pub const CODE_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Custom slugs that cannot be used as short codes.
///
/// These are reserved for system endpoints to prevent routing conflicts with
/// `GET /{code}`.
const RESERVED_SLUGS: &[&str] = &["api", "health", "static", "admin", "login", "stats"];

/// Generates a random short code of the given length.
///
/// Characters are drawn uniformly from [`CODE_ALPHABET`]. With the default
/// 7-character length the code space holds 36^7 (~78 billion) values, so a
/// collision on insert is an anomaly rather than expected behavior.
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

/// Validates a user-provided custom slug.
///
/// # Rules
///
/// - Length: 4-32 characters
/// - Allowed characters: lowercase letters, digits, hyphens
/// - Cannot start or end with a hyphen
/// - Cannot be a reserved system path
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_slug(slug: &str) -> Result<(), AppError> {
    if slug.len() < 4 || slug.len() > 32 {
        return Err(AppError::bad_request(
            "Custom slug must be 4-32 characters",
            json!({ "provided_length": slug.len() }),
        ));
    }

    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(AppError::bad_request(
            "Custom slug can only contain lowercase letters, digits, and hyphens",
            json!({ "slug": slug }),
        ));
    }

    if slug.starts_with('-') || slug.ends_with('-') {
        return Err(AppError::bad_request(
            "Custom slug cannot start or end with a hyphen",
            json!({ "slug": slug }),
        ));
    }

    if RESERVED_SLUGS.contains(&slug) {
        return Err(AppError::bad_request(
            "This slug is reserved",
            json!({ "slug": slug }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_requested_length() {
        assert_eq!(generate_code(7).len(), 7);
        assert_eq!(generate_code(12).len(), 12);
    }

    #[test]
    fn test_generate_code_uses_alphabet() {
        let code = generate_code(64);
        assert!(
            code.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        );
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let mut codes = HashSet::new();

        for _ in 0..1000 {
            codes.insert(generate_code(7));
        }

        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_validate_minimum_length() {
        assert!(validate_custom_slug("abcd").is_ok());
    }

    #[test]
    fn test_validate_maximum_length() {
        assert!(validate_custom_slug(&"a".repeat(32)).is_ok());
    }

    #[test]
    fn test_validate_with_hyphens_in_middle() {
        assert!(validate_custom_slug("my-cool-link").is_ok());
    }

    #[test]
    fn test_validate_only_digits() {
        assert!(validate_custom_slug("2025").is_ok());
    }

    #[test]
    fn test_validate_too_short() {
        let err = validate_custom_slug("abc").unwrap_err();
        assert!(err.to_string().contains("4-32 characters"));
    }

    #[test]
    fn test_validate_too_long() {
        assert!(validate_custom_slug(&"a".repeat(33)).is_err());
    }

    #[test]
    fn test_validate_uppercase_letters() {
        let err = validate_custom_slug("MySlug").unwrap_err();
        assert!(err.to_string().contains("lowercase"));
    }

    #[test]
    fn test_validate_special_characters() {
        assert!(validate_custom_slug("my_slug@123").is_err());
    }

    #[test]
    fn test_validate_starts_with_hyphen() {
        let err = validate_custom_slug("-myslug").unwrap_err();
        assert!(err.to_string().contains("cannot start or end"));
    }

    #[test]
    fn test_validate_ends_with_hyphen() {
        assert!(validate_custom_slug("myslug-").is_err());
    }

    #[test]
    fn test_validate_spaces_not_allowed() {
        assert!(validate_custom_slug("my slug").is_err());
    }

    #[test]
    fn test_validate_empty_string() {
        assert!(validate_custom_slug("").is_err());
    }

    #[test]
    fn test_validate_all_reserved_slugs() {
        for &reserved in RESERVED_SLUGS {
            assert!(
                validate_custom_slug(reserved).is_err(),
                "Reserved slug '{}' should be invalid",
                reserved
            );
        }
    }
}
