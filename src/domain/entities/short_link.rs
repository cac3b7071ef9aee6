//! Short link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL with its metadata and access counters.
///
/// `user_id` is `None` for anonymously created links. Links are never
/// physically deleted; a link stops resolving when `is_active` is cleared or
/// `expires_at` passes.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ShortLink {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub title: String,
    pub user_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub click_count: i64,
    pub last_accessed_at: Option<DateTime<Utc>>,
}

impl ShortLink {
    /// Returns true if the link has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|e| Utc::now() >= e)
    }

    /// Returns true if the link currently resolves.
    ///
    /// A link resolves only while it is active and not expired.
    pub fn is_resolvable(&self) -> bool {
        self.is_active && !self.is_expired()
    }
}

/// Input data for creating a new short link.
#[derive(Debug, Clone)]
pub struct NewShortLink {
    pub short_code: String,
    pub original_url: String,
    pub title: String,
    pub user_id: Option<i64>,
    pub expires_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_link() -> ShortLink {
        ShortLink {
            id: 1,
            short_code: "abc1234".to_string(),
            original_url: "https://example.com".to_string(),
            title: "Example".to_string(),
            user_id: None,
            created_at: Utc::now(),
            expires_at: None,
            is_active: true,
            click_count: 0,
            last_accessed_at: None,
        }
    }

    #[test]
    fn test_link_without_expiry_is_resolvable() {
        let link = sample_link();
        assert!(!link.is_expired());
        assert!(link.is_resolvable());
    }

    #[test]
    fn test_link_with_future_expiry_is_resolvable() {
        let link = ShortLink {
            expires_at: Some(Utc::now() + Duration::hours(1)),
            ..sample_link()
        };
        assert!(!link.is_expired());
        assert!(link.is_resolvable());
    }

    #[test]
    fn test_expired_link_is_not_resolvable() {
        let link = ShortLink {
            expires_at: Some(Utc::now() - Duration::seconds(1)),
            ..sample_link()
        };
        assert!(link.is_expired());
        assert!(!link.is_resolvable());
    }

    #[test]
    fn test_inactive_link_is_not_resolvable() {
        let link = ShortLink {
            is_active: false,
            ..sample_link()
        };
        assert!(!link.is_expired());
        assert!(!link.is_resolvable());
    }

    #[test]
    fn test_new_link_carries_owner() {
        let new_link = NewShortLink {
            short_code: "xyz7890".to_string(),
            original_url: "https://rust-lang.org".to_string(),
            title: "Rust".to_string(),
            user_id: Some(42),
            expires_at: None,
        };

        assert_eq!(new_link.short_code, "xyz7890");
        assert_eq!(new_link.user_id, Some(42));
    }
}
