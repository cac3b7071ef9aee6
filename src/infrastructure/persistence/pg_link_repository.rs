//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for short link storage and retrieval.
///
/// Uses runtime-bound prepared statements; entity rows map via
/// `sqlx::FromRow`.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        let link = sqlx::query_as::<_, ShortLink>(
            r#"
            INSERT INTO short_links (short_code, original_url, title, user_id, expires_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, short_code, original_url, title, user_id, created_at,
                      expires_at, is_active, click_count, last_accessed_at
            "#,
        )
        .bind(&new_link.short_code)
        .bind(&new_link.original_url)
        .bind(&new_link.title)
        .bind(new_link.user_id)
        .bind(new_link.expires_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        let link = sqlx::query_as::<_, ShortLink>(
            r#"
            SELECT id, short_code, original_url, title, user_id, created_at,
                   expires_at, is_active, click_count, last_accessed_at
            FROM short_links
            WHERE short_code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn find_active_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        let link = sqlx::query_as::<_, ShortLink>(
            r#"
            SELECT id, short_code, original_url, title, user_id, created_at,
                   expires_at, is_active, click_count, last_accessed_at
            FROM short_links
            WHERE short_code = $1 AND is_active = TRUE
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn exists(&self, code: &str) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM short_links WHERE short_code = $1)",
        )
        .bind(code)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn record_access(&self, id: i64) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE short_links
            SET click_count = click_count + 1, last_accessed_at = now()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn list_by_user(
        &self,
        user_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<ShortLink>, AppError> {
        let links = sqlx::query_as::<_, ShortLink>(
            r#"
            SELECT id, short_code, original_url, title, user_id, created_at,
                   expires_at, is_active, click_count, last_accessed_at
            FROM short_links
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(links)
    }

    async fn count_by_user(&self, user_id: i64) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM short_links WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
