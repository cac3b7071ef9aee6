//! PostgreSQL implementation of token repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::ApiToken;
use crate::domain::repositories::TokenRepository;
use crate::error::AppError;

/// PostgreSQL repository for API token storage and validation.
pub struct PgTokenRepository {
    pool: Arc<PgPool>,
}

impl PgTokenRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TokenRepository for PgTokenRepository {
    async fn insert(
        &self,
        user_id: i64,
        token_hash: &str,
        label: &str,
    ) -> Result<ApiToken, AppError> {
        let token = sqlx::query_as::<_, ApiToken>(
            r#"
            INSERT INTO api_tokens (user_id, token_hash, label)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, label, created_at, last_used_at, revoked
            "#,
        )
        .bind(user_id)
        .bind(token_hash)
        .bind(label)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(token)
    }

    async fn find_valid(&self, token_hash: &str) -> Result<Option<ApiToken>, AppError> {
        let token = sqlx::query_as::<_, ApiToken>(
            r#"
            SELECT id, user_id, label, created_at, last_used_at, revoked
            FROM api_tokens
            WHERE token_hash = $1 AND revoked = FALSE
            "#,
        )
        .bind(token_hash)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(token)
    }

    async fn touch_last_used(&self, token_hash: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE api_tokens SET last_used_at = now() WHERE token_hash = $1")
            .bind(token_hash)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn revoke_by_label(&self, label: &str) -> Result<u64, AppError> {
        let result =
            sqlx::query("UPDATE api_tokens SET revoked = TRUE WHERE label = $1 AND revoked = FALSE")
                .bind(label)
                .execute(self.pool.as_ref())
                .await?;

        Ok(result.rows_affected())
    }

    async fn list(&self) -> Result<Vec<ApiToken>, AppError> {
        let tokens = sqlx::query_as::<_, ApiToken>(
            r#"
            SELECT id, user_id, label, created_at, last_used_at, revoked
            FROM api_tokens
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(tokens)
    }
}
