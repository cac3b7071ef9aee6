#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use shortlink::application::services::{AuthService, LinkService, hash_token};
use shortlink::infrastructure::http::NullTitleFetcher;
use shortlink::infrastructure::persistence::{
    PgLinkRepository, PgTokenRepository, PgUserRepository,
};
use shortlink::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub const TEST_SIGNING_SECRET: &str = "test-signing-secret";
pub const TEST_BASE_URL: &str = "http://sho.rt";
pub const TEST_CODE_LENGTH: usize = 7;

pub fn create_test_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);

    let link_repo = Arc::new(PgLinkRepository::new(pool.clone()));
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let token_repo = Arc::new(PgTokenRepository::new(pool.clone()));

    let link_service = Arc::new(LinkService::new(
        link_repo,
        Arc::new(NullTitleFetcher),
        TEST_CODE_LENGTH,
    ));
    let auth_service = Arc::new(AuthService::new(
        token_repo,
        user_repo,
        TEST_SIGNING_SECRET.to_string(),
    ));

    AppState {
        link_service,
        auth_service,
        base_url: TEST_BASE_URL.to_string(),
    }
}

pub async fn create_test_user(pool: &PgPool, email: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO users (email, name) VALUES ($1, 'Test User') RETURNING id")
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn issue_test_token(pool: &PgPool, user_id: i64, raw_token: &str) {
    let token_hash = hash_token(TEST_SIGNING_SECRET, raw_token);

    sqlx::query("INSERT INTO api_tokens (user_id, token_hash, label) VALUES ($1, $2, 'test')")
        .bind(user_id)
        .bind(&token_hash)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_test_link(pool: &PgPool, code: &str, url: &str) {
    sqlx::query("INSERT INTO short_links (short_code, original_url, title) VALUES ($1, $2, $2)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_owned_link_at(
    pool: &PgPool,
    code: &str,
    url: &str,
    user_id: i64,
    created_at: DateTime<Utc>,
) {
    sqlx::query(
        "INSERT INTO short_links (short_code, original_url, title, user_id, created_at)
         VALUES ($1, $2, $2, $3, $4)",
    )
    .bind(code)
    .bind(url)
    .bind(user_id)
    .bind(created_at)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn create_owned_link(pool: &PgPool, code: &str, url: &str, user_id: i64) {
    create_owned_link_at(pool, code, url, user_id, Utc::now()).await;
}

pub async fn create_expired_link(pool: &PgPool, code: &str, url: &str) {
    sqlx::query(
        "INSERT INTO short_links (short_code, original_url, title, expires_at)
         VALUES ($1, $2, $2, $3)",
    )
    .bind(code)
    .bind(url)
    .bind(Utc::now() - Duration::hours(1))
    .execute(pool)
    .await
    .unwrap();
}

pub async fn create_inactive_link(pool: &PgPool, code: &str, url: &str) {
    sqlx::query(
        "INSERT INTO short_links (short_code, original_url, title, is_active)
         VALUES ($1, $2, $2, FALSE)",
    )
    .bind(code)
    .bind(url)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn click_count(pool: &PgPool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT click_count FROM short_links WHERE short_code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn link_owner(pool: &PgPool, code: &str) -> Option<i64> {
    sqlx::query_scalar("SELECT user_id FROM short_links WHERE short_code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}
