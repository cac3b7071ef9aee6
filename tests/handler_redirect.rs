mod common;

use axum::http::StatusCode;
use axum::{Router, routing::get};
use axum_test::TestServer;
use sqlx::PgPool;
use shortlink::api::handlers::redirect_handler;

fn redirect_app(state: shortlink::AppState) -> TestServer {
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_redirect_found(pool: PgPool) {
    common::create_test_link(&pool, "abc1234", "https://example.com/landing").await;
    let server = redirect_app(common::create_test_state(pool));

    let response = server.get("/abc1234").await;

    response.assert_status(StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.header("location"), "https://example.com/landing");
}

#[sqlx::test]
async fn test_redirect_unknown_code_is_404_json(pool: PgPool) {
    let server = redirect_app(common::create_test_state(pool));

    let response = server.get("/missing1").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["code"], "missing1");
}

#[sqlx::test]
async fn test_redirect_expired_link_is_404(pool: PgPool) {
    common::create_expired_link(&pool, "expired1", "https://example.com").await;
    let server = redirect_app(common::create_test_state(pool));

    let response = server.get("/expired1").await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_redirect_inactive_link_is_404(pool: PgPool) {
    common::create_inactive_link(&pool, "disabled", "https://example.com").await;
    let server = redirect_app(common::create_test_state(pool));

    let response = server.get("/disabled").await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_redirect_counts_clicks(pool: PgPool) {
    common::create_test_link(&pool, "counted1", "https://example.com").await;
    let server = redirect_app(common::create_test_state(pool.clone()));

    server.get("/counted1").await;
    server.get("/counted1").await;

    assert_eq!(common::click_count(&pool, "counted1").await, 2);

    let last_accessed: Option<chrono::DateTime<chrono::Utc>> =
        sqlx::query_scalar("SELECT last_accessed_at FROM short_links WHERE short_code = $1")
            .bind("counted1")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert!(last_accessed.is_some());
}

#[sqlx::test]
async fn test_redirect_miss_does_not_count(pool: PgPool) {
    common::create_expired_link(&pool, "expired2", "https://example.com").await;
    let server = redirect_app(common::create_test_state(pool.clone()));

    server.get("/expired2").await;

    assert_eq!(common::click_count(&pool, "expired2").await, 0);
}
