mod common;

use axum::http::StatusCode;
use axum::{Router, middleware, routing::get};
use axum_test::TestServer;
use chrono::{Duration, Utc};
use sqlx::PgPool;
use shortlink::api::handlers::list_links_handler;
use shortlink::api::middleware::auth;

fn links_app(state: shortlink::AppState) -> TestServer {
    let app = Router::new()
        .route("/api/links", get(list_links_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .with_state(state);

    TestServer::new(app).unwrap()
}

async fn seed_links(pool: &PgPool, user_id: i64, count: usize) {
    let base = Utc::now();
    for i in 0..count {
        common::create_owned_link_at(
            pool,
            &format!("code{i:03}"),
            &format!("https://example.com/{i}"),
            user_id,
            base - Duration::seconds(i as i64),
        )
        .await;
    }
}

#[sqlx::test]
async fn test_list_requires_authentication(pool: PgPool) {
    let server = links_app(common::create_test_state(pool));

    let response = server.get("/api/links").await;

    response.assert_status(StatusCode::UNAUTHORIZED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "unauthorized");
}

#[sqlx::test]
async fn test_list_rejects_invalid_token(pool: PgPool) {
    let server = links_app(common::create_test_state(pool));

    let response = server
        .get("/api/links")
        .authorization_bearer("bogus-token")
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[sqlx::test]
async fn test_list_paginates_fifteen_links(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "lister@example.com").await;
    common::issue_test_token(&pool, user_id, "lister-token").await;
    seed_links(&pool, user_id, 15).await;

    let server = links_app(common::create_test_state(pool));

    let page1 = server
        .get("/api/links")
        .add_query_param("page", "1")
        .add_query_param("limit", "10")
        .authorization_bearer("lister-token")
        .await;
    page1.assert_status_ok();

    let json1 = page1.json::<serde_json::Value>();
    assert_eq!(json1["urls"].as_array().unwrap().len(), 10);
    assert_eq!(json1["total"], 15);
    assert_eq!(json1["page"], 1);
    assert_eq!(json1["limit"], 10);

    let page2 = server
        .get("/api/links")
        .add_query_param("page", "2")
        .add_query_param("limit", "10")
        .authorization_bearer("lister-token")
        .await;
    page2.assert_status_ok();

    let json2 = page2.json::<serde_json::Value>();
    assert_eq!(json2["urls"].as_array().unwrap().len(), 5);
    assert_eq!(json2["total"], 15);
    assert_eq!(json2["page"], 2);
}

#[sqlx::test]
async fn test_list_defaults_to_first_page_of_ten(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "defaults@example.com").await;
    common::issue_test_token(&pool, user_id, "defaults-token").await;
    seed_links(&pool, user_id, 12).await;

    let server = links_app(common::create_test_state(pool));

    let response = server
        .get("/api/links")
        .authorization_bearer("defaults-token")
        .await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["urls"].as_array().unwrap().len(), 10);
    assert_eq!(json["page"], 1);
    assert_eq!(json["limit"], 10);
}

#[sqlx::test]
async fn test_list_orders_newest_first(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "ordered@example.com").await;
    common::issue_test_token(&pool, user_id, "ordered-token").await;
    seed_links(&pool, user_id, 3).await;

    let server = links_app(common::create_test_state(pool));

    let response = server
        .get("/api/links")
        .authorization_bearer("ordered-token")
        .await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let codes: Vec<&str> = json["urls"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["short_code"].as_str().unwrap())
        .collect();

    // seed_links creates code000 newest and code002 oldest.
    assert_eq!(codes, vec!["code000", "code001", "code002"]);
}

#[sqlx::test]
async fn test_list_excludes_other_users_links(pool: PgPool) {
    let owner = common::create_test_user(&pool, "owner@example.com").await;
    let other = common::create_test_user(&pool, "other@example.com").await;
    common::issue_test_token(&pool, owner, "owner-token").await;
    seed_links(&pool, owner, 2).await;
    common::create_owned_link(&pool, "foreign1", "https://example.com/x", other).await;
    common::create_test_link(&pool, "orphan01", "https://example.com/y").await;

    let server = links_app(common::create_test_state(pool));

    let response = server
        .get("/api/links")
        .authorization_bearer("owner-token")
        .await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["total"], 2);
    assert_eq!(json["urls"].as_array().unwrap().len(), 2);
}

#[sqlx::test]
async fn test_list_rejects_out_of_range_pagination(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "bounds@example.com").await;
    common::issue_test_token(&pool, user_id, "bounds-token").await;

    let server = links_app(common::create_test_state(pool));

    let zero_page = server
        .get("/api/links")
        .add_query_param("page", "0")
        .authorization_bearer("bounds-token")
        .await;
    zero_page.assert_status_bad_request();

    let oversized_limit = server
        .get("/api/links")
        .add_query_param("limit", "101")
        .authorization_bearer("bounds-token")
        .await;
    oversized_limit.assert_status_bad_request();
}
