//! Frontend page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the shortening form page.
///
/// Renders `templates/index.html`: the URL submit form, which calls
/// `POST /api/shorten` and displays the resulting short link.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
struct IndexTemplate {}

/// Renders the frontend page.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> impl IntoResponse {
    IndexTemplate {}
}
