/// Liveness route
use super::response;
use axum::response::Response;

/// GET /health
/// Answers without touching the database
pub async fn health() -> Response {
    response::message("OpenMusic is running")
}
