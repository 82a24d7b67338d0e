//! Keepalive HTTP endpoint.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde_json::json;

/// Create the keepalive router.
///
/// Always answers 200 so the hosting environment considers the process
/// alive; carries no state from the core.
pub fn keepalive_router() -> Router {
    Router::new()
        .route("/", get(alive))
        .route("/health", get(health_check))
}

/// Root keepalive ping.
async fn alive() -> &'static str {
    "Bot is alive!"
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
