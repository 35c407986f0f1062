//! Landing page and health check

use std::sync::Arc;

use axum::response::Html;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;
use crate::views;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// GET /
async fn index() -> Html<String> {
    Html(views::index())
}

/// GET /health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Landing and health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
}
