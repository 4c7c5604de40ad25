//! # System Handlers
//!
//! Unauthenticated endpoints that never touch the upstream API.

use axum::{extract::State, http::Uri, response::Html, Json};
use lib_core::dto::{HealthResponse, VersionResponse, APP_VERSION};
use lib_core::{AppError, Config};
use std::sync::Arc;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// **Route**: `GET /`
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// **Route**: `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// **Route**: `GET /version`
pub async fn version(State(config): State<Arc<Config>>) -> Json<VersionResponse> {
    Json(VersionResponse {
        app_version: APP_VERSION.to_string(),
        coingecko_api: config
            .coingecko_api_base
            .clone()
            .unwrap_or_else(|| "not set".to_string()),
    })
}

/// Fallback for unmatched routes.
pub async fn not_found(uri: Uri) -> AppError {
    tracing::debug!("[404 HANDLER] No route for {}", uri.path());
    AppError::NotFound("Not Found".to_string())
}
