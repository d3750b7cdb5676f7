//! API route definitions

use crate::{handlers, state::AppState};
use axum::{
    Router,
    routing::get,
};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;

/// Build the component resolver routes
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/r/:component",
            get(handlers::registry::resolve_component)
                .options(handlers::registry::preflight),
        )
        .route("/api", get(api_info))
        .route("/", get(root_endpoint))
        .layer(CompressionLayer::new())
}

/// Build health check routes
pub fn health_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
}

/// Combine all routes into a single router
pub fn build_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(api_routes())
        .merge(health_routes())
        .fallback(not_found_handler)
}

/// Handle 404 Not Found errors for unknown routes
async fn not_found_handler() -> (axum::http::StatusCode, axum::Json<serde_json::Value>) {
    (
        axum::http::StatusCode::NOT_FOUND,
        axum::Json(serde_json::json!({
            "error": "Not Found",
            "message": "The requested endpoint does not exist"
        })),
    )
}

/// Root endpoint for basic connectivity
async fn root_endpoint() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "service": "Component Registry",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "ok"
    }))
}

/// API info endpoint
async fn api_info() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "api": "Component Registry",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "resolve": "/api/r/{component}",
            "health": "/health"
        }
    }))
}
