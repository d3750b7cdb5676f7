//! Health and readiness endpoints

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;
use std::sync::Arc;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status string
    pub status: String,
    /// Service name
    pub service: String,
    /// Service version
    pub version: String,
    /// Number of registry items loaded
    pub components: usize,
}

/// Basic liveness check
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: "registry-server".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        components: state.manifest.items.len(),
    })
}

/// Readiness check: verifies the project root is still reachable
pub async fn readiness_check(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HealthResponse>, StatusCode> {
    if !state.project_root.exists() {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }

    Ok(Json(HealthResponse {
        status: "ready".to_string(),
        service: "registry-server".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        components: state.manifest.items.len(),
    }))
}
