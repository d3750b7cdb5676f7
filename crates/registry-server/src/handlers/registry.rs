//! Component resolution endpoints

use crate::{cors::apply_cors_headers, state::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Error response structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Strip an optional `.json` suffix from the requested component name
fn normalize_component_name(raw: &str) -> &str {
    raw.strip_suffix(".json").unwrap_or(raw)
}

/// Build an error response carrying the fixed CORS header set
fn error_response(status: StatusCode, message: &str, state: &AppState) -> Response {
    let mut response = (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response();

    apply_cors_headers(response.headers_mut(), &state.config.api.allowed_origin);
    response
}

/// Resolve a registry component into its files and metadata
///
/// Looks the requested name up in the manifest, reads every referenced
/// source file from disk, and returns the assembled payload. Outcomes are
/// always one of three fixed JSON shapes:
///
/// * `200` with the resolved component
/// * `404 {"error": "Component not found"}` on a lookup miss
/// * `500 {"error": "Internal server error"}` when any file read fails;
///   the diagnostic is logged server-side and never leaked to the caller
pub async fn resolve_component(
    State(state): State<Arc<AppState>>,
    Path(component): Path<String>,
) -> Response {
    let name = normalize_component_name(&component);

    let Some(item) = state.manifest.find(name) else {
        warn!(component = name, "Component not found in manifest");
        return error_response(StatusCode::NOT_FOUND, "Component not found", &state);
    };

    let source = state.source_url(name);

    match registry_core::resolve(&state.project_root, &state.manifest, item, source).await {
        Ok(resolved) => {
            info!(
                component = name,
                files = resolved.files.len(),
                "Resolved component"
            );

            let mut response = (StatusCode::OK, Json(resolved)).into_response();
            apply_cors_headers(response.headers_mut(), &state.config.api.allowed_origin);
            response
        }
        Err(e) => {
            error!(component = name, error = %e, "Failed to resolve component");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
                &state,
            )
        }
    }
}

/// Answer CORS preflight requests
///
/// Never touches the manifest or the filesystem; returns an empty body with
/// the same CORS headers regardless of the requested component.
pub async fn preflight(State(state): State<Arc<AppState>>) -> Response {
    let mut response = StatusCode::OK.into_response();
    apply_cors_headers(response.headers_mut(), &state.config.api.allowed_origin);
    response
}
