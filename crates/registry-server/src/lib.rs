//! Component registry HTTP server library

#![forbid(unsafe_code)]

pub mod cors;
pub mod handlers;
pub mod routes;
pub mod state;

pub use state::AppState;

use axum::Router;
use registry_core::context_error::Result;
use registry_core::{Config, Manifest};
use std::sync::Arc;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;

/// Build the API router with all routes
///
/// # Errors
///
/// Returns an error if the manifest fails validation or the application
/// state validation fails.
pub fn build_router(config: Config, manifest: Manifest) -> Result<Router> {
    let request_timeout = Duration::from_secs(config.api.request_timeout);
    let state = Arc::new(AppState::new(config, manifest)?);

    // Validate the application state
    state.validate()?;

    // Build the complete router with all routes
    let app = routes::build_router()
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(state);

    Ok(app)
}
