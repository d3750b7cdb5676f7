//! CORS headers for the resolver surface
//!
//! The registry is consumed by exactly one external origin. Every resolver
//! response, success or error, carries the same fixed header set.

use axum::http::{HeaderMap, HeaderValue, header};

/// Fallback origin when the configured one is not a valid header value
const DEFAULT_ORIGIN: &str = "https://v0.dev";

/// Insert the fixed CORS header set into a response header map
pub fn apply_cors_headers(headers: &mut HeaderMap, allowed_origin: &str) {
    let origin = HeaderValue::from_str(allowed_origin)
        .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_ORIGIN));

    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
}
