//! API route handlers
//!
//! - `count`: word counting over inline text, URLs and uploads
//! - `health`: health checks, readiness, and metrics

pub mod count;
pub mod health;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// # Response
///
/// ```json
/// {
///   "name": "Wordstat Server",
///   "version": "0.1.0",
///   "endpoints": ["..."]
/// }
/// ```
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "Wordstat Server",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "POST /count/text",
            "POST /count/file",
            "GET /health",
            "GET /ready",
            "GET /metrics"
        ]
    })))
}

/// 404 Not Found handler
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
