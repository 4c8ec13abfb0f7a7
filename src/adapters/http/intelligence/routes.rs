//! Axum router configuration for intelligence endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{analyze, build_payload, list_dimensions, IntelligenceAppState};

/// Create the intelligence API router.
///
/// # Routes
///
/// - `POST /analyze` - Run every registered analysis over an employee snapshot
/// - `POST /payload` - Same run, packaged for narrative generation
/// - `GET /dimensions` - List registered dimension names
///
/// Suitable for mounting at `/api/intelligence`.
pub fn intelligence_router() -> Router<IntelligenceAppState> {
    Router::new()
        .route("/analyze", post(analyze))
        .route("/payload", post(build_payload))
        .route("/dimensions", get(list_dimensions))
}
