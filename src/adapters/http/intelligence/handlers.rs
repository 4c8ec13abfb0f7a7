//! HTTP handlers for intelligence endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use tokio::task;

use crate::application::{BuildSummaryPayloadHandler, RunIntelligenceHandler};
use crate::domain::intelligence::{AnalysisRegistry, PackagingError};

use super::dto::{AnalyzeRequest, AnalyzeResponse, DimensionsResponse, ErrorResponse, HealthResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

/// Shared state: the registry composed at startup.
#[derive(Debug, Clone)]
pub struct IntelligenceAppState {
    pub registry: Arc<AnalysisRegistry>,
}

impl IntelligenceAppState {
    pub fn new(registry: Arc<AnalysisRegistry>) -> Self {
        Self { registry }
    }

    fn run_handler(&self) -> RunIntelligenceHandler {
        RunIntelligenceHandler::new(Arc::clone(&self.registry))
    }

    fn payload_handler(&self) -> BuildSummaryPayloadHandler {
        BuildSummaryPayloadHandler::new(Arc::clone(&self.registry))
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/intelligence/analyze - Run every registered analysis
pub async fn analyze(
    State(state): State<IntelligenceAppState>,
    body: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, IntelligenceApiError> {
    let Json(req) = body?;
    let cmd = req.into_command(Utc::now().date_naive());
    let handler = state.run_handler();

    let outcome = task::spawn_blocking(move || handler.handle(cmd))
        .await
        .map_err(|e| IntelligenceApiError::Internal(format!("analysis task failed: {}", e)))?;

    Ok(Json(AnalyzeResponse::from_outcome(outcome)?))
}

/// POST /api/intelligence/payload - Package a run for narrative generation
pub async fn build_payload(
    State(state): State<IntelligenceAppState>,
    body: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Response, IntelligenceApiError> {
    let Json(req) = body?;
    let cmd = req.into_command(Utc::now().date_naive());
    let handler = state.payload_handler();

    let payload = task::spawn_blocking(move || handler.handle(cmd))
        .await
        .map_err(|e| IntelligenceApiError::Internal(format!("payload task failed: {}", e)))??;

    Ok((StatusCode::OK, Json(payload)).into_response())
}

/// GET /api/intelligence/dimensions - List registered dimensions
pub async fn list_dimensions(State(state): State<IntelligenceAppState>) -> Json<DimensionsResponse> {
    Json(DimensionsResponse {
        dimensions: state.run_handler().list_dimensions(),
    })
}

/// GET /health - Liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// API error type for intelligence endpoints.
///
/// Analysis failures are statuses inside the report, so only malformed
/// bodies, packaging and task failures reach this type.
#[derive(Debug)]
pub enum IntelligenceApiError {
    BadRequest(String),
    Internal(String),
}

impl From<JsonRejection> for IntelligenceApiError {
    fn from(rejection: JsonRejection) -> Self {
        IntelligenceApiError::BadRequest(rejection.body_text())
    }
}

impl From<PackagingError> for IntelligenceApiError {
    fn from(err: PackagingError) -> Self {
        IntelligenceApiError::Internal(err.to_string())
    }
}

impl IntoResponse for IntelligenceApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            IntelligenceApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            IntelligenceApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal("An internal error occurred"),
                )
            }
        };

        (status, Json(error)).into_response()
    }
}
