//! Data transfer objects for intelligence HTTP endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::{IntelligenceOutcome, RunIntelligenceCommand};
use crate::domain::employee::Employee;
use crate::domain::intelligence::{AnalysisReport, PackagingError, ReportSummary};

// ═══════════════════════════════════════════════════════════════════════════
// Request DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Employee snapshot to analyze.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub employees: Vec<Employee>,
    /// Date tenure buckets are derived against for employees that carry a
    /// hire date but no bucket. Defaults to today (UTC).
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

impl AnalyzeRequest {
    /// Converts to the application command, deriving missing tenure buckets.
    pub fn into_command(self, today: NaiveDate) -> RunIntelligenceCommand {
        let as_of = self.as_of.unwrap_or(today);
        RunIntelligenceCommand {
            employees: self
                .employees
                .into_iter()
                .map(|employee| employee.with_tenure_as_of(as_of))
                .collect(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Response DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Full analysis output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub analyses: AnalysisReport,
    pub summary: ReportSummary,
    pub fingerprint: String,
}

impl AnalyzeResponse {
    pub fn from_outcome(outcome: IntelligenceOutcome) -> Result<Self, PackagingError> {
        let fingerprint = outcome.report.fingerprint()?;
        Ok(Self {
            analyses: outcome.report,
            summary: outcome.summary,
            fingerprint,
        })
    }
}

/// Registered dimension names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionsResponse {
    pub dimensions: Vec<String>,
}

/// Liveness probe body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}
