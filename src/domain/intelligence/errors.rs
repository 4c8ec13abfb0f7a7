//! Error types for the intelligence engine.

use thiserror::Error;

/// A computation failure inside one analysis function.
///
/// Never escapes `run_all_analyses`: it is converted into an `error`
/// status on the affected dimension only.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("Invalid baseline: {0}")]
    InvalidBaseline(String),

    #[error("Statistic '{statistic}' is not a finite number")]
    NonFiniteStatistic { statistic: &'static str },

    #[error("Malformed category data: {0}")]
    MalformedCategory(String),

    #[error("Analysis failed: {0}")]
    Failed(String),
}

impl AnalysisError {
    /// Creates a generic failure, for custom analysis functions.
    pub fn failed(message: impl Into<String>) -> Self {
        AnalysisError::Failed(message.into())
    }
}

/// Registry misconfiguration, raised while the registry is being composed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Analysis name cannot be empty")]
    EmptyName,

    #[error("Analysis name '{0}' must be lowercase snake_case")]
    InvalidName(String),

    #[error("Analysis '{0}' is already registered")]
    DuplicateName(String),
}

/// Failure while packaging a report for downstream consumers.
#[derive(Debug, Error)]
pub enum PackagingError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_error_displays_message() {
        let err = AnalysisError::failed("boom");
        assert_eq!(err.to_string(), "Analysis failed: boom");
    }

    #[test]
    fn registry_error_displays_name() {
        let err = RegistryError::DuplicateName("location".to_string());
        assert_eq!(err.to_string(), "Analysis 'location' is already registered");
    }
}
