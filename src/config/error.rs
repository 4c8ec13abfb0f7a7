//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid bind address '{0}'")]
    InvalidAddress(String),

    #[error("Size threshold '{0}' must be at least 1")]
    ZeroSize(&'static str),

    #[error("severe_z ({severe}) must be at least moderate_z ({moderate})")]
    ZScoreOrder { moderate: f64, severe: f64 },

    #[error("z-score threshold '{0}' must be positive")]
    NonPositiveZScore(&'static str),

    #[error("p-value threshold '{0}' must lie strictly between 0 and 1")]
    PValueOutOfRange(&'static str),

    #[error("red_p_value ({red}) must not exceed yellow_p_value ({yellow})")]
    PValueOrder { yellow: f64, red: f64 },

    #[error("medium_effect_size must lie in (0, 1]")]
    EffectSizeOutOfRange,
}
