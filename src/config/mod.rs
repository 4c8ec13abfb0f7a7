//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! (and optionally a YAML file) using the `config` and `dotenvy` crates. Configuration
//! is loaded with the `NINEBOX` prefix and nested values use `__` as separator.
//!
//! # Example
//!
//! ```no_run
//! use ninebox_intelligence::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod error;
mod intelligence;
mod server;

pub use error::{ConfigError, ValidationError};
pub use intelligence::IntelligenceConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;
use std::path::Path;

const ENV_PREFIX: &str = "NINEBOX";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Statistical thresholds for the intelligence engine
    #[serde(default)]
    pub intelligence: IntelligenceConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `NINEBOX` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `NINEBOX__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `NINEBOX__INTELLIGENCE__MIN_SAMPLE_SIZE=20` -> `intelligence.min_sample_size = 20`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration from a YAML file, with environment variables layered on top
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or malformed, or if values
    /// cannot be parsed into expected types.
    pub fn load_with_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).format(config::FileFormat::Yaml))
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.intelligence.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

fn environment() -> config::Environment {
    config::Environment::default()
        .prefix(ENV_PREFIX)
        .separator("__")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Tier;
    use std::env;
    use std::io::Write;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("NINEBOX__SERVER__PORT");
        env::remove_var("NINEBOX__SERVER__ENVIRONMENT");
        env::remove_var("NINEBOX__INTELLIGENCE__MIN_SAMPLE_SIZE");
        env::remove_var("NINEBOX__INTELLIGENCE__REFERENCE_TIER");
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.intelligence, IntelligenceConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("NINEBOX__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_intelligence_thresholds_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("NINEBOX__INTELLIGENCE__MIN_SAMPLE_SIZE", "25");
        env::set_var("NINEBOX__INTELLIGENCE__REFERENCE_TIER", "low");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.intelligence.min_sample_size, 25);
        assert_eq!(config.intelligence.reference_tier, Tier::Low);
    }

    #[test]
    fn test_load_with_yaml_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            "server:\n  port: 9090\nintelligence:\n  severe_z: 3.5\n  red_p_value: 0.005"
        )
        .unwrap();

        let config = AppConfig::load_with_file(file.path()).unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.intelligence.severe_z, 3.5);
        assert_eq!(config.intelligence.red_p_value, 0.005);
        assert_eq!(config.intelligence.moderate_z, 2.0);
    }

    #[test]
    fn test_environment_overrides_yaml_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "server:\n  port: 9090").unwrap();

        env::set_var("NINEBOX__SERVER__PORT", "7070");
        let result = AppConfig::load_with_file(file.path());
        clear_env();

        assert_eq!(result.unwrap().server.port, 7070);
    }

    #[test]
    fn test_missing_yaml_file_is_an_error() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let result = AppConfig::load_with_file("/nonexistent/ninebox.yaml");
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_validate_rejects_bad_thresholds() {
        let mut config = AppConfig::default();
        config.intelligence.red_p_value = 0.2;
        assert!(config.validate().is_err());
    }
}
