//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SEO_CRITERIA` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use seo_criteria::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let engine = config.scoring.build_engine().expect("Invalid criteria tables");
//! println!("Max score: {}", engine.registry().max_score());
//! ```

mod error;
mod scoring;
mod telemetry;

pub use error::{ConfigError, ValidationError};
pub use scoring::ScoringConfig;
pub use telemetry::{LogFormat, TelemetryConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Scoring engine configuration (warning ratio, table checks)
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SEO_CRITERIA` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SEO_CRITERIA__SCORING__WARNING_RATIO=0.6` -> `scoring.warning_ratio = 0.6`
    /// - `SEO_CRITERIA__TELEMETRY__FORMAT=json` -> `telemetry.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SEO_CRITERIA")
                    .separator("__")
                    .try_parsing(true),
            )
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
        self.scoring.validate()?;
        self.telemetry.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("SEO_CRITERIA__SCORING__WARNING_RATIO");
        env::remove_var("SEO_CRITERIA__SCORING__STRICT_TABLES");
        env::remove_var("SEO_CRITERIA__TELEMETRY__LOG_LEVEL");
        env::remove_var("SEO_CRITERIA__TELEMETRY__FORMAT");
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.scoring.warning_ratio, 0.7);
        assert!(config.scoring.strict_tables);
        assert_eq!(config.telemetry.format, LogFormat::Compact);
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SEO_CRITERIA__SCORING__WARNING_RATIO", "0.6");
        env::set_var("SEO_CRITERIA__SCORING__STRICT_TABLES", "false");
        env::set_var("SEO_CRITERIA__TELEMETRY__FORMAT", "json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.scoring.warning_ratio, 0.6);
        assert!(!config.scoring.strict_tables);
        assert_eq!(config.telemetry.format, LogFormat::Json);
    }

    #[test]
    fn test_validate_rejects_bad_ratio() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SEO_CRITERIA__SCORING__WARNING_RATIO", "1.2");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidWarningRatio(1.2))
        );
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }
}
