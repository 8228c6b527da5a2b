//! Scoring configuration

use serde::Deserialize;

use super::error::{ConfigError, ValidationError};
use crate::domain::criteria::DEFAULT_WARNING_RATIO;
use crate::domain::scoring::CriteriaEngine;

/// Scoring engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// Share of the weight awarded on a warning when a ternary criterion
    /// declares no warning score of its own
    #[serde(default = "default_warning_ratio")]
    pub warning_ratio: f64,

    /// Refuse to start when a criterion lacks its evaluation function or an
    /// improvement function is registered for the wrong criteria
    #[serde(default = "default_strict_tables")]
    pub strict_tables: bool,
}

impl ScoringConfig {
    /// Validate scoring configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.warning_ratio > 0.0 && self.warning_ratio < 1.0) {
            return Err(ValidationError::InvalidWarningRatio(self.warning_ratio));
        }
        Ok(())
    }

    /// Build the standard criteria engine with these settings
    pub fn build_engine(&self) -> Result<CriteriaEngine, ConfigError> {
        self.validate()?;
        Ok(CriteriaEngine::with_options(
            self.warning_ratio,
            self.strict_tables,
        )?)
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            warning_ratio: default_warning_ratio(),
            strict_tables: default_strict_tables(),
        }
    }
}

fn default_warning_ratio() -> f64 {
    DEFAULT_WARNING_RATIO
}

fn default_strict_tables() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_defaults() {
        let config = ScoringConfig::default();
        assert_eq!(config.warning_ratio, 0.7);
        assert!(config.strict_tables);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_ratio_outside_unit_interval_is_invalid() {
        for ratio in [0.0, 1.0, -0.2, 1.5] {
            let config = ScoringConfig {
                warning_ratio: ratio,
                ..Default::default()
            };
            assert_eq!(
                config.validate(),
                Err(ValidationError::InvalidWarningRatio(ratio))
            );
        }
    }

    #[test]
    fn test_build_engine_with_defaults() {
        let engine = ScoringConfig::default().build_engine().unwrap();
        assert_eq!(engine.registry().max_score(), 131);
    }

    #[test]
    fn test_build_engine_rejects_invalid_ratio() {
        let config = ScoringConfig {
            warning_ratio: 2.0,
            strict_tables: true,
        };
        assert!(matches!(
            config.build_engine(),
            Err(ConfigError::ValidationFailed(ValidationError::InvalidWarningRatio(_)))
        ));
    }

    #[test]
    fn test_scoring_deserialization() {
        let json = r#"{ "warning_ratio": 0.6, "strict_tables": false }"#;
        let config: ScoringConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.warning_ratio, 0.6);
        assert!(!config.strict_tables);
    }
}
