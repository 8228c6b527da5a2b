//! Configuration error types

use thiserror::Error;

use crate::domain::foundation::RegistryError;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Criteria engine could not be built: {0}")]
    Engine(#[from] RegistryError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Warning ratio must be between 0 and 1 exclusive, got {0}")]
    InvalidWarningRatio(f64),

    #[error("Log level directive cannot be empty")]
    EmptyLogLevel,
}
