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
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid enrichment timeout")]
    InvalidTimeout,

    #[error("At most one enrichment retry is allowed, got {0}")]
    TooManyRetries(u32),

    #[error("Invalid maturity thresholds: {0}")]
    InvalidThresholds(String),

    #[error("Strength tolerance must be between 0 and 100, got {0}")]
    InvalidStrengthTolerance(u8),

    #[error("Log filter cannot be empty")]
    EmptyLogFilter,
}
