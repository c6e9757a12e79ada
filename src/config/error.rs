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
    #[error("max_field_attempts must be at least 1")]
    InvalidMaxFieldAttempts,

    #[error("Simulation must run at least one session")]
    InvalidSimulationRuns,

    #[error("Log filter cannot be empty")]
    EmptyLogFilter,
}
