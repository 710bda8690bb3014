//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Failed to read phase table {path}: {source}")]
    PhaseTableIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid phase table {path}: {reason}")]
    InvalidPhaseTable { path: String, reason: String },
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid host address: {0}")]
    InvalidHost(String),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid CORS origin: {0:?}")]
    InvalidCorsOrigin(String),

    #[error("Invalid coverage weight for {0}: must be a non-negative number")]
    InvalidWeight(&'static str),
}
