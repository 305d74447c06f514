//! Error types for the reminisce question engine.
//!
//! The question pipeline itself is total and never returns these; they cover the
//! edges around it: remote translation, configuration and the CLI input boundary.

use thiserror::Error;

/// Remote translation errors. Never escape the fallback lookup.
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("Translation provider not configured: {0}")]
    NotConfigured(String),

    #[error("Translation authentication failed: {0}")]
    AuthFailed(String),

    #[error("Translation quota exceeded: {0}")]
    RateLimit(String),

    #[error("Translation request failed: {0}")]
    RequestFailed(String),

    #[error("Translation timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Invalid translation response: {0}")]
    InvalidResponse(String),
}

/// Errors surfaced to callers of the library and the CLI.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Serialization(err.to_string())
    }
}
