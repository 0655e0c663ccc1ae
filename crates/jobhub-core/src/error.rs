use std::time::Duration;

use thiserror::Error;

/// Application-wide error types for Jobhub.
#[derive(Error, Debug)]
pub enum AppError {
    /// HTTP request to a job provider failed.
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// A job provider answered with a non-success status.
    #[error("Provider {provider} returned HTTP {status}")]
    ProviderError { provider: String, status: u16 },

    /// JSON serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Request timed out.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Network/connection error.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Missing or invalid configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Local job store or profile store could not be read.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// The caller identity is missing or malformed.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

impl AppError {
    /// Returns true if this error came from talking to an external job provider.
    ///
    /// Provider errors are absorbed by the adapters and never reach callers.
    pub fn is_provider_failure(&self) -> bool {
        matches!(
            self,
            AppError::HttpError(_)
                | AppError::ProviderError { .. }
                | AppError::Timeout(_)
                | AppError::NetworkError(_)
                | AppError::SerializationError(_)
        )
    }
}
