use crate::config::ConfigError;
use thiserror::Error;

/// Application-wide error type that represents all possible errors in the system.
///
/// This enum provides structured error information for the two failure domains
/// the notifier has: resolving configuration and delivering a webhook. Guard
/// skips are not errors and never surface here.
#[derive(Error, Debug)]
pub enum AppError {
    /// Validation error with field-specific details
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Configuration loading or validation error
    #[error("Configuration error")]
    Configuration {
        #[from]
        source: ConfigError,
    },

    /// The outbound POST could not be completed (connection error, timeout)
    #[error("Webhook delivery to {endpoint} failed")]
    Delivery {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success HTTP status
    #[error("Webhook endpoint {endpoint} returned status {status}")]
    EndpointStatus { endpoint: String, status: u16 },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
