//! Error types for the Hugging Face adapter

use thiserror::Error;

/// Result type alias for adapter setup
pub type Result<T> = std::result::Result<T, HuggingFaceError>;

/// Errors raised while building the adapter.
///
/// Request-time failures are reported as
/// [`GatewayError`](imagine_application::GatewayError) instead.
#[derive(Error, Debug)]
pub enum HuggingFaceError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),

    #[error("Invalid endpoint base URL: '{0}'")]
    InvalidBaseUrl(String),

    #[error("Request timeout must be greater than zero")]
    ZeroTimeout,
}
