//! Image Gateway port
//!
//! Defines the interface for calling a hosted text-to-image model.

use async_trait::async_trait;
use imagine_domain::{GeneratedImage, ModelId};
use std::time::Duration;
use thiserror::Error;

/// Classified failures of a single remote generation call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Credentials were rejected or missing
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The caller exceeded the allowed request rate
    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    /// The backing model is not warm yet
    #[error("Model is loading: {message}")]
    ModelLoading {
        message: String,
        /// Wait time reported by the endpoint, if any
        estimated_wait: Option<Duration>,
    },

    /// Any other network, protocol or payload failure
    #[error("Transport error: {0}")]
    Transport(String),
}

impl GatewayError {
    /// Cold-start failures are the only transient class
    pub fn is_transient(&self) -> bool {
        matches!(self, GatewayError::ModelLoading { .. })
    }
}

/// Gateway for text-to-image generation
///
/// One call performs exactly one outbound request: no retry, no caching.
/// Implementations (adapters) live in the infrastructure layer and must only
/// return `Ok` for a payload that decodes as an image.
#[async_trait]
pub trait ImageGateway: Send + Sync {
    /// The model this gateway generates with
    fn model(&self) -> &ModelId;

    /// Generate an image for an already composed prompt
    async fn text_to_image(&self, prompt: &str) -> Result<GeneratedImage, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_model_loading_is_transient() {
        assert!(
            GatewayError::ModelLoading {
                message: "loading".to_string(),
                estimated_wait: None,
            }
            .is_transient()
        );
        assert!(!GatewayError::Authentication("401".to_string()).is_transient());
        assert!(!GatewayError::RateLimited("429".to_string()).is_transient());
        assert!(!GatewayError::Transport("reset".to_string()).is_transient());
    }

    #[test]
    fn test_display() {
        let err = GatewayError::ModelLoading {
            message: "Model is currently loading".to_string(),
            estimated_wait: Some(Duration::from_secs(20)),
        };
        assert_eq!(err.to_string(), "Model is loading: Model is currently loading");
    }
}
