//! Hugging Face ImageGateway implementation

use super::classify::classify_failure;
use super::decode::decode_image;
use super::error::{HuggingFaceError, Result};
use async_trait::async_trait;
use imagine_application::{GatewayError, ImageGateway};
use imagine_domain::{GeneratedImage, ModelId};
use reqwest::header::ACCEPT;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

/// Connection settings for [`HuggingFaceImageGateway`]
#[derive(Debug, Clone)]
pub struct HuggingFaceSettings {
    pub base_url: String,
    pub model: ModelId,
    /// Sent as a bearer token when present
    pub token: Option<String>,
    pub timeout: Duration,
}

#[derive(Serialize)]
struct TextToImageRequest<'a> {
    inputs: &'a str,
}

/// ImageGateway backed by the Hugging Face Inference API
pub struct HuggingFaceImageGateway {
    client: reqwest::Client,
    endpoint: String,
    model: ModelId,
    token: Option<String>,
    timeout: Duration,
}

impl HuggingFaceImageGateway {
    pub fn new(settings: HuggingFaceSettings) -> Result<Self> {
        if settings.timeout.is_zero() {
            return Err(HuggingFaceError::ZeroTimeout);
        }

        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(concat!("imagine/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Self::with_client(settings, client)
    }

    /// Create a gateway with an existing HTTP client
    ///
    /// The client's own timeout applies; `settings.timeout` is only used in
    /// error messages.
    pub fn with_client(settings: HuggingFaceSettings, client: reqwest::Client) -> Result<Self> {
        let base_url = settings.base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(HuggingFaceError::InvalidBaseUrl(settings.base_url));
        }

        let endpoint = format!("{}/models/{}", base_url, settings.model);
        info!("HuggingFaceImageGateway initialized ({})", endpoint);

        Ok(Self {
            client,
            endpoint,
            model: settings.model,
            token: settings.token,
            timeout: settings.timeout,
        })
    }

    /// URL every request is posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn transport_error(&self, error: reqwest::Error) -> GatewayError {
        if error.is_timeout() {
            GatewayError::Transport(format!("Request timed out after {:?}", self.timeout))
        } else if error.is_connect() {
            GatewayError::Transport(format!("Could not connect to {}: {}", self.endpoint, error))
        } else {
            GatewayError::Transport(format!("Request failed: {}", error))
        }
    }
}

#[async_trait]
impl ImageGateway for HuggingFaceImageGateway {
    fn model(&self) -> &ModelId {
        &self.model
    }

    async fn text_to_image(&self, prompt: &str) -> std::result::Result<GeneratedImage, GatewayError> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "image/png")
            .json(&TextToImageRequest { inputs: prompt });
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        debug!("POST {} ({} prompt bytes)", self.endpoint, prompt.len());
        let response = request.send().await.map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;
        debug!("Response {} ({} bytes)", status.as_u16(), body.len());

        if !status.is_success() {
            return Err(classify_failure(status.as_u16(), &body));
        }

        // Full decode of a megapixel image is CPU-bound
        let bytes = body.to_vec();
        tokio::task::spawn_blocking(move || decode_image(bytes))
            .await
            .map_err(|e| GatewayError::Transport(format!("Image decoding aborted: {}", e)))?
    }
}
