//! Generate Image use case.
//!
//! Orchestrates one generation for a [`GenerationSession`]:
//!
//! ```text
//! Idle -> Composing -> Dispatching -> {Succeeded, Failed}
//! ```
//!
//! - Invalid input fails during `Composing` and never reaches the gateway.
//! - The gateway is called once. A cold model ([`GatewayError::ModelLoading`])
//!   is retried once after [`GenerationParams::cold_start_retry_delay`];
//!   every other failure surfaces immediately.
//! - Only a success touches the session history.
//! - A session runs one generation at a time. A call that arrives while
//!   another is in flight is rejected with [`GenerateImageError::Busy`]; it is
//!   not queued.

use crate::config::GenerationParams;
use crate::ports::event_logger::{GenerationEvent, GenerationEventLogger, NoEventLogger};
use crate::ports::image_gateway::{GatewayError, ImageGateway};
use crate::ports::progress::{GenerationProgressNotifier, NoProgress};
use crate::session::GenerationSession;
use imagine_domain::util::truncate_str;
use imagine_domain::{
    DomainError, GeneratedImage, GenerationPhase, GenerationRequest, GenerationResult,
};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors returned to the front end, one per user-visible failure kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateImageError {
    #[error("Prompt is empty")]
    EmptyPrompt,

    #[error("Unknown style: {0}")]
    UnknownStyle(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Rate limit reached: {0}")]
    RateLimited(String),

    #[error("Model is still loading: {0}")]
    ModelLoading(String),

    #[error("Generation failed: {0}")]
    Transport(String),

    #[error("A generation is already in progress for this session")]
    Busy,

    #[error("Generation cancelled")]
    Cancelled,
}

/// Coarse classification of [`GenerateImageError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Rejected locally before any network call
    Validation,
    Authentication,
    RateLimit,
    ModelLoading,
    Transport,
    Busy,
    Cancelled,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Validation => "validation",
            ErrorCategory::Authentication => "authentication",
            ErrorCategory::RateLimit => "rate_limit",
            ErrorCategory::ModelLoading => "model_loading",
            ErrorCategory::Transport => "transport",
            ErrorCategory::Busy => "busy",
            ErrorCategory::Cancelled => "cancelled",
        }
    }
}

impl GenerateImageError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GenerateImageError::EmptyPrompt | GenerateImageError::UnknownStyle(_) => {
                ErrorCategory::Validation
            }
            GenerateImageError::Authentication(_) => ErrorCategory::Authentication,
            GenerateImageError::RateLimited(_) => ErrorCategory::RateLimit,
            GenerateImageError::ModelLoading(_) => ErrorCategory::ModelLoading,
            GenerateImageError::Transport(_) => ErrorCategory::Transport,
            GenerateImageError::Busy => ErrorCategory::Busy,
            GenerateImageError::Cancelled => ErrorCategory::Cancelled,
        }
    }

    /// What the user can do about it
    pub fn hint(&self) -> &'static str {
        match self {
            GenerateImageError::EmptyPrompt => "Please enter a description for your image.",
            GenerateImageError::UnknownStyle(_) => {
                "Pick one of the listed style presets (see --list-styles)."
            }
            GenerateImageError::Authentication(_) => {
                "Check your Hugging Face token: it must be set and allowed to call Inference Providers."
            }
            GenerateImageError::RateLimited(_) => {
                "Rate limit reached. Please wait a few minutes before trying again."
            }
            GenerateImageError::ModelLoading(_) => {
                "The model is warming up. Please wait a moment and try again."
            }
            GenerateImageError::Transport(_) => {
                "Check your network connection, or try a different or shorter prompt."
            }
            GenerateImageError::Busy => "Wait for the current image to finish before starting another.",
            GenerateImageError::Cancelled => "Generation was cancelled; nothing was saved.",
        }
    }

    /// Whether the same request may succeed later without changing anything
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::RateLimit
                | ErrorCategory::ModelLoading
                | ErrorCategory::Transport
                | ErrorCategory::Busy
        )
    }
}

impl From<DomainError> for GenerateImageError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::EmptyPrompt => GenerateImageError::EmptyPrompt,
            DomainError::UnknownStyle(style) => GenerateImageError::UnknownStyle(style),
        }
    }
}

impl From<GatewayError> for GenerateImageError {
    fn from(error: GatewayError) -> Self {
        match error {
            GatewayError::Authentication(msg) => GenerateImageError::Authentication(msg),
            GatewayError::RateLimited(msg) => GenerateImageError::RateLimited(msg),
            GatewayError::ModelLoading { message, .. } => GenerateImageError::ModelLoading(message),
            GatewayError::Transport(msg) => GenerateImageError::Transport(msg),
        }
    }
}

/// Input for the [`GenerateImageUseCase`].
#[derive(Debug, Clone)]
pub struct GenerateImageInput {
    /// Raw prompt as typed by the user.
    pub prompt: String,
    /// Style identifier or label.
    pub style: String,
    cancellation: Option<CancellationToken>,
}

impl GenerateImageInput {
    pub fn new(prompt: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            style: style.into(),
            cancellation: None,
        }
    }

    /// Abort the call when `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }
}

/// Use case for generating one image in a session.
#[derive(Clone)]
pub struct GenerateImageUseCase {
    gateway: Arc<dyn ImageGateway>,
    params: GenerationParams,
    event_logger: Arc<dyn GenerationEventLogger>,
}

impl GenerateImageUseCase {
    pub fn new(gateway: Arc<dyn ImageGateway>) -> Self {
        Self {
            gateway,
            params: GenerationParams::default(),
            event_logger: Arc::new(NoEventLogger),
        }
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    /// Create with a generation event logger.
    pub fn with_event_logger(mut self, logger: Arc<dyn GenerationEventLogger>) -> Self {
        self.event_logger = logger;
        self
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    pub fn gateway(&self) -> &Arc<dyn ImageGateway> {
        &self.gateway
    }

    /// Execute without progress reporting.
    pub async fn execute(
        &self,
        session: &GenerationSession,
        input: GenerateImageInput,
    ) -> Result<GenerationResult, GenerateImageError> {
        self.execute_with_progress(session, input, &NoProgress).await
    }

    /// Execute with progress callbacks.
    pub async fn execute_with_progress(
        &self,
        session: &GenerationSession,
        input: GenerateImageInput,
        progress: &dyn GenerationProgressNotifier,
    ) -> Result<GenerationResult, GenerateImageError> {
        let Some(_guard) = session.try_begin() else {
            warn!("Rejected generation: session busy");
            return Err(GenerateImageError::Busy);
        };

        let mut phase = PhaseTracker::new(progress);

        // ===== Composing =====
        phase.advance(GenerationPhase::Composing);
        let request = match GenerationRequest::try_new(&input.prompt, &input.style) {
            Ok(request) => request,
            Err(e) => {
                phase.advance(GenerationPhase::Failed);
                debug!("Invalid generation input: {}", e);
                return Err(e.into());
            }
        };
        let composed = request.compose();
        progress.on_composed(&request, &composed);

        info!(
            "Generating image ({} style): {}",
            request.style.id(),
            truncate_str(&composed, 100)
        );
        self.event_logger.log(&GenerationEvent::Request {
            model: self.gateway.model().clone(),
            style: request.style,
            prompt: request.prompt.content().to_string(),
            composed_prompt: composed.clone(),
        });

        // ===== Dispatching =====
        phase.advance(GenerationPhase::Dispatching);
        let image = match self
            .dispatch_with_retry(&composed, input.cancellation.as_ref(), progress)
            .await
        {
            Ok(image) => image,
            Err(e) => {
                phase.advance(GenerationPhase::Failed);
                warn!("Generation failed: {}", e);
                self.event_logger.log(&GenerationEvent::Failure {
                    style: request.style,
                    prompt: request.prompt.content().to_string(),
                    category: e.category().as_str(),
                    error: e.to_string(),
                });
                return Err(e);
            }
        };

        // ===== Succeeded =====
        let result =
            GenerationResult::new(request, composed, image, self.gateway.model().clone());
        session.record(result.clone());
        phase.advance(GenerationPhase::Succeeded);

        info!(
            "Image generated: {} {}x{} ({} bytes)",
            result.image.format(),
            result.image.width(),
            result.image.height(),
            result.image.byte_len()
        );
        self.event_logger.log(&GenerationEvent::success(&result));

        Ok(result)
    }

    /// Call the gateway, retrying a cold model at most once.
    async fn dispatch_with_retry(
        &self,
        prompt: &str,
        cancellation: Option<&CancellationToken>,
        progress: &dyn GenerationProgressNotifier,
    ) -> Result<GeneratedImage, GenerateImageError> {
        let max_attempts = self.params.max_attempts();
        let mut attempt = 1;

        loop {
            progress.on_dispatch(attempt);
            debug!("Dispatching attempt {}/{}", attempt, max_attempts);

            let error = match self.dispatch_once(prompt, cancellation).await? {
                Ok(image) => return Ok(image),
                Err(e) if e.is_transient() && attempt < max_attempts => e,
                Err(e) => return Err(e.into()),
            };

            let delay = self.params.cold_start_retry_delay;
            let reason = match &error {
                GatewayError::ModelLoading {
                    message,
                    estimated_wait: Some(wait),
                } => format!("{} (estimated {}s)", message, wait.as_secs()),
                other => other.to_string(),
            };
            warn!("{}, retrying in {:?}", reason, delay);
            progress.on_retry_scheduled(delay, &reason);
            self.event_logger.log(&GenerationEvent::Retry {
                attempt,
                delay_ms: u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                reason,
            });
            sleep_cancellable(delay, cancellation).await?;
            attempt += 1;
        }
    }

    /// One gateway call. The outer `Err` is cancellation only.
    async fn dispatch_once(
        &self,
        prompt: &str,
        cancellation: Option<&CancellationToken>,
    ) -> Result<Result<GeneratedImage, GatewayError>, GenerateImageError> {
        match cancellation {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => Err(GenerateImageError::Cancelled),
                result = self.gateway.text_to_image(prompt) => Ok(result),
            },
            None => Ok(self.gateway.text_to_image(prompt).await),
        }
    }
}

async fn sleep_cancellable(
    delay: Duration,
    cancellation: Option<&CancellationToken>,
) -> Result<(), GenerateImageError> {
    match cancellation {
        Some(token) => tokio::select! {
            biased;
            _ = token.cancelled() => Err(GenerateImageError::Cancelled),
            _ = tokio::time::sleep(delay) => Ok(()),
        },
        None => {
            tokio::time::sleep(delay).await;
            Ok(())
        }
    }
}

/// Tracks the phase of one call and reports each transition.
struct PhaseTracker<'a> {
    current: GenerationPhase,
    progress: &'a dyn GenerationProgressNotifier,
}

impl<'a> PhaseTracker<'a> {
    fn new(progress: &'a dyn GenerationProgressNotifier) -> Self {
        progress.on_phase(GenerationPhase::Idle);
        Self {
            current: GenerationPhase::Idle,
            progress,
        }
    }

    fn advance(&mut self, next: GenerationPhase) {
        debug_assert!(
            self.current.can_transition_to(next),
            "illegal phase transition {} -> {}",
            self.current,
            next
        );
        debug!("Generation phase: {} -> {}", self.current, next);
        self.current = next;
        self.progress.on_phase(next);
    }
}
