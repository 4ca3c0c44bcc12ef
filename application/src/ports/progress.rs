//! Progress notification port
//!
//! Defines the interface for reporting progress during a generation call.

use imagine_domain::{GenerationPhase, GenerationRequest};
use std::time::Duration;

/// Callback for progress updates during image generation
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, etc.)
pub trait GenerationProgressNotifier: Send + Sync {
    /// Called on every phase transition
    fn on_phase(&self, phase: GenerationPhase);

    /// Called once the final prompt has been built
    fn on_composed(&self, _request: &GenerationRequest, _composed_prompt: &str) {}

    /// Called right before each gateway call (attempt starts at 1)
    fn on_dispatch(&self, _attempt: u32) {}

    /// Called when a cold-start retry has been scheduled
    fn on_retry_scheduled(&self, _delay: Duration, _reason: &str) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl GenerationProgressNotifier for NoProgress {
    fn on_phase(&self, _phase: GenerationPhase) {}
}
