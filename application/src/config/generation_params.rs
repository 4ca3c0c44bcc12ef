//! Generation parameters: orchestrator retry policy.
//!
//! [`GenerationParams`] groups the static parameters that control how
//! [`GenerateImageUseCase`](crate::use_cases::generate_image::GenerateImageUseCase)
//! reacts to a cold model. These are application-layer concerns, not domain policy.

use std::time::Duration;

/// Default pause before retrying a request that hit a cold model.
pub const DEFAULT_COLD_START_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Retry policy for a generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationParams {
    /// Wait before the single retry after a model-loading failure.
    pub cold_start_retry_delay: Duration,
    /// Whether a model-loading failure is retried at all.
    pub retry_on_cold_start: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            cold_start_retry_delay: DEFAULT_COLD_START_RETRY_DELAY,
            retry_on_cold_start: true,
        }
    }
}

impl GenerationParams {
    // ==================== Builder Methods ====================

    pub fn with_cold_start_retry_delay(mut self, delay: Duration) -> Self {
        self.cold_start_retry_delay = delay;
        self
    }

    pub fn without_cold_start_retry(mut self) -> Self {
        self.retry_on_cold_start = false;
        self
    }

    /// Total gateway calls a single generation may make.
    pub fn max_attempts(&self) -> u32 {
        if self.retry_on_cold_start { 2 } else { 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = GenerationParams::default();
        assert_eq!(params.cold_start_retry_delay, Duration::from_secs(5));
        assert!(params.retry_on_cold_start);
        assert_eq!(params.max_attempts(), 2);
    }

    #[test]
    fn test_builder() {
        let params = GenerationParams::default()
            .with_cold_start_retry_delay(Duration::from_millis(250))
            .without_cold_start_retry();

        assert_eq!(params.cold_start_retry_delay, Duration::from_millis(250));
        assert_eq!(params.max_attempts(), 1);
    }
}
