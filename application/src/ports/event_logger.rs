//! Port for the machine-readable generation record.
//!
//! `tracing` carries diagnostics for humans; [`GenerationEventLogger`]
//! receives one typed [`GenerationEvent`] per step of a generation so an
//! adapter can keep an audit trail (the JSONL file in infrastructure).

use imagine_domain::{GenerationResult, ImageFormat, ModelId, StylePreset};
use serde::Serialize;

/// One step of a generation, serialized with a `type` tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GenerationEvent {
    /// Input validated, about to call the model
    Request {
        model: ModelId,
        style: StylePreset,
        prompt: String,
        composed_prompt: String,
    },
    /// The model was cold; another attempt follows after `delay_ms`
    Retry {
        attempt: u32,
        delay_ms: u64,
        reason: String,
    },
    Success {
        model: ModelId,
        style: StylePreset,
        prompt: String,
        format: ImageFormat,
        width: u32,
        height: u32,
        bytes: usize,
    },
    Failure {
        style: StylePreset,
        prompt: String,
        category: &'static str,
        error: String,
    },
}

impl GenerationEvent {
    pub fn success(result: &GenerationResult) -> Self {
        GenerationEvent::Success {
            model: result.model.clone(),
            style: result.style,
            prompt: result.prompt.clone(),
            format: result.image.format(),
            width: result.image.width(),
            height: result.image.height(),
            bytes: result.image.byte_len(),
        }
    }
}

/// Sink for [`GenerationEvent`]s.
///
/// `log` is synchronous and infallible: a sink that cannot record an event
/// drops it and never disturbs the generation.
pub trait GenerationEventLogger: Send + Sync {
    fn log(&self, event: &GenerationEvent);
}

/// Discards every event.
pub struct NoEventLogger;

impl GenerationEventLogger for NoEventLogger {
    fn log(&self, _event: &GenerationEvent) {}
}
