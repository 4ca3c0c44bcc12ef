//! Logging infrastructure: structured generation event logging.
//!
//! Provides [`JsonlGenerationLogger`], a JSONL file writer that implements
//! the [`GenerationEventLogger`](imagine_application::GenerationEventLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlGenerationLogger;
