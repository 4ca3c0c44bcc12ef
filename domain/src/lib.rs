//! Domain layer for imagine
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Style preset**: a named template that appends a descriptive suffix to
//!   the user's prompt ([`StylePreset`])
//! - **Prompt composition**: user prompt + style suffix ([`PromptComposer`])
//! - **History**: the last ten successful results of a session, most recent
//!   first ([`HistoryCache`])

pub mod config;
pub mod core;
pub mod generation;
pub mod history;
pub mod prompt;
pub mod style;
pub mod util;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{error::DomainError, model::ModelId, prompt::UserPrompt};
pub use generation::{
    GeneratedImage, GenerationPhase, GenerationRequest, GenerationResult, ImageFormat,
};
pub use history::{HISTORY_CAPACITY, HistoryCache, HistoryEntry};
pub use prompt::PromptComposer;
pub use style::StylePreset;
