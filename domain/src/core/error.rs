//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Raised by local validation before any request leaves the process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Prompt is empty")]
    EmptyPrompt,

    #[error("Unknown style: {0}")]
    UnknownStyle(String),
}
