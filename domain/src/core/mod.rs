//! Core domain concepts shared across all subdomains.
//!
//! - [`model::ModelId`]: identifier of the hosted image model
//! - [`prompt::UserPrompt`]: a validated, trimmed user prompt
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod prompt;
