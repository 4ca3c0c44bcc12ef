//! Application-level configuration.
//!
//! - [`GenerationParams`]: orchestrator retry policy

pub mod generation_params;

pub use generation_params::GenerationParams;
