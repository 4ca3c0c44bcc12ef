//! Hugging Face Inference adapter
//!
//! Implements ImageGateway with one HTTP POST per generation.

pub mod classify;
pub mod decode;
pub mod error;
pub mod gateway;
