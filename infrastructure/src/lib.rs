//! Infrastructure layer for imagine
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod huggingface;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileGenerationConfig, FileHuggingFaceConfig, FileLoggingConfig,
    FileOutputConfig, FileReplConfig,
};
pub use huggingface::{
    error::HuggingFaceError,
    gateway::{HuggingFaceImageGateway, HuggingFaceSettings},
};
pub use logging::JsonlGenerationLogger;
