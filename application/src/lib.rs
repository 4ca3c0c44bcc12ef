//! Application layer for imagine
//!
//! This crate contains the generation use case, session state, port
//! definitions, and application configuration. It depends only on the domain
//! layer.

pub mod config;
pub mod ports;
pub mod session;
pub mod use_cases;

// Re-export commonly used types
pub use config::GenerationParams;
pub use ports::{
    event_logger::{GenerationEvent, GenerationEventLogger, NoEventLogger},
    image_gateway::{GatewayError, ImageGateway},
    progress::{GenerationProgressNotifier, NoProgress},
};
pub use session::GenerationSession;
pub use use_cases::generate_image::{
    ErrorCategory, GenerateImageError, GenerateImageInput, GenerateImageUseCase,
};
