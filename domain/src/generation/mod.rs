//! Generation subdomain: requests, generated images and results.

pub mod entities;
pub mod image;
pub mod phase;

pub use entities::{GenerationRequest, GenerationResult};
pub use image::{GeneratedImage, ImageFormat};
pub use phase::GenerationPhase;
