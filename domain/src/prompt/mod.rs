//! Prompt composition for image generation

mod composer;

pub use composer::{PromptComposer, STYLE_SEPARATOR};
