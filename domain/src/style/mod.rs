//! Style presets that bias the aesthetic of a generated image.

mod preset;

pub use preset::StylePreset;
