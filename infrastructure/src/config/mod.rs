//! Configuration file loading for imagine
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./imagine.toml` or `./.imagine.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/imagine/config.toml`
//! 4. Fallback: `~/.config/imagine/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileGenerationConfig, FileHuggingFaceConfig, FileLoggingConfig,
    FileOutputConfig, FileReplConfig,
};
pub use loader::ConfigLoader;
