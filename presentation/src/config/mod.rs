//! Presentation-level configuration
//!
//! Configuration for output formatting and REPL behavior. The binary fills
//! these from the merged file config and command-line flags.

use imagine_domain::{OutputFormat, StylePreset};
use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Text summary or JSON metadata
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Directory saved images are written to
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
            dir: PathBuf::from("."),
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Show progress indicators
    pub show_progress: bool,
    /// Path to the prompt history file
    pub history_file: Option<PathBuf>,
    /// Style selected when the session starts
    pub initial_style: StylePreset,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
            initial_style: StylePreset::None,
        }
    }
}
