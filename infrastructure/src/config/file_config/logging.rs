//! Structured event log configuration from TOML (`[logging]` section)

use super::expand_home;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
///
/// ```toml
/// [logging]
/// events_file = "~/.local/share/imagine/generations.jsonl"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL file receiving one record per generation event
    pub events_file: Option<String>,
}

impl FileLoggingConfig {
    pub fn events_path(&self) -> Option<PathBuf> {
        self.events_file.as_deref().map(expand_home)
    }
}
