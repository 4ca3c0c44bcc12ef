//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod generation;
mod huggingface;
mod logging;
mod output;
mod repl;

pub use generation::FileGenerationConfig;
pub use huggingface::FileHuggingFaceConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;

use imagine_domain::ConfigIssue;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Hugging Face Inference endpoint and credentials
    pub huggingface: FileHuggingFaceConfig,
    /// Generation behavior (retry, default style)
    pub generation: FileGenerationConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Structured event log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. Endpoint settings (empty model or base URL, zero timeout)
    /// 2. The default style against the style catalog
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.huggingface.validate());
        issues.extend(self.generation.parse_default_style().1);

        issues
    }
}

/// Expand a leading `~/` to the home directory.
pub(crate) fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => PathBuf::from(path),
        },
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imagine_domain::{ConfigIssueCode, OutputFormat, Severity, StylePreset};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[huggingface]
api_key_env = "HF_TOKEN"
model = "stabilityai/stable-diffusion-3.5-large"
timeout_secs = 120

[generation]
cold_start_retry_delay_secs = 10
default_style = "Digital Art"

[output]
format = "json"
color = false
dir = "./renders"

[repl]
show_progress = false
history_file = "~/.local/share/imagine/history.txt"

[logging]
events_file = "generations.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.huggingface.api_key_env, "HF_TOKEN");
        assert_eq!(config.huggingface.timeout_secs, 120);
        assert_eq!(config.generation.cold_start_retry_delay_secs, 10);
        assert_eq!(
            config.generation.parse_default_style().0,
            StylePreset::DigitalArt
        );
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert_eq!(config.output.dir, "./renders");
        assert!(!config.repl.show_progress);
        assert_eq!(
            config.logging.events_file.as_deref(),
            Some("generations.jsonl")
        );
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[generation]
default_style = "Anime"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.generation.parse_default_style().0, StylePreset::Anime);
        // Defaults should apply
        assert_eq!(config.huggingface.api_key_env, "HUGGINGFACE_TOKEN");
        assert!(config.output.color);
        assert!(config.repl.show_progress);
        assert!(config.logging.events_file.is_none());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_all_issues() {
        let toml_str = r#"
[huggingface]
model = "  "
timeout_secs = 0

[generation]
default_style = "Steampunk"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();

        assert_eq!(issues.len(), 3);
        assert!(ConfigIssue::has_errors(&issues));
        assert!(issues.iter().any(|i| matches!(
            &i.code,
            ConfigIssueCode::InvalidEnumValue { field, .. } if field == "generation.default_style"
        )));
        assert!(
            issues
                .iter()
                .filter(|i| i.severity == Severity::Error)
                .count()
                == 2
        );
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("out"), PathBuf::from("out"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/out"), home.join("out"));
        }
    }
}
