//! Generation configuration from TOML (`[generation]` section)

use imagine_application::GenerationParams;
use imagine_domain::{ConfigIssue, ConfigIssueCode, Severity, StylePreset};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Generation behavior configuration
///
/// # Example
///
/// ```toml
/// [generation]
/// cold_start_retry_delay_secs = 5   # wait before retrying a loading model
/// retry_on_cold_start = true
/// default_style = "None"            # style id or label
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Delay before the single cold-start retry, in seconds
    pub cold_start_retry_delay_secs: u64,
    /// Retry once when the model is still loading
    pub retry_on_cold_start: bool,
    /// Style applied when none is given on the command line
    pub default_style: String,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        Self {
            cold_start_retry_delay_secs: 5,
            retry_on_cold_start: true,
            default_style: StylePreset::None.id().to_string(),
        }
    }
}

impl FileGenerationConfig {
    /// Parse the default style, falling back to `None` with a warning.
    pub fn parse_default_style(&self) -> (StylePreset, Vec<ConfigIssue>) {
        match self.default_style.parse::<StylePreset>() {
            Ok(style) => (style, Vec::new()),
            Err(_) => {
                let issue = ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "generation.default_style".to_string(),
                        value: self.default_style.clone(),
                        valid_values: StylePreset::all()
                            .iter()
                            .map(|s| s.id().to_string())
                            .collect(),
                    },
                    message: format!(
                        "generation.default_style: unknown style '{}', falling back to 'None'",
                        self.default_style
                    ),
                };
                (StylePreset::None, vec![issue])
            }
        }
    }

    /// Orchestrator parameters built from this section
    pub fn to_generation_params(&self) -> GenerationParams {
        let params = GenerationParams::default()
            .with_cold_start_retry_delay(Duration::from_secs(self.cold_start_retry_delay_secs));
        if self.retry_on_cold_start {
            params
        } else {
            params.without_cold_start_retry()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_orchestrator_defaults() {
        let config = FileGenerationConfig::default();
        assert_eq!(config.to_generation_params(), GenerationParams::default());
        assert_eq!(config.parse_default_style().0, StylePreset::None);
    }

    #[test]
    fn test_custom_retry_delay() {
        let config = FileGenerationConfig {
            cold_start_retry_delay_secs: 12,
            ..Default::default()
        };
        let params = config.to_generation_params();
        assert_eq!(params.cold_start_retry_delay, Duration::from_secs(12));
        assert_eq!(params.max_attempts(), 2);
    }

    #[test]
    fn test_retry_disabled() {
        let config = FileGenerationConfig {
            retry_on_cold_start: false,
            ..Default::default()
        };
        assert_eq!(config.to_generation_params().max_attempts(), 1);
    }

    #[test]
    fn test_default_style_accepts_label() {
        let config = FileGenerationConfig {
            default_style: "oil painting".to_string(),
            ..Default::default()
        };
        let (style, issues) = config.parse_default_style();
        assert_eq!(style, StylePreset::OilPainting);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_unknown_default_style_warns() {
        let config = FileGenerationConfig {
            default_style: "Vaporwave".to_string(),
            ..Default::default()
        };
        let (style, issues) = config.parse_default_style();
        assert_eq!(style, StylePreset::None);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
    }
}
