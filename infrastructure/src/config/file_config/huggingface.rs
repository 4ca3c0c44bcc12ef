//! Hugging Face Inference configuration from TOML (`[huggingface]` section)

use imagine_domain::{ConfigIssue, ConfigIssueCode, ModelId, Severity};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default environment variable holding the access token
pub const DEFAULT_API_KEY_ENV: &str = "HUGGINGFACE_TOKEN";

/// Default Inference endpoint (requests go to `{base_url}/models/{model}`)
pub const DEFAULT_BASE_URL: &str = "https://router.huggingface.co/hf-inference";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Hugging Face Inference configuration
///
/// # Example
///
/// ```toml
/// [huggingface]
/// api_key_env = "HUGGINGFACE_TOKEN"   # env var read for the token
/// # api_key = "hf_..."                # inline token, takes precedence
/// model = "stabilityai/stable-diffusion-xl-base-1.0"
/// timeout_secs = 60
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHuggingFaceConfig {
    /// Name of the environment variable holding the token
    pub api_key_env: String,
    /// Inline token (overrides the environment variable)
    pub api_key: Option<String>,
    /// Inference endpoint base URL
    pub base_url: String,
    /// Model repository id
    pub model: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for FileHuggingFaceConfig {
    fn default() -> Self {
        Self {
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: ModelId::default().to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl FileHuggingFaceConfig {
    /// Resolve the access token from the config or the process environment.
    ///
    /// A missing token is not an error here: the first request reports it as
    /// an authentication failure.
    pub fn resolve_token(&self) -> Option<String> {
        self.resolve_token_with(|name| std::env::var(name).ok())
    }

    /// Resolve the token with a custom environment lookup.
    pub fn resolve_token_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        let non_empty = |s: String| {
            let trimmed = s.trim().to_string();
            (!trimmed.is_empty()).then_some(trimmed)
        };

        self.api_key
            .clone()
            .and_then(non_empty)
            .or_else(|| lookup(&self.api_key_env).and_then(non_empty))
    }

    /// Parse the model string, collecting an issue when it is empty.
    pub fn parse_model(&self) -> (Option<ModelId>, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        if self.model.trim().is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::EmptyValue {
                    field: "huggingface.model".to_string(),
                },
                message: "huggingface.model: model name cannot be empty".to_string(),
            });
            return (None, issues);
        }
        let Ok(model) = self.model.trim().parse::<ModelId>();
        (Some(model), issues)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.parse_model().1;

        if self.base_url.trim().is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::EmptyValue {
                    field: "huggingface.base_url".to_string(),
                },
                message: "huggingface.base_url: endpoint cannot be empty".to_string(),
            });
        }

        if self.timeout_secs == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::ZeroDuration {
                    field: "huggingface.timeout_secs".to_string(),
                },
                message: "huggingface.timeout_secs cannot be 0".to_string(),
            });
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |name: &str| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn test_defaults() {
        let config = FileHuggingFaceConfig::default();
        assert_eq!(config.api_key_env, "HUGGINGFACE_TOKEN");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, "stabilityai/stable-diffusion-xl-base-1.0");
        assert_eq!(config.timeout(), Duration::from_secs(60));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_token_from_env_var() {
        let config = FileHuggingFaceConfig::default();
        let token = config.resolve_token_with(env(&[("HUGGINGFACE_TOKEN", "hf_env")]));
        assert_eq!(token.as_deref(), Some("hf_env"));
    }

    #[test]
    fn test_inline_token_wins_over_env() {
        let config = FileHuggingFaceConfig {
            api_key: Some("hf_inline".to_string()),
            ..Default::default()
        };
        let token = config.resolve_token_with(env(&[("HUGGINGFACE_TOKEN", "hf_env")]));
        assert_eq!(token.as_deref(), Some("hf_inline"));
    }

    #[test]
    fn test_custom_env_var_name() {
        let config = FileHuggingFaceConfig {
            api_key_env: "HF_TOKEN".to_string(),
            ..Default::default()
        };
        let token = config.resolve_token_with(env(&[
            ("HUGGINGFACE_TOKEN", "hf_wrong"),
            ("HF_TOKEN", "hf_right"),
        ]));
        assert_eq!(token.as_deref(), Some("hf_right"));
    }

    #[test]
    fn test_blank_token_is_absent() {
        let config = FileHuggingFaceConfig {
            api_key: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(config.resolve_token_with(env(&[])).is_none());
        assert!(
            config
                .resolve_token_with(env(&[("HUGGINGFACE_TOKEN", "")]))
                .is_none()
        );
    }

    #[test]
    fn test_parse_known_and_custom_models() {
        let config = FileHuggingFaceConfig::default();
        assert_eq!(config.parse_model().0, Some(ModelId::StableDiffusionXl));

        let config = FileHuggingFaceConfig {
            model: "someone/fine-tuned-sdxl".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.parse_model().0,
            Some(ModelId::Custom("someone/fine-tuned-sdxl".to_string()))
        );
    }

    #[test]
    fn test_zero_timeout_is_an_error() {
        let config = FileHuggingFaceConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(matches!(
            issues[0].code,
            ConfigIssueCode::ZeroDuration { .. }
        ));
    }
}
