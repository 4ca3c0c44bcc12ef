//! Prompt composition
//!
//! Combines the user's description with the suffix of the selected
//! [`StylePreset`] into the final prompt sent to the model.

use crate::core::error::DomainError;
use crate::core::prompt::UserPrompt;
use crate::style::StylePreset;

/// Separator between the user's prompt and a style suffix
pub const STYLE_SEPARATOR: &str = ", ";

/// Builds the final generation prompt
pub struct PromptComposer;

impl PromptComposer {
    /// Compose from raw user input.
    ///
    /// The prompt is validated before the style, so an empty prompt with an
    /// unknown style reports [`DomainError::EmptyPrompt`].
    pub fn compose(raw_prompt: &str, style_id: &str) -> Result<String, DomainError> {
        let prompt = UserPrompt::try_new(raw_prompt)?;
        let style: StylePreset = style_id.parse()?;
        Ok(Self::compose_with(&prompt, style))
    }

    /// Compose from already validated parts.
    pub fn compose_with(prompt: &UserPrompt, style: StylePreset) -> String {
        let suffix = style.suffix();
        if suffix.is_empty() {
            prompt.content().to_string()
        } else {
            format!("{}{}{}", prompt.content(), STYLE_SEPARATOR, suffix)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_style_returns_prompt() {
        assert_eq!(PromptComposer::compose("a cat", "None").unwrap(), "a cat");
    }

    #[test]
    fn test_none_style_trims() {
        assert_eq!(PromptComposer::compose("  a cat \n", "None").unwrap(), "a cat");
    }

    #[test]
    fn test_style_suffix_appended() {
        let composed = PromptComposer::compose("a cat", "Cyberpunk").unwrap();
        assert_eq!(
            composed,
            format!("a cat, {}", StylePreset::Cyberpunk.suffix())
        );
    }

    #[test]
    fn test_empty_prompt_rejected() {
        assert_eq!(
            PromptComposer::compose("", "Anime"),
            Err(DomainError::EmptyPrompt)
        );
        assert_eq!(
            PromptComposer::compose("  ", "Anime"),
            Err(DomainError::EmptyPrompt)
        );
    }

    #[test]
    fn test_unknown_style_rejected() {
        assert_eq!(
            PromptComposer::compose("a cat", "Steampunk"),
            Err(DomainError::UnknownStyle("Steampunk".to_string()))
        );
    }

    #[test]
    fn test_empty_prompt_checked_before_style() {
        assert_eq!(
            PromptComposer::compose(" ", "Steampunk"),
            Err(DomainError::EmptyPrompt)
        );
    }

    #[test]
    fn test_compose_is_deterministic() {
        for style in StylePreset::all() {
            let first = PromptComposer::compose("a serene lake at sunset", style.id()).unwrap();
            let second = PromptComposer::compose("a serene lake at sunset", style.id()).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_trimmed_prompt_with_style() {
        let composed = PromptComposer::compose("  a cat  ", "Anime").unwrap();
        assert!(composed.starts_with("a cat, anime style"));
    }
}
