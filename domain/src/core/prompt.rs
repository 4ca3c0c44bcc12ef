//! User prompt value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The image description entered by the user (Value Object)
///
/// Always stored trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPrompt {
    content: String,
}

impl UserPrompt {
    /// Try to create a new prompt, rejecting empty or whitespace-only text
    pub fn try_new(content: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = content.as_ref().trim();
        if trimmed.is_empty() {
            Err(DomainError::EmptyPrompt)
        } else {
            Ok(Self {
                content: trimmed.to_string(),
            })
        }
    }

    /// Get the prompt content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for UserPrompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_is_trimmed() {
        let p = UserPrompt::try_new("  a cat  \n").unwrap();
        assert_eq!(p.content(), "a cat");
    }

    #[test]
    fn test_try_new_empty() {
        assert_eq!(UserPrompt::try_new(""), Err(DomainError::EmptyPrompt));
        assert_eq!(UserPrompt::try_new("   "), Err(DomainError::EmptyPrompt));
        assert_eq!(UserPrompt::try_new("\t\n"), Err(DomainError::EmptyPrompt));
    }

    #[test]
    fn test_into_content() {
        let p = UserPrompt::try_new("a lake at sunset").unwrap();
        assert_eq!(p.into_content(), "a lake at sunset");
    }
}
