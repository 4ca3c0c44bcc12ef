//! Generation entities

use super::image::GeneratedImage;
use crate::core::error::DomainError;
use crate::core::model::ModelId;
use crate::core::prompt::UserPrompt;
use crate::prompt::PromptComposer;
use crate::style::StylePreset;
use crate::util::download_file_name;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A validated request to generate one image.
///
/// Lives only for the duration of a single generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub prompt: UserPrompt,
    pub style: StylePreset,
}

impl GenerationRequest {
    pub fn new(prompt: UserPrompt, style: StylePreset) -> Self {
        Self { prompt, style }
    }

    /// Validate raw user input.
    ///
    /// The prompt is checked first, then the style identifier.
    pub fn try_new(raw_prompt: &str, style_id: &str) -> Result<Self, DomainError> {
        let prompt = UserPrompt::try_new(raw_prompt)?;
        let style = style_id.parse()?;
        Ok(Self { prompt, style })
    }

    /// Final prompt string sent to the model
    pub fn compose(&self) -> String {
        PromptComposer::compose_with(&self.prompt, self.style)
    }
}

/// The outcome of a successful generation (Entity)
///
/// Immutable once built; a regenerated image is a new result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationResult {
    /// The user's prompt, trimmed
    pub prompt: String,
    /// The prompt actually sent to the model
    pub composed_prompt: String,
    pub style: StylePreset,
    pub image: GeneratedImage,
    pub model: ModelId,
    pub created_at: DateTime<Utc>,
}

impl GenerationResult {
    pub fn new(
        request: GenerationRequest,
        composed_prompt: String,
        image: GeneratedImage,
        model: ModelId,
    ) -> Self {
        Self {
            prompt: request.prompt.into_content(),
            composed_prompt,
            style: request.style,
            image,
            model,
            created_at: Utc::now(),
        }
    }

    /// Caption shown under the image: the prompt, plus the style when one was applied
    pub fn caption(&self) -> String {
        if self.style.is_none() {
            self.prompt.clone()
        } else {
            format!("{} ({} style)", self.prompt, self.style.label())
        }
    }

    /// Whether the composed prompt differs from what the user typed
    pub fn is_enhanced(&self) -> bool {
        self.composed_prompt != self.prompt
    }

    /// File name used when saving this image.
    ///
    /// `index` distinguishes saves taken from the history list.
    pub fn file_name(&self, index: Option<usize>) -> String {
        let max_chars = if index.is_some() { 20 } else { 30 };
        download_file_name(
            &self.prompt,
            max_chars,
            index,
            self.image.format().extension(),
        )
    }
}
