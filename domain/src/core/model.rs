//! Model value object representing a hosted text-to-image model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Hosted image models (Value Object)
///
/// Identifies the repository id of the text-to-image model on the
/// inference endpoint. Unknown ids are carried through as [`ModelId::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ModelId {
    StableDiffusionXl,
    StableDiffusion35Large,
    FluxSchnell,
    Custom(String),
}

impl ModelId {
    /// Get the repository identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            ModelId::StableDiffusionXl => "stabilityai/stable-diffusion-xl-base-1.0",
            ModelId::StableDiffusion35Large => "stabilityai/stable-diffusion-3.5-large",
            ModelId::FluxSchnell => "black-forest-labs/FLUX.1-schnell",
            ModelId::Custom(s) => s,
        }
    }

    /// Human-readable name shown in the front end
    pub fn display_name(&self) -> &str {
        match self {
            ModelId::StableDiffusionXl => "Stable Diffusion XL",
            ModelId::StableDiffusion35Large => "Stable Diffusion 3.5 Large",
            ModelId::FluxSchnell => "FLUX.1 [schnell]",
            ModelId::Custom(s) => s,
        }
    }

    /// Check if this is one of the built-in models
    pub fn is_builtin(&self) -> bool {
        !matches!(self, ModelId::Custom(_))
    }
}

impl Default for ModelId {
    /// Returns the default model (Stable Diffusion XL base 1.0)
    fn default() -> Self {
        ModelId::StableDiffusionXl
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ModelId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "stabilityai/stable-diffusion-xl-base-1.0" => ModelId::StableDiffusionXl,
            "stabilityai/stable-diffusion-3.5-large" => ModelId::StableDiffusion35Large,
            "black-forest-labs/FLUX.1-schnell" => ModelId::FluxSchnell,
            other => ModelId::Custom(other.to_string()),
        })
    }
}

impl Serialize for ModelId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ModelId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let Ok(model) = s.parse::<ModelId>();
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_parse() {
        let model: ModelId = "stabilityai/stable-diffusion-xl-base-1.0".parse().unwrap();
        assert_eq!(model, ModelId::StableDiffusionXl);
        assert!(model.is_builtin());
    }

    #[test]
    fn test_custom_model() {
        let model: ModelId = "someone/custom-diffusion".parse().unwrap();
        assert_eq!(model, ModelId::Custom("someone/custom-diffusion".to_string()));
        assert_eq!(model.to_string(), "someone/custom-diffusion");
        assert!(!model.is_builtin());
    }

    #[test]
    fn test_model_default() {
        assert_eq!(ModelId::default(), ModelId::StableDiffusionXl);
        assert_eq!(ModelId::default().display_name(), "Stable Diffusion XL");
    }

    #[test]
    fn test_serde_as_plain_string() {
        let json = serde_json::to_string(&ModelId::FluxSchnell).unwrap();
        assert_eq!(json, "\"black-forest-labs/FLUX.1-schnell\"");
        let parsed: ModelId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ModelId::FluxSchnell);
    }
}
