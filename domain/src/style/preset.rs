//! Style preset catalog
//!
//! A closed set of named templates. Each preset appends a fixed descriptive
//! suffix to the user's prompt; [`StylePreset::None`] appends nothing.

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Available style presets (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StylePreset {
    #[default]
    None,
    Anime,
    Realistic,
    DigitalArt,
    Watercolor,
    OilPainting,
    Cyberpunk,
    Fantasy,
}

/// Catalog order, as presented to the user.
const ALL: [StylePreset; 8] = [
    StylePreset::None,
    StylePreset::Anime,
    StylePreset::Realistic,
    StylePreset::DigitalArt,
    StylePreset::Watercolor,
    StylePreset::OilPainting,
    StylePreset::Cyberpunk,
    StylePreset::Fantasy,
];

impl StylePreset {
    /// All presets in catalog order
    pub fn all() -> &'static [StylePreset] {
        &ALL
    }

    /// Stable identifier used in config files and on the command line
    pub fn id(&self) -> &'static str {
        match self {
            StylePreset::None => "None",
            StylePreset::Anime => "Anime",
            StylePreset::Realistic => "Realistic",
            StylePreset::DigitalArt => "DigitalArt",
            StylePreset::Watercolor => "Watercolor",
            StylePreset::OilPainting => "OilPainting",
            StylePreset::Cyberpunk => "Cyberpunk",
            StylePreset::Fantasy => "Fantasy",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            StylePreset::DigitalArt => "Digital Art",
            StylePreset::OilPainting => "Oil Painting",
            other => other.id(),
        }
    }

    /// Prompt suffix appended by this preset (empty for `None`)
    pub fn suffix(&self) -> &'static str {
        match self {
            StylePreset::None => "",
            StylePreset::Anime => {
                "anime style, vibrant colors, Studio Ghibli inspired, detailed illustration"
            }
            StylePreset::Realistic => {
                "photorealistic, highly detailed, 8K resolution, professional photography"
            }
            StylePreset::DigitalArt => {
                "digital painting, artstation trending, concept art, highly detailed"
            }
            StylePreset::Watercolor => {
                "watercolor painting, soft colors, artistic, delicate brushstrokes"
            }
            StylePreset::OilPainting => {
                "oil painting, classical art style, textured canvas, rich colors"
            }
            StylePreset::Cyberpunk => {
                "cyberpunk style, neon lights, futuristic, sci-fi, dark atmosphere"
            }
            StylePreset::Fantasy => {
                "fantasy art, magical, enchanted, epic scene, mystical atmosphere"
            }
        }
    }

    /// Whether this preset changes the prompt at all
    pub fn is_none(&self) -> bool {
        matches!(self, StylePreset::None)
    }

    /// Resolve a style identifier to its prompt suffix.
    pub fn lookup(style_id: &str) -> Result<&'static str, DomainError> {
        style_id.parse::<StylePreset>().map(|style| style.suffix())
    }
}

impl std::fmt::Display for StylePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for StylePreset {
    type Err = DomainError;

    /// Accepts the identifier or the label, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ALL.iter()
            .copied()
            .find(|style| {
                style.id().eq_ignore_ascii_case(needle) || style.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| DomainError::UnknownStyle(s.to_string()))
    }
}

impl Serialize for StylePreset {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for StylePreset {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_eight_presets() {
        assert_eq!(StylePreset::all().len(), 8);
        assert_eq!(StylePreset::all()[0], StylePreset::None);
    }

    #[test]
    fn test_lookup_none_is_empty() {
        assert_eq!(StylePreset::lookup("None").unwrap(), "");
    }

    #[test]
    fn test_lookup_known_suffix() {
        assert_eq!(
            StylePreset::lookup("Cyberpunk").unwrap(),
            "cyberpunk style, neon lights, futuristic, sci-fi, dark atmosphere"
        );
    }

    #[test]
    fn test_lookup_unknown_style() {
        assert_eq!(
            StylePreset::lookup("Steampunk"),
            Err(DomainError::UnknownStyle("Steampunk".to_string()))
        );
        assert!(StylePreset::lookup("").is_err());
    }

    #[test]
    fn test_parse_by_label_and_case() {
        assert_eq!("Digital Art".parse::<StylePreset>().unwrap(), StylePreset::DigitalArt);
        assert_eq!("digitalart".parse::<StylePreset>().unwrap(), StylePreset::DigitalArt);
        assert_eq!("oil painting".parse::<StylePreset>().unwrap(), StylePreset::OilPainting);
        assert_eq!("ANIME".parse::<StylePreset>().unwrap(), StylePreset::Anime);
    }

    #[test]
    fn test_every_preset_round_trips_through_id() {
        for style in StylePreset::all() {
            assert_eq!(style.id().parse::<StylePreset>().unwrap(), *style);
            assert_eq!(style.label().parse::<StylePreset>().unwrap(), *style);
        }
    }

    #[test]
    fn test_only_none_has_empty_suffix() {
        for style in StylePreset::all() {
            assert_eq!(style.suffix().is_empty(), style.is_none());
        }
    }

    #[test]
    fn test_deserialize_rejects_unknown() {
        let style: StylePreset = serde_json::from_str("\"Watercolor\"").unwrap();
        assert_eq!(style, StylePreset::Watercolor);
        assert!(serde_json::from_str::<StylePreset>("\"Steampunk\"").is_err());
    }
}
