use crate::slide::Slide;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Autoplay interval used when a deck does not set one.
pub const DEFAULT_INTERVAL_MS: u64 = 5000;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("failed to read deck file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse deck: {0}")]
    ParseToml(#[from] toml::de::Error),
    #[error("failed to serialize deck: {0}")]
    SerializeToml(#[from] toml::ser::Error),
    #[error("unsupported deck_version: {0}, expected 1")]
    UnsupportedVersion(u32),
    #[error("carousel.interval_ms must be greater than zero")]
    ZeroInterval,
    #[error("slide {position} has an empty title")]
    EmptySlideTitle { position: usize },
    #[error("slide {position} has an empty action target")]
    EmptyActionTarget { position: usize },
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DeckV1 {
    pub deck_version: u32,
    #[serde(default)]
    pub carousel: CarouselSection,
    #[serde(default)]
    pub slides: Vec<Slide>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CarouselSection {
    #[serde(default = "default_autoplay")]
    pub autoplay: bool,
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl Default for CarouselSection {
    fn default() -> Self {
        Self {
            autoplay: default_autoplay(),
            interval_ms: default_interval_ms(),
        }
    }
}

fn default_autoplay() -> bool {
    true
}

fn default_interval_ms() -> u64 {
    DEFAULT_INTERVAL_MS
}

impl DeckV1 {
    pub fn new(slides: Vec<Slide>) -> Self {
        Self {
            deck_version: 1,
            carousel: CarouselSection::default(),
            slides,
        }
    }

    pub fn validate(&self) -> Result<(), DeckError> {
        if self.deck_version != 1 {
            return Err(DeckError::UnsupportedVersion(self.deck_version));
        }
        if self.carousel.interval_ms == 0 {
            return Err(DeckError::ZeroInterval);
        }
        for (i, slide) in self.slides.iter().enumerate() {
            let position = i + 1;
            if slide.title.trim().is_empty() {
                return Err(DeckError::EmptySlideTitle { position });
            }
            if let Some(action) = &slide.action {
                if action.target.trim().is_empty() {
                    return Err(DeckError::EmptyActionTarget { position });
                }
            }
        }
        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String, DeckError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

pub fn parse_deck_str(input: &str) -> Result<DeckV1, DeckError> {
    let deck: DeckV1 = toml::from_str(input)?;
    deck.validate()?;
    Ok(deck)
}

pub fn parse_deck_file(path: impl AsRef<Path>) -> Result<DeckV1, DeckError> {
    let content = fs::read_to_string(path)?;
    parse_deck_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_deck() {
        let input = r#"
deck_version = 1

[carousel]
autoplay = false
interval_ms = 3000

[[slides]]
title = "Secure Banking Solutions"
description = "Your trusted partner for all banking needs."
icon = "shield"

[slides.action]
label = "Learn More"
target = "learn-more"

[[slides]]
title = "24/7 Customer Support"
"#;
        let deck = parse_deck_str(input).expect("should parse");
        assert_eq!(deck.deck_version, 1);
        assert!(!deck.carousel.autoplay);
        assert_eq!(deck.carousel.interval_ms, 3000);
        assert_eq!(deck.slides.len(), 2);
        assert_eq!(deck.slides[0].icon.as_ref().unwrap(), "shield");
        assert_eq!(deck.slides[0].action_label(), Some("Learn More"));
        assert!(deck.slides[1].description.is_empty());
    }

    #[test]
    fn parses_minimal_deck_with_defaults() {
        let deck = parse_deck_str("deck_version = 1\n").expect("should parse");
        assert!(deck.carousel.autoplay);
        assert_eq!(deck.carousel.interval_ms, DEFAULT_INTERVAL_MS);
        assert!(deck.slides.is_empty());
    }

    #[test]
    fn rejects_zero_interval() {
        let input = r"
deck_version = 1
[carousel]
interval_ms = 0
";
        assert!(matches!(parse_deck_str(input), Err(DeckError::ZeroInterval)));
    }

    #[test]
    fn rejects_negative_interval_at_parse_time() {
        let input = r"
deck_version = 1
[carousel]
interval_ms = -5
";
        assert!(matches!(
            parse_deck_str(input),
            Err(DeckError::ParseToml(_))
        ));
    }

    #[test]
    fn rejects_unsupported_version() {
        assert!(matches!(
            parse_deck_str("deck_version = 2\n"),
            Err(DeckError::UnsupportedVersion(2))
        ));
    }

    #[test]
    fn rejects_blank_title_with_position() {
        let input = r#"
deck_version = 1
[[slides]]
title = "ok"
[[slides]]
title = "   "
"#;
        assert!(matches!(
            parse_deck_str(input),
            Err(DeckError::EmptySlideTitle { position: 2 })
        ));
    }

    #[test]
    fn rejects_empty_action_target() {
        let input = r#"
deck_version = 1
[[slides]]
title = "ok"
[slides.action]
target = ""
"#;
        assert!(matches!(
            parse_deck_str(input),
            Err(DeckError::EmptyActionTarget { position: 1 })
        ));
    }

    #[test]
    fn rejects_unknown_fields() {
        let input = r#"
deck_version = 1
[carousel]
speed = "fast"
"#;
        assert!(parse_deck_str(input).is_err());
    }

    #[test]
    fn rejects_missing_version() {
        assert!(parse_deck_str("[carousel]\nautoplay = true\n").is_err());
    }

    #[test]
    fn toml_output_parses_back() {
        let deck = DeckV1::new(vec![Slide::new("One", "first").with_icon("award")]);
        let text = deck.to_toml_string().unwrap();
        assert_eq!(parse_deck_str(&text).unwrap(), deck);
    }

    #[test]
    fn parse_deck_file_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("marquee.toml");
        fs::write(&path, "deck_version = 1\n[[slides]]\ntitle = \"Hi\"\n").unwrap();
        let deck = parse_deck_file(&path).unwrap();
        assert_eq!(deck.slides[0].title, "Hi");
    }

    #[test]
    fn parse_deck_file_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            parse_deck_file(dir.path().join("absent.toml")),
            Err(DeckError::Io(_))
        ));
    }
}
