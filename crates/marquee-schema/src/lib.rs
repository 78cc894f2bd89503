//! Deck files, slide records, and built-in presets for Marquee.
//!
//! This crate defines the content layer: TOML deck parsing (`DeckV1`),
//! validation of carousel settings and slides, the `Slide` display record the
//! carousel rotates, and the built-in preset decks.

pub mod deck;
pub mod preset;
pub mod slide;
pub mod types;

pub use deck::{
    parse_deck_file, parse_deck_str, CarouselSection, DeckError, DeckV1, DEFAULT_INTERVAL_MS,
};
pub use preset::{get_preset, list_presets, Preset, BUILTIN_PRESETS};
pub use slide::{Slide, SlideAction, DEFAULT_ACTION_LABEL};
pub use types::{ActionTarget, IconName};
