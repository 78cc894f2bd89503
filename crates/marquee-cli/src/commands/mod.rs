pub mod completions;
pub mod inspect;
pub mod man_pages;
pub mod new;
pub mod play;
pub mod presets;
pub mod run;
pub mod simulate;
pub mod validate;

use clap::Args;
use marquee_core::{Carousel, TimerPort};
use marquee_schema::{get_preset, parse_deck_file, DeckV1, Slide};
use std::path::{Path, PathBuf};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_DECK_ERROR: u8 = 2;

pub const DEFAULT_DECK: &str = "marquee.toml";

/// Where a command reads its deck from.
#[derive(Debug, Clone, Args)]
pub struct DeckSource {
    /// Path to a deck TOML file (defaults to ./marquee.toml).
    pub deck: Option<PathBuf>,
    /// Use a built-in preset instead of a deck file.
    #[arg(long, conflicts_with = "deck")]
    pub preset: Option<String>,
}

/// Deck settings that can be overridden for a single run.
#[derive(Debug, Clone, Copy, Args)]
pub struct PlaybackOverrides {
    /// Autoplay interval in milliseconds (overrides carousel.interval_ms).
    #[arg(long)]
    pub interval_ms: Option<u64>,
    /// Start paused regardless of carousel.autoplay.
    #[arg(long, default_value_t = false)]
    pub no_autoplay: bool,
}

impl DeckSource {
    pub fn load(&self) -> Result<DeckV1, String> {
        if let Some(name) = &self.preset {
            let preset = get_preset(name).ok_or_else(|| format!("unknown preset '{name}'"))?;
            return preset.parse().map_err(|e| format!("deck error: {e}"));
        }
        let path = self
            .deck
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DECK));
        load_deck_file(&path)
    }
}

impl PlaybackOverrides {
    pub fn apply(self, deck: &mut DeckV1) -> Result<(), String> {
        if let Some(ms) = self.interval_ms {
            deck.carousel.interval_ms = ms;
        }
        if self.no_autoplay {
            deck.carousel.autoplay = false;
        }
        deck.validate().map_err(|e| format!("deck error: {e}"))
    }
}

pub fn load_deck_file(path: &Path) -> Result<DeckV1, String> {
    parse_deck_file(path).map_err(|e| format!("deck error: {}: {e}", path.display()))
}

pub fn build_carousel<T: TimerPort>(
    source: &DeckSource,
    overrides: PlaybackOverrides,
    timer: T,
) -> Result<Carousel<Slide, T>, String> {
    let mut deck = source.load()?;
    overrides.apply(&mut deck)?;
    Carousel::from_deck(deck, timer).map_err(|e| e.to_string())
}

pub fn json_pretty(value: &impl serde::Serialize) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("JSON serialization failed: {e}"))
}

pub fn colorize_playback(playing: bool) -> String {
    use console::Style;
    if playing {
        Style::new().cyan().bold().apply_to("playing").to_string()
    } else {
        Style::new().yellow().apply_to("paused").to_string()
    }
}
