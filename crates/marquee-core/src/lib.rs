//! Carousel engine for Marquee.
//!
//! This crate holds the `Carousel` state machine: current slide, transition
//! direction, autoplay lifecycle, and the progress signal for the active
//! interval. Time is injected through the `TimerPort` trait (with a virtual
//! clock for deterministic hosts and a monotonic one for interactive hosts),
//! and output goes through the `Renderer` trait.

pub mod carousel;
pub mod concurrency;
pub mod direction;
pub mod lifecycle;
pub mod render;
pub mod timer;

pub use carousel::{Carousel, CarouselConfig};
pub use concurrency::{install_signal_handler, shutdown_requested};
pub use direction::Direction;
pub use lifecycle::{validate_transition, PlaybackState};
pub use render::{CarouselState, Renderer, StateSnapshot};
pub use timer::{SystemTimer, TimerHandle, TimerPort, VirtualClock, VirtualTimer};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("slide index {index} out of range for {len} slide(s)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("invalid playback transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },
    #[error("deck error: {0}")]
    Deck(#[from] marquee_schema::DeckError),
}
