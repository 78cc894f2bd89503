use crate::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Playback phase of a carousel.
///
/// `Inert` is entered only at construction, for an empty slide list, and is
/// left only by disposal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
    Inert,
    Paused,
    Playing,
    Disposed,
}

impl PlaybackState {
    /// Whether `next`/`previous`/`go_to` may move the current index.
    pub fn accepts_navigation(self) -> bool {
        matches!(self, PlaybackState::Paused | PlaybackState::Playing)
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackState::Inert => write!(f, "inert"),
            PlaybackState::Paused => write!(f, "paused"),
            PlaybackState::Playing => write!(f, "playing"),
            PlaybackState::Disposed => write!(f, "disposed"),
        }
    }
}

pub fn validate_transition(from: PlaybackState, to: PlaybackState) -> Result<(), CoreError> {
    let valid = matches!(
        (from, to),
        (
            PlaybackState::Paused | PlaybackState::Playing,
            PlaybackState::Paused | PlaybackState::Playing
        ) | (
            PlaybackState::Inert | PlaybackState::Paused | PlaybackState::Playing,
            PlaybackState::Disposed
        )
    );

    if valid {
        Ok(())
    } else {
        Err(CoreError::InvalidTransition {
            from: from.to_string(),
            to: to.to_string(),
        })
    }
}
