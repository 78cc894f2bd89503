use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual direction of the most recent transition.
///
/// Only renderers read this; index arithmetic never depends on it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// Direction of a jump from `from` to `to` by plain numeric comparison.
    ///
    /// Jumping from the last slide to the first is `Backward`, even though a
    /// wrapping `next` covers the same distance. Equal indices are `Backward`.
    pub fn between(from: usize, to: usize) -> Self {
        if to > from {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    /// `1` for forward, `-1` for backward. Renderers multiply offsets by this.
    pub fn signum(self) -> i8 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Backward => write!(f, "backward"),
        }
    }
}
