use crate::direction::Direction;
use serde::Serialize;

/// Read-only view of a carousel handed to renderers.
#[derive(Debug)]
pub struct CarouselState<'a, S> {
    pub index: usize,
    pub len: usize,
    pub direction: Direction,
    pub playing: bool,
    /// Elapsed fraction of the current autoplay interval, `0.0` when paused.
    pub progress: f32,
    /// `None` only for an empty carousel.
    pub slide: Option<&'a S>,
}

impl<S> CarouselState<'_, S> {
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 1-based position for display, e.g. `"2/4"`; `"0/0"` when empty.
    pub fn position_label(&self) -> String {
        position_label(self.index, self.len)
    }
}

fn position_label(index: usize, len: usize) -> String {
    if len == 0 {
        "0/0".to_owned()
    } else {
        format!("{}/{}", index + 1, len)
    }
}

impl<S: Clone> CarouselState<'_, S> {
    pub fn snapshot(&self) -> StateSnapshot<S> {
        StateSnapshot {
            index: self.index,
            len: self.len,
            direction: self.direction,
            playing: self.playing,
            progress: self.progress,
            slide: self.slide.cloned(),
        }
    }
}

/// Owned, serializable copy of a [`CarouselState`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StateSnapshot<S> {
    pub index: usize,
    pub len: usize,
    pub direction: Direction,
    pub playing: bool,
    pub progress: f32,
    pub slide: Option<S>,
}

impl<S> StateSnapshot<S> {
    pub fn position_label(&self) -> String {
        position_label(self.index, self.len)
    }
}

/// Consumer of carousel state. The carousel never draws anything itself.
pub trait Renderer<S> {
    fn render(&mut self, state: &CarouselState<'_, S>);
}

impl<S, F> Renderer<S> for F
where
    F: FnMut(&CarouselState<'_, S>),
{
    fn render(&mut self, state: &CarouselState<'_, S>) {
        self(state);
    }
}
