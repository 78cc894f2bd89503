use crate::direction::Direction;
use crate::lifecycle::{validate_transition, PlaybackState};
use crate::render::{CarouselState, Renderer};
use crate::timer::{TimerHandle, TimerPort};
use crate::CoreError;
use marquee_schema::{DeckV1, Slide};
use std::time::Duration;
use tracing::{debug, info, trace};

/// Construction parameters for a [`Carousel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselConfig {
    pub autoplay: bool,
    pub interval: Duration,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: true,
            interval: Duration::from_millis(marquee_schema::DEFAULT_INTERVAL_MS),
        }
    }
}

impl CarouselConfig {
    pub fn from_millis(autoplay: bool, interval_ms: u64) -> Self {
        Self {
            autoplay,
            interval: Duration::from_millis(interval_ms),
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.interval.is_zero() {
            return Err(CoreError::Configuration(
                "autoplay interval must be greater than zero".to_owned(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
struct ScheduledTick {
    handle: TimerHandle,
    deadline: Duration,
}

/// Rotating slide carousel.
///
/// Owns the current index, the last transition direction, the playback phase,
/// and at most one scheduled autoplay wakeup on its timer port. Slides are
/// fixed for the lifetime of the carousel; build a new one to change them.
///
/// Autoplay is fixed-rate: each wakeup advances one slide and schedules the
/// next one a full interval after the previous deadline, not after the moment
/// the host got around to delivering it. Manual navigation leaves the running
/// interval alone.
///
/// Dropping the carousel cancels its pending wakeup.
#[derive(Debug)]
pub struct Carousel<S, T: TimerPort> {
    slides: Vec<S>,
    config: CarouselConfig,
    timer: T,
    index: usize,
    direction: Direction,
    playback: PlaybackState,
    tick: Option<ScheduledTick>,
}

impl<T: TimerPort> Carousel<Slide, T> {
    /// Build a carousel from a parsed deck file.
    pub fn from_deck(deck: DeckV1, timer: T) -> Result<Self, CoreError> {
        deck.validate()?;
        let config = CarouselConfig::from_millis(deck.carousel.autoplay, deck.carousel.interval_ms);
        Self::new(deck.slides, config, timer)
    }
}

impl<S, T: TimerPort> Carousel<S, T> {
    /// Create a carousel over `slides`.
    ///
    /// An empty slide list is accepted: the carousel is then inert, never
    /// plays, and every navigation call is a no-op.
    pub fn new(slides: Vec<S>, config: CarouselConfig, timer: T) -> Result<Self, CoreError> {
        config.validate()?;

        let playback = if slides.is_empty() {
            PlaybackState::Inert
        } else {
            PlaybackState::Paused
        };
        let mut carousel = Self {
            slides,
            config,
            timer,
            index: 0,
            direction: Direction::Forward,
            playback,
            tick: None,
        };
        info!(
            "carousel created: {} slide(s), interval {}ms, autoplay {}",
            carousel.slides.len(),
            config.interval.as_millis(),
            config.autoplay
        );
        if config.autoplay {
            carousel.play();
        }
        Ok(carousel)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slides(&self) -> &[S] {
        &self.slides
    }

    pub fn config(&self) -> CarouselConfig {
        self.config
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn playback(&self) -> PlaybackState {
        self.playback
    }

    pub fn is_playing(&self) -> bool {
        self.playback == PlaybackState::Playing
    }

    pub fn is_disposed(&self) -> bool {
        self.playback == PlaybackState::Disposed
    }

    pub fn current_slide(&self) -> Option<&S> {
        self.slides.get(self.index)
    }

    pub fn next(&mut self) {
        if !self.navigable("next") {
            return;
        }
        self.advance();
    }

    pub fn previous(&mut self) {
        if !self.navigable("previous") {
            return;
        }
        let len = self.slides.len();
        self.direction = Direction::Backward;
        self.index = (self.index + len - 1) % len;
        debug!("previous -> slide {}", self.index);
    }

    /// Jump to `index`.
    ///
    /// Direction is `Forward` when `index` is numerically greater than the
    /// current index and `Backward` otherwise, including `index == current`.
    pub fn go_to(&mut self, index: usize) -> Result<(), CoreError> {
        if !self.navigable("go_to") {
            return Ok(());
        }
        let len = self.slides.len();
        if index >= len {
            return Err(CoreError::IndexOutOfRange { index, len });
        }
        self.direction = Direction::between(self.index, index);
        self.index = index;
        debug!("go_to -> slide {} ({})", self.index, self.direction);
        Ok(())
    }

    /// Start autoplay, replacing any scheduled wakeup with a fresh full interval.
    pub fn play(&mut self) {
        if !self.enter(PlaybackState::Playing) {
            return;
        }
        self.cancel_tick();
        let now = self.timer.now();
        let handle = self.timer.schedule(self.config.interval);
        self.tick = Some(ScheduledTick {
            handle,
            deadline: now.saturating_add(self.config.interval),
        });
        debug!("autoplay started at slide {}", self.index);
    }

    /// Stop autoplay. No advance happens after this returns until `play`.
    pub fn pause(&mut self) {
        if !self.enter(PlaybackState::Paused) {
            return;
        }
        self.cancel_tick();
        debug!("autoplay paused at slide {}", self.index);
    }

    pub fn toggle(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Release the timer and make every later call a no-op. Idempotent.
    pub fn dispose(&mut self) {
        if self.is_disposed() {
            return;
        }
        if !self.enter(PlaybackState::Disposed) {
            return;
        }
        self.cancel_tick();
        info!("carousel disposed");
    }

    /// Deliver every wakeup the timer port reports as due.
    ///
    /// Returns the number of autoplay advances performed. After a stall longer
    /// than one interval this catches up one advance per missed deadline.
    pub fn run_due(&mut self) -> usize {
        let mut advanced = 0;
        loop {
            let due = self.timer.take_due();
            if due.is_empty() {
                break;
            }
            for handle in due {
                if self.fire(handle) {
                    advanced += 1;
                }
            }
        }
        advanced
    }

    /// Elapsed fraction of the running interval, in `[0.0, 1.0]`.
    ///
    /// Always `0.0` unless playing.
    pub fn progress(&self) -> f32 {
        let Some(tick) = self.tick.filter(|_| self.is_playing()) else {
            return 0.0;
        };
        let started = tick.deadline.saturating_sub(self.config.interval);
        let elapsed = self.timer.now().saturating_sub(started);
        let fraction = elapsed.as_secs_f64() / self.config.interval.as_secs_f64();
        fraction.clamp(0.0, 1.0) as f32
    }

    /// Time left until the next autoplay advance, if playing.
    pub fn remaining(&self) -> Option<Duration> {
        self.tick
            .filter(|_| self.is_playing())
            .map(|tick| tick.deadline.saturating_sub(self.timer.now()))
    }

    pub fn state(&self) -> CarouselState<'_, S> {
        CarouselState {
            index: self.index,
            len: self.slides.len(),
            direction: self.direction,
            playing: self.is_playing(),
            progress: self.progress(),
            slide: self.current_slide(),
        }
    }

    pub fn render<R: Renderer<S> + ?Sized>(&self, renderer: &mut R) {
        renderer.render(&self.state());
    }

    fn fire(&mut self, handle: TimerHandle) -> bool {
        let Some(tick) = self.tick.filter(|t| t.handle == handle) else {
            trace!("ignoring stale timer {}", handle.id());
            return false;
        };
        self.advance();

        let deadline = tick.deadline.saturating_add(self.config.interval);
        let delay = deadline.saturating_sub(self.timer.now());
        let handle = self.timer.schedule(delay);
        self.tick = Some(ScheduledTick { handle, deadline });
        true
    }

    fn advance(&mut self) {
        self.direction = Direction::Forward;
        self.index = (self.index + 1) % self.slides.len();
        debug!("next -> slide {}", self.index);
    }

    fn navigable(&self, op: &str) -> bool {
        if self.playback.accepts_navigation() {
            true
        } else {
            debug!("{op} ignored: carousel is {}", self.playback);
            false
        }
    }

    fn enter(&mut self, to: PlaybackState) -> bool {
        match validate_transition(self.playback, to) {
            Ok(()) => {
                self.playback = to;
                true
            }
            Err(e) => {
                debug!("{e}; ignoring");
                false
            }
        }
    }

    fn cancel_tick(&mut self) {
        if let Some(tick) = self.tick.take() {
            self.timer.cancel(tick.handle);
        }
    }
}

impl<S, T: TimerPort> Drop for Carousel<S, T> {
    fn drop(&mut self) {
        self.cancel_tick();
    }
}
