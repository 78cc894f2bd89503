use super::{build_carousel, json_pretty, DeckSource, PlaybackOverrides, EXIT_SUCCESS};
use marquee_core::{CarouselState, StateSnapshot, VirtualClock};
use marquee_schema::Slide;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One scripted interaction against a virtual clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Previous,
    GoTo(usize),
    Play,
    Pause,
    Toggle,
    Wait(u64),
    Dispose,
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (verb, arg) = match s.split_once(':') {
            Some((v, a)) => (v, Some(a)),
            None => (s, None),
        };
        let number = |what: &str| -> Result<u64, String> {
            let raw = arg.ok_or_else(|| format!("step '{s}' needs a {what}"))?;
            raw.parse()
                .map_err(|_| format!("step '{s}': invalid {what} '{raw}'"))
        };
        match verb {
            "next" => Ok(Self::Next),
            "prev" | "previous" => Ok(Self::Previous),
            "goto" => {
                let position = number("slide number")?;
                let index = usize::try_from(position)
                    .ok()
                    .and_then(|p| p.checked_sub(1))
                    .ok_or_else(|| format!("step '{s}': slide numbers start at 1"))?;
                Ok(Self::GoTo(index))
            }
            "play" => Ok(Self::Play),
            "pause" => Ok(Self::Pause),
            "toggle" => Ok(Self::Toggle),
            "wait" => Ok(Self::Wait(number("duration in ms")?)),
            "dispose" => Ok(Self::Dispose),
            _ => Err(format!(
                "unknown step '{s}' (expected: next, prev, goto:N, play, pause, toggle, wait:MS, dispose)"
            )),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Next => f.write_str("next"),
            Self::Previous => f.write_str("prev"),
            Self::GoTo(index) => write!(f, "goto:{}", index + 1),
            Self::Play => f.write_str("play"),
            Self::Pause => f.write_str("pause"),
            Self::Toggle => f.write_str("toggle"),
            Self::Wait(ms) => write!(f, "wait:{ms}"),
            Self::Dispose => f.write_str("dispose"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TranscriptEntry {
    pub step: String,
    pub at_ms: u128,
    pub advances: usize,
    pub state: StateSnapshot<Slide>,
}

/// Records one snapshot per rendered frame.
#[derive(Default)]
struct Transcript {
    frames: Vec<StateSnapshot<Slide>>,
}

impl marquee_core::Renderer<Slide> for Transcript {
    fn render(&mut self, state: &CarouselState<'_, Slide>) {
        self.frames.push(state.snapshot());
    }
}

pub fn parse_script(steps: &[String]) -> Result<Vec<Step>, String> {
    steps
        .iter()
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.parse())
        .collect()
}

/// Replay `steps` against a carousel driven by a virtual clock.
pub fn simulate(
    source: &DeckSource,
    overrides: PlaybackOverrides,
    steps: &[Step],
) -> Result<Vec<TranscriptEntry>, String> {
    let clock = VirtualClock::new();
    let mut carousel = build_carousel(source, overrides, clock.timer())?;
    let mut transcript = Transcript::default();

    carousel.render(&mut transcript);
    let mut labels = vec![("start".to_owned(), 0, clock.now().as_millis())];

    for (n, step) in steps.iter().enumerate() {
        let mut advances = 0;
        match *step {
            Step::Next => carousel.next(),
            Step::Previous => carousel.previous(),
            Step::GoTo(index) => carousel
                .go_to(index)
                .map_err(|e| format!("step {} ({step}): {e}", n + 1))?,
            Step::Play => carousel.play(),
            Step::Pause => carousel.pause(),
            Step::Toggle => carousel.toggle(),
            Step::Wait(ms) => {
                clock.advance_ms(ms);
                advances = carousel.run_due();
            }
            Step::Dispose => carousel.dispose(),
        }
        carousel.render(&mut transcript);
        labels.push((step.to_string(), advances, clock.now().as_millis()));
    }

    Ok(transcript
        .frames
        .into_iter()
        .zip(labels)
        .map(|(state, (step, advances, at_ms))| TranscriptEntry {
            step,
            at_ms,
            advances,
            state,
        })
        .collect())
}

pub fn run(
    source: &DeckSource,
    overrides: PlaybackOverrides,
    script: &[String],
    json: bool,
) -> Result<u8, String> {
    let steps = parse_script(script)?;
    let entries = simulate(source, overrides, &steps)?;
    if json {
        println!("{}", json_pretty(&entries)?);
        return Ok(EXIT_SUCCESS);
    }
    println!(
        "{:<10} {:>8} {:<6} {:<8} {:<9} TITLE",
        "STEP", "AT(ms)", "SLIDE", "STATE", "DIRECTION"
    );
    for entry in &entries {
        let s = &entry.state;
        let title = s.slide.as_ref().map_or("-", |slide| slide.title.as_str());
        println!(
            "{:<10} {:>8} {:<6} {:<8} {:<9} {title}",
            entry.step,
            entry.at_ms,
            s.position_label(),
            if s.playing { "playing" } else { "paused" },
            s.direction,
        );
    }
    Ok(EXIT_SUCCESS)
}
