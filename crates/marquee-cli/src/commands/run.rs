use super::{
    build_carousel, colorize_playback, json_pretty, DeckSource, PlaybackOverrides, EXIT_SUCCESS,
};
use indicatif::{ProgressBar, ProgressStyle};
use marquee_core::{shutdown_requested, CarouselState, Renderer, SystemTimer};
use marquee_schema::Slide;
use std::time::Duration;
use tracing::{debug, info};

/// Longest single sleep, so Ctrl-C is noticed promptly.
const POLL: Duration = Duration::from_millis(50);
const BAR_SCALE: u64 = 1000;

/// Headless renderer: a progress bar for the running interval plus one line
/// per slide change.
struct ProgressView {
    pb: ProgressBar,
    shown: Option<usize>,
    quiet: bool,
}

impl ProgressView {
    fn new(quiet: bool) -> Self {
        let pb = if quiet {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new(BAR_SCALE);
            pb.set_style(
                ProgressStyle::with_template("{prefix:>5} [{bar:30.cyan/blue}] {msg}")
                    .expect("valid template")
                    .progress_chars("=> "),
            );
            pb
        };
        Self {
            pb,
            shown: None,
            quiet,
        }
    }

    fn emit(&self, line: String) {
        if self.quiet {
            return;
        }
        if self.pb.is_hidden() {
            println!("{line}");
        } else {
            self.pb.println(line);
        }
    }
}

impl Renderer<Slide> for ProgressView {
    fn render(&mut self, state: &CarouselState<'_, Slide>) {
        let Some(slide) = state.slide else {
            return;
        };
        if self.shown != Some(state.index) {
            self.shown = Some(state.index);
            self.emit(format!("[{}] {}", state.position_label(), slide.title));
        }
        self.pb.set_prefix(state.position_label());
        self.pb.set_message(colorize_playback(state.playing));
        self.pb
            .set_position((state.progress * BAR_SCALE as f32) as u64);
    }
}

pub fn run(
    source: &DeckSource,
    overrides: PlaybackOverrides,
    ticks: Option<usize>,
    json: bool,
) -> Result<u8, String> {
    if overrides.no_autoplay {
        return Err("--no-autoplay cannot be used with run, which always plays".to_owned());
    }
    let mut carousel = build_carousel(source, overrides, SystemTimer::new())?;
    if carousel.is_empty() {
        return Err("deck has no slides to play".to_owned());
    }
    carousel.play();
    info!(
        "playing {} slide(s) every {}ms",
        carousel.len(),
        carousel.config().interval.as_millis()
    );

    let mut view = ProgressView::new(json);
    carousel.render(&mut view);

    let mut advances = 0usize;
    loop {
        if ticks.is_some_and(|limit| advances >= limit) {
            break;
        }
        if shutdown_requested() {
            debug!("shutdown requested after {advances} advance(s)");
            break;
        }
        advances += carousel.run_due();
        carousel.render(&mut view);

        let wait = carousel.remaining().map_or(POLL, |r| r.min(POLL));
        std::thread::sleep(wait);
    }
    view.pb.finish_and_clear();

    let snapshot = carousel.state().snapshot();
    carousel.dispose();

    if json {
        let payload = serde_json::json!({
            "advances": advances,
            "final": snapshot,
        });
        println!("{}", json_pretty(&payload)?);
    } else {
        println!("stopped after {advances} advance(s)");
    }
    Ok(EXIT_SUCCESS)
}
