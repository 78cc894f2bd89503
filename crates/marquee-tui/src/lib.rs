//! Terminal renderer for the Marquee carousel.
//!
//! This crate draws one carousel with ratatui: the active slide, a dots
//! indicator, and a progress gauge for the running autoplay interval. Keyboard
//! input drives navigation, play/pause, and slide actions.

mod app;
mod ui;

pub use app::{App, AppAction, View};

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use marquee_core::{Carousel, SystemTimer};
use marquee_schema::{ActionTarget, Slide};
use ratatui::prelude::*;
use std::io;
use std::time::Duration;

/// Upper bound on how long the loop blocks for input, so the progress gauge
/// keeps moving between autoplay wakeups.
const FRAME: Duration = Duration::from_millis(100);

/// Run the interactive player until the user quits.
///
/// Returns the action targets the user triggered, in order.
pub fn run(carousel: Carousel<Slide, SystemTimer>) -> Result<Vec<ActionTarget>, String> {
    enable_raw_mode().map_err(|e| format!("failed to enable raw mode: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| format!("alternate screen: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal init: {e}"))?;

    let mut app = App::new(carousel);

    let result = run_loop(&mut terminal, &mut app);
    app.carousel.dispose();

    disable_raw_mode().map_err(|e| format!("failed to disable raw mode: {e}"))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(|e| format!("leave alternate screen: {e}"))?;
    terminal
        .show_cursor()
        .map_err(|e| format!("show cursor: {e}"))?;

    result.map(|()| app.triggered)
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<SystemTimer>,
) -> Result<(), String> {
    loop {
        app.tick();
        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(|e| format!("draw: {e}"))?;

        let timeout = app.carousel.remaining().map_or(FRAME, |r| r.min(FRAME));
        if event::poll(timeout).map_err(|e| format!("poll: {e}"))? {
            if let Event::Key(key) = event::read().map_err(|e| format!("read: {e}"))? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match app.handle_key(key.code) {
                    AppAction::None | AppAction::Trigger(_) => {}
                    AppAction::Quit => return Ok(()),
                }
            }
        }
    }
}
