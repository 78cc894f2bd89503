use crossterm::event::KeyCode;
use marquee_core::{Carousel, TimerPort};
use marquee_schema::{ActionTarget, Slide};
use tracing::debug;

#[derive(Debug, PartialEq, Eq)]
pub enum AppAction {
    None,
    Quit,
    Trigger(ActionTarget),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Slides,
    Help,
}

pub struct App<T: TimerPort> {
    pub carousel: Carousel<Slide, T>,
    pub view: View,
    pub status_message: String,
    pub triggered: Vec<ActionTarget>,
}

impl<T: TimerPort> App<T> {
    pub fn new(carousel: Carousel<Slide, T>) -> Self {
        let status_message = if carousel.is_empty() {
            "deck has no slides".to_owned()
        } else {
            format!("{} slide(s)", carousel.len())
        };
        Self {
            carousel,
            view: View::Slides,
            status_message,
            triggered: Vec::new(),
        }
    }

    /// Deliver due autoplay wakeups. Returns whether the slide changed.
    pub fn tick(&mut self) -> bool {
        self.carousel.run_due() > 0
    }

    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        if self.view == View::Help {
            return match key {
                KeyCode::Char('q' | '?') | KeyCode::Esc => {
                    self.view = View::Slides;
                    AppAction::None
                }
                _ => AppAction::None,
            };
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => AppAction::Quit,
            KeyCode::Char('?') => {
                self.view = View::Help;
                AppAction::None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.carousel.next();
                AppAction::None
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.carousel.previous();
                AppAction::None
            }
            KeyCode::Char(' ' | 'p') => {
                self.carousel.toggle();
                self.status_message = if self.carousel.is_playing() {
                    "playing".to_owned()
                } else {
                    "paused".to_owned()
                };
                AppAction::None
            }
            KeyCode::Home => {
                self.jump(0);
                AppAction::None
            }
            KeyCode::End => {
                self.jump(self.carousel.len().saturating_sub(1));
                AppAction::None
            }
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(digit) = c.to_digit(10) {
                    self.jump(digit as usize - 1);
                }
                AppAction::None
            }
            KeyCode::Enter => self.trigger_action(),
            _ => AppAction::None,
        }
    }

    fn jump(&mut self, index: usize) {
        if let Err(e) = self.carousel.go_to(index) {
            self.status_message = e.to_string();
        }
    }

    fn trigger_action(&mut self) -> AppAction {
        let Some(action) = self
            .carousel
            .current_slide()
            .and_then(|s| s.action.as_ref())
        else {
            "this slide has no action".clone_into(&mut self.status_message);
            return AppAction::None;
        };
        debug!("action triggered: {}", action.target);
        self.status_message = format!("{} → {}", action.label(), action.target);
        self.triggered.push(action.target.clone());
        AppAction::Trigger(action.target.clone())
    }
}
