use crate::app::{App, View};
use marquee_core::{CarouselState, Renderer, TimerPort};
use marquee_schema::Slide;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

pub fn draw<T: TimerPort>(f: &mut Frame<'_>, app: &App<T>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(7),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_header(f, app.carousel.is_playing(), chunks[0]);

    match app.view {
        View::Slides => {
            let mut view = SlideView {
                frame: &mut *f,
                slide_area: chunks[1],
                dots_area: chunks[2],
                progress_area: chunks[3],
            };
            app.carousel.render(&mut view);
        }
        View::Help => draw_help(f, chunks[1]),
    }

    draw_status_bar(f, app, chunks[4]);
}

/// Draws one carousel state into the slide, dots, and progress rows.
struct SlideView<'f, 'b> {
    frame: &'f mut Frame<'b>,
    slide_area: Rect,
    dots_area: Rect,
    progress_area: Rect,
}

impl Renderer<Slide> for SlideView<'_, '_> {
    fn render(&mut self, state: &CarouselState<'_, Slide>) {
        let arrow = if state.direction.signum() > 0 { "▶" } else { "◀" };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {arrow} {} ", state.position_label()));

        let Some(slide) = state.slide else {
            let msg = Paragraph::new("  No slides in this deck. Press 'q' to quit.").block(block);
            self.frame.render_widget(msg, self.slide_area);
            return;
        };

        let body = Paragraph::new(slide_lines(slide))
            .alignment(Alignment::Center)
            .block(block)
            .wrap(Wrap { trim: true });
        self.frame.render_widget(body, self.slide_area);

        let dots = Paragraph::new(dots_line(state.index, state.len)).alignment(Alignment::Center);
        self.frame.render_widget(dots, self.dots_area);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::White).bg(Color::DarkGray))
            .ratio(f64::from(state.progress).clamp(0.0, 1.0))
            .label("");
        self.frame.render_widget(gauge, self.progress_area);
    }
}

fn slide_lines(slide: &Slide) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    if let Some(icon) = &slide.icon {
        lines.push(Line::from(icon_glyph(icon)));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        slide.title.as_str(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(slide.description.as_str()));
    if let Some(label) = slide.action_label() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("[ {label} ]"),
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
    }
    lines
}

fn dots_line(active: usize, len: usize) -> Line<'static> {
    let spans: Vec<Span<'static>> = (0..len)
        .map(|i| {
            if i == active {
                Span::styled("● ", Style::default().fg(Color::White))
            } else {
                Span::styled("○ ", Style::default().fg(Color::DarkGray))
            }
        })
        .collect();
    Line::from(spans)
}

fn icon_glyph(name: &str) -> &'static str {
    match name {
        "shield" => "🛡",
        "clock" => "⏰",
        "award" => "🏆",
        "users" => "👥",
        _ => "◆",
    }
}

fn draw_header(f: &mut Frame<'_>, playing: bool, area: Rect) {
    let indicator = if playing { "▶ playing" } else { "⏸ paused" };
    let title = Paragraph::new(format!(
        " Marquee  v{}   {indicator}",
        env!("CARGO_PKG_VERSION")
    ))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(title, area);
}

fn draw_help(f: &mut Frame<'_>, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            "Keybindings",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  → / l       Next slide"),
        Line::from("  ← / h       Previous slide"),
        Line::from("  1-9         Jump to slide"),
        Line::from("  Home / End  First / last slide"),
        Line::from("  Space / p   Play / pause"),
        Line::from("  Enter       Trigger slide action"),
        Line::from("  ?           Show this help"),
        Line::from("  q / Esc     Quit / Back"),
    ];

    let help = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(" Help "))
        .wrap(Wrap { trim: false });

    f.render_widget(help, area);
}

fn draw_status_bar<T: TimerPort>(f: &mut Frame<'_>, app: &App<T>, area: Rect) {
    let status = Paragraph::new(format!(
        " {} │ [←/→] nav  [space] play/pause  [Enter] action  [?] help  [q] quit",
        app.status_message
    ))
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
