use crate::app::state::AppState;
use crate::quiz::engine::Phase;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, timer_area: Rect, state: &AppState) {
    let engine = &state.engine;

    let (ratio, label) = if engine.is_complete() {
        (1.0, format!("{} of {} answered", engine.total(), engine.total()))
    } else {
        (
            engine.progress().clamp(0.0, 1.0),
            format!("Question {} of {}", engine.current_index() + 1, engine.total()),
        )
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(Theme::border_type())
                .border_style(Theme::border()),
        )
        .gauge_style(Theme::gauge())
        .ratio(ratio)
        .label(Span::styled(label, Theme::title()));
    frame.render_widget(gauge, area);

    render_timer(frame, timer_area, state);
}

fn render_timer(frame: &mut Frame, area: Rect, state: &AppState) {
    let engine = &state.engine;
    let remaining = engine.time_remaining();

    let text = match engine.phase() {
        Phase::Active => Span::styled(
            format!("⏱ {:>2}/{}s", remaining, engine.time_budget()),
            Theme::timer(remaining),
        ),
        Phase::Locked => Span::styled("⏸ --", Theme::muted()),
        Phase::Complete => Span::styled("✔ done", Style::default().fg(Theme::CORRECT)),
    };

    let paragraph = Paragraph::new(Line::from(text))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(Theme::border_type())
                .border_style(Theme::border()),
        );
    frame.render_widget(paragraph, area);
}
