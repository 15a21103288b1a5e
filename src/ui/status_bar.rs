use crate::app::state::AppState;
use crate::quiz::engine::Phase;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

fn key_hints(phase: Phase) -> &'static str {
    match phase {
        Phase::Active => "1-9/↑↓ Enter answer  h hint  r restart  q quit",
        Phase::Locked => "Enter next  r restart  q quit",
        Phase::Complete => "Enter play again  q quit",
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let status = format!(" {} ", state.status_line());
    let hints = format!(" {} ", key_hints(state.engine.phase()));

    // Pad to fill remaining space
    let used = status.width() + hints.width();
    let remaining = (area.width as usize).saturating_sub(used);

    let line = Line::from(vec![
        Span::styled(status, Theme::status_bar()),
        Span::styled(" ".repeat(remaining), Theme::status_bar()),
        Span::styled(hints, Theme::key_hint()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
