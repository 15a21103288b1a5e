use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect) {
    let bg = Style::default().bg(Theme::BG_ELEVATED);
    let line = Line::from(vec![
        Span::styled(
            " NEURO",
            Style::default()
                .fg(Theme::ACCENT_CYAN)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "BIOMAR",
            Style::default()
                .fg(Theme::ACCENT_TEAL)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(Theme::BORDER_DIM)),
        Span::styled(
            "Ocean-inspired technology quiz",
            Style::default()
                .fg(Theme::TEXT_SECONDARY)
                .add_modifier(Modifier::ITALIC),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).style(bg), area);
}
