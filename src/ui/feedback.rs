use crate::app::state::AppState;
use crate::quiz::Outcome;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Rows the feedback panel wants, borders included. Zero while the question
/// is still open.
pub fn height(state: &AppState) -> u16 {
    if !state.engine.feedback_visible() {
        return 0;
    }
    let mut rows = 2 + 1 + 1; // borders, verdict, key hint
    if state.engine.current_outcome() != Some(Outcome::Correct) {
        rows += 1;
    }
    if state.config.ui.show_explanation {
        rows += 3;
    }
    if state.config.ui.show_source {
        rows += 1;
    }
    rows
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let engine = &state.engine;
    let Some(outcome) = engine.current_outcome() else {
        return;
    };
    let question = engine.current_question();

    let (headline, color) = match outcome {
        Outcome::Correct => ("Correct! 😊", Theme::CORRECT),
        Outcome::Incorrect => ("Incorrect.", Theme::WRONG),
        Outcome::TimedOut => ("Time's up! ⏱", Theme::WARNING),
    };

    let block = Block::default()
        .title(" Feedback ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(color))
        .padding(Padding::horizontal(1))
        .style(Theme::panel_bg());

    let mut lines = vec![Line::from(Span::styled(
        headline,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];

    if outcome != Outcome::Correct {
        lines.push(Line::from(vec![
            Span::styled("Answer: ", Theme::muted()),
            Span::styled(question.correct_text(), Theme::choice_correct()),
        ]));
    }

    if state.config.ui.show_explanation {
        lines.push(Line::from(Span::styled(
            question.explanation.as_str(),
            Theme::body(),
        )));
    }

    if state.config.ui.show_source {
        lines.push(Line::from(vec![
            Span::styled("Source: ", Theme::muted()),
            Span::styled(question.source_label.as_str(), Theme::body()),
            Span::styled(format!(" ({})", question.source_url), Theme::link()),
        ]));
    }

    let next = if engine.is_last() { "See result" } else { "Next" };
    let mut hint = vec![
        Span::styled("Enter ", Style::default().fg(Theme::ACCENT_TEAL).add_modifier(Modifier::BOLD)),
        Span::styled(next, Theme::body()),
    ];
    if state.config.quiz.auto_advance {
        hint.push(Span::styled(
            "  (continuing automatically)",
            Theme::muted().add_modifier(Modifier::ITALIC),
        ));
    }
    lines.push(Line::from(hint));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
