use crate::app::state::AppState;
use crate::quiz::verdict::Verdict;
use crate::quiz::Outcome;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let engine = &state.engine;
    let verdict = Verdict::from_score(engine.score(), engine.total());

    let block = Block::default()
        .title(" Quiz complete! ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_accent())
        .padding(Padding::uniform(1))
        .style(Theme::panel_bg());

    let mut lines = vec![
        Line::from(Span::styled(
            format!("You got {} of {}", engine.score(), engine.total()),
            Style::default()
                .fg(Theme::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            verdict.message(),
            Style::default().fg(Theme::ACCENT_CYAN),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
    ];

    for (question, outcome) in engine.questions().iter().zip(engine.history()) {
        let (marker, style) = match outcome {
            Outcome::Correct => ("✔", Theme::choice_correct()),
            Outcome::Incorrect => ("✘", Theme::choice_wrong()),
            Outcome::TimedOut => ("⏱", Style::default().fg(Theme::WARNING)),
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(question.prompt.as_str(), Theme::body()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Theme::ACCENT_TEAL).add_modifier(Modifier::BOLD)),
            Span::styled(" play again   ", Theme::body()),
            Span::styled("q", Style::default().fg(Theme::ACCENT_TEAL).add_modifier(Modifier::BOLD)),
            Span::styled(" quit", Theme::body()),
        ])
        .alignment(Alignment::Center),
    );

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
