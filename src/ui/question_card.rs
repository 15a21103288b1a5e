use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let engine = &state.engine;
    let question = engine.current_question();
    let locked = engine.feedback_visible();

    let block = Block::default()
        .title(format!(" Question {} ", engine.current_index() + 1))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_accent())
        .padding(Padding::horizontal(1))
        .style(Theme::panel_bg());

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(question.prompt.as_str(), Theme::prompt())),
        Line::from(""),
    ];

    for (i, choice) in question.choices.iter().enumerate() {
        let is_correct = question.is_correct(i);
        let is_selected = engine.selected_choice() == Some(i);

        let (marker, style) = if locked {
            if is_correct {
                ("✔", Theme::choice_correct())
            } else if is_selected {
                ("✘", Theme::choice_wrong())
            } else {
                (" ", Theme::muted())
            }
        } else if state.cursor == i {
            ("❯", Theme::choice_cursor())
        } else {
            (" ", Theme::choice())
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{} ", marker), style),
            Span::styled(format!("[{}] {}", i + 1, choice), style),
        ]));
    }

    if let Some(hint) = question.hint.as_deref() {
        lines.push(Line::from(""));
        if engine.hint_revealed() {
            lines.push(Line::from(vec![
                Span::styled("Hint: ", Style::default().fg(Theme::WARNING)),
                Span::styled(hint, Theme::body()),
            ]));
        } else if !locked {
            lines.push(Line::from(Span::styled(
                "Press h for a hint",
                Theme::muted().add_modifier(Modifier::ITALIC),
            )));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
