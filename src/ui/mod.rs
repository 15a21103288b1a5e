mod feedback;
mod header;
mod layout;
mod progress;
mod question_card;
mod status_bar;
mod summary;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Block;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(theme::Theme::BG_BASE)), area);

    let app_layout = layout::compute_layout(area);

    header::render(frame, app_layout.header);
    progress::render(frame, app_layout.progress, app_layout.timer, state);

    if state.engine.is_complete() {
        summary::render(frame, app_layout.content, state);
    } else {
        let (card, feedback_area) =
            layout::split_question(app_layout.content, feedback::height(state));
        question_card::render(frame, card, state);
        if let Some(feedback_area) = feedback_area {
            feedback::render(frame, feedback_area, state);
        }
    }

    status_bar::render(frame, app_layout.status_bar, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::quiz::{bank, QuizEngine};
    use ratatui::backend::TestBackend;

    fn screen_text(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn state() -> AppState {
        AppState::new(
            AppConfig::default(),
            QuizEngine::start(bank::builtin()).unwrap(),
        )
    }

    #[test]
    fn test_renders_active_question() {
        let state = state();
        let text = screen_text(&state);
        assert!(text.contains("NEURO"));
        assert!(text.contains("Question 1 of 7"));
        assert!(text.contains("Schools of fish"));
        assert!(text.contains("15s"));
        assert!(!text.contains("Feedback"));
    }

    #[test]
    fn test_renders_feedback_after_timeout() {
        let mut state = state();
        state.engine.timeout();
        let text = screen_text(&state);
        assert!(text.contains("Feedback"));
        assert!(text.contains("Time's up!"));
        assert!(text.contains("Harvard SEAS"));
    }

    #[test]
    fn test_renders_summary_when_complete() {
        let mut state = state();
        while !state.engine.is_complete() {
            let correct = state.engine.current_question().correct_choice;
            state.engine.select_choice(correct);
            state.engine.advance();
        }
        let text = screen_text(&state);
        assert!(text.contains("Quiz complete!"));
        assert!(text.contains("You got 7 of 7"));
        assert!(text.contains("Perfect!"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let state = state();
        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
        terminal.draw(|f| render(f, &state)).unwrap();
    }
}
