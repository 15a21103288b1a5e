use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub progress: Rect,
    pub timer: Rect,
    pub content: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: header | progress | content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Progress + timer
            Constraint::Min(8),    // Question or summary
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    // Progress row: gauge | gap | countdown
    let progress_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([Constraint::Min(20), Constraint::Length(12)])
        .split(main_chunks[1]);

    AppLayout {
        header: main_chunks[0],
        progress: progress_chunks[0],
        timer: progress_chunks[1],
        content: main_chunks[2],
        status_bar: main_chunks[3],
    }
}

/// Split the question area into the card and, when feedback is showing, the
/// feedback panel below it.
pub fn split_question(area: Rect, feedback_height: u16) -> (Rect, Option<Rect>) {
    if feedback_height == 0 {
        return (area, None);
    }
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(feedback_height)])
        .split(area);
    (chunks[0], Some(chunks[1]))
}
