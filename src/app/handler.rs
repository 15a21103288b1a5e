use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::quiz::engine::{Advance, Lock, Phase, TickResult};
use crate::quiz::{LockToken, Outcome};
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, trace};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Tick => handle_tick(state),
        AppEvent::AutoAdvance(token) => {
            handle_auto_advance(state, token);
            vec![]
        }
    }
}

fn handle_tick(state: &mut AppState) -> Vec<Action> {
    match state.engine.tick() {
        TickResult::Ignored => vec![],
        TickResult::Counting(remaining) => {
            trace!(remaining, "tick");
            state.dirty = true;
            vec![]
        }
        TickResult::Locked(lock) => {
            if state.config.ui.bell_on_timeout {
                state.pending_bell = true;
            }
            on_lock(state, lock)
        }
    }
}

fn handle_auto_advance(state: &mut AppState, token: LockToken) {
    let result = state.engine.advance_if_current(token);
    if result == Advance::Ignored {
        debug!(index = token.index(), "auto-advance had nothing to do");
    }
    after_advance(state, result);
}

fn on_lock(state: &mut AppState, lock: Lock) -> Vec<Action> {
    state.dirty = true;
    state.status_message = Some(
        match lock.outcome {
            Outcome::Correct => "Correct!",
            Outcome::Incorrect => "Incorrect.",
            Outcome::TimedOut => "Time's up!",
        }
        .to_string(),
    );

    if state.config.quiz.auto_advance {
        vec![Action::ScheduleAdvance {
            token: lock.token,
            delay: state.config.quiz.feedback_delay(),
        }]
    } else {
        vec![]
    }
}

fn after_advance(state: &mut AppState, result: Advance) {
    match result {
        Advance::Ignored => {}
        Advance::Next(index) => {
            debug!(index, "showing next question");
            state.status_message = None;
            state.reset_cursor();
        }
        Advance::Completed { score, total } => {
            debug!(score, total, "showing summary");
            state.status_message = None;
            state.reset_cursor();
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => return vec![Action::Quit],
        KeyCode::Char('r') => {
            state.restart();
            return vec![];
        }
        _ => {}
    }

    match state.engine.phase() {
        Phase::Active => handle_active_key(state, key),
        Phase::Locked => {
            if matches!(
                key.code,
                KeyCode::Enter | KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('n')
            ) {
                let result = state.engine.advance();
                after_advance(state, result);
            }
            vec![]
        }
        Phase::Complete => {
            if key.code == KeyCode::Enter {
                state.restart();
            }
            vec![]
        }
    }
}

fn handle_active_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.move_cursor_up();
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.move_cursor_down();
            vec![]
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            let cursor = state.cursor;
            select(state, cursor)
        }
        KeyCode::Char('h') => {
            if !state.engine.reveal_hint() {
                state.status_message = Some("No hint for this question".to_string());
            }
            vec![]
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            select(state, index)
        }
        _ => vec![],
    }
}

fn select(state: &mut AppState, index: usize) -> Vec<Action> {
    match state.engine.select_choice(index) {
        Some(lock) => {
            state.cursor = index;
            on_lock(state, lock)
        }
        None => vec![],
    }
}
