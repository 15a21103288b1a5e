mod app;
mod config;
mod logging;
mod quiz;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::quiz::{bank, QuizEngine};
use anyhow::{Context, Result};
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use rand::seq::SliceRandom;
use ratatui::prelude::*;
use std::io::{self, Write};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Real-time length of one quiz tick.
const TICK_PERIOD: Duration = Duration::from_secs(1);

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let cfg = config::load_config()?;
    if let Some(path) = logging::init(&cfg.logging)? {
        info!(log = %path.display(), "logging started");
    }

    // Build the session before touching the terminal so bank errors print normally
    let engine = build_engine(&cfg)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, AppState::new(cfg, engine)).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

fn build_engine(cfg: &config::AppConfig) -> Result<QuizEngine> {
    let mut questions = match &cfg.quiz.questions_file {
        Some(path) => bank::load_file(path)?,
        None => bank::builtin(),
    };
    if cfg.quiz.shuffle {
        questions.shuffle(&mut rand::rng());
    }
    QuizEngine::with_time_budget(questions, cfg.quiz.time_budget_secs)
        .context("Cannot start the quiz")
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut state: AppState,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Spawn tick task, first tick one full period after start
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let start = tokio::time::Instant::now() + TICK_PERIOD;
        let mut interval = tokio::time::interval_at(start, TICK_PERIOD);
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        // Process actions
        for action in actions {
            match action {
                Action::ScheduleAdvance { token, delay } => {
                    let advance_tx = event_tx.clone();
                    tokio::spawn(async move {
                        tokio::time::sleep(delay).await;
                        if advance_tx.send(AppEvent::AutoAdvance(token)).is_err() {
                            warn!("event loop closed before auto-advance");
                        }
                    });
                }
                Action::Quit => {
                    state.should_quit = true;
                }
            }
        }

        if state.should_quit {
            info!(
                score = state.engine.score(),
                index = state.engine.current_index(),
                "quitting"
            );
            break;
        }

        // Bell
        if state.pending_bell {
            let _ = io::stdout().write_all(b"\x07");
            let _ = io::stdout().flush();
            state.pending_bell = false;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}
