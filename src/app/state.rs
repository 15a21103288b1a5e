use crate::config::AppConfig;
use crate::quiz::engine::Phase;
use crate::quiz::QuizEngine;

pub struct AppState {
    pub config: AppConfig,
    pub engine: QuizEngine,
    /// Highlighted choice while the current question is open.
    pub cursor: usize,
    pub should_quit: bool,
    pub dirty: bool,
    pub pending_bell: bool,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig, engine: QuizEngine) -> Self {
        Self {
            config,
            engine,
            cursor: 0,
            should_quit: false,
            dirty: true,
            pending_bell: false,
            status_message: None,
        }
    }

    pub fn move_cursor_up(&mut self) {
        let len = self.engine.current_question().choices.len();
        self.cursor = if self.cursor == 0 {
            len - 1
        } else {
            self.cursor - 1
        };
        self.dirty = true;
    }

    pub fn move_cursor_down(&mut self) {
        let len = self.engine.current_question().choices.len();
        self.cursor = (self.cursor + 1) % len;
        self.dirty = true;
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
        self.dirty = true;
    }

    /// Throw away the current session and start over, reshuffling when
    /// configured to.
    pub fn restart(&mut self) {
        if self.config.quiz.shuffle {
            self.engine.restart_shuffled(&mut rand::rng());
        } else {
            self.engine.restart();
        }
        self.status_message = None;
        self.reset_cursor();
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        let engine = &self.engine;
        match engine.phase() {
            Phase::Complete => format!("Finished | Score: {}/{}", engine.score(), engine.total()),
            _ => format!(
                "Question {}/{} | Score: {}",
                engine.current_index() + 1,
                engine.total(),
                engine.score()
            ),
        }
    }
}
