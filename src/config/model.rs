//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the game works out of the box.

use crate::quiz::engine::{DEFAULT_FEEDBACK_DELAY, DEFAULT_TIME_BUDGET_SECS};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub quiz: QuizConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Gameplay constants for the quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizConfig {
    #[serde(default = "default_time_budget")]
    pub time_budget_secs: u32,
    #[serde(default = "default_feedback_delay")]
    pub feedback_delay_ms: u64,
    #[serde(default = "default_true")]
    pub auto_advance: bool,
    #[serde(default)]
    pub shuffle: bool,
    /// TOML question bank to play instead of the built-in one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions_file: Option<PathBuf>,
}

impl QuizConfig {
    pub fn feedback_delay(&self) -> Duration {
        Duration::from_millis(self.feedback_delay_ms)
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            time_budget_secs: default_time_budget(),
            feedback_delay_ms: default_feedback_delay(),
            auto_advance: true,
            shuffle: false,
            questions_file: None,
        }
    }
}

/// What the question screen shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_explanation: bool,
    #[serde(default = "default_true")]
    pub show_source: bool,
    #[serde(default)]
    pub bell_on_timeout: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_explanation: true,
            show_source: true,
            bell_on_timeout: false,
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_time_budget() -> u32 {
    DEFAULT_TIME_BUDGET_SECS
}
fn default_feedback_delay() -> u64 {
    DEFAULT_FEEDBACK_DELAY.as_millis() as u64
}
fn default_log_dir() -> String {
    "~/.local/share/neurobiomar/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
