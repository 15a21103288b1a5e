//! Diagnostic logging to disk.
//!
//! When enabled, installs a `tracing` subscriber writing to a daily file named
//! `neurobiomar_<date>.log` in the configured log directory (default:
//! `~/.local/share/neurobiomar/logs/`). Nothing is written to the terminal,
//! which belongs to the UI for the whole session.

use crate::config::{expand_home, LoggingConfig};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;

pub fn log_file_path(config: &LoggingConfig, date: NaiveDate) -> PathBuf {
    let filename = format!("neurobiomar_{}.log", date.format("%Y-%m-%d"));
    expand_home(&config.log_dir).join(filename)
}

/// Unknown level names fall back to `info`.
pub fn parse_level(level: &str) -> Level {
    level.trim().parse().unwrap_or(Level::INFO)
}

/// Install the file subscriber. Returns the log path, or `None` when logging
/// is disabled.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let path = log_file_path(config, chrono::Local::now().date_naive());
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(parse_level(&config.level))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(Some(path))
}
