//! Diagnostic logging to disk.
//!
//! The TUI owns stdout, so `tracing` output goes to `udgosh.log` inside the
//! configured log directory (default: `~/.local/share/udgosh/logs/`). The
//! filter comes from `RUST_LOG` when set, otherwise from `logging.level`.

use crate::config::{expand_home, LoggingConfig};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_FILE_NAME: &str = "udgosh.log";

/// Install the global subscriber. Returns the log file path when one was
/// opened. Without a file nothing is written anywhere.
pub fn init_tracing(config: &LoggingConfig) -> Option<PathBuf> {
    if !config.enabled {
        return None;
    }

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let log_path = log_file_path(config);
    if let Some(parent) = log_path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return None;
        }
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .ok()?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(env_filter)
        .init();

    tracing::info!(path = %log_path.display(), "Logging initialized");
    Some(log_path)
}

fn log_file_path(config: &LoggingConfig) -> PathBuf {
    expand_home(&config.log_dir).join(LOG_FILE_NAME)
}
