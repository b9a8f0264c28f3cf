//! File logging for the TUI
//!
//! The terminal belongs to ratatui, so every event goes to a daily rolling
//! file under the local data directory. `AGDECK_LOG` takes an `EnvFilter`
//! directive, e.g. `AGDECK_LOG=agdeck_app=trace`.

use std::path::{Path, PathBuf};

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

pub const LOG_ENV: &str = "AGDECK_LOG";
pub const LOG_FILE_PREFIX: &str = "agdeck.log";
const DEFAULT_DIRECTIVES: &str = "agency_deck=info,agdeck_app=info,agdeck_tui=info,warn";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Install the global subscriber writing to [`log_directory`].
pub fn init() -> Result<()> {
    init_in(&log_directory())
}

/// Install the global subscriber writing to `dir`, creating it first.
pub fn init_in(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    let appender = RollingFileAppender::new(Rotation::DAILY, dir, LOG_FILE_PREFIX);

    let file_layer = fmt::layer()
        .with_writer(appender)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_timer(fmt::time::ChronoLocal::new(TIMESTAMP_FORMAT.to_string()));

    tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .init();

    tracing::info!("──── Agency Deck starting ────");
    tracing::info!("Logging to {}", dir.display());
    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// `<local data dir>/agency-deck/logs`, or `./agency-deck/logs` when the
/// platform has no data directory.
pub fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("agency-deck")
        .join("logs")
}
