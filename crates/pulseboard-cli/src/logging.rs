//! Tracing setup.
//!
//! Console commands log to stderr so stdout stays clean for `--format json`
//! and `--format csv`. The dashboard owns the terminal, so it logs to
//! `<data_dir>/pulseboard.log` through a non-blocking writer instead.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::args::LogLevel;

pub const LOG_FILE: &str = "pulseboard.log";

pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    pub fn file_in(data_dir: &Path) -> Self {
        LogTarget::File(data_dir.join(LOG_FILE))
    }
}

/// `RUST_LOG` wins over `--log-level` when set
fn build_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()))
}

/// Install the global subscriber. Keep the returned guard alive until exit or
/// buffered file output is lost.
pub fn init(level: LogLevel, target: LogTarget) -> Result<Option<WorkerGuard>> {
    let filter = build_filter(level);

    match target {
        LogTarget::Stderr => {
            let layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
                .ok();
            Ok(None)
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)?;
            let (writer, guard) = tracing_appender::non_blocking(file);

            let layer = fmt::layer()
                .with_ansi(false)
                .with_line_number(true)
                .with_writer(writer);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
                .ok();
            Ok(Some(guard))
        }
    }
}
