//! Diagnostic logging with daily rotation.
//!
//! stdout carries the scrubbed event stream, so diagnostics always go to a
//! rolling file under the configured log directory.

use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};

use anyhow::{Context, Result};
use time::macros::format_description;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::time::OffsetTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "exfilter";

/// Log files older than this are removed on startup.
const RETENTION: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Initialize the logging system, writing to `log_path`.
pub fn init(log_path: &Path) -> Result<()> {
    if !log_path.exists() {
        fs::create_dir_all(log_path)
            .with_context(|| format!("Failed to create log directory: {}", log_path.display()))?;
    }

    cleanup_old_logs(log_path)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_path, LOG_FILE_PREFIX);

    let time_format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let local_offset = time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC);
    let timer = OffsetTime::new(local_offset, time_format);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()))
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_timer(timer),
        );

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    Ok(())
}

/// Remove exfilter log files past the retention window.
pub fn cleanup_old_logs(log_path: &Path) -> Result<()> {
    let cutoff = SystemTime::now() - RETENTION;

    if !log_path.exists() {
        return Ok(());
    }

    for entry in fs::read_dir(log_path)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let is_ours = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with(LOG_FILE_PREFIX));
        if !is_ours {
            continue;
        }

        let expired = entry
            .metadata()
            .and_then(|m| m.modified())
            .map(|modified| modified < cutoff)
            .unwrap_or(false);
        if expired {
            let _ = fs::remove_file(&path);
        }
    }

    Ok(())
}
