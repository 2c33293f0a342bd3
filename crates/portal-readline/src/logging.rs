use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// File name prefix of the daily log files.
const LOG_FILE_PREFIX: &str = "portal.log";

/// Filter directive for the configured level and the `-v` count.
///
/// 0 keeps the configured level, 1 (-v) raises the portal crates to debug,
/// 2+ (-vv) enables trace everywhere.
fn directive(level: &str, verbosity: u8) -> String {
    match verbosity {
        0 => level.to_string(),
        1 => format!(
            "{},portal_application=debug,portal_interaction=debug,portal_infrastructure=debug",
            level
        ),
        _ => "trace".to_string(),
    }
}

/// Sends tracing output to a daily-rolling file in `logs_dir`.
///
/// The terminal belongs to the REPL, so nothing is written to stderr. Keep
/// the returned guard alive until exit or buffered lines are lost.
pub fn init_logging(logs_dir: &Path, level: &str, verbosity: u8) -> Result<WorkerGuard> {
    std::fs::create_dir_all(logs_dir)
        .with_context(|| format!("failed to create log directory {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive(level, verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .init();

    Ok(guard)
}
