//! File logging. Stdout belongs to the terminal UI, so nothing is printed there.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_ENV: &str = "CODE_EXPLORER_LOG";
const LOG_FILE: &str = "code-explorer.log";

#[must_use]
pub fn default_log_path() -> Option<PathBuf> {
    crate::config::config_dir().map(|dir| dir.join(LOG_FILE))
}

/// The filter directive: the env var wins over the configured level.
#[must_use]
pub fn filter_directive(env: Option<&str>, config_level: &str) -> String {
    match env.map(str::trim) {
        Some(directive) if !directive.is_empty() => directive.to_string(),
        _ => config_level.to_string(),
    }
}

/// Installs the global subscriber writing to `path`.
///
/// Keep the returned guard alive until exit, it flushes the writer on drop.
pub fn init(path: &Path, config_level: &str) -> Result<WorkerGuard> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    let file_name = path
        .file_name()
        .context("log path has no file name")?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let env = std::env::var(LOG_ENV).ok();
    let directive = filter_directive(env.as_deref(), config_level);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false).with_target(false))
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::info!(path = %path.display(), %directive, "logging started");
    Ok(guard)
}
