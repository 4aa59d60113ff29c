//! Application logging functionality
//!
//! Sets up the tracing subscriber for the binary: human-readable output on
//! stderr plus an optional dated log file under the config directory.

use crate::core::settings::Settings;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "glyphforge=info";

/// Filter used with `--verbose`
const VERBOSE_FILTER: &str = "glyphforge=debug";

/// Get the path to the logs directory
pub fn logs_dir() -> PathBuf {
    Settings::logs_dir()
}

/// Name of today's log file
pub fn current_log_file_name() -> String {
    let date = chrono::Local::now().format("%Y-%m-%d");
    format!("glyphforge-{date}.log")
}

/// Get the path to the current log file
pub fn current_log_file() -> PathBuf {
    logs_dir().join(current_log_file_name())
}

/// Initialize the logs directory
pub fn initialize_logs_directory() -> Result<PathBuf> {
    let dir = logs_dir();
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create logs directory {}", dir.display()))?;
    Ok(dir)
}

fn env_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new(VERBOSE_FILTER);
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber.
///
/// With `log_file`, events are also appended to today's file in
/// [`logs_dir`]. The returned guard flushes that file when dropped, so
/// keep it alive for the whole run.
pub fn init(verbose: bool, log_file: bool) -> Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let (file_layer, guard) = if log_file {
        let dir = initialize_logs_directory()?;
        let appender = tracing_appender::rolling::never(&dir, current_log_file_name());
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer().with_ansi(false).with_writer(writer);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    if log_file {
        tracing::info!("Logging to {}", current_log_file().display());
    }
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_is_dated() {
        let name = current_log_file_name();
        assert!(name.starts_with("glyphforge-"));
        assert!(name.ends_with(".log"));
        // glyphforge-YYYY-MM-DD.log
        assert_eq!(name.len(), "glyphforge-".len() + 10 + ".log".len());
        assert!(current_log_file().ends_with(&name));
    }
}
