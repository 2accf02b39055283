//! Application logging functionality
//!
//! Log lines go to stderr, and with `--log-file` also to a dated file
//! under ~/.config/letterart/logs/

use crate::core::config::ConfigFile;
use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Get the path to the logs directory
pub fn logs_dir() -> PathBuf {
    ConfigFile::config_dir().join("logs")
}

/// Name of today's log file
pub fn log_file_name() -> String {
    let timestamp = chrono::Local::now().format("%Y-%m-%d");
    format!("letterart-{}.log", timestamp)
}

/// Get the path to the current log file
pub fn current_log_file() -> PathBuf {
    logs_dir().join(log_file_name())
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins over the defaults; `verbose` raises the default from
/// `info` to `debug`. The returned guard flushes the log file on drop and
/// must live until the program exits.
pub fn init(verbose: bool, log_to_file: bool) -> Result<Option<WorkerGuard>> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), default_level))
    });

    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    if !log_to_file {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .try_init()?;
        return Ok(None);
    }

    let dir = logs_dir();
    fs::create_dir_all(&dir)?;
    let appender = tracing_appender::rolling::never(&dir, log_file_name());
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()?;

    tracing::info!("Logging to {:?}", current_log_file());
    Ok(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_is_dated() {
        let name = log_file_name();
        assert!(name.starts_with("letterart-"));
        assert!(name.ends_with(".log"));
        assert_eq!(name.len(), "letterart-2024-01-01.log".len());
    }
}
