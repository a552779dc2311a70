//! Logging initialization.
//!
//! Logging is configured to write to a file, never to stderr,
//! because the TUI owns the terminal screen. `RUST_LOG` overrides the
//! configured level.

use crate::config::{LogLevel, LoggingConfig};
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging based on configuration.
///
/// Returns a guard that must be kept alive for the duration of the program
/// to ensure all logs are flushed.
pub fn init(config: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
    if config.level == LogLevel::Off {
        return Ok(None);
    }

    if let Some(parent) = config.file.parent() {
        fs::create_dir_all(parent)?;
    }

    // Append across sessions
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive(config.level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()?;

    tracing::info!(
        level = ?config.level,
        file = %config.file.display(),
        version = env!("CARGO_PKG_VERSION"),
        "Logging initialized"
    );

    Ok(Some(guard))
}

/// Filter directive for `level`, scoped to this crate.
fn directive(level: LogLevel) -> String {
    let level: tracing::Level = level.into();
    format!("epgrid={}", level.to_string().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_off_installs_nothing() {
        let config = LoggingConfig {
            level: LogLevel::Off,
            file: PathBuf::from("/nonexistent/epgrid/never.log"),
        };
        assert!(init(&config).unwrap().is_none());
        assert!(!config.file.exists());
    }

    #[test]
    fn test_directive_scopes_crate() {
        assert_eq!(directive(LogLevel::Debug), "epgrid=debug");
        assert_eq!(directive(LogLevel::Warn), "epgrid=warn");
        assert!(directive(LogLevel::Trace).parse::<EnvFilter>().is_ok());
    }
}
