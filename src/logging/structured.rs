//! Structured logging setup
//!
//! Console output is always on. Service deployments can additionally enable
//! a JSON file layer with rotation through the `[logging]` configuration
//! section; the CLI leaves it off.

use crate::config::LoggingConfig;
use crate::domain::{FolioError, Result};
use tracing::Level;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Keeps the background log writer alive
///
/// Dropping the guard flushes and stops the file appender, so the caller
/// holds it for the lifetime of the program.
pub struct LoggingGuard(#[allow(dead_code)] Option<WorkerGuard>);

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence when set; otherwise the filter is
/// `folio=<level>`.
///
/// # Errors
///
/// Returns [`FolioError::Configuration`] for an unknown level name or an
/// uncreatable log directory.
pub fn init_logging(level: &str, config: &LoggingConfig) -> Result<LoggingGuard> {
    let level: Level = level.parse().map_err(|_| {
        FolioError::Configuration(format!(
            "Unknown log level '{level}', expected trace, debug, info, warn or error"
        ))
    })?;
    let filter = || {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("folio={level}")))
    };

    let console = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_filter(filter())
        .boxed();

    let (file, guard) = match file_writer(config)? {
        Some((writer, guard)) => {
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(writer)
                .with_filter(filter())
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry().with(console).with(file).init();

    tracing::debug!(
        file_logging = config.local_enabled,
        directory = %config.local_path,
        "Logging initialized"
    );
    Ok(LoggingGuard(guard))
}

/// Build the rolling file writer when file logging is enabled
fn file_writer(config: &LoggingConfig) -> Result<Option<(NonBlocking, WorkerGuard)>> {
    if !config.local_enabled {
        return Ok(None);
    }

    std::fs::create_dir_all(&config.local_path).map_err(|e| {
        FolioError::Configuration(format!(
            "Cannot create log directory {}: {e}",
            config.local_path
        ))
    })?;

    let rotation = if config.local_rotation == "hourly" {
        Rotation::HOURLY
    } else {
        // "size" rotation rolls daily as well; the size cap is advisory.
        Rotation::DAILY
    };
    let appender = RollingFileAppender::new(rotation, &config.local_path, "folio.log");
    Ok(Some(tracing_appender::non_blocking(appender)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_writer_disabled() {
        let config = LoggingConfig {
            local_enabled: false,
            ..LoggingConfig::default()
        };
        assert!(file_writer(&config).unwrap().is_none());
    }

    #[test]
    fn test_file_writer_creates_the_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logs");
        let config = LoggingConfig {
            local_enabled: true,
            local_path: path.to_str().unwrap().to_string(),
            ..LoggingConfig::default()
        };

        let writer = file_writer(&config).unwrap();
        assert!(writer.is_some());
        assert!(path.is_dir());
    }
}
