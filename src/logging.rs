//! Logging setup.
//!
//! The terminal is in raw mode while the game runs, so logs only ever go to a
//! file. Without a configured path no subscriber is installed and `tracing`
//! macros are no-ops.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::engine::GameConfig;

/// Install the file logger described by `config`.
///
/// The returned guard flushes buffered lines on drop; keep it alive until exit.
/// `RUST_LOG` takes precedence over the configured filter. A bad filter is
/// rejected before anything is created on disk.
pub fn init(config: &GameConfig) -> Result<Option<WorkerGuard>> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(None);
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .with_context(|| format!("invalid log filter {:?}", config.log_filter))?;

    let file_name = path
        .file_name()
        .with_context(|| format!("log path {} has no file name", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init()
        .context("failed to install log subscriber")?;

    Ok(Some(guard))
}
