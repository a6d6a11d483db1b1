//! Tracing setup
//!
//! The terminal belongs to the UI, so log records go to a daily rolling file
//! instead of stderr. The filter comes from `RUST_LOG`, then the configured
//! level, then `textsift=info`.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "textsift=info";

/// Keeps the background log writer alive; drop it to flush
pub struct LoggingGuard {
    _guard: WorkerGuard,
}

/// Default log directory: `<data_local_dir>/textsift/logs`, else the temp dir
#[must_use]
pub fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("textsift")
        .join("logs")
}

/// Build the filter from `RUST_LOG`, the configured directive, or the default
#[must_use]
pub fn env_filter(level: Option<&str>) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    level
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber
///
/// Returns `None` when no log directory can be created or a subscriber is
/// already installed; the application runs without logs in that case.
pub fn init(log_dir: Option<&Path>, level: Option<&str>) -> Option<LoggingGuard> {
    let log_dir = log_dir.map_or_else(default_log_dir, Path::to_path_buf);
    let log_dir = std::fs::create_dir_all(&log_dir)
        .map(|()| log_dir)
        .or_else(|_| -> std::io::Result<PathBuf> {
            let dir = std::env::temp_dir().join("textsift").join("logs");
            std::fs::create_dir_all(&dir)?;
            Ok(dir)
        })
        .ok()?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "textsift.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let subscriber = tracing_subscriber::registry().with(env_filter(level)).with(
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .with_line_number(true),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    log_panics();

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");

    Some(LoggingGuard { _guard: guard })
}

/// Record panics in the log, then hand them to the previously installed hook
fn log_panics() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        tracing::error!(panic = %panic_info, "panic");
        previous(panic_info);
    }));
}
