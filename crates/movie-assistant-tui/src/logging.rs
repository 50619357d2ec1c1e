use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "movie_assistant=info";

/// Log directory: `<cache_dir>/movie-assistant/logs/`.
pub fn log_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|d| d.join("movie-assistant").join("logs"))
}

/// Route tracing output to a daily rolling file, since the terminal belongs to
/// the UI. Returns the writer guard; dropping it flushes pending lines.
/// Returns `None` (logging disabled) if the directory can't be created.
pub fn init(dir: Option<PathBuf>) -> Option<WorkerGuard> {
    let dir = dir.or_else(log_dir)?;
    std::fs::create_dir_all(&dir).ok()?;

    let appender = tracing_appender::rolling::daily(&dir, "movie-assistant.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .ok()?;
    Some(guard)
}
