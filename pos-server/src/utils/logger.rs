//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and production environments.

use std::path::Path;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::EnvFilter;

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines (development)
    Pretty,
    /// One JSON object per line (production, for log shippers)
    Json,
}

/// Initialize the logger with optional file output
///
/// `RUST_LOG` wins over `log_level`. When `log_dir` exists, logs go to a
/// daily rolling file instead of stdout; keep the returned guard alive until
/// shutdown so buffered lines are flushed.
pub fn init_logger_with_file(
    log_level: Option<&str>,
    log_dir: Option<&str>,
    format: LogFormat,
) -> Option<WorkerGuard> {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file = log_dir.and_then(|dir| {
        let log_path = Path::new(dir);
        if log_path.exists() {
            let file_appender = tracing_appender::rolling::daily(log_path, "pos-server");
            Some(tracing_appender::non_blocking(file_appender))
        } else {
            eprintln!("LOG_DIR {dir} does not exist, logging to stdout");
            None
        }
    });

    match file {
        Some((writer, guard)) => {
            init_subscriber(filter, format, Some(writer));
            Some(guard)
        }
        None => {
            init_subscriber(filter, format, None);
            None
        }
    }
}

fn init_subscriber(filter: EnvFilter, format: LogFormat, writer: Option<NonBlocking>) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(true);

    match (format, writer) {
        (LogFormat::Json, Some(writer)) => builder.json().with_writer(writer).init(),
        (LogFormat::Json, None) => builder.json().init(),
        (LogFormat::Pretty, Some(writer)) => builder.with_ansi(false).with_writer(writer).init(),
        (LogFormat::Pretty, None) => builder.init(),
    }
}
