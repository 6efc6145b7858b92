//! Logging infrastructure for quakemap.
//!
//! Provides structured logging to a log file and to stderr:
//! - The log file is truncated at the start of each run
//! - Console output goes to stderr so rendered output on stdout stays clean
//! - Configurable via RUST_LOG environment variable, or forced to debug

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard will flush and close the log file writer.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Split a log file path into the directory to create and the file name.
fn split_log_path(log_path: &Path) -> io::Result<(PathBuf, String)> {
    let file_name = log_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid log file path: {}", log_path.display()),
            )
        })?
        .to_string();

    let dir = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok((dir, file_name))
}

/// Filter directive for the requested verbosity.
fn filter_for(debug: bool) -> EnvFilter {
    if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Initialize logging system.
///
/// Creates the log directory if needed, clears the previous log file,
/// and sets up dual output to both the file and stderr.
///
/// # Errors
///
/// Returns error if the log directory cannot be created or the log file cannot be cleared
pub fn init_logging(log_path: &Path, debug: bool) -> Result<LoggingGuard, io::Error> {
    let (log_dir, log_file) = split_log_path(log_path)?;

    fs::create_dir_all(&log_dir)?;
    fs::write(log_dir.join(&log_file), "")?;

    let file_appender = tracing_appender::rolling::never(&log_dir, &log_file);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_span_events(FmtSpan::CLOSE);

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(filter_for(debug))
        .with(file_layer)
        .with(stderr_layer)
        .init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}
