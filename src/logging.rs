//! File logging bootstrap.
//!
//! The terminal belongs to the UI while the app runs, so log lines only ever
//! go to rotating files under the directory passed on the command line.
//! Without a directory no logger is installed and `log` macros are no-ops.

use crate::error::JournaliError;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use std::path::Path;

const LOG_FILE_BASENAME: &str = "journali";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Starts file logging into `log_dir`.
///
/// The returned handle must stay alive for as long as logs should be written;
/// dropping it flushes and stops the logger.
pub fn init_logging(level: &str, log_dir: &Path) -> Result<LoggerHandle, JournaliError> {
    let level = normalize_level(level)?;
    std::fs::create_dir_all(log_dir)?;

    let handle = Logger::try_with_str(level)
        .map_err(|err| JournaliError::Logging(format!("invalid log level `{level}`: {err}")))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| JournaliError::Logging(format!("failed to start logger: {err}")))?;

    info!(
        "event=app_start level={} log_dir={} version={}",
        level,
        log_dir.display(),
        env!("CARGO_PKG_VERSION")
    );
    Ok(handle)
}

pub fn normalize_level(level: &str) -> Result<&'static str, JournaliError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(JournaliError::Logging(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        ))),
    }
}
