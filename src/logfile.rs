//! Timestamped line logging into the log directory.

use crate::constants::{DEFAULT_LOG_FILE, LOG_TIMESTAMP_FORMAT};
use crate::paths::Paths;
use chrono::{Local, NaiveDateTime};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Invalid log file name '{0}'; expected a bare file name")]
    InvalidFileName(String),
    #[error("Failed to append to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Render one log line, without the trailing newline.
pub fn format_line(timestamp: NaiveDateTime, message: &str) -> String {
    format!("[{}] {}", timestamp.format(LOG_TIMESTAMP_FORMAT), message)
}

/// Append `[YYYY-MM-DD HH:MM:SS] message` to `custom_file` in the log directory.
///
/// `custom_file` defaults to [`DEFAULT_LOG_FILE`]. The file is created if
/// missing; the log directory is not. Returns the path written to.
pub fn log_to_file(
    paths: &Paths,
    message: &str,
    custom_file: Option<&str>,
) -> Result<PathBuf, LogError> {
    log_to_file_at(paths, message, custom_file, Local::now().naive_local())
}

pub fn log_to_file_at(
    paths: &Paths,
    message: &str,
    custom_file: Option<&str>,
    timestamp: NaiveDateTime,
) -> Result<PathBuf, LogError> {
    let name = custom_file.unwrap_or(DEFAULT_LOG_FILE);
    validate_file_name(name)?;
    let path = paths.log_file(name);
    append_line(&path, &format_line(timestamp, message)).map_err(|source| LogError::Io {
        path: path.clone(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "appended log line");
    Ok(path)
}

fn validate_file_name(name: &str) -> Result<(), LogError> {
    let mut components = Path::new(name).components();
    let is_bare = matches!(
        (components.next(), components.next()),
        (Some(std::path::Component::Normal(_)), None)
    );
    if !is_bare || name.contains(['/', '\\']) {
        return Err(LogError::InvalidFileName(name.to_string()));
    }
    Ok(())
}

fn append_line(path: &Path, line: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{line}")
}
