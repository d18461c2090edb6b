//! Centralized constants for formats, file names and display timings.

/// Timestamp format for log lines (YYYY-MM-DD HH:MM:SS, 24-hour local time).
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Log file used when the caller does not name one.
pub const DEFAULT_LOG_FILE: &str = "tune.log";

/// Directory names below the base directory.
pub const DATA_DIR_NAME: &str = "data";
pub const LOGS_DIR_NAME: &str = "logs";
/// Lives below the data directory, not the base directory.
pub const TEST_DIR_NAME: &str = "test";

/// Key that dismisses an image window.
pub const QUIT_KEY: char = 'q';

/// Upper bound on each key poll, in milliseconds.
pub const POLL_INTERVAL_MS: u64 = 1;

/// Event pumps performed after a window is closed.
pub const CLOSE_FLUSH_ITERATIONS: usize = 5;
