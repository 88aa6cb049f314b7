//! Error types for the core library.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the core library.
///
/// Malformed log lines are never errors; they are skipped while reading.
#[derive(Debug, Error)]
pub enum Error {
    /// The event log does not exist.
    #[error("no log file found at {}", path.display())]
    LogNotFound { path: PathBuf },

    /// Reading the event log failed for a reason other than absence.
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The period keyword is not one of the supported values.
    #[error("invalid period: {value}")]
    InvalidPeriod { value: String },

    /// The timezone identifier is not in the timezone database.
    #[error("unknown timezone: {value}")]
    UnknownTimezone { value: String },
}

/// Result alias for core operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
