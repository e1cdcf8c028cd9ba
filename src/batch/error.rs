//! Batch input/output errors.

use std::path::PathBuf;

/// Errors that can occur while reading tweet exports or writing texts.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("{path} is not a valid filename or directory")]
    InvalidInput { path: PathBuf },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: missing required column '{column}'")]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("{path}: malformed record on line {line}: {source}")]
    MalformedRecord {
        path: PathBuf,
        line: u64,
        #[source]
        source: csv::Error,
    },
}
