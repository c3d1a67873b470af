//! Error types for the data-loader crate.
//!
//! Two layers:
//! - `RecordError` is what the record parser reports for a single line.
//!   It knows nothing about files or line numbers.
//! - `DataLoadError` is what the loader reports. It wraps a `RecordError`
//!   with the line it came from, and covers the file-level failures.

use std::path::PathBuf;
use thiserror::Error;

/// A single line could not be turned into a `MovieRecord`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Wrong number of comma-separated fields
    #[error("expected {expected} fields but found {found}")]
    FieldCount { expected: usize, found: usize },

    /// Title field is blank
    #[error("title is empty")]
    EmptyTitle,

    /// A field had a value that could not be parsed
    #[error("invalid {field}: {value:?}")]
    InvalidValue { field: &'static str, value: String },
}

/// Errors that can occur while loading a dataset
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be opened
    #[error("Could not open file {}: {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error while reading an already opened input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Line in the data file couldn't be parsed
    #[error("Parse error at line {line}: {reason}")]
    Parse {
        line: usize,
        #[source]
        reason: RecordError,
    },

    /// Line is longer than the configured limit
    #[error("Line {line} is {len} bytes long, limit is {limit}")]
    LineTooLong {
        line: usize,
        len: usize,
        limit: usize,
    },
}

impl DataLoadError {
    /// File line number the error points at, if it is a per-line error
    pub fn line(&self) -> Option<usize> {
        match self {
            DataLoadError::Parse { line, .. } | DataLoadError::LineTooLong { line, .. } => {
                Some(*line)
            }
            _ => None,
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
