//! Error types for parsing and loading datasets.

use std::path::PathBuf;

use crate::models::Format;

/// Error produced while parsing a single dataset line.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("{format} line has {found} fields, expected {expected}")]
    WrongFieldCount {
        format: Format,
        expected: usize,
        found: usize,
    },
    #[error("malformed {field} field {value:?}: {reason}")]
    MalformedField {
        field: &'static str,
        value: String,
        reason: String,
    },
}

/// Error produced while loading a dataset file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("dataset not found at: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },
}
