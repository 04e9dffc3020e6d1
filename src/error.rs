use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for typeahead
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeaheadError {
    #[error("Invalid item list: {0}\n\nExpected a JSON array of strings or one item per line.")]
    InvalidItems(String),

    #[error("Invalid config file {}: {message}", path.display())]
    InvalidConfig { path: PathBuf, message: String },

    #[error("Could not set up debug log: {0}")]
    Logger(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for TypeaheadError {
    fn from(err: std::io::Error) -> Self {
        TypeaheadError::Io(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
