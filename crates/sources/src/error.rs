//! Metric source error types

use std::io;
use thiserror::Error;

/// Result type for metric source operations
pub type Result<T> = std::result::Result<T, SourceError>;

/// Errors that can occur while reading packrat logs
#[derive(Debug, Error)]
pub enum SourceError {
    /// Failed to list or read a log path
    #[error("failed to read '{path}': {source}")]
    Io {
        /// Path being read when the error occurred
        path: String,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },
}

impl SourceError {
    /// Create an Io error
    pub fn io(path: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
