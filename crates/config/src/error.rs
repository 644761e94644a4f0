//! Configuration error types

use std::io;
use thiserror::Error;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur when loading a relay configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("failed to read config file '{path}': {source}")]
    Io {
        /// Path to the file
        path: String,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// A line is not a `key = value` pair
    #[error("malformed config line {line_no}: expected exactly one '=' in '{line}'")]
    MalformedLine {
        /// 1-based line number
        line_no: usize,
        /// The offending line, trimmed
        line: String,
    },

    /// A required option is absent
    #[error("missing required config option '{key}'")]
    MissingKey {
        /// Name of the missing option
        key: String,
    },
}

impl ConfigError {
    /// Create an Io error
    pub fn io(path: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a MalformedLine error
    pub fn malformed_line(line_no: usize, line: impl Into<String>) -> Self {
        Self::MalformedLine {
            line_no,
            line: line.into(),
        }
    }

    /// Create a MissingKey error
    pub fn missing_key(key: impl Into<String>) -> Self {
        Self::MissingKey { key: key.into() }
    }
}
