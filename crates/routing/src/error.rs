//! Routing error types

use relayview_config::ConfigError;
use thiserror::Error;

/// Result type for routing operations
pub type Result<T> = std::result::Result<T, RoutingError>;

/// Errors that can occur while parsing destinations or building a router
#[derive(Debug, Error)]
pub enum RoutingError {
    /// Destination entry is not `host:port[:instance]`
    #[error("invalid destination '{entry}': expected host:port[:instance]")]
    InvalidDestination {
        /// The offending entry, trimmed
        entry: String,
    },

    /// Destination port is not an integer in port range
    #[error("invalid port '{port}' in destination '{entry}'")]
    InvalidPort {
        /// The offending entry, trimmed
        entry: String,
        /// The unparsable port segment
        port: String,
    },

    /// The same (host, instance) pair was registered twice
    #[error("duplicate destination '{destination}'")]
    DuplicateDestination {
        /// Rendered destination
        destination: String,
    },

    /// `RELAY_METHOD` names a strategy this tool does not implement
    #[error("unsupported relay method '{method}'")]
    UnsupportedMethod {
        /// The offending method value
        method: String,
    },

    /// `REPLICATION_FACTOR` is not a positive integer
    #[error("invalid replication factor '{value}': expected a positive integer")]
    InvalidReplicationFactor {
        /// The unparsable value
        value: String,
    },

    /// `KEYFUNC` names a key function that is not registered
    #[error("unknown key function '{name}'")]
    UnknownKeyFunction {
        /// The unresolved name
        name: String,
    },

    /// A required config option was missing or unreadable
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl RoutingError {
    /// Create an InvalidDestination error
    pub fn invalid_destination(entry: impl Into<String>) -> Self {
        Self::InvalidDestination {
            entry: entry.into(),
        }
    }

    /// Create an InvalidPort error
    pub fn invalid_port(entry: impl Into<String>, port: impl Into<String>) -> Self {
        Self::InvalidPort {
            entry: entry.into(),
            port: port.into(),
        }
    }

    /// Create a DuplicateDestination error
    pub fn duplicate_destination(destination: impl Into<String>) -> Self {
        Self::DuplicateDestination {
            destination: destination.into(),
        }
    }

    /// Create an UnsupportedMethod error
    pub fn unsupported_method(method: impl Into<String>) -> Self {
        Self::UnsupportedMethod {
            method: method.into(),
        }
    }

    /// Create an InvalidReplicationFactor error
    pub fn invalid_replication_factor(value: impl Into<String>) -> Self {
        Self::InvalidReplicationFactor {
            value: value.into(),
        }
    }

    /// Create an UnknownKeyFunction error
    pub fn unknown_key_function(name: impl Into<String>) -> Self {
        Self::UnknownKeyFunction { name: name.into() }
    }
}
