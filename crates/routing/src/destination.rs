//! Backend destination type and list parsing
//!
//! A destination is one backend the relay can route to, written as
//! `host:port` or `host:port:instance` in the `DESTINATIONS` config option.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, RoutingError};

/// One backend destination of the relay
///
/// The instance tag distinguishes multiple carbon-cache processes on the
/// same host. Absent instance is `None`, never an empty third field from
/// a two-part entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Destination {
    /// Backend host name or address
    pub host: String,

    /// Backend port
    pub port: u16,

    /// Optional instance tag
    pub instance: Option<String>,
}

impl Destination {
    /// Create a destination without an instance tag
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            instance: None,
        }
    }

    /// Create a destination with an instance tag
    pub fn with_instance(host: impl Into<String>, port: u16, instance: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            instance: Some(instance.into()),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)?;
        if let Some(instance) = &self.instance {
            write!(f, ":{instance}")?;
        }
        Ok(())
    }
}

impl FromStr for Destination {
    type Err = RoutingError;

    /// Parse a single `host:port[:instance]` entry
    ///
    /// Parts beyond the third are ignored, a forgiving reading of sloppy
    /// hand-edited configs.
    fn from_str(s: &str) -> Result<Self> {
        let entry = s.trim();
        let parts: Vec<&str> = entry.split(':').collect();
        if parts.len() < 2 || parts[0].is_empty() {
            return Err(RoutingError::invalid_destination(entry));
        }

        let port: u16 = parts[1]
            .parse()
            .map_err(|_| RoutingError::invalid_port(entry, parts[1]))?;

        Ok(Self {
            host: parts[0].to_string(),
            port,
            instance: parts.get(2).map(|s| s.to_string()),
        })
    }
}

/// Parse a comma-separated `DESTINATIONS` value
///
/// Entries keep their config order; the ring's tie-breaking among
/// equal-position replicas depends on registration order, so callers must
/// not reorder the result.
///
/// # Errors
///
/// Fails on the first entry with fewer than two `:`-parts or an
/// unparsable port.
pub fn parse_destinations(raw: &str) -> Result<Vec<Destination>> {
    raw.split(',').map(str::parse).collect()
}
