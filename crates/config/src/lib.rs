//! Relayview configuration
//!
//! Parses the flat `key = value` relay configuration format consumed by
//! carbon-style relays. Minimal by design: no sections, no nesting - one
//! option per line, `#` comments and blank lines ignored.
//!
//! # Parsing
//!
//! Use `RelayConf::parse_file` for files or the `FromStr` impl for text:
//!
//! ```
//! use relayview_config::RelayConf;
//! use std::str::FromStr;
//!
//! let conf = RelayConf::from_str("RELAY_METHOD = consistent-hashing").unwrap();
//! assert_eq!(conf.get("RELAY_METHOD"), Some("consistent-hashing"));
//! ```
//!
//! # Example config
//!
//! ```text
//! # relay.conf
//! RELAY_METHOD = consistent-hashing
//! REPLICATION_FACTOR = 2
//! DESTINATIONS = 10.0.0.1:2003:a,10.0.0.2:2003:b
//! ```

mod error;

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

pub use error::{ConfigError, Result};

/// Option naming the routing strategy; must be present
pub const RELAY_METHOD: &str = "RELAY_METHOD";

/// Option holding the comma-separated destination list; must be present
pub const DESTINATIONS: &str = "DESTINATIONS";

/// Option holding the replication factor; required by consistent-hashing
pub const REPLICATION_FACTOR: &str = "REPLICATION_FACTOR";

/// Option naming an optional hashing-key function
pub const KEYFUNC: &str = "KEYFUNC";

/// A parsed relay configuration
///
/// A flat mapping from option name to raw string value. Keys are
/// case-sensitive; when an option appears more than once the last
/// occurrence wins. Values stay unparsed strings here - typed
/// interpretation (ports, integers) happens at the point of use.
#[derive(Debug, Clone, Default)]
pub struct RelayConf {
    options: HashMap<String, String>,
}

impl RelayConf {
    /// Load a configuration from a file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read and
    /// `ConfigError::MalformedLine` if any non-comment line is not a
    /// single `key = value` pair.
    pub fn parse_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| ConfigError::io(path.display().to_string(), e))?;
        text.parse()
    }

    /// Look up an option value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    /// Look up an option value, failing if absent
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` naming the option.
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| ConfigError::missing_key(key))
    }

    /// Check whether an option is present
    pub fn contains(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }

    /// Number of options parsed
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Check whether no options were parsed
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl FromStr for RelayConf {
    type Err = ConfigError;

    /// Parse configuration text line by line
    ///
    /// Blank lines and lines whose trimmed form starts with `#` are
    /// skipped. Every other line must contain exactly one `=`; zero or
    /// multiple `=` on a line is an error, matching the relay's own
    /// strict two-way split.
    fn from_str(s: &str) -> Result<Self> {
        let mut options = HashMap::new();

        for (idx, raw_line) in s.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut parts = line.split('=');
            let (key, value) = match (parts.next(), parts.next(), parts.next()) {
                (Some(k), Some(v), None) => (k.trim(), v.trim()),
                _ => return Err(ConfigError::malformed_line(idx + 1, line)),
            };

            options.insert(key.to_string(), value.to_string());
        }

        Ok(Self { options })
    }
}
