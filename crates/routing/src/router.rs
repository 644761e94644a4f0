//! Router capability trait and key functions
//!
//! `Router` is the capability surface of the relay's destination-selection
//! collaborator. Only consistent hashing ships here, but the trait keeps
//! the strategy swappable and lets tests substitute recording stubs.

use std::fmt;

use crate::destination::Destination;
use crate::error::{Result, RoutingError};

/// Destination-selection capability of a relay router
///
/// Destinations must be registered in config order; replica tie-breaking
/// is order-sensitive. `destinations_for` returns destinations in the
/// router's priority order, which callers must preserve.
pub trait Router {
    /// Register a destination on the router
    fn add_destination(&mut self, destination: Destination) -> Result<()>;

    /// Install a named key-extraction function
    fn set_key_function(&mut self, name: &str) -> Result<()>;

    /// Resolve the ordered destination set for one metric
    fn destinations_for(&self, metric: &str) -> Vec<Destination>;
}

/// Maps a metric name to the key actually hashed onto the ring
pub type KeyFn = Box<dyn Fn(&str) -> String + Send + Sync>;

/// A named key-extraction function
///
/// The relay's `KEYFUNC` option loads arbitrary code at runtime; here the
/// name resolves against a fixed registry of built-ins instead. `identity`
/// always exists; embedders can construct others with [`KeyFunction::new`].
pub struct KeyFunction {
    name: String,
    func: KeyFn,
}

impl KeyFunction {
    /// Wrap a closure as a named key function
    pub fn new(name: impl Into<String>, func: KeyFn) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }

    /// Resolve a built-in key function by name
    ///
    /// # Errors
    ///
    /// Returns `RoutingError::UnknownKeyFunction` for unregistered names.
    pub fn builtin(name: &str) -> Result<Self> {
        match name {
            "identity" => Ok(Self::new(name, Box::new(|metric: &str| metric.to_string()))),
            _ => Err(RoutingError::unknown_key_function(name)),
        }
    }

    /// Name this function was registered under
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Map a metric to its hashing key
    pub fn apply(&self, metric: &str) -> String {
        (self.func)(metric)
    }
}

impl fmt::Debug for KeyFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("KeyFunction").field(&self.name).finish()
    }
}
