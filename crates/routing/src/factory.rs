//! Router construction from a relay configuration
//!
//! Turns the `RELAY_METHOD` / `REPLICATION_FACTOR` / `KEYFUNC` /
//! `DESTINATIONS` options into a ready-to-query router.

use relayview_config::{self as config, RelayConf};

use crate::destination::parse_destinations;
use crate::error::{Result, RoutingError};
use crate::ring::ConsistentHashingRouter;
use crate::router::Router;

/// The only routing strategy this tool implements
pub const METHOD_CONSISTENT_HASHING: &str = "consistent-hashing";

/// Build and configure a router from a parsed relay config
///
/// `REPLICATION_FACTOR` is required for consistent hashing and must be a
/// positive integer. Destinations are registered in config order; the
/// ring tie-breaks equal-position replicas by registration order, so the
/// factory must not reorder them.
///
/// # Errors
///
/// Fails for any `RELAY_METHOD` other than `consistent-hashing`, for
/// missing or malformed options, and for unknown key functions. All of
/// these are fatal: the tool has nothing useful to print without a
/// correctly configured router.
pub fn build_router(conf: &RelayConf) -> Result<ConsistentHashingRouter> {
    let method = conf.require(config::RELAY_METHOD)?;
    if method != METHOD_CONSISTENT_HASHING {
        return Err(RoutingError::unsupported_method(method));
    }

    let raw_factor = conf.require(config::REPLICATION_FACTOR)?;
    let replication_factor: usize = raw_factor
        .parse()
        .ok()
        .filter(|&f| f >= 1)
        .ok_or_else(|| RoutingError::invalid_replication_factor(raw_factor))?;

    let mut router = ConsistentHashingRouter::new(replication_factor);

    if let Some(keyfunc) = conf.get(config::KEYFUNC) {
        router.set_key_function(keyfunc)?;
    }

    register_destinations(&mut router, conf.require(config::DESTINATIONS)?)?;
    Ok(router)
}

/// Parse a `DESTINATIONS` value and register every entry, in order
pub fn register_destinations(router: &mut dyn Router, raw: &str) -> Result<()> {
    for destination in parse_destinations(raw)? {
        router.add_destination(destination)?;
    }
    Ok(())
}
