//! Relayview routing
//!
//! Reproduces the destination-selection decision of a consistent-hashing
//! relay: parse the `DESTINATIONS` backend list, build the same MD5-based
//! hash ring the relay builds, and answer "where would this metric go".
//!
//! # Example
//!
//! ```
//! use relayview_routing::{build_router, Router};
//! use relayview_config::RelayConf;
//!
//! let conf: RelayConf = "\
//! RELAY_METHOD = consistent-hashing
//! REPLICATION_FACTOR = 2
//! DESTINATIONS = 10.0.0.1:2003:a,10.0.0.2:2003:b"
//!     .parse()
//!     .unwrap();
//!
//! let router = build_router(&conf).unwrap();
//! let destinations = router.destinations_for("stats.gauges.foo");
//! assert_eq!(destinations.len(), 2);
//! ```

mod destination;
mod error;
mod factory;
mod ring;
mod router;

#[cfg(test)]
mod destination_test;
#[cfg(test)]
mod ring_test;

pub use destination::{parse_destinations, Destination};
pub use error::{Result, RoutingError};
pub use factory::{build_router, register_destinations, METHOD_CONSISTENT_HASHING};
pub use ring::{ConsistentHashingRouter, DEFAULT_REPLICA_COUNT};
pub use router::{KeyFn, KeyFunction, Router};
