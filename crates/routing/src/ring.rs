//! Carbon-compatible consistent-hash ring
//!
//! Reproduces the ring a carbon relay builds, so the destinations printed
//! here are the ones a live relay with the same config would pick:
//!
//! - a ring position is the first 16 bits of a key's MD5 digest
//! - every node occupies [`DEFAULT_REPLICA_COUNT`] positions, hashed from
//!   `"<node key>:<replica>"`
//! - node keys mirror the relay's `('host', 'instance')` tuple rendering,
//!   including the literal `None` for absent instances
//!
//! The ring is built once at startup and only read afterwards.

use std::collections::HashSet;

use crate::destination::Destination;
use crate::error::{Result, RoutingError};
use crate::router::{KeyFunction, Router};

/// Ring points per node, matching the relay's default
pub const DEFAULT_REPLICA_COUNT: usize = 100;

/// Ring position of a key: the leading 16 bits of its MD5 digest
fn ring_position(key: &str) -> u16 {
    let digest = md5::compute(key.as_bytes());
    u16::from_be_bytes([digest[0], digest[1]])
}

/// A node's identity on the ring: host plus optional instance tag
///
/// Ordering matters: equal-position replicas tie-break by node key, with
/// instance-less nodes sorting first, the same way the relay orders
/// `('host', None)` before `('host', 'a')`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct NodeKey {
    host: String,
    instance: Option<String>,
}

impl NodeKey {
    /// Render the key exactly as the relay hashes it
    fn hash_key(&self) -> String {
        match &self.instance {
            Some(instance) => format!("('{}', '{}')", self.host, instance),
            None => format!("('{}', None)", self.host),
        }
    }
}

/// The consistent-hash ring itself
///
/// Stores `(position, node index)` entries sorted by position, node-key
/// order breaking position ties. `nodes_from` walks clockwise from a
/// key's position and reports each distinct node once, in ring order.
#[derive(Debug, Clone, Default)]
struct ConsistentHashRing {
    entries: Vec<(u16, usize)>,
    nodes: Vec<NodeKey>,
}

impl ConsistentHashRing {
    fn add_node(&mut self, node: NodeKey) {
        let idx = self.nodes.len();
        self.nodes.push(node);

        for replica in 0..DEFAULT_REPLICA_COUNT {
            let replica_key = format!("{}:{}", self.nodes[idx].hash_key(), replica);
            let position = ring_position(&replica_key);
            let at = self.entries.partition_point(|&(p, n)| {
                (p, &self.nodes[n]) < (position, &self.nodes[idx])
            });
            self.entries.insert(at, (position, idx));
        }
    }

    /// Distinct node indexes in ring order, starting at the key's position
    fn nodes_from(&self, key: &str) -> Vec<usize> {
        if self.entries.is_empty() {
            return Vec::new();
        }

        let position = ring_position(key);
        let start = self.entries.partition_point(|&(p, _)| p < position);
        let len = self.entries.len();

        let mut seen = vec![false; self.nodes.len()];
        let mut found = Vec::new();
        for offset in 0..len {
            let (_, node) = self.entries[(start + offset) % len];
            if !seen[node] {
                seen[node] = true;
                found.push(node);
                if found.len() == self.nodes.len() {
                    break;
                }
            }
        }
        found
    }
}

/// The consistent-hashing router strategy
///
/// Destinations are registered once in config order, then queried per
/// metric. A query hashes the (key-function-mapped) metric onto the ring
/// and collects destinations for distinct hosts until the replication
/// factor is met.
#[derive(Debug)]
pub struct ConsistentHashingRouter {
    ring: ConsistentHashRing,
    destinations: Vec<Destination>,
    registered: HashSet<(String, Option<String>)>,
    replication_factor: usize,
    key_function: Option<KeyFunction>,
}

impl ConsistentHashingRouter {
    /// Create a router with the given replication factor
    pub fn new(replication_factor: usize) -> Self {
        Self {
            ring: ConsistentHashRing::default(),
            destinations: Vec::new(),
            registered: HashSet::new(),
            replication_factor,
            key_function: None,
        }
    }

    /// The configured replication factor
    pub fn replication_factor(&self) -> usize {
        self.replication_factor
    }

    /// Registered destinations, in registration order
    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    /// Install an already-constructed key function
    pub fn install_key_function(&mut self, key_function: KeyFunction) {
        self.key_function = Some(key_function);
    }

    fn hashing_key(&self, metric: &str) -> String {
        match &self.key_function {
            Some(f) => f.apply(metric),
            None => metric.to_string(),
        }
    }
}

impl Router for ConsistentHashingRouter {
    /// Register a destination on the ring
    ///
    /// # Errors
    ///
    /// Returns `RoutingError::DuplicateDestination` if the same
    /// (host, instance) pair was already registered; the relay rejects
    /// this too, since the pair is the node's ring identity.
    fn add_destination(&mut self, destination: Destination) -> Result<()> {
        let identity = (destination.host.clone(), destination.instance.clone());
        if !self.registered.insert(identity) {
            return Err(RoutingError::duplicate_destination(destination.to_string()));
        }

        self.ring.add_node(NodeKey {
            host: destination.host.clone(),
            instance: destination.instance.clone(),
        });
        self.destinations.push(destination);
        Ok(())
    }

    fn set_key_function(&mut self, name: &str) -> Result<()> {
        self.key_function = Some(KeyFunction::builtin(name)?);
        Ok(())
    }

    /// Ordered destination set for one metric
    ///
    /// Walks the ring clockwise from the metric's position, skipping
    /// hosts already chosen, until `replication_factor` distinct hosts
    /// are collected or the ring is exhausted. The returned order is the
    /// relay's replica-priority order.
    fn destinations_for(&self, metric: &str) -> Vec<Destination> {
        let key = self.hashing_key(metric);

        let mut used_hosts: Vec<&str> = Vec::new();
        let mut selected = Vec::new();
        for node in self.ring.nodes_from(&key) {
            let destination = &self.destinations[node];
            if used_hosts.contains(&destination.host.as_str()) {
                continue;
            }
            used_hosts.push(&destination.host);
            selected.push(destination.clone());
            if used_hosts.len() >= self.replication_factor {
                break;
            }
        }
        selected
    }
}
