//! Tests for the consistent-hashing router
//!
//! The ring's exact positions are pinned by MD5, so these tests assert
//! the decision properties an operator relies on (determinism, distinct
//! hosts, replica priority order) rather than specific hash values.

use crate::{ConsistentHashingRouter, Destination, KeyFunction, Router, RoutingError};

fn router_with(replication_factor: usize, entries: &[&str]) -> ConsistentHashingRouter {
    let mut router = ConsistentHashingRouter::new(replication_factor);
    for entry in entries {
        router.add_destination(entry.parse().unwrap()).unwrap();
    }
    router
}

// =============================================================================
// Selection
// =============================================================================

#[test]
fn test_empty_ring_selects_nothing() {
    let router = ConsistentHashingRouter::new(1);
    assert!(router.destinations_for("stats.gauges.foo").is_empty());
}

#[test]
fn test_single_destination_always_wins() {
    let router = router_with(1, &["10.0.0.1:2003"]);
    for metric in ["a.b.c", "stats.gauges.foo", "servers.web-1.cpu.idle"] {
        assert_eq!(
            router.destinations_for(metric),
            vec![Destination::new("10.0.0.1", 2003)]
        );
    }
}

#[test]
fn test_replication_factor_bounds_host_count() {
    let router = router_with(2, &["h1:2003", "h2:2003", "h3:2003"]);
    let selected = router.destinations_for("stats.gauges.foo");
    assert_eq!(selected.len(), 2);
    assert_ne!(selected[0].host, selected[1].host);
}

#[test]
fn test_replication_factor_beyond_hosts_selects_each_host_once() {
    let router = router_with(10, &["h1:2003", "h2:2003", "h3:2003"]);
    let mut hosts: Vec<String> = router
        .destinations_for("stats.gauges.foo")
        .into_iter()
        .map(|d| d.host)
        .collect();
    hosts.sort();
    assert_eq!(hosts, ["h1", "h2", "h3"]);
}

#[test]
fn test_instances_on_one_host_count_as_one_host() {
    // Two carbon-cache instances on the same box must not both be chosen
    // as replicas of one metric.
    let router = router_with(2, &["h1:2003:a", "h1:2103:b"]);
    assert_eq!(router.destinations_for("stats.gauges.foo").len(), 1);
}

#[test]
fn test_selection_is_deterministic() {
    let a = router_with(2, &["h1:2003:a", "h2:2003:b", "h3:2003:c"]);
    let b = router_with(2, &["h1:2003:a", "h2:2003:b", "h3:2003:c"]);
    for metric in ["stats.gauges.foo", "servers.web-1.cpu.idle"] {
        assert_eq!(a.destinations_for(metric), b.destinations_for(metric));
    }
}

#[test]
fn test_priority_order_is_stable_under_replication() {
    // The first replica must not change when the factor grows.
    let one = router_with(1, &["h1:2003", "h2:2003", "h3:2003"]);
    let two = router_with(2, &["h1:2003", "h2:2003", "h3:2003"]);
    let metric = "stats.gauges.foo";
    assert_eq!(
        one.destinations_for(metric)[0],
        two.destinations_for(metric)[0]
    );
}

// =============================================================================
// Registration
// =============================================================================

#[test]
fn test_destinations_kept_in_registration_order() {
    let router = router_with(1, &["c:1", "a:2", "b:3"]);
    let hosts: Vec<&str> = router.destinations().iter().map(|d| d.host.as_str()).collect();
    assert_eq!(hosts, ["c", "a", "b"]);
}

#[test]
fn test_duplicate_host_instance_pair_is_rejected() {
    let mut router = router_with(1, &["h1:2003:a"]);
    let err = router
        .add_destination("h1:2004:a".parse().unwrap())
        .unwrap_err();
    assert!(matches!(err, RoutingError::DuplicateDestination { .. }));
}

#[test]
fn test_same_host_different_instance_is_accepted() {
    let mut router = router_with(1, &["h1:2003:a"]);
    router.add_destination("h1:2103:b".parse().unwrap()).unwrap();
    assert_eq!(router.destinations().len(), 2);
}

// =============================================================================
// Key functions
// =============================================================================

#[test]
fn test_identity_key_function_is_builtin() {
    let mut router = router_with(1, &["h1:2003"]);
    router.set_key_function("identity").unwrap();
    assert_eq!(router.destinations_for("a.b.c").len(), 1);
}

#[test]
fn test_unknown_key_function_is_rejected() {
    let mut router = router_with(1, &["h1:2003"]);
    let err = router.set_key_function("my.custom.keys").unwrap_err();
    assert!(matches!(err, RoutingError::UnknownKeyFunction { name } if name == "my.custom.keys"));
}

#[test]
fn test_key_function_collapses_metrics_onto_one_key() {
    let mut router = router_with(1, &["h1:2003", "h2:2003", "h3:2003"]);
    router.install_key_function(KeyFunction::new(
        "constant",
        Box::new(|_: &str| "pinned".to_string()),
    ));

    let first = router.destinations_for("stats.gauges.foo");
    for metric in ["a.b.c", "servers.web-1.cpu.idle", "anything.else"] {
        assert_eq!(router.destinations_for(metric), first);
    }
}

#[test]
fn test_identity_matches_no_key_function() {
    let plain = router_with(1, &["h1:2003", "h2:2003", "h3:2003"]);
    let mut with_identity = router_with(1, &["h1:2003", "h2:2003", "h3:2003"]);
    with_identity.set_key_function("identity").unwrap();

    for metric in ["stats.gauges.foo", "a.b.c"] {
        assert_eq!(
            plain.destinations_for(metric),
            with_identity.destinations_for(metric)
        );
    }
}
