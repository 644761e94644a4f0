//! Tests for Destination parsing
//!
//! Tests cover the host:port[:instance] grammar, the forgiving extra-part
//! policy, and rejection of short or unparsable entries.

use crate::{parse_destinations, Destination, RoutingError};

// =============================================================================
// Single entries
// =============================================================================

#[test]
fn test_host_and_port() {
    let d: Destination = "10.0.0.1:2003".parse().unwrap();
    assert_eq!(d.host, "10.0.0.1");
    assert_eq!(d.port, 2003);
    assert_eq!(d.instance, None);
}

#[test]
fn test_host_port_instance() {
    let d: Destination = "cache-1:2103:b".parse().unwrap();
    assert_eq!(d.host, "cache-1");
    assert_eq!(d.port, 2103);
    assert_eq!(d.instance.as_deref(), Some("b"));
}

#[test]
fn test_parts_beyond_third_are_ignored() {
    let d: Destination = "h:1:a:extra:junk".parse().unwrap();
    assert_eq!(d.host, "h");
    assert_eq!(d.port, 1);
    assert_eq!(d.instance.as_deref(), Some("a"));
}

#[test]
fn test_surrounding_whitespace_is_trimmed() {
    let d: Destination = "  10.0.0.1:2003  ".parse().unwrap();
    assert_eq!(d.host, "10.0.0.1");
}

#[test]
fn test_bare_host_is_rejected() {
    let err = "10.0.0.1".parse::<Destination>().unwrap_err();
    assert!(matches!(err, RoutingError::InvalidDestination { .. }));
}

#[test]
fn test_empty_host_is_rejected() {
    let err = ":2003".parse::<Destination>().unwrap_err();
    assert!(matches!(err, RoutingError::InvalidDestination { .. }));
}

#[test]
fn test_non_numeric_port_is_rejected() {
    let err = "h1:graphite".parse::<Destination>().unwrap_err();
    match err {
        RoutingError::InvalidPort { entry, port } => {
            assert_eq!(entry, "h1:graphite");
            assert_eq!(port, "graphite");
        }
        other => panic!("expected InvalidPort, got {other:?}"),
    }
}

#[test]
fn test_out_of_range_port_is_rejected() {
    let err = "h1:70000".parse::<Destination>().unwrap_err();
    assert!(matches!(err, RoutingError::InvalidPort { .. }));
}

// =============================================================================
// Comma-separated lists
// =============================================================================

#[test]
fn test_parse_destination_list() {
    let destinations = parse_destinations("h1:1001,h2:1002:inst2").unwrap();
    assert_eq!(
        destinations,
        vec![
            Destination::new("h1", 1001),
            Destination::with_instance("h2", 1002, "inst2"),
        ]
    );
}

#[test]
fn test_list_preserves_config_order() {
    let destinations = parse_destinations("c:1,a:2,b:3").unwrap();
    let hosts: Vec<&str> = destinations.iter().map(|d| d.host.as_str()).collect();
    assert_eq!(hosts, ["c", "a", "b"]);
}

#[test]
fn test_list_entries_are_trimmed() {
    let destinations = parse_destinations("h1:1001 , h2:1002").unwrap();
    assert_eq!(destinations[0].host, "h1");
    assert_eq!(destinations[1].host, "h2");
}

#[test]
fn test_list_fails_on_first_bad_entry() {
    let err = parse_destinations("h1:1001,oops,h3:1003").unwrap_err();
    assert!(matches!(err, RoutingError::InvalidDestination { entry } if entry == "oops"));
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn test_display_without_instance() {
    assert_eq!(Destination::new("h1", 2003).to_string(), "h1:2003");
}

#[test]
fn test_display_with_instance() {
    assert_eq!(
        Destination::with_instance("h1", 2003, "a").to_string(),
        "h1:2003:a"
    );
}
