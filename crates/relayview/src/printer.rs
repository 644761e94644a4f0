//! Destination rendering
//!
//! One line per (metric, destination) pair, in the router's priority
//! order:
//!
//! ```text
//! stats.gauges.foo  ->  10.0.0.1
//! stats.gauges.foo  ->  10.0.0.2:2003:b      (with --show-port)
//! ```
//!
//! The two-space arrow matches the relay's own admin tooling; scripts
//! parse it.

use std::io::{self, Write};

use relayview_routing::Router;

use crate::app::AppError;

/// Print the destination set for one metric
///
/// # Errors
///
/// A write failing with `BrokenPipe` returns `AppError::PipeClosed` so
/// the caller can stop the whole run with exit status 2; output is
/// routinely piped into `head` and friends, and there is no useful work
/// left once the sink is gone. Any other write failure is `AppError::Io`.
pub fn print_destinations(
    out: &mut impl Write,
    router: &dyn Router,
    metric: &str,
    show_port: bool,
) -> Result<(), AppError> {
    for destination in router.destinations_for(metric) {
        let result = if show_port {
            writeln!(out, "{metric}  ->  {destination}")
        } else {
            writeln!(out, "{metric}  ->  {}", destination.host)
        };
        result.map_err(classify_write_error)?;
    }
    Ok(())
}

/// Map a write error to the app taxonomy, singling out broken pipes
pub fn classify_write_error(e: io::Error) -> AppError {
    if e.kind() == io::ErrorKind::BrokenPipe {
        AppError::PipeClosed
    } else {
        AppError::Io(e)
    }
}
