//! Relayview metric sources
//!
//! Where the metrics under inspection come from: either the literal
//! argument on the command line, or a directory of packrat logs yielding
//! one metric per line. Also hosts the heuristic that guesses which of
//! the two an ambiguous argument means.
//!
//! # Example
//!
//! ```no_run
//! use relayview_sources::{LogDirMetrics, PathKind};
//!
//! assert_eq!(PathKind::guess("/var/log/packrat/web-1"), PathKind::PackratLog);
//!
//! for metric in LogDirMetrics::open("/var/log/packrat/web-1").unwrap() {
//!     println!("{}", metric.unwrap());
//! }
//! ```

mod error;
mod kind;
mod packrat;


pub use error::{Result, SourceError};
pub use kind::PathKind;
pub use packrat::LogDirMetrics;
