//! Relayview - show where a consistent-hashing relay routes metrics
//!
//! An offline diagnostic: given a relay's configuration and a metric name
//! (or a directory of packrat logs), reproduce the relay's
//! destination-selection decision and print it, without running the relay.
//!
//! The binary lives in `main.rs`; the pipeline itself is exposed here so
//! integration tests can drive it against in-memory writers.

pub mod app;
pub mod printer;

pub use app::{run, AppError, Options};
