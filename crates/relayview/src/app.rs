//! Pipeline orchestration and exit-code mapping
//!
//! Wires config loading, router construction, metric-source resolution,
//! and printing into one synchronous pass.

use std::io::{self, Write};
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use relayview_config::{ConfigError, RelayConf};
use relayview_routing::{build_router, RoutingError};
use relayview_sources::{LogDirMetrics, PathKind, SourceError};

use crate::printer::{classify_write_error, print_destinations};

/// Everything that can stop a run
///
/// The shell contract is three exit codes: 0 success, 1 any usage,
/// config, routing, or input problem, 2 output pipe closed downstream.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad or ambiguous invocation
    #[error("{0}")]
    Usage(String),

    /// Relay configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Router could not be built from the configuration
    #[error(transparent)]
    Routing(#[from] RoutingError),

    /// Packrat logs could not be read
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Downstream consumer closed stdout
    #[error("output pipe closed")]
    PipeClosed,

    /// Output write failed for a reason other than a closed pipe
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

impl AppError {
    /// Exit status this error maps to
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::PipeClosed => 2,
            _ => 1,
        }
    }
}

/// Resolved invocation options
#[derive(Debug, Clone)]
pub struct Options {
    /// Path to the relay configuration file
    pub config_path: PathBuf,

    /// Metric name or packrat log directory
    pub target: String,

    /// Force packrat-log interpretation of `target`
    pub is_packrat_log: bool,

    /// Force metric-path interpretation of `target`
    pub is_metric_path: bool,

    /// Include port and instance in the output
    pub show_port: bool,
}

/// Run the whole pipeline, writing destination lines to `out`
///
/// Single-threaded and synchronous throughout: one config read, one
/// router build, one pass over the metric source. The router is the only
/// long-lived state and is never mutated after construction.
pub fn run(opts: &Options, out: &mut impl Write) -> Result<(), AppError> {
    let packrat_log = resolve_packrat_log(opts)?;

    let conf = RelayConf::parse_file(&opts.config_path)?;
    debug!(options = conf.len(), "relay config loaded");

    let router = build_router(&conf)?;
    debug!(
        destinations = router.destinations().len(),
        replication_factor = router.replication_factor(),
        "router ready"
    );

    if packrat_log {
        for metric in LogDirMetrics::open(&opts.target)? {
            print_destinations(out, &router, &metric?, opts.show_port)?;
        }
    } else {
        print_destinations(out, &router, &opts.target, opts.show_port)?;
    }

    out.flush().map_err(classify_write_error)?;
    Ok(())
}

/// Decide whether `target` is a packrat log directory
///
/// An explicit flag always wins; otherwise the path-kind heuristic
/// guesses, and an inconclusive guess is a usage error asking for a flag.
fn resolve_packrat_log(opts: &Options) -> Result<bool, AppError> {
    if opts.is_packrat_log && opts.is_metric_path {
        return Err(AppError::Usage(
            "--is-packrat-log and --is-metric-path are mutually exclusive".to_string(),
        ));
    }
    if opts.is_packrat_log {
        return Ok(true);
    }
    if opts.is_metric_path {
        return Ok(false);
    }

    match PathKind::guess(&opts.target) {
        PathKind::PackratLog => Ok(true),
        PathKind::MetricPath => Ok(false),
        PathKind::Unknown => Err(AppError::Usage(format!(
            "cannot tell whether '{}' is a packrat log directory or a metric path;\n\
             pass --is-packrat-log or --is-metric-path",
            opts.target
        ))),
    }
}
