//! Relayview - show where a consistent-hashing relay routes metrics
//!
//! # Usage
//!
//! ```bash
//! # One metric
//! relayview relay.conf stats.gauges.foo
//!
//! # Every metric seen in a directory of packrat logs
//! relayview relay.conf /var/log/packrat/web-1
//!
//! # With backend port and instance
//! relayview --show-port relay.conf stats.gauges.foo
//! ```
//!
//! Without `--is-packrat-log` or `--is-metric-path` the type of the
//! second argument is a guess.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use relayview::{run, Options};

/// Relayview - show where a consistent-hashing relay routes metrics
#[derive(Parser, Debug)]
#[command(name = "relayview")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the relay configuration file
    #[arg(value_name = "RELAY_CONF")]
    config: PathBuf,

    /// Metric name or path to a directory with packrat logs
    #[arg(value_name = "METRIC_OR_LOG_PATH")]
    target: String,

    /// Interpret the second argument as a packrat log directory
    #[arg(long)]
    is_packrat_log: bool,

    /// Interpret the second argument as a metric path
    #[arg(long)]
    is_metric_path: bool,

    /// Show backend port (and instance, if any) next to the host
    #[arg(long)]
    show_port: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    // clap's own error exit code is 2, which this tool reserves for
    // broken pipes; usage problems must exit 1.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };

    if let Err(e) = init_logging(&cli.log_level) {
        eprintln!("error: {e:#}");
        return ExitCode::from(1);
    }

    let opts = Options {
        config_path: cli.config,
        target: cli.target,
        is_packrat_log: cli.is_packrat_log,
        is_metric_path: cli.is_metric_path,
        show_port: cli.show_port,
    };

    let mut stdout = io::stdout().lock();
    match run(&opts, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // A closed pipe gets no message: the consumer went away on
            // purpose (| head) and stderr noise would only confuse.
            if e.exit_code() != 2 {
                eprintln!("error: {e}");
            }
            ExitCode::from(e.exit_code())
        }
    }
}

/// Initialize the tracing subscriber for logging
///
/// Diagnostics go to stderr; stdout carries only destination lines.
fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .or_else(|_| EnvFilter::try_new("warn"))
        .map_err(|e| anyhow::anyhow!("invalid log level: {}", e))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(io::stderr))
        .with(filter)
        .init();

    Ok(())
}
