//! Structured logging setup.
//!
//! Logs go to stderr. `RUST_LOG` takes precedence; otherwise the level is
//! `info`, or `debug` with `--verbose`.

use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for the given verbosity.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "receipt_points=debug,info"
    } else {
        "info"
    }
}

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if `RUST_LOG` is malformed or a subscriber is already set.
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.is_empty() => EnvFilter::try_new(directives)?,
        _ => EnvFilter::try_new(default_directive(verbose))?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}
