//! Tracing subscriber setup for the `picdiff` binary.
//!
//! Log lines go to stderr so report and JSON output on stdout stay clean.
//! `PICDIFF_LOG` takes `EnvFilter` directives and overrides the default level.

use anyhow::{anyhow, Context};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding filter directives.
pub const LOG_ENV: &str = "PICDIFF_LOG";

/// Default level: `debug` when verbose, `info` otherwise.
pub fn default_level(verbose: bool) -> Level {
    if verbose { Level::DEBUG } else { Level::INFO }
}

/// Build the filter from `directives`, falling back to `level`.
pub fn build_filter(directives: Option<&str>, level: Level) -> anyhow::Result<EnvFilter> {
    match directives.map(str::trim).filter(|d| !d.is_empty()) {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid {} directives '{}'", LOG_ENV, directives)),
        None => Ok(EnvFilter::new(level.as_str())),
    }
}

/// Install the global subscriber. Call once at startup.
pub fn init(verbose: bool) -> anyhow::Result<()> {
    let directives = std::env::var(LOG_ENV).ok();
    let filter = build_filter(directives.as_deref(), default_level(verbose))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {}", e))
}
