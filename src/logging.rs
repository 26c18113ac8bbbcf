//! Tracing subscriber setup
//!
//! `RUST_LOG` takes precedence over the configured level when set.

use anyhow::{Result, anyhow};
use std::{env, io};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
    Compact,
}

impl LogFormat {
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "json" => LogFormat::Json,
            "compact" => LogFormat::Compact,
            _ => LogFormat::Pretty,
        }
    }
}

fn build_filter(level: &str) -> EnvFilter {
    env::var("RUST_LOG")
        .map_or_else(|_| EnvFilter::new(level), EnvFilter::new)
        .add_directive(
            "hyper=warn"
                .parse()
                .unwrap_or_else(|_| tracing::Level::WARN.into()),
        )
        .add_directive(
            format!("tower_http={level}")
                .parse()
                .unwrap_or_else(|_| tracing::Level::INFO.into()),
        )
}

/// Install the global tracing subscriber.
///
/// `verbose` raises the level to `debug` regardless of configuration.
pub fn init(config: &LoggingConfig, verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { config.level.as_str() };
    let registry = tracing_subscriber::registry().with(build_filter(level));

    // logs go to stderr so exported reports on stdout stay clean
    let result = match LogFormat::from_name(&config.format) {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(true).with_writer(io::stderr))
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_target(true).with_writer(io::stderr))
            .try_init(),
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(io::stderr),
            )
            .try_init(),
    };

    result.map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}
