//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once, at startup
//! - Pick the log level from config, overridable via `RUST_LOG`
//! - Choose human or JSON output
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - JSON format for machine consumption, pretty format for development
//! - Logs go to stderr so command output on stdout stays parseable
//! - A bad configured level is a startup error, not a silent default

use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, ObservabilityConfig};

/// Errors while installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log level `{0}` (expected trace, debug, info, warn, error or off)")]
    InvalidLevel(String),

    #[error("invalid log directive `{directive}`: {source}")]
    InvalidDirective {
        directive: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error(transparent)]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Parse the configured level.
///
/// A bare word must be a level name; anything with `=` or `,` is treated as
/// a full directive list (`jobboard_router=debug,warn`).
pub fn config_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    let level = level.trim();
    if !level.contains(['=', ',']) {
        level
            .parse::<LevelFilter>()
            .map_err(|_| LoggingError::InvalidLevel(level.to_string()))?;
    }
    EnvFilter::try_new(level).map_err(|source| LoggingError::InvalidDirective {
        directive: level.to_string(),
        source,
    })
}

/// Build the level filter: `RUST_LOG` wins over the configured level.
pub fn env_filter(config: &ObservabilityConfig) -> Result<EnvFilter, LoggingError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => config_filter(&config.log_level),
    }
}

/// Install the global subscriber.
///
/// Fails on an invalid configured level or if a subscriber is already installed.
pub fn init(config: &ObservabilityConfig) -> Result<(), LoggingError> {
    let registry = tracing_subscriber::registry().with(env_filter(config)?);

    match config.log_format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()?,
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?,
    }
    Ok(())
}
