#![forbid(unsafe_code)]

//! Logging and tracing support.
//!
//! Every crate in the workspace logs through the `tracing` facade directly.
//! With the `tracing-json` feature this module installs a JSON subscriber
//! whose filter comes from [`ENV_LOG_FILTER`].

/// Environment variable holding the `EnvFilter` directive (e.g. `pips_web=debug`).
pub const ENV_LOG_FILTER: &str = "PIPS_LOG";

/// Errors raised while installing the JSON subscriber.
#[cfg(feature = "tracing-json")]
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The fallback directive could not be parsed.
    #[error("invalid log filter directive: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    /// Another global subscriber is already installed.
    #[error("tracing subscriber already installed: {0}")]
    Install(#[from] tracing_subscriber::util::TryInitError),
}

/// Install a global JSON subscriber.
///
/// The filter is read from [`ENV_LOG_FILTER`]; when unset or unparsable,
/// `default_directive` is used instead.
#[cfg(feature = "tracing-json")]
pub fn init_json_subscriber(default_directive: &str) -> Result<(), LoggingError> {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_env(ENV_LOG_FILTER)
        .or_else(|_| EnvFilter::try_new(default_directive))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json())
        .try_init()?;
    Ok(())
}
