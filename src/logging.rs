//! Tracing setup for the binary.
//!
//! `RUST_LOG` wins when set; otherwise `--verbose` selects `debug` and the
//! default is `info`.

use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(#[from] tracing_subscriber::util::TryInitError),
}

pub fn init(verbose: bool) -> Result<(), LoggingError> {
    tracing_subscriber::registry()
        .with(build_env_filter(verbose))
        .with(fmt::layer().with_target(false))
        .try_init()?;
    Ok(())
}

fn build_env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level(verbose)))
}

fn default_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_switches_to_debug() {
        assert_eq!(default_level(true), "debug");
        assert_eq!(default_level(false), "info");
    }
}
