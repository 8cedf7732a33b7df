//! Tracing setup for the marketplace service. The simulated gateway logs every
//! fetch and submission, so the default filter keeps HTTP-stack internals at
//! `warn` and leaves the marketplace crates at the configured level.

use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    Filter { directives: String, source: ParseError },
    Init(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::Filter { directives, .. } => {
                write!(f, "invalid log filter '{directives}'")
            }
            TelemetryError::Init(err) => write!(f, "failed to install subscriber: {err}"),
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::Filter { source, .. } => Some(source),
            TelemetryError::Init(err) => Some(&**err),
        }
    }
}

/// Install the global tracing subscriber. A `RUST_LOG` value replaces the
/// configured filter wholesale, quieting directives included.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => config_filter(config)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Init)
}

fn config_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    let directives = directives(config);
    EnvFilter::try_new(&directives).map_err(|source| TelemetryError::Filter { directives, source })
}

fn directives(config: &TelemetryConfig) -> String {
    format!("{},hyper=warn,tower_http=warn", config.log_level)
}
