//! Log setup for the binary.
//!
//! Logs go to stderr so stdout carries only the result JSON.
//! `RUST_LOG` takes precedence over the configured level; `--verbose`
//! overrides both.

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(level: LogLevel, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(LogLevel::Debug.as_str())
    } else {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level.as_str()))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
