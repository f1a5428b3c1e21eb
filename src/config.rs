//! launchpad configuration.
//!
//! Loaded from `~/.launchpad/config.toml` when present, or from the path
//! given with `--config`. Every key is optional; command-line flags win.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use launchpad::{execute::ExecutionKind, planner::PlannerKind};

use crate::logging::LogLevel;

/// launchpad configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Planner used by `run` and gated `simulate` when `--planner` is not given.
    pub planner: PlannerKind,

    /// Execution stage used by `run` when `--execution` is not given.
    pub execution: ExecutionKind,

    /// Log level when neither `RUST_LOG` nor `--verbose` is set.
    pub log_level: LogLevel,
}

impl Config {
    /// Load config from an explicit path, or from the default location.
    ///
    /// An explicit path must exist. A missing default file yields the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, String> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(format!("no config file found at {}", path.display()));
            }
            return Self::from_path(path);
        }

        match Self::path() {
            Some(path) if path.exists() => Self::from_path(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Read and parse a config file.
    pub fn from_path(path: &Path) -> Result<Self, String> {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;

        toml::from_str(&contents).map_err(|e| format!("invalid config at {}: {e}", path.display()))
    }

    /// The default config file path: `~/.launchpad/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".launchpad").join("config.toml"))
    }
}
