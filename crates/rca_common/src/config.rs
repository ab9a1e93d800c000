//! Console configuration.
//!
//! Configuration lives in `config.toml` under the user config directory.
//! Every field has a default, so a missing or partial file is valid and the
//! console always starts. There is no runtime override surface: the values
//! are resolved once at startup and shared by both workflows.

use crate::error::ConsoleError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR: &str = "rca-console";

/// Process-wide settings for the console.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Base URL of the RCA backend, no trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Hard wall-clock limit for a single backend call, in milliseconds.
    /// Shared by the ticket lookup and agent query workflows.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Named style applied to the CLI and TUI. Unrecognized names fall back
    /// to the default theme.
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_request_timeout_ms() -> u64 {
    90_000
}

fn default_theme() -> String {
    "slate".to_string()
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_ms: default_request_timeout_ms(),
            theme: default_theme(),
        }
    }
}

impl ConsoleConfig {
    /// Discover the config file path with a fallback chain
    ///
    /// Priority:
    /// 1. $RCACTL_CONFIG environment variable (explicit override)
    /// 2. $XDG_CONFIG_HOME/rca-console/config.toml
    /// 3. ~/.config/rca-console/config.toml
    pub fn discover_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("RCACTL_CONFIG") {
            return Some(PathBuf::from(path));
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg_config).join(CONFIG_DIR).join(CONFIG_FILE));
        }

        if let Ok(home) = std::env::var("HOME") {
            return Some(
                PathBuf::from(home)
                    .join(".config")
                    .join(CONFIG_DIR)
                    .join(CONFIG_FILE),
            );
        }

        None
    }

    /// Load the configuration, falling back to defaults when no file exists.
    ///
    /// A file that exists but does not parse is an error: silently ignoring
    /// a typo'd config would point the console at the wrong backend.
    pub fn load() -> Result<Self, ConsoleError> {
        match Self::discover_path() {
            Some(path) if path.exists() => {
                let raw = fs::read_to_string(&path)?;
                Self::from_toml(&raw)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Parse a TOML document; missing fields keep their defaults.
    pub fn from_toml(raw: &str) -> Result<Self, ConsoleError> {
        toml::from_str(raw).map_err(|e| ConsoleError::Config(e.to_string()))
    }

    /// The request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// The timeout in whole seconds, as surfaced in failure messages.
    pub fn timeout_secs(&self) -> u64 {
        self.request_timeout_ms / 1000
    }
}
