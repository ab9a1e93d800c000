//! Logging for rcactl invocations.
//!
//! One JSONL entry per command, appended to a state file discovered through
//! an XDG fallback chain. Logging must never break the command itself, so
//! every failure path degrades to stdout.

use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;

/// Log entry for each rcactl invocation
#[derive(Debug, Serialize, Deserialize)]
pub struct LogEntry {
    /// ISO 8601 timestamp
    pub ts: String,

    /// Request ID (UUID)
    pub req_id: String,

    /// Command name (`ticket`, `ask`, `config`, `tui`)
    pub command: String,

    /// Duration in milliseconds
    pub duration_ms: u64,

    /// Success flag
    pub ok: bool,

    /// Error details if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetails>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

impl LogEntry {
    /// Discover log file path with fallback chain
    ///
    /// Priority:
    /// 1. $RCACTL_LOG_FILE environment variable (explicit override)
    /// 2. $XDG_STATE_HOME/rca-console/ctl.jsonl
    /// 3. ~/.local/state/rca-console/ctl.jsonl
    fn discover_log_path() -> Option<String> {
        if let Ok(path) = std::env::var("RCACTL_LOG_FILE") {
            return Some(path);
        }

        if let Ok(xdg_state) = std::env::var("XDG_STATE_HOME") {
            return Some(format!("{}/rca-console/ctl.jsonl", xdg_state));
        }

        if let Ok(home) = std::env::var("HOME") {
            return Some(format!("{}/.local/state/rca-console/ctl.jsonl", home));
        }

        None
    }

    /// Write log entry to file, falling back to stdout on failure
    pub fn write(&self) -> Result<(), std::io::Error> {
        let json = serde_json::to_string(self)?;

        if let Some(path) = Self::discover_log_path() {
            match Self::write_to_file(&json, &path) {
                Ok(()) => return Ok(()),
                Err(_) => {
                    println!("{}", json);
                    return Ok(());
                }
            }
        }

        println!("{}", json);
        Ok(())
    }

    fn write_to_file(json: &str, path: &str) -> Result<(), std::io::Error> {
        if let Some(parent) = std::path::Path::new(path).parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;

        writeln!(file, "{}", json)?;
        Ok(())
    }

    /// Generate request ID
    pub fn generate_req_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    /// Get current timestamp in ISO 8601 format
    pub fn now() -> String {
        chrono::Utc::now().to_rfc3339()
    }
}
