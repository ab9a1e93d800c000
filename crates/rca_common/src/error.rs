//! Error types for the RCA console.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}
