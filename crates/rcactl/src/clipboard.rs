//! Clipboard export via OSC 52.
//!
//! OSC 52 asks the terminal emulator to place base64-encoded text on the
//! system clipboard. It works over SSH and inside the TUI's raw mode, with
//! no display-server dependency. The payload is passed through verbatim:
//! exactly what is on screen (or what pretty-printing produced) is copied.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rca_common::ConsoleError;
use std::io::{self, Write};

/// Copy `text` to the system clipboard through the controlling terminal.
pub fn copy(text: &str) -> Result<(), ConsoleError> {
    if text.is_empty() {
        return Ok(());
    }

    let encoded = STANDARD.encode(text.as_bytes());
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]52;c;{}\x07", encoded)
        .and_then(|_| stdout.flush())
        .map_err(|e| ConsoleError::Clipboard(e.to_string()))
}

/// The OSC 52 sequence for `text`, for sinks other than stdout.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_wraps_base64_payload() {
        let seq = osc52_sequence("hello");
        assert!(seq.starts_with("\x1b]52;c;"));
        assert!(seq.ends_with('\x07'));
        assert!(seq.contains("aGVsbG8="));
    }

    #[test]
    fn test_empty_copy_is_a_no_op() {
        assert!(copy("").is_ok());
    }
}
