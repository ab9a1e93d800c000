//! TUI Module - the interactive console
//!
//! Organized the same way as the one-shot path, but event-driven:
//! - event_loop: terminal setup, key handling, completion messages
//! - input: input bar drawing and submit dispatch
//! - render: UI drawing functions
//! - state: console state (the two sessions plus view state)

mod event_loop;
mod input;
mod render;
mod state;

// Re-export main entry point
pub use event_loop::run;

// Re-export message type for external use
pub use event_loop::TuiMessage;
