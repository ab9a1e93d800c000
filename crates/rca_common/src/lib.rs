//! Shared types for the RCA console.
//!
//! Everything the front-end binary and its tests need to agree on lives
//! here: wire types for the backend endpoints, the inline markup renderer,
//! configuration, error taxonomy, and the theme catalog.

pub mod api;
pub mod config;
pub mod error;
pub mod markup;
pub mod theme;

pub use api::{AgentAnswer, AgentQueryRequest, RcaReport, TicketLookupRequest, TicketMode};
pub use config::ConsoleConfig;
pub use error::ConsoleError;
pub use markup::{parse_inline, MarkupSegment, SegmentKind};
pub use theme::Theme;
