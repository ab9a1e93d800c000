//! Wire types for the RCA backend endpoints.
//!
//! Two endpoints, both JSON-over-POST:
//! - `/get-details` resolves a ticket number to an [`RcaReport`]
//! - `/agent-query` routes a free-text question to the backend agent

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Path of the ticket lookup endpoint, relative to the configured base URL.
pub const GET_DETAILS_PATH: &str = "/get-details";

/// Path of the agentic query endpoint.
pub const AGENT_QUERY_PATH: &str = "/agent-query";

/// Ticket numbering scheme the operator is looking up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketMode {
    /// RTSK task numbers.
    #[default]
    Task,
    /// RITM request item numbers.
    Ritm,
}

impl TicketMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketMode::Task => "TASK",
            TicketMode::Ritm => "RITM",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            TicketMode::Task => TicketMode::Ritm,
            TicketMode::Ritm => TicketMode::Task,
        }
    }
}

/// Body of a `/get-details` request.
///
/// Serializes to exactly one key: `rtsk_number` for TASK lookups,
/// `ritm_number` for RITM lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketLookupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtsk_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ritm_number: Option<String>,
}

impl TicketLookupRequest {
    pub fn new(mode: TicketMode, number: impl Into<String>) -> Self {
        match mode {
            TicketMode::Task => Self {
                rtsk_number: Some(number.into()),
                ritm_number: None,
            },
            TicketMode::Ritm => Self {
                rtsk_number: None,
                ritm_number: Some(number.into()),
            },
        }
    }

    /// The ticket number, whichever scheme it was submitted under.
    pub fn number(&self) -> &str {
        self.rtsk_number
            .as_deref()
            .or(self.ritm_number.as_deref())
            .unwrap_or("")
    }
}

/// Body of an `/agent-query` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentQueryRequest {
    pub query: String,
}

/// Successful `/get-details` response.
///
/// `ticket_data` is whatever the backend knows about the ticket; it is
/// carried as raw JSON and re-serialized (pretty-printed) for display and
/// clipboard export without interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RcaReport {
    #[serde(default)]
    pub ticket_data: Map<String, Value>,
    #[serde(default)]
    pub generated_rca: String,
}

impl RcaReport {
    /// Pretty-printed JSON of the whole report, as exported to the clipboard.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Successful `/agent-query` response.
///
/// A backend that omits `response` yields an empty answer, which is a valid
/// (if unhelpful) result, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentAnswer {
    #[serde(default)]
    pub response: String,
}
