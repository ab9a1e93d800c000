//! Console state - the two sessions plus everything the view needs.

use crate::session::{AgentQuerySession, TicketLookupSession};
use rca_common::{ConsoleConfig, Theme};

/// Which workflow panel owns the input bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Ticket,
    Agent,
}

impl Pane {
    pub fn toggled(&self) -> Self {
        match self {
            Pane::Ticket => Pane::Agent,
            Pane::Agent => Pane::Ticket,
        }
    }
}

/// All mutable state behind the console.
///
/// The event loop is the only mutator: keys and completion messages are
/// applied one at a time, so the sessions need no locking.
pub struct ConsoleTuiState {
    pub pane: Pane,
    pub ticket: TicketLookupSession,
    pub agent: AgentQuerySession,
    pub theme: Theme,
    pub base_url: String,
    pub timeout_secs: u64,
    pub spinner_frame: usize,
    pub scroll_offset: u16,
    pub show_help: bool,
    /// Transient status-bar message (copy confirmations and the like).
    pub notice: Option<String>,
}

impl ConsoleTuiState {
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            pane: Pane::Ticket,
            ticket: TicketLookupSession::new(config.request_timeout()),
            agent: AgentQuerySession::new(config.request_timeout()),
            theme: Theme::from_name(&config.theme),
            base_url: config.base_url.clone(),
            timeout_secs: config.timeout_secs(),
            spinner_frame: 0,
            scroll_offset: 0,
            show_help: false,
            notice: None,
        }
    }

    /// The input text of the active pane.
    pub fn active_input(&self) -> &str {
        match self.pane {
            Pane::Ticket => self.ticket.active_input(),
            Pane::Agent => self.agent.input(),
        }
    }

    pub fn push_char(&mut self, c: char) {
        match self.pane {
            Pane::Ticket => self.ticket.active_input_mut().push(c),
            Pane::Agent => self.agent.input_mut().push(c),
        }
    }

    pub fn pop_char(&mut self) {
        match self.pane {
            Pane::Ticket => {
                self.ticket.active_input_mut().pop();
            }
            Pane::Agent => {
                self.agent.input_mut().pop();
            }
        }
    }

    /// Whether the active pane has a call in flight.
    pub fn active_loading(&self) -> bool {
        match self.pane {
            Pane::Ticket => self.ticket.is_loading(),
            Pane::Agent => self.agent.is_loading(),
        }
    }

    pub fn any_loading(&self) -> bool {
        self.ticket.is_loading() || self.agent.is_loading()
    }

    /// Clear the active pane's session and view state.
    pub fn clear_active(&mut self) {
        match self.pane {
            Pane::Ticket => self.ticket.clear(),
            Pane::Agent => self.agent.clear(),
        }
        self.scroll_offset = 0;
        self.notice = None;
    }

    /// The exportable payload of the active pane, if it has one.
    pub fn active_payload(&self) -> Option<String> {
        match self.pane {
            Pane::Ticket => self
                .ticket
                .report()
                .and_then(|report| report.to_pretty_json().ok()),
            Pane::Agent => self.agent.answer().map(|answer| answer.to_string()),
        }
    }
}
