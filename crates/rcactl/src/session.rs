//! Workflow sessions - state machines for the two console workflows.
//!
//! Each session owns its input fields and a [`SessionState`]. Transitions
//! happen on exactly two occasions: the operator submits (Idle/Succeeded/
//! Failed -> Loading) and the executor completes (Loading -> Succeeded or
//! Failed). Nothing else mutates a session, and the submit control is
//! disabled while Loading, so at most one call is in flight per session.

use crate::backend::RequestOutcome;
use rca_common::api::{AgentAnswer, AgentQueryRequest, RcaReport, TicketLookupRequest, TicketMode};
use std::time::Duration;

const MALFORMED_RESPONSE_MSG: &str = "The backend returned an unreadable response.";
const GENERIC_NETWORK_MSG: &str = "Could not reach the backend.";

/// Lifecycle of one workflow.
///
/// A session never holds a payload and an error at the same time; the enum
/// makes that state unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState<T> {
    Idle,
    Loading,
    Succeeded(T),
    Failed(String),
}

impl<T> SessionState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, SessionState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }
}

/// Map a failed [`RequestOutcome`] to the message shown to the operator.
fn failure_message(outcome: RequestOutcome, timeout_secs: u64) -> String {
    match outcome {
        RequestOutcome::TimedOut => format!(
            "Request timed out after {} second{}. The backend may be busy; try again.",
            timeout_secs,
            if timeout_secs == 1 { "" } else { "s" }
        ),
        RequestOutcome::HttpFailure { status, body } => {
            if body.trim().is_empty() {
                format!("HTTP {}", status)
            } else {
                body
            }
        }
        RequestOutcome::NetworkFailure(message) => {
            if message.trim().is_empty() {
                GENERIC_NETWORK_MSG.to_string()
            } else {
                message
            }
        }
        // complete() routes successes before calling this.
        RequestOutcome::Success(_) => MALFORMED_RESPONSE_MSG.to_string(),
    }
}

/// The "fetch RCA by ticket number" workflow.
///
/// Two independent input fields, one per numbering scheme; only the field
/// matching the current mode is considered on submit.
#[derive(Debug, Clone)]
pub struct TicketLookupSession {
    mode: TicketMode,
    task_input: String,
    ritm_input: String,
    state: SessionState<RcaReport>,
    timeout_secs: u64,
}

impl TicketLookupSession {
    pub fn new(timeout: Duration) -> Self {
        Self {
            mode: TicketMode::default(),
            task_input: String::new(),
            ritm_input: String::new(),
            state: SessionState::Idle,
            timeout_secs: timeout.as_secs(),
        }
    }

    pub fn mode(&self) -> TicketMode {
        self.mode
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn active_input(&self) -> &str {
        match self.mode {
            TicketMode::Task => &self.task_input,
            TicketMode::Ritm => &self.ritm_input,
        }
    }

    pub fn active_input_mut(&mut self) -> &mut String {
        match self.mode {
            TicketMode::Task => &mut self.task_input,
            TicketMode::Ritm => &mut self.ritm_input,
        }
    }

    pub fn state(&self) -> &SessionState<RcaReport> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn report(&self) -> Option<&RcaReport> {
        match &self.state {
            SessionState::Succeeded(report) => Some(report),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SessionState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Try to start a lookup.
    ///
    /// Returns the request body to send, or `None` when the active field is
    /// blank (silent client-side guard, no state change) or a call is
    /// already in flight.
    pub fn submit(&mut self) -> Option<TicketLookupRequest> {
        if self.state.is_loading() {
            return None;
        }

        let number = self.active_input().trim();
        if number.is_empty() {
            return None;
        }

        let request = TicketLookupRequest::new(self.mode, number);
        self.state = SessionState::Loading;
        Some(request)
    }

    /// Apply an executor completion.
    ///
    /// Only honored while Loading: a completion arriving after `clear()`
    /// must not resurrect the session.
    pub fn complete(&mut self, outcome: RequestOutcome) {
        if !self.state.is_loading() {
            return;
        }

        self.state = match outcome {
            RequestOutcome::Success(value) => match serde_json::from_value::<RcaReport>(value) {
                Ok(report) => SessionState::Succeeded(report),
                Err(_) => SessionState::Failed(MALFORMED_RESPONSE_MSG.to_string()),
            },
            other => SessionState::Failed(failure_message(other, self.timeout_secs)),
        };
    }

    /// Reset both fields and drop any payload or error.
    pub fn clear(&mut self) {
        self.task_input.clear();
        self.ritm_input.clear();
        self.state = SessionState::Idle;
    }
}

/// The "ask the backend agent" workflow.
#[derive(Debug, Clone)]
pub struct AgentQuerySession {
    input: String,
    state: SessionState<String>,
    timeout_secs: u64,
}

impl AgentQuerySession {
    pub fn new(timeout: Duration) -> Self {
        Self {
            input: String::new(),
            state: SessionState::Idle,
            timeout_secs: timeout.as_secs(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    pub fn state(&self) -> &SessionState<String> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// The agent's answer text. Empty is a valid answer, not an error.
    pub fn answer(&self) -> Option<&str> {
        match &self.state {
            SessionState::Succeeded(response) => Some(response),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SessionState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Try to start a query; same guard rules as the ticket session.
    pub fn submit(&mut self) -> Option<AgentQueryRequest> {
        if self.state.is_loading() {
            return None;
        }

        let query = self.input.trim();
        if query.is_empty() {
            return None;
        }

        let request = AgentQueryRequest {
            query: query.to_string(),
        };
        self.state = SessionState::Loading;
        Some(request)
    }

    /// Apply an executor completion; only the `response` string is kept.
    pub fn complete(&mut self, outcome: RequestOutcome) {
        if !self.state.is_loading() {
            return;
        }

        self.state = match outcome {
            RequestOutcome::Success(value) => match serde_json::from_value::<AgentAnswer>(value) {
                Ok(answer) => SessionState::Succeeded(answer.response),
                Err(_) => SessionState::Failed(MALFORMED_RESPONSE_MSG.to_string()),
            },
            other => SessionState::Failed(failure_message(other, self.timeout_secs)),
        };
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.state = SessionState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ticket_session() -> TicketLookupSession {
        TicketLookupSession::new(Duration::from_secs(90))
    }

    fn agent_session() -> AgentQuerySession {
        AgentQuerySession::new(Duration::from_secs(90))
    }

    #[test]
    fn test_blank_input_refuses_silently() {
        let mut session = ticket_session();
        assert!(session.submit().is_none());
        *session.active_input_mut() = "   \t ".to_string();
        assert!(session.submit().is_none());
        assert!(session.state().is_idle());
        assert!(session.error().is_none());
    }

    #[test]
    fn test_submit_trims_and_uses_active_mode_key() {
        let mut session = ticket_session();
        *session.active_input_mut() = "  RTSK0001234  ".to_string();
        let request = session.submit().unwrap();
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, json!({ "rtsk_number": "RTSK0001234" }));
        assert!(session.is_loading());
    }

    #[test]
    fn test_ritm_mode_uses_its_own_field() {
        let mut session = ticket_session();
        // Text typed under TASK must not leak into a RITM submit.
        *session.active_input_mut() = "RTSK0001234".to_string();
        session.toggle_mode();
        assert!(session.submit().is_none());

        *session.active_input_mut() = "RITM005678".to_string();
        let request = session.submit().unwrap();
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, json!({ "ritm_number": "RITM005678" }));
    }

    #[test]
    fn test_no_double_submit_while_loading() {
        let mut session = ticket_session();
        *session.active_input_mut() = "RTSK1".to_string();
        assert!(session.submit().is_some());
        assert!(session.submit().is_none());
    }

    #[test]
    fn test_success_payload_replaces_state() {
        let mut session = ticket_session();
        *session.active_input_mut() = "RTSK1".to_string();
        session.submit().unwrap();
        session.complete(RequestOutcome::Success(json!({
            "ticket_data": { "assignment_group": "network-ops" },
            "generated_rca": "Switch port flapped."
        })));

        let report = session.report().unwrap();
        assert_eq!(report.generated_rca, "Switch port flapped.");
        assert!(session.error().is_none());
    }

    #[test]
    fn test_timeout_message_states_seconds() {
        let mut session = TicketLookupSession::new(Duration::from_secs(30));
        *session.active_input_mut() = "RTSK1".to_string();
        session.submit().unwrap();
        session.complete(RequestOutcome::TimedOut);

        let message = session.error().unwrap();
        assert!(message.contains("30 seconds"), "got: {}", message);
        assert!(session.report().is_none());
    }

    #[test]
    fn test_http_failure_surfaces_backend_body() {
        let mut session = ticket_session();
        *session.active_input_mut() = "RTSK1".to_string();
        session.submit().unwrap();
        session.complete(RequestOutcome::HttpFailure {
            status: 404,
            body: "Ticket not found in incident store".to_string(),
        });
        assert_eq!(session.error().unwrap(), "Ticket not found in incident store");
    }

    #[test]
    fn test_http_failure_with_blank_body_synthesizes_status() {
        let mut session = ticket_session();
        *session.active_input_mut() = "RTSK1".to_string();
        session.submit().unwrap();
        session.complete(RequestOutcome::HttpFailure {
            status: 502,
            body: "  ".to_string(),
        });
        assert_eq!(session.error().unwrap(), "HTTP 502");
    }

    #[test]
    fn test_network_failure_falls_back_to_generic() {
        let mut session = ticket_session();
        *session.active_input_mut() = "RTSK1".to_string();
        session.submit().unwrap();
        session.complete(RequestOutcome::NetworkFailure(String::new()));
        assert_eq!(session.error().unwrap(), GENERIC_NETWORK_MSG);
    }

    #[test]
    fn test_malformed_success_payload_fails() {
        let mut session = ticket_session();
        *session.active_input_mut() = "RTSK1".to_string();
        session.submit().unwrap();
        session.complete(RequestOutcome::Success(json!("not an object")));
        assert_eq!(session.error().unwrap(), MALFORMED_RESPONSE_MSG);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut session = ticket_session();
        *session.active_input_mut() = "RTSK1".to_string();
        session.submit().unwrap();
        session.complete(RequestOutcome::HttpFailure {
            status: 500,
            body: "boom".to_string(),
        });
        session.clear();

        assert!(session.state().is_idle());
        assert!(session.error().is_none());
        assert!(session.report().is_none());
        assert_eq!(session.active_input(), "");
        session.toggle_mode();
        assert_eq!(session.active_input(), "");
    }

    #[test]
    fn test_late_completion_after_clear_is_ignored() {
        let mut session = ticket_session();
        *session.active_input_mut() = "RTSK1".to_string();
        session.submit().unwrap();
        session.clear();
        session.complete(RequestOutcome::Success(json!({ "generated_rca": "late" })));
        assert!(session.state().is_idle());
    }

    #[test]
    fn test_agent_submit_builds_query_body() {
        let mut session = agent_session();
        session.input_mut().push_str("  why did the VPN drop?  ");
        let request = session.submit().unwrap();
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, json!({ "query": "why did the VPN drop?" }));
    }

    #[test]
    fn test_agent_missing_response_is_empty_answer_not_error() {
        let mut session = agent_session();
        session.input_mut().push_str("anything");
        session.submit().unwrap();
        session.complete(RequestOutcome::Success(json!({})));
        assert_eq!(session.answer(), Some(""));
        assert!(session.error().is_none());
    }

    #[test]
    fn test_agent_answer_retains_only_response() {
        let mut session = agent_session();
        session.input_mut().push_str("anything");
        session.submit().unwrap();
        session.complete(RequestOutcome::Success(json!({
            "response": "The **gateway** restarted.",
            "debug_trace": ["ignored"]
        })));
        assert_eq!(session.answer(), Some("The **gateway** restarted."));
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut ticket = ticket_session();
        let mut agent = agent_session();

        *ticket.active_input_mut() = "RTSK1".to_string();
        agent.input_mut().push_str("what broke?");

        ticket.submit().unwrap();
        agent.submit().unwrap();

        agent.complete(RequestOutcome::Success(json!({ "response": "done" })));
        assert!(ticket.is_loading());
        assert_eq!(agent.answer(), Some("done"));

        ticket.complete(RequestOutcome::TimedOut);
        assert!(ticket.error().is_some());
        assert_eq!(agent.answer(), Some("done"));
    }
}
