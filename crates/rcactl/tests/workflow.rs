//! End-to-end workflow tests: session + executor against a mock backend.

use rcactl::backend::BackendClient;
use rcactl::session::{AgentQuerySession, TicketLookupSession};
use rca_common::api::{AGENT_QUERY_PATH, GET_DETAILS_PATH};
use rca_common::ConsoleConfig;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer, timeout_ms: u64) -> ConsoleConfig {
    ConsoleConfig {
        base_url: server.uri(),
        request_timeout_ms: timeout_ms,
        ..ConsoleConfig::default()
    }
}

#[tokio::test]
async fn test_ticket_lookup_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GET_DETAILS_PATH))
        .and(body_json(json!({ "rtsk_number": "RTSK0012345" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ticket_data": { "short_description": "VPN outage" },
            "generated_rca": "The **gateway** certificate expired."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server, 2_000);
    let client = BackendClient::new(&config);
    let mut session = TicketLookupSession::new(config.request_timeout());

    session.active_input_mut().push_str("  RTSK0012345  ");
    let request = session.submit().expect("non-blank input must submit");
    assert!(session.is_loading());

    let outcome = client.post_json(GET_DETAILS_PATH, &request).await;
    session.complete(outcome);

    let report = session.report().expect("lookup should succeed");
    assert_eq!(report.generated_rca, "The **gateway** certificate expired.");
    assert_eq!(report.ticket_data["short_description"], "VPN outage");
}

#[tokio::test]
async fn test_ritm_lookup_sends_ritm_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GET_DETAILS_PATH))
        .and(body_json(json!({ "ritm_number": "RITM777" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ticket_data": {},
            "generated_rca": "ok"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server, 2_000);
    let client = BackendClient::new(&config);
    let mut session = TicketLookupSession::new(config.request_timeout());

    session.toggle_mode();
    session.active_input_mut().push_str("RITM777");
    let request = session.submit().unwrap();

    let outcome = client.post_json(GET_DETAILS_PATH, &request).await;
    session.complete(outcome);
    assert!(session.report().is_some());
}

#[tokio::test]
async fn test_backend_error_text_reaches_the_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GET_DETAILS_PATH))
        .respond_with(
            ResponseTemplate::new(404).set_body_string("No ticket RTSK9 in the incident store"),
        )
        .mount(&server)
        .await;

    let config = config_for(&server, 2_000);
    let client = BackendClient::new(&config);
    let mut session = TicketLookupSession::new(config.request_timeout());

    session.active_input_mut().push_str("RTSK9");
    let request = session.submit().unwrap();
    let outcome = client.post_json(GET_DETAILS_PATH, &request).await;
    session.complete(outcome);

    assert_eq!(
        session.error().unwrap(),
        "No ticket RTSK9 in the incident store"
    );
}

#[tokio::test]
async fn test_timeout_reaches_failed_with_seconds_in_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(AGENT_QUERY_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "response": "late" }))
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&server)
        .await;

    let config = config_for(&server, 1_000);
    let client = BackendClient::new(&config);
    let mut session = AgentQuerySession::new(config.request_timeout());

    session.input_mut().push_str("why?");
    let request = session.submit().unwrap();
    let outcome = client.post_json(AGENT_QUERY_PATH, &request).await;
    session.complete(outcome);

    let message = session.error().expect("timeout must fail the session");
    assert!(message.contains("1 second"), "got: {}", message);
    assert!(session.answer().is_none());
}

#[tokio::test]
async fn test_agent_query_with_omitted_response_is_an_empty_answer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(AGENT_QUERY_PATH))
        .and(body_json(json!({ "query": "anything new?" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let config = config_for(&server, 2_000);
    let client = BackendClient::new(&config);
    let mut session = AgentQuerySession::new(config.request_timeout());

    session.input_mut().push_str("  anything new?  ");
    let request = session.submit().unwrap();
    let outcome = client.post_json(AGENT_QUERY_PATH, &request).await;
    session.complete(outcome);

    assert_eq!(session.answer(), Some(""));
    assert!(session.error().is_none());
}

#[tokio::test]
async fn test_concurrent_sessions_do_not_observe_each_other() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GET_DETAILS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "ticket_data": {}, "generated_rca": "slow report" }))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(AGENT_QUERY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": "fast answer" })))
        .mount(&server)
        .await;

    let config = config_for(&server, 2_000);
    let client = BackendClient::new(&config);
    let mut ticket = TicketLookupSession::new(config.request_timeout());
    let mut agent = AgentQuerySession::new(config.request_timeout());

    ticket.active_input_mut().push_str("RTSK1");
    agent.input_mut().push_str("what broke?");

    let ticket_request = ticket.submit().unwrap();
    let agent_request = agent.submit().unwrap();

    // Both calls in flight at once; the agent finishes first.
    let (ticket_outcome, agent_outcome) = tokio::join!(
        client.post_json(GET_DETAILS_PATH, &ticket_request),
        client.post_json(AGENT_QUERY_PATH, &agent_request),
    );

    agent.complete(agent_outcome);
    assert_eq!(agent.answer(), Some("fast answer"));
    assert!(ticket.is_loading());

    ticket.complete(ticket_outcome);
    assert_eq!(ticket.report().unwrap().generated_rca, "slow report");
    assert_eq!(agent.answer(), Some("fast answer"));
}
