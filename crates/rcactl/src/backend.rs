//! Backend client - bounded HTTP calls to the RCA backend.
//!
//! Every call is a single JSON POST raced against a wall-clock timer. The
//! expected failure modes (timeout, HTTP error, transport error) are values
//! of [`RequestOutcome`], not errors: the caller always gets exactly one
//! outcome per call and maps it to user-visible state.

use rca_common::ConsoleConfig;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Result of one bounded backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestOutcome {
    /// 2xx status, body parsed as JSON.
    Success(Value),
    /// Response received with a non-2xx status. The raw body text is kept
    /// verbatim so backend-provided diagnostics can be shown as-is.
    HttpFailure { status: u16, body: String },
    /// The timer elapsed before a response arrived. The in-flight request
    /// was dropped, so no later completion can be observed for this call.
    TimedOut,
    /// Transport-level failure: DNS, refused connection, or a 2xx response
    /// whose body is not valid JSON.
    NetworkFailure(String),
}

impl RequestOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RequestOutcome::Success(_))
    }
}

/// HTTP client for the RCA backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl BackendClient {
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.request_timeout(),
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// POST `body` as JSON to `path`, bounded by the configured timeout.
    ///
    /// Dropping the in-flight future on timeout aborts the underlying
    /// request; the timer is consumed on every exit path.
    pub async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> RequestOutcome {
        let url = format!("{}{}", self.base_url, path);

        match tokio::time::timeout(self.timeout, self.post_inner(&url, body)).await {
            Ok(outcome) => outcome,
            Err(_) => RequestOutcome::TimedOut,
        }
    }

    /// Inner call implementation (without the timeout race).
    async fn post_inner<B: Serialize>(&self, url: &str, body: &B) -> RequestOutcome {
        let resp = match self.http.post(url).json(body).send().await {
            Ok(resp) => resp,
            Err(e) => return RequestOutcome::NetworkFailure(e.to_string()),
        };

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return RequestOutcome::HttpFailure {
                status: status.as_u16(),
                body,
            };
        }

        let text = match resp.text().await {
            Ok(text) => text,
            Err(e) => return RequestOutcome::NetworkFailure(e.to_string()),
        };

        match serde_json::from_str::<Value>(&text) {
            Ok(value) => RequestOutcome::Success(value),
            Err(e) => RequestOutcome::NetworkFailure(format!("malformed response body: {}", e)),
        }
    }
}
