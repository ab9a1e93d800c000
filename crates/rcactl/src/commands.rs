//! One-shot command handlers.
//!
//! Each handler drives the same session + executor pipeline the TUI uses:
//! build the session, submit, await the bounded call, feed the outcome back,
//! then render whatever state the session landed in.

use crate::backend::{BackendClient, RequestOutcome};
use crate::session::{AgentQuerySession, SessionState, TicketLookupSession};
use crate::{clipboard, errors, logging, output};
use anyhow::Result;
use indicatif::ProgressBar;
use owo_colors::OwoColorize;
use rca_common::api::{AGENT_QUERY_PATH, GET_DETAILS_PATH};
use rca_common::{ConsoleConfig, Theme};
use std::time::{Duration, Instant};

/// Fetch the RCA report for a ticket number.
pub async fn ticket(number: String, ritm: bool, copy: bool, json: bool) -> Result<()> {
    let started = Instant::now();
    let config = load_config();
    let theme = Theme::from_name(&config.theme);
    let client = BackendClient::new(&config);

    let mut session = TicketLookupSession::new(config.request_timeout());
    if ritm {
        session.toggle_mode();
    }
    session.active_input_mut().push_str(&number);

    let request = match session.submit() {
        Some(request) => request,
        None => {
            output::print_error("A ticket number is required.", &theme);
            std::process::exit(errors::EXIT_GENERAL_ERROR);
        }
    };

    let pb = spinner(format!(
        "Looking up {} {}...",
        session.mode().as_str(),
        request.number()
    ));
    let outcome = client.post_json(GET_DETAILS_PATH, &request).await;
    pb.finish_and_clear();

    let timed_out = matches!(outcome, RequestOutcome::TimedOut);
    session.complete(outcome);

    let exit_code = match session.state() {
        SessionState::Succeeded(report) => {
            let pretty = report.to_pretty_json()?;
            if json {
                println!("{}", pretty);
            } else {
                output::print_report(report, &theme);
            }
            if copy {
                copy_payload(&pretty, &theme);
            }
            errors::EXIT_SUCCESS
        }
        SessionState::Failed(message) => {
            output::print_error(message, &theme);
            if timed_out {
                errors::EXIT_REQUEST_TIMEOUT
            } else {
                errors::EXIT_REQUEST_FAILED
            }
        }
        _ => errors::EXIT_GENERAL_ERROR,
    };

    finish("ticket", started, session.error(), exit_code)
}

/// Ask the backend agent a free-text question.
pub async fn ask(query: String, copy: bool) -> Result<()> {
    let started = Instant::now();
    let config = load_config();
    let theme = Theme::from_name(&config.theme);
    let client = BackendClient::new(&config);

    let mut session = AgentQuerySession::new(config.request_timeout());
    session.input_mut().push_str(&query);

    let request = match session.submit() {
        Some(request) => request,
        None => {
            output::print_error("A question is required.", &theme);
            std::process::exit(errors::EXIT_GENERAL_ERROR);
        }
    };

    let pb = spinner("Asking the agent...".to_string());
    let outcome = client.post_json(AGENT_QUERY_PATH, &request).await;
    pb.finish_and_clear();

    let timed_out = matches!(outcome, RequestOutcome::TimedOut);
    session.complete(outcome);

    let exit_code = match session.state() {
        SessionState::Succeeded(response) => {
            output::print_answer(response, &theme);
            if copy {
                copy_payload(response, &theme);
            }
            errors::EXIT_SUCCESS
        }
        SessionState::Failed(message) => {
            output::print_error(message, &theme);
            if timed_out {
                errors::EXIT_REQUEST_TIMEOUT
            } else {
                errors::EXIT_REQUEST_FAILED
            }
        }
        _ => errors::EXIT_GENERAL_ERROR,
    };

    finish("ask", started, session.error(), exit_code)
}

/// Show the resolved configuration.
pub async fn config() -> Result<()> {
    let config = load_config();
    let path = ConsoleConfig::discover_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(none)".to_string());

    println!("config file:        {}", path.dimmed());
    println!("base_url:           {}", config.base_url);
    println!("request_timeout_ms: {}", config.request_timeout_ms);
    println!("theme:              {}", config.theme);
    Ok(())
}

/// Load config, exiting with a dedicated code when the file is unreadable.
fn load_config() -> ConsoleConfig {
    match ConsoleConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format!("Config error: {}", e).red());
            std::process::exit(errors::EXIT_CONFIG_ERROR);
        }
    }
}

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn copy_payload(text: &str, theme: &Theme) {
    match clipboard::copy(text) {
        Ok(()) => println!("{}", "Copied to clipboard.".green()),
        Err(e) => output::print_error(&format!("Clipboard copy failed: {}", e), theme),
    }
}

/// Write the invocation log entry, then exit or return.
fn finish(command: &str, started: Instant, error: Option<&str>, exit_code: i32) -> Result<()> {
    let entry = logging::LogEntry {
        ts: logging::LogEntry::now(),
        req_id: logging::LogEntry::generate_req_id(),
        command: command.to_string(),
        duration_ms: started.elapsed().as_millis() as u64,
        ok: exit_code == errors::EXIT_SUCCESS,
        error: error.map(|message| logging::ErrorDetails {
            code: exit_code.to_string(),
            message: message.to_string(),
        }),
    };
    let _ = entry.write();

    if exit_code != errors::EXIT_SUCCESS {
        std::process::exit(exit_code);
    }
    Ok(())
}
