//! Event Loop - terminal setup, key handling, and completion messages
//!
//! All session mutation happens here, one event at a time. Backend calls
//! run as spawned tasks and report back over an mpsc channel, so the UI
//! keeps drawing while a request is in flight.

use crate::backend::{BackendClient, RequestOutcome};
use crate::tui::input::{copy_active_payload, submit_active};
use crate::tui::render::draw_ui;
use crate::tui::state::ConsoleTuiState;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use rca_common::ConsoleConfig;
use std::io;
use tokio::sync::mpsc;

/// Completion messages from spawned backend calls.
#[derive(Debug)]
pub enum TuiMessage {
    TicketOutcome(RequestOutcome),
    AgentOutcome(RequestOutcome),
}

/// Run the console.
pub async fn run() -> Result<()> {
    let config = ConsoleConfig::load()?;
    let client = BackendClient::new(&config);
    let mut state = ConsoleTuiState::new(&config);

    enable_raw_mode().map_err(|e| {
        anyhow::anyhow!(
            "Failed to enable raw mode: {}. Ensure you're running in a real terminal (TTY).",
            e
        )
    })?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| {
        let _ = disable_raw_mode();
        anyhow::anyhow!("Failed to initialize terminal: {}", e)
    })?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Channel for async request completions
    let (tx, mut rx) = mpsc::channel(32);

    let result = run_event_loop(&mut terminal, &mut state, &client, tx, &mut rx).await;

    // Restore terminal (always attempt cleanup)
    let cleanup_result = restore_terminal(&mut terminal);

    result.and(cleanup_result)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Main event loop
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut ConsoleTuiState,
    client: &BackendClient,
    tx: mpsc::Sender<TuiMessage>,
    rx: &mut mpsc::Receiver<TuiMessage>,
) -> Result<()> {
    loop {
        // Advance the spinner while any request is in flight
        if state.any_loading() {
            state.spinner_frame = state.spinner_frame.wrapping_add(1);
        }

        // Apply completed backend calls
        while let Ok(msg) = rx.try_recv() {
            match msg {
                TuiMessage::TicketOutcome(outcome) => state.ticket.complete(outcome),
                TuiMessage::AgentOutcome(outcome) => state.agent.complete(outcome),
            }
        }

        terminal.draw(|f| draw_ui(f, state))?;

        // Handle events with timeout
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match (key.code, key.modifiers) {
                    // Ctrl+C - exit
                    (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                        break;
                    }
                    // Tab - switch panel
                    (KeyCode::Tab, _) => {
                        state.pane = state.pane.toggled();
                        state.scroll_offset = 0;
                        state.notice = None;
                    }
                    // Ctrl+T - toggle TASK/RITM on the ticket panel
                    (KeyCode::Char('t'), KeyModifiers::CONTROL) => {
                        if !state.ticket.is_loading() {
                            state.ticket.toggle_mode();
                        }
                    }
                    // Ctrl+L - clear the active session
                    (KeyCode::Char('l'), KeyModifiers::CONTROL) => {
                        state.clear_active();
                    }
                    // Ctrl+Y - copy the active payload
                    (KeyCode::Char('y'), KeyModifiers::CONTROL) => {
                        copy_active_payload(state);
                    }
                    // F1 - toggle help
                    (KeyCode::F(1), _) => {
                        state.show_help = !state.show_help;
                    }
                    // Enter - submit (ignored while the active pane is loading)
                    (KeyCode::Enter, _) => {
                        submit_active(state, client, &tx);
                    }
                    // Backspace
                    (KeyCode::Backspace, _) => {
                        state.pop_char();
                    }
                    // PageUp - scroll results up
                    (KeyCode::PageUp, _) => {
                        state.scroll_offset = state.scroll_offset.saturating_sub(5);
                    }
                    // PageDown - scroll results down
                    (KeyCode::PageDown, _) => {
                        state.scroll_offset = state.scroll_offset.saturating_add(5);
                    }
                    // Character input
                    (KeyCode::Char(c), KeyModifiers::NONE)
                    | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
                        state.push_char(c);
                    }
                    _ => {}
                }
            }
        }
    }

    Ok(())
}
