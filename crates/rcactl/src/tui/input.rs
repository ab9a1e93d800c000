//! Input bar and submit dispatch.

use crate::backend::BackendClient;
use crate::clipboard;
use crate::tui::event_loop::TuiMessage;
use crate::tui::state::{ConsoleTuiState, Pane};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tokio::sync::mpsc;

/// Try to submit the active pane's input.
///
/// The session guard decides: a blank field or an in-flight call means no
/// request is returned and nothing is spawned. One spawned task per
/// accepted submit; it reports back exactly once over the channel.
pub fn submit_active(
    state: &mut ConsoleTuiState,
    client: &BackendClient,
    tx: &mpsc::Sender<TuiMessage>,
) {
    state.notice = None;
    match state.pane {
        Pane::Ticket => {
            if let Some(request) = state.ticket.submit() {
                let client = client.clone();
                let tx = tx.clone();
                tokio::spawn(async move {
                    let outcome = client
                        .post_json(rca_common::api::GET_DETAILS_PATH, &request)
                        .await;
                    let _ = tx.send(TuiMessage::TicketOutcome(outcome)).await;
                });
            }
        }
        Pane::Agent => {
            if let Some(request) = state.agent.submit() {
                let client = client.clone();
                let tx = tx.clone();
                tokio::spawn(async move {
                    let outcome = client
                        .post_json(rca_common::api::AGENT_QUERY_PATH, &request)
                        .await;
                    let _ = tx.send(TuiMessage::AgentOutcome(outcome)).await;
                });
            }
        }
    }
}

/// Copy the active pane's payload to the clipboard, if it has one.
pub fn copy_active_payload(state: &mut ConsoleTuiState) {
    let Some(payload) = state.active_payload() else {
        state.notice = Some("Nothing to copy yet.".to_string());
        return;
    };

    state.notice = Some(match clipboard::copy(&payload) {
        Ok(()) => match state.pane {
            Pane::Ticket => "Copied report JSON to clipboard.".to_string(),
            Pane::Agent => "Copied answer to clipboard.".to_string(),
        },
        Err(e) => format!("Clipboard copy failed: {}", e),
    });
}

/// Draw the input bar for the active pane.
pub fn draw_input_bar(f: &mut Frame, area: Rect, state: &ConsoleTuiState) {
    let theme = &state.theme;
    let accent = rgb(theme.accent);
    let dim = rgb(theme.dim);

    let title = match state.pane {
        Pane::Ticket => format!(" {} number ", state.ticket.mode().as_str()),
        Pane::Agent => " Question ".to_string(),
    };

    let line = if state.active_loading() {
        Line::from(Span::styled(
            "request in flight...",
            Style::default().fg(dim),
        ))
    } else {
        Line::from(vec![
            Span::raw(state.active_input().to_string()),
            Span::styled("_", Style::default().fg(accent)),
        ])
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .title(title);

    f.render_widget(Paragraph::new(line).block(block), area);
}

pub(crate) fn rgb(rgb: rca_common::theme::Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}
