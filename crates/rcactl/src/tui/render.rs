//! Rendering - UI drawing functions for the console.
//!
//! One parameterized layer: every color comes from the theme in state, so
//! each recognized style renders through the same code path.

use crate::session::SessionState;
use crate::tui::input::{draw_input_bar, rgb};
use crate::tui::state::{ConsoleTuiState, Pane};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use rca_common::markup::{parse_inline, SegmentKind};
use rca_common::{RcaReport, Theme};

const SPINNER: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Draw the UI: header, the two workflow panels, input bar, status bar.
pub fn draw_ui(f: &mut Frame, state: &ConsoleTuiState) {
    let size = f.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(5),    // panels
            Constraint::Length(3), // input bar
            Constraint::Length(1), // status bar
        ])
        .split(size);

    draw_header(f, chunks[0], state);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    draw_ticket_panel(f, panels[0], state);
    draw_agent_panel(f, panels[1], state);

    draw_input_bar(f, chunks[2], state);
    draw_status_bar(f, chunks[3], state);

    if state.show_help {
        draw_help_overlay(f, size, &state.theme);
    }
}

/// Header: name, version, backend, timeout.
fn draw_header(f: &mut Frame, area: Rect, state: &ConsoleTuiState) {
    let theme = &state.theme;
    let text = format!(
        " rcactl v{} | {} | timeout {}s",
        VERSION, state.base_url, state.timeout_secs
    );
    let header = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(rgb(theme.accent)),
    )));
    f.render_widget(header, area);
}

fn draw_ticket_panel(f: &mut Frame, area: Rect, state: &ConsoleTuiState) {
    let theme = &state.theme;
    let dim = Style::default().fg(rgb(theme.dim));

    let lines = match state.ticket.state() {
        SessionState::Idle => vec![
            Line::from(Span::styled(
                "Enter a ticket number and press Enter.",
                dim,
            )),
            Line::from(Span::styled("Ctrl+T switches TASK / RITM.", dim)),
        ],
        SessionState::Loading => vec![loading_line(state, "Fetching RCA report...")],
        SessionState::Succeeded(report) => report_lines(report, theme),
        SessionState::Failed(message) => error_lines(message, theme),
    };

    let active = state.pane == Pane::Ticket;
    let title = format!(" Ticket Lookup [{}] ", state.ticket.mode().as_str());
    draw_panel(f, area, state, lines, title, active);
}

fn draw_agent_panel(f: &mut Frame, area: Rect, state: &ConsoleTuiState) {
    let theme = &state.theme;
    let dim = Style::default().fg(rgb(theme.dim));

    let lines = match state.agent.state() {
        SessionState::Idle => vec![Line::from(Span::styled(
            "Ask the incident agent a free-text question.",
            dim,
        ))],
        SessionState::Loading => vec![loading_line(state, "Agent is working...")],
        SessionState::Succeeded(response) => {
            if response.trim().is_empty() {
                vec![Line::from(Span::styled(
                    "(the agent returned an empty answer)",
                    dim,
                ))]
            } else {
                response
                    .lines()
                    .map(|line| markup_line(line, theme))
                    .collect()
            }
        }
        SessionState::Failed(message) => error_lines(message, theme),
    };

    let active = state.pane == Pane::Agent;
    draw_panel(f, area, state, lines, " Agent Query ".to_string(), active);
}

fn draw_panel(
    f: &mut Frame,
    area: Rect,
    state: &ConsoleTuiState,
    lines: Vec<Line<'static>>,
    title: String,
    active: bool,
) {
    let theme = &state.theme;
    let border = if active {
        Style::default().fg(rgb(theme.accent))
    } else {
        Style::default().fg(rgb(theme.dim))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title);

    let scroll = if active { state.scroll_offset } else { 0 };
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));

    f.render_widget(paragraph, area);
}

/// Report body: raw ticket data first, then the generated narrative.
fn report_lines(report: &RcaReport, theme: &Theme) -> Vec<Line<'static>> {
    let dim = Style::default().fg(rgb(theme.dim));
    let mut lines = vec![Line::from(Span::styled("[ticket data]", dim))];

    match serde_json::to_string_pretty(&report.ticket_data) {
        Ok(pretty) => {
            for line in pretty.lines() {
                lines.push(Line::from(Span::styled(line.to_string(), dim)));
            }
        }
        Err(_) => lines.push(Line::from(Span::styled("(unavailable)", dim))),
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("[generated rca]", dim)));
    for line in report.generated_rca.lines() {
        lines.push(markup_line(line, theme));
    }

    lines
}

fn error_lines(message: &str, theme: &Theme) -> Vec<Line<'static>> {
    let style = Style::default().fg(rgb(theme.error));
    message
        .lines()
        .map(|line| Line::from(Span::styled(line.to_string(), style)))
        .collect()
}

fn loading_line(state: &ConsoleTuiState, label: &str) -> Line<'static> {
    let frame = SPINNER[state.spinner_frame % SPINNER.len()];
    Line::from(Span::styled(
        format!("{} {}", frame, label),
        Style::default().fg(rgb(state.theme.accent)),
    ))
}

/// Expand `**bold**` markup into styled spans.
fn markup_line(text: &str, theme: &Theme) -> Line<'static> {
    let bold = Style::default()
        .fg(rgb(theme.emphasis))
        .add_modifier(Modifier::BOLD);

    let spans: Vec<Span> = parse_inline(text)
        .into_iter()
        .map(|segment| match segment.kind {
            SegmentKind::Plain => Span::raw(segment.text),
            SegmentKind::Bold => Span::styled(segment.text, bold),
        })
        .collect();

    Line::from(spans)
}

fn draw_status_bar(f: &mut Frame, area: Rect, state: &ConsoleTuiState) {
    let theme = &state.theme;

    let line = match &state.notice {
        Some(notice) => Line::from(Span::styled(
            format!(" {}", notice),
            Style::default().fg(rgb(theme.ok)),
        )),
        None => Line::from(Span::styled(
            " Tab panel · Enter submit · Ctrl+T mode · Ctrl+Y copy · Ctrl+L clear · F1 help · Ctrl+C quit",
            Style::default().fg(rgb(theme.dim)),
        )),
    };

    f.render_widget(Paragraph::new(line), area);
}

fn draw_help_overlay(f: &mut Frame, size: Rect, theme: &Theme) {
    let area = centered_rect(50, 12, size);
    let dim = Style::default().fg(rgb(theme.dim));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("  Tab       switch panel", dim)),
        Line::from(Span::styled("  Enter     submit the active field", dim)),
        Line::from(Span::styled("  Ctrl+T    toggle TASK / RITM numbering", dim)),
        Line::from(Span::styled("  Ctrl+Y    copy the shown payload", dim)),
        Line::from(Span::styled("  Ctrl+L    clear the active panel", dim)),
        Line::from(Span::styled("  PgUp/PgDn scroll results", dim)),
        Line::from(Span::styled("  Ctrl+C    quit", dim)),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(rgb(theme.accent)))
        .title(" Help ");

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn centered_rect(width: u16, height: u16, size: Rect) -> Rect {
    let w = width.min(size.width);
    let h = height.min(size.height);
    Rect {
        x: size.x + (size.width - w) / 2,
        y: size.y + (size.height - h) / 2,
        width: w,
        height: h,
    }
}
