//! Terminal output for one-shot commands.
//!
//! Everything here is theme-driven; the same functions render every style
//! the config can select.

use rca_common::markup::{parse_inline, SegmentKind};
use rca_common::theme::{Theme, ANSI_BOLD, ANSI_RESET};
use rca_common::RcaReport;

/// Horizontal rule
pub const HR: &str =
    "──────────────────────────────────────────────────────────────────────────────";

/// Expand `**bold**` markup into ANSI escapes.
pub fn render_markup_ansi(text: &str, theme: &Theme) -> String {
    let mut out = String::with_capacity(text.len());
    for segment in parse_inline(text) {
        match segment.kind {
            SegmentKind::Plain => out.push_str(&segment.text),
            SegmentKind::Bold => {
                out.push_str(ANSI_BOLD);
                out.push_str(&Theme::ansi(theme.emphasis));
                out.push_str(&segment.text);
                out.push_str(ANSI_RESET);
            }
        }
    }
    out
}

/// Print a styled header line.
pub fn print_header(title: &str, theme: &Theme) {
    println!();
    println!("{}{}{}", Theme::ansi(theme.accent), title, ANSI_RESET);
    println!("{}{}{}", Theme::ansi(theme.dim), HR, ANSI_RESET);
}

/// Print a section header like [section]
pub fn print_section(section: &str, theme: &Theme) {
    println!();
    println!("{}[{}]{}", Theme::ansi(theme.dim), section, ANSI_RESET);
}

/// Print a full RCA report: raw ticket data, then the generated narrative.
pub fn print_report(report: &RcaReport, theme: &Theme) {
    print_header("Root cause analysis", theme);

    print_section("ticket data", theme);
    match serde_json::to_string_pretty(&report.ticket_data) {
        Ok(pretty) => {
            for line in pretty.lines() {
                println!("  {}{}{}", Theme::ansi(theme.dim), line, ANSI_RESET);
            }
        }
        Err(_) => println!("  {}(unavailable){}", Theme::ansi(theme.dim), ANSI_RESET),
    }

    print_section("generated rca", theme);
    for line in report.generated_rca.lines() {
        println!("  {}", render_markup_ansi(line, theme));
    }
    println!();
}

/// Print an agent answer, markup expanded.
pub fn print_answer(response: &str, theme: &Theme) {
    print_header("Agent answer", theme);
    if response.trim().is_empty() {
        println!(
            "  {}(the agent returned an empty answer){}",
            Theme::ansi(theme.dim),
            ANSI_RESET
        );
    } else {
        for line in response.lines() {
            println!("  {}", render_markup_ansi(line, theme));
        }
    }
    println!();
}

/// Print a failure message.
pub fn print_error(message: &str, theme: &Theme) {
    eprintln!("{}{}{}", Theme::ansi(theme.error), message, ANSI_RESET);
}
