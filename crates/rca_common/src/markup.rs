//! Inline markup renderer for backend-generated text.
//!
//! The backend emphasizes spans with `**double asterisks**`. This module
//! turns such text into an ordered list of plain/bold segments; the caller
//! decides how bold is expressed (ANSI, ratatui spans, ...).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// Non-greedy, left-to-right, non-overlapping; at least one inner character,
// so `****` and unterminated `**` stay literal.
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Plain,
    Bold,
}

/// One run of text with a single emphasis level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupSegment {
    pub kind: SegmentKind,
    pub text: String,
}

impl MarkupSegment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            kind: SegmentKind::Plain,
            text: text.into(),
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            kind: SegmentKind::Bold,
            text: text.into(),
        }
    }
}

/// Split `input` into plain and bold segments.
///
/// Total: never fails. Empty input yields no segments; input without any
/// complete `**...**` pair yields a single plain segment. Concatenating the
/// segment texts reproduces the input with the `**` delimiters stripped.
pub fn parse_inline(input: &str) -> Vec<MarkupSegment> {
    if input.is_empty() {
        return Vec::new();
    }

    let mut segments = Vec::new();
    let mut last_end = 0;

    for caps in BOLD.captures_iter(input) {
        let whole = caps.get(0).expect("match 0 always present");
        let inner = caps.get(1).expect("capture 1 always present");

        if whole.start() > last_end {
            segments.push(MarkupSegment::plain(&input[last_end..whole.start()]));
        }
        segments.push(MarkupSegment::bold(inner.as_str()));
        last_end = whole.end();
    }

    if segments.is_empty() {
        return vec![MarkupSegment::plain(input)];
    }

    if last_end < input.len() {
        segments.push(MarkupSegment::plain(&input[last_end..]));
    }

    segments
}
