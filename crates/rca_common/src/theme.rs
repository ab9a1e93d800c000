//! Theme catalog for the console.
//!
//! The visual variants are data, not code: one rendering layer reads a
//! [`Theme`] and every recognized style name maps to a set of RGB tokens.
//! Unrecognized names fall back to the default so a stale config never
//! breaks startup.

/// An RGB color token.
pub type Rgb = (u8, u8, u8);

/// Semantic color tokens consumed by both the CLI renderer and the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    /// Headers, panel titles, the active panel border.
    pub accent: Rgb,
    /// Emphasized (bold) markup spans.
    pub emphasis: Rgb,
    /// Secondary text: hints, raw ticket data, status bar.
    pub dim: Rgb,
    /// Failure messages.
    pub error: Rgb,
    /// Success markers.
    pub ok: Rgb,
}

/// Style names the config file may select.
pub const RECOGNIZED_THEMES: [&str; 4] = ["slate", "ember", "aurora", "paper"];

const SLATE: Theme = Theme {
    name: "slate",
    accent: (120, 160, 255),
    emphasis: (235, 235, 255),
    dim: (140, 140, 150),
    error: (255, 100, 100),
    ok: (120, 255, 120),
};

const EMBER: Theme = Theme {
    name: "ember",
    accent: (255, 160, 80),
    emphasis: (255, 230, 200),
    dim: (150, 130, 120),
    error: (255, 90, 90),
    ok: (180, 255, 140),
};

const AURORA: Theme = Theme {
    name: "aurora",
    accent: (90, 220, 180),
    emphasis: (220, 255, 245),
    dim: (120, 150, 140),
    error: (255, 110, 130),
    ok: (140, 255, 170),
};

const PAPER: Theme = Theme {
    name: "paper",
    accent: (200, 200, 200),
    emphasis: (255, 255, 255),
    dim: (130, 130, 130),
    error: (255, 120, 120),
    ok: (170, 230, 170),
};

impl Default for Theme {
    fn default() -> Self {
        SLATE
    }
}

impl Theme {
    /// Resolve a configured style name, falling back to the default.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "slate" => SLATE,
            "ember" => EMBER,
            "aurora" => AURORA,
            "paper" => PAPER,
            _ => Theme::default(),
        }
    }

    /// True-color ANSI escape for `rgb` foreground.
    pub fn ansi(rgb: Rgb) -> String {
        format!("\x1b[38;2;{};{};{}m", rgb.0, rgb.1, rgb.2)
    }
}

/// ANSI reset, paired with [`Theme::ansi`].
pub const ANSI_RESET: &str = "\x1b[0m";

/// ANSI bold attribute.
pub const ANSI_BOLD: &str = "\x1b[1m";
