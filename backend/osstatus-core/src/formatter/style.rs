use std::env;

use colored::Color;

/// `TERM` value a GUI-hosted debugger console reports.
pub const GUI_TERM_SENTINEL: &str = "unknown";

const ANSI_RESET: &str = "\x1b[0m";
const ANSI_BOLD: &str = "\x1b[1m";

/// Whether output may carry ANSI escape codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Styling {
    /// Raw text. GUI consoles print escape codes literally.
    #[default]
    Plain,
    Ansi,
}

impl Styling {
    /// Styling for a session whose `TERM` is `term`.
    ///
    /// Unset or the GUI sentinel means plain text; anything else is treated
    /// as an ANSI-capable terminal.
    pub fn from_term(term: Option<&str>) -> Self {
        match term {
            None => Styling::Plain,
            Some(value) if value == GUI_TERM_SENTINEL => Styling::Plain,
            Some(_) => Styling::Ansi,
        }
    }

    /// Reads `TERM` now. Not cached: hosts can change it between commands.
    pub fn detect() -> Self {
        Self::from_term(env::var("TERM").ok().as_deref())
    }

    pub fn paint(&self, style: Style, text: &str) -> String {
        match self {
            Styling::Plain => text.to_string(),
            Styling::Ansi => format!("{}{text}{ANSI_RESET}", style.escape()),
        }
    }
}

/// Segments of a header line that get their own look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Bright red.
    Name,
    /// Cyan.
    Framework,
    /// Bold.
    HeaderFile,
}

impl Style {
    pub fn escape(&self) -> String {
        match self {
            Style::Name => format!("\x1b[{}m", Color::BrightRed.to_fg_str()),
            Style::Framework => format!("\x1b[{}m", Color::Cyan.to_fg_str()),
            Style::HeaderFile => ANSI_BOLD.to_string(),
        }
    }
}
