//! Color and formatting utilities for terminal output

use std::env;
use std::io::IsTerminal;

pub struct Colors;

impl Colors {
    pub const RESET: &'static str = "\x1b[0m";
    pub const BOLD: &'static str = "\x1b[1m";

    pub const CYAN: &'static str = "\x1b[36m";

    pub const BRIGHT_RED: &'static str = "\x1b[91m";
    pub const BRIGHT_GREEN: &'static str = "\x1b[92m";
    pub const BRIGHT_CYAN: &'static str = "\x1b[96m";
    pub const BRIGHT_WHITE: &'static str = "\x1b[97m";
}

/// Terminal capability detection
pub fn supports_formatting() -> bool {
    // Disable formatting when running tests
    if cfg!(test) {
        return false;
    }

    // Check if colors are explicitly disabled
    if env::var("NO_COLOR").is_ok() || env::var("FORCE_COLOR").as_deref() == Ok("0") {
        return false;
    }

    // Force enable if explicitly requested
    if env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    // Check if output is being redirected
    if !std::io::stdout().is_terminal() {
        return false;
    }

    match env::var("TERM") {
        Ok(term) => !(term == "dumb" || term.is_empty()),
        // Windows consoles usually leave TERM unset
        Err(_) => cfg!(windows),
    }
}

/// Applies ANSI colors when enabled, otherwise passes text through untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    /// Painter that colors only if requested and the terminal supports it
    pub fn new(requested: bool) -> Self {
        Self {
            enabled: requested && supports_formatting(),
        }
    }

    /// Painter that never emits escape sequences
    pub fn plain() -> Self {
        Self { enabled: false }
    }

    /// Painter that always emits escape sequences
    pub fn forced() -> Self {
        Self { enabled: true }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn paint(&self, text: &str, color: &str) -> String {
        if self.enabled {
            format!("{}{}{}", color, text, Colors::RESET)
        } else {
            text.to_string()
        }
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(text, Colors::BOLD)
    }
}

impl Default for Painter {
    fn default() -> Self {
        Self::plain()
    }
}
