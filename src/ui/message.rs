//! Status messages and their severities

use std::fmt;
use std::str::FromStr;

use crate::core::constants::severities;
use crate::core::error::UsersAppError;
use crate::ui::color::{Colors, Painter};

/// Presentation category of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Success => "✔",
            Self::Error => "✖",
            Self::Info => "ℹ",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Success => Colors::BRIGHT_GREEN,
            Self::Error => Colors::BRIGHT_RED,
            Self::Info => Colors::BRIGHT_CYAN,
        }
    }

    /// Render `text` as a single status line (without trailing newline)
    pub fn render(&self, painter: &Painter, text: &str) -> String {
        format!("{} {}", painter.paint(self.symbol(), self.color()), text)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "{}", severities::SUCCESS),
            Self::Error => write!(f, "{}", severities::ERROR),
            Self::Info => write!(f, "{}", severities::INFO),
        }
    }
}

impl FromStr for Severity {
    type Err = UsersAppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            severities::SUCCESS => Ok(Self::Success),
            severities::ERROR => Ok(Self::Error),
            severities::INFO => Ok(Self::Info),
            _ => Err(UsersAppError::InvalidSeverity(s.to_string())),
        }
    }
}

/// Owned message text with a few case transforms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    content: String,
}

impl Message {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// First character upper case, the rest lower case
    pub fn capitalize(&mut self) {
        let mut chars = self.content.chars();
        let capitalized: String = match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.as_str().to_lowercase().chars())
                .collect(),
            None => String::new(),
        };
        self.content = capitalized;
    }

    pub fn uppercase(&mut self) {
        self.content = self.content.to_uppercase();
    }

    pub fn lowercase(&mut self) {
        self.content = self.content.to_lowercase();
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

impl From<&str> for Message {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

impl From<String> for Message {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}
