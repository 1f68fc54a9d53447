//! Output formatting and display logic for usersapp

use std::io::{self, Write};

use crate::core::constants::{actions, messages};
use crate::core::types::User;
use crate::ui::color::{Colors, Painter};
use crate::ui::message::{Message, Severity};
use crate::ui::table::users_table;

/// One legend line per action, shown in the startup banner
pub fn action_legend(action: &str) -> &'static str {
    match action {
        actions::LIST => "show all users",
        actions::ADD => "add new user to the list",
        actions::EDIT => "edit user from the list",
        actions::REMOVE => "remove user from the list",
        actions::QUIT => "quit the app",
        _ => "",
    }
}

/// Writes status lines, listings and the banner to an output stream
pub struct Presenter<W: Write> {
    out: W,
    painter: Painter,
}

impl<W: Write> Presenter<W> {
    pub fn new(out: W, painter: Painter) -> Self {
        Self { out, painter }
    }

    /// Access the underlying stream, mostly useful to inspect buffered output
    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub fn status(&mut self, severity: Severity, message: impl Into<Message>) -> io::Result<()> {
        let message = message.into();
        writeln!(
            self.out,
            "{}",
            severity.render(&self.painter, message.content())
        )?;
        self.out.flush()
    }

    /// Like [`Presenter::status`] but takes the level by name; unknown levels
    /// print a generic "Invalid option" line instead of the message
    pub fn status_by_name(&mut self, level: &str, message: impl Into<Message>) -> io::Result<()> {
        match level.parse::<Severity>() {
            Ok(severity) => self.status(severity, message),
            Err(_) => {
                writeln!(self.out, "{}", messages::INVALID_OPTION)?;
                self.out.flush()
            }
        }
    }

    pub fn success(&mut self, message: impl Into<Message>) -> io::Result<()> {
        self.status(Severity::Success, message)
    }

    pub fn error(&mut self, message: impl Into<Message>) -> io::Result<()> {
        self.status(Severity::Error, message)
    }

    pub fn info(&mut self, message: impl Into<Message>) -> io::Result<()> {
        self.status(Severity::Info, message)
    }

    /// Print the "Users data" header followed by the grid, or "No data..."
    pub fn list(&mut self, users: &[User]) -> io::Result<()> {
        self.info(messages::USERS_DATA)?;
        if users.is_empty() {
            writeln!(self.out, "{}", messages::NO_DATA)?;
        } else {
            users_table(users).print(&mut self.out)?;
        }
        self.out.flush()
    }

    pub fn banner(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "{}",
            self.painter
                .paint(&self.painter.bold(messages::WELCOME), Colors::BRIGHT_WHITE)
        )?;
        writeln!(self.out, "{}", messages::RULE)?;
        self.info(messages::AVAILABLE_ACTIONS)?;
        writeln!(self.out)?;
        for action in actions::ALL {
            writeln!(
                self.out,
                "{} – {}",
                self.painter.paint(action, Colors::CYAN),
                action_legend(action)
            )?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}
