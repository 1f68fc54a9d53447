//! Operator prompts
//!
//! The interaction loop only talks to the [`Prompter`] trait. On a terminal
//! the prompts are rendered by dialoguer; when stdin is piped a line based
//! prompter reads one answer per line instead.

use std::io::{BufRead, Write};

use dialoguer::Input;
use dialoguer::theme::ColorfulTheme;
use log::debug;

use crate::core::constants::messages;
use crate::core::error::{Result, UsersAppError};
use crate::ui::color::Painter;
use crate::ui::message::Severity;

pub trait Prompter {
    /// Ask for free text. An empty answer is returned as an empty string.
    fn text(&mut self, prompt: &str) -> Result<String>;

    /// Ask for an integer, asking again until the answer parses
    fn number(&mut self, prompt: &str) -> Result<i64>;
}

/// Terminal prompter backed by dialoguer
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Prompter for DialoguerPrompter {
    fn text(&mut self, prompt: &str) -> Result<String> {
        Ok(Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?)
    }

    fn number(&mut self, prompt: &str) -> Result<i64> {
        // dialoguer re-prompts by itself when the answer fails to parse
        Ok(Input::<i64>::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact_text()?)
    }
}

/// Prompter that reads answers line by line, for piped input
pub struct LinePrompter<R: BufRead, W: Write> {
    input: R,
    output: W,
    painter: Painter,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W, painter: Painter) -> Self {
        Self {
            input,
            output,
            painter,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        writeln!(self.output, "? {prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(UsersAppError::InputClosed);
        }

        let answer = line.trim_end_matches(['\n', '\r']).to_string();
        debug!("Answer to '{prompt}': '{answer}'");
        Ok(answer)
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn text(&mut self, prompt: &str) -> Result<String> {
        self.ask(prompt)
    }

    fn number(&mut self, prompt: &str) -> Result<i64> {
        loop {
            let answer = self.ask(prompt)?;
            match answer.trim().parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!("Rejected numeric answer '{answer}': {e}");
                    writeln!(
                        self.output,
                        "{}",
                        Severity::Error.render(&self.painter, messages::INVALID_NUMBER)
                    )?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> LinePrompter<Cursor<Vec<u8>>, Vec<u8>> {
        LinePrompter::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            Painter::plain(),
        )
    }

    #[test]
    fn test_text_reads_one_line() {
        let mut p = prompter("Anna\nMax\n");

        assert_eq!(p.text("Enter name").unwrap(), "Anna");
        assert_eq!(p.text("Enter name").unwrap(), "Max");

        let output = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(output, "? Enter name\n? Enter name\n");
    }

    #[test]
    fn test_text_keeps_inner_whitespace_and_empty_answers() {
        let mut p = prompter(" Anna Lee \r\n\n");

        assert_eq!(p.text("name").unwrap(), " Anna Lee ");
        assert_eq!(p.text("name").unwrap(), "");
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut p = prompter("quit");
        assert_eq!(p.text("action").unwrap(), "quit");
    }

    #[test]
    fn test_text_on_closed_input() {
        let mut p = prompter("");
        assert!(matches!(p.text("name"), Err(UsersAppError::InputClosed)));
    }

    #[test]
    fn test_number_parses_integers() {
        let mut p = prompter("30\n -4 \n0\n");

        assert_eq!(p.number("age").unwrap(), 30);
        assert_eq!(p.number("age").unwrap(), -4);
        assert_eq!(p.number("age").unwrap(), 0);
    }

    #[test]
    fn test_number_reprompts_on_invalid_input() {
        let mut p = prompter("abc\n\n12.5\n42\n");

        assert_eq!(p.number("Enter age").unwrap(), 42);

        let output = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(output.matches("? Enter age").count(), 4);
        assert_eq!(output.matches("Please enter a valid number").count(), 3);
    }

    #[test]
    fn test_number_on_closed_input_after_invalid_answer() {
        let mut p = prompter("abc\n");
        assert!(matches!(p.number("age"), Err(UsersAppError::InputClosed)));
    }
}
