//! User interface and interaction
//!
//! This module contains all components related to user interaction,
//! including CLI parsing, colored status messages, tabular listings
//! and the operator prompts.

pub mod cli;
pub mod color;
pub mod message;
pub mod output;
pub mod prompt;
pub mod table;

// Re-export commonly used items
pub use cli::{Cli, cli_to_config};
pub use color::Painter;
pub use message::{Message, Severity};
pub use output::Presenter;
pub use prompt::{DialoguerPrompter, LinePrompter, Prompter};
