//! usersapp - interactive management of an in-memory list of users
//!
//! The crate is organized into focused modules:
//! - `core`: user record types, errors and constants
//! - `store`: the ordered in-memory record store
//! - `ui`: CLI parsing, prompts, colored messages and tables
//! - `app`: the interaction loop tying prompts, store and output together
//! - `config`: TOML configuration and CLI overrides
//! - `logging`: log setup and helpers

pub mod app;
pub mod config;
pub mod core;
pub mod logging;
pub mod store;
pub mod ui;

// Re-export commonly used types for convenience
pub use app::{Action, App, Request, SessionEnd};
pub use config::Config;
pub use crate::core::{Result, User, UserPatch, UsersAppError};
pub use store::UserStore;
