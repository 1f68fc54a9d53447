//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::config_files;
use crate::core::error::{Result, UsersAppError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Colorize status messages and the banner
    pub color: Option<bool>,

    /// Print the welcome banner before the first prompt
    pub banner: Option<bool>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: Some(true),
            banner: Some(true),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            UsersAppError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            UsersAppError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(config)
    }

    /// Look for the config file in `start` and up to a few parent directories
    pub fn find_config_file(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .take(config_files::PARENT_SEARCH_DEPTH + 1)
            .map(|dir| dir.join(config_files::FILE_NAME))
            .find(|candidate| candidate.is_file())
    }

    /// Load the nearest config file from `start`, falling back to defaults
    /// when none exists. A file that exists but cannot be parsed is an error.
    pub fn load_from_dir(start: &Path) -> Result<Self> {
        match Self::find_config_file(start) {
            Some(path) => {
                log::debug!("Using config file {}", path.display());
                Ok(Self::default().overlay(Self::load_from_file(path)?))
            }
            None => Ok(Self::default()),
        }
    }

    /// Load from the current working directory and its parents
    pub fn load_from_standard_locations() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::load_from_dir(&cwd)
    }

    /// Values set in `other` replace the ones in `self`
    pub fn overlay(mut self, other: Config) -> Self {
        if other.color.is_some() {
            self.color = other.color;
        }
        if other.banner.is_some() {
            self.banner = other.banner;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
        self
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if cli_config.verbose {
            self.verbose = Some(true);
        }
        if cli_config.no_color {
            self.color = Some(false);
        }
        if cli_config.no_banner {
            self.banner = Some(false);
        }
    }

    pub fn color_enabled(&self) -> bool {
        self.color.unwrap_or(true)
    }

    pub fn banner_enabled(&self) -> bool {
        self.banner.unwrap_or(true)
    }

    pub fn verbose_enabled(&self) -> bool {
        self.verbose.unwrap_or(false)
    }
}

/// Overrides coming from the command line
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    // Output & verbosity
    pub verbose: bool,   // --verbose
    pub no_color: bool,  // --no-color
    pub no_banner: bool, // --no-banner

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}
