// Command-line interface definitions and parsing for usersapp

use crate::config::CliConfig;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    // Output & Verbosity
    /// Suppress log output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, help_heading = "Output & Verbosity")]
    pub no_color: bool,

    /// Do not print the welcome banner
    #[arg(long, help_heading = "Output & Verbosity")]
    pub no_banner: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration", conflicts_with = "config")]
    pub no_config: bool,
}

/// Convert CLI arguments into the overrides applied on top of the config file
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        verbose: cli.verbose,
        no_color: cli.no_color,
        no_banner: cli.no_banner,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}
