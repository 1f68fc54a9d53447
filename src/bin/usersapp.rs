use clap::Parser;
use usersapp::config::{CliConfig, Config};
use usersapp::logging;
use usersapp::ui::{Cli, DialoguerPrompter, LinePrompter, Painter, Presenter, cli_to_config};
use usersapp::{App, SessionEnd};

use std::io::{self, IsTerminal};

fn main() {
    let cli = Cli::parse();
    let cli_config = cli_to_config(&cli);

    let config = match load_and_merge_config(&cli_config) {
        Ok(config) => config,
        Err(e) => {
            // The config file could not supply `verbose`, so the flags decide
            logging::init_logger(cli.verbose, cli.quiet);
            logging::log_error("Could not load configuration", Some(&e));
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    logging::init_logger(config.verbose_enabled(), cli.quiet);
    let painter = Painter::new(config.color_enabled());
    logging::log_config_info(&config, painter.is_enabled());

    match run_session(&config, painter) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            logging::log_error("Session failed", Some(&e));
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> usersapp::Result<Config> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::default().overlay(Config::load_from_file(config_file)?)
    } else {
        Config::load_from_standard_locations()?
    };

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);
    Ok(config)
}

/// Run one interactive session against stdin/stdout
pub fn run_session(config: &Config, painter: Painter) -> usersapp::Result<SessionEnd> {
    let presenter = Presenter::new(io::stdout(), painter);
    let interactive = io::stdin().is_terminal();
    logging::log_session_start(interactive);

    let (end, records) = if interactive {
        let mut app = App::new(DialoguerPrompter::new(), presenter)
            .with_banner(config.banner_enabled());
        (app.run()?, app.store().len())
    } else {
        let prompter = LinePrompter::new(io::stdin().lock(), io::stdout(), painter);
        let mut app = App::new(prompter, presenter).with_banner(config.banner_enabled());
        (app.run()?, app.store().len())
    };

    logging::log_session_end(records);
    Ok(end)
}
