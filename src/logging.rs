use crate::config::Config;
use log::{debug, error, info};
use std::env;

/// Initialize the logger with appropriate level based on verbosity.
///
/// `-q` and `-v` override `RUST_LOG`; without either, `RUST_LOG` decides and
/// logging stays off when it is unset.
pub fn init_logger(verbose: bool, quiet: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if quiet {
        builder.filter_level(log::LevelFilter::Off);
    } else if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    } else if env::var_os(env_logger::DEFAULT_FILTER_ENV).is_none() {
        // Logs would interleave with the prompts otherwise
        builder.filter_level(log::LevelFilter::Off);
    }

    // try_init so repeated initialization (e.g. from tests) is not fatal
    let _ = builder
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    debug!("Logger initialized with level: {:?}", log::max_level());
}

/// Log the effective configuration; `color` is what the output actually uses
pub fn log_config_info(config: &Config, color: bool) {
    info!(
        "Configuration: color={}, banner={}, verbose={}",
        color,
        config.banner_enabled(),
        config.verbose_enabled()
    );
}

/// Log the start of an interactive session
pub fn log_session_start(interactive_terminal: bool) {
    if interactive_terminal {
        info!("Starting session on an interactive terminal");
    } else {
        info!("Starting session on piped input");
    }
}

/// Log the end of a session together with the number of records discarded
pub fn log_session_end(records: usize) {
    info!("Session ended, discarding {records} record(s)");
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}
