//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use redis_port::config::{ConfigError, option};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - invalid option values, unreadable config file.
    ///
    /// Usage errors are reported by clap with exit code 2.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::InvalidArgument { option: o, .. } => {
            if let Some(hint) = option_hint(o) {
                eprintln!("\n{hint}");
            }
        }
        ConfigError::FileRead { .. } => {
            eprintln!("\nRun 'redis-port init' to generate a configuration template.");
        }
        _ => {}
    }
}

fn option_hint(name: &str) -> Option<&'static str> {
    match name {
        option::NCPU => Some("--ncpu takes an integer between 1 and 1024."),
        option::EXPIRE => Some(
            "--unixtime-in-milliseconds takes '+<duration>', '-<duration>', \
             '@<epoch millis>' or 'YYYY-MM-DD HH:MM:SS'.",
        ),
        option::DB => Some("--db takes a non-negative database number or '*'."),
        option::DBMAP => {
            Some("--dbmap takes 'src:dst' pairs separated by commas, e.g. '0:1,2:3'.")
        }
        option::TMPFILE_SIZE => {
            Some("--tmpfile-size takes a positive size such as '512MB' or '2GB'; units are powers of 1024.")
        }
        _ => None,
    }
}

/// Sets up the tracing subscriber for logging.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
