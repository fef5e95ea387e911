//! redis-port: Redis database migration and replication
//!
//! Entry point for the redis-port application.

use redis_port::config::{Cli, Command, MigrationConfig, write_default_config};
use std::process::ExitCode;

mod app;

use app::{exit_code, print_config_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    // Exits on usage errors, --help and --version
    let cli = Cli::parse_args();

    // Handle init subcommand
    if let Some(Command::Init { output }) = &cli.command {
        return handle_init(output);
    }

    // Resolution logs its own warnings, so tracing goes first
    setup_tracing(cli.verbose);

    let config = match MigrationConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    tracing::info!("{config}");
    if config.source.is_none() {
        tracing::warn!("no source given (INPUT, --input or --master)");
    }
    if config.target.is_none() {
        tracing::warn!("no target given (--output or --target)");
    }

    exit_code::SUCCESS
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> ExitCode {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}
