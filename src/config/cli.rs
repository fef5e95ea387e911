//! CLI argument parsing using clap.
//!
//! Every option value is kept as the raw string the user typed so that
//! validation errors can quote it back verbatim.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::defaults;

/// `--version` output: the release plus the toolchain, target and commit it was built from.
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncompile: ",
    env!("REDIS_PORT_COMPILE")
);

/// redis-port: copy keys from one Redis endpoint to another
///
/// Reads from a source instance (or an RDB/AOF input) and writes every
/// accepted database into a target instance.
#[derive(Debug, Parser)]
#[command(name = "redis-port")]
#[command(version, long_version = LONG_VERSION, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Source endpoint or input file
    #[arg(value_name = "INPUT")]
    pub positional_input: Option<String>,

    /// Source endpoint or input file
    #[arg(long, short = 'i')]
    pub input: Option<String>,

    /// Replication master to sync from
    #[arg(long, short = 'm')]
    pub master: Option<String>,

    /// Target endpoint or output file
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// Target endpoint
    #[arg(long, short = 't')]
    pub target: Option<String>,

    /// Number of processors to use (1-1024, default: all)
    #[arg(long, short = 'n', value_name = "N", allow_hyphen_values = true)]
    pub ncpu: Option<String>,

    /// Append-only file to replay instead of syncing directly
    #[arg(long, value_name = "PATH")]
    pub aof: Option<String>,

    /// Expiration offset: '+1h'/'-30m', '@<epoch millis>', or 'YYYY-MM-DD HH:MM:SS'
    #[arg(
        long = "unixtime-in-milliseconds",
        value_name = "EXPR",
        allow_hyphen_values = true
    )]
    pub unixtime_in_milliseconds: Option<String>,

    /// Only migrate this database ('*' for all)
    #[arg(long, value_name = "DB", allow_hyphen_values = true)]
    pub db: Option<String>,

    /// Database remapping, e.g. '0:1,2:3' (overrides --db)
    #[arg(long, value_name = "SRC:DST,...")]
    pub dbmap: Option<String>,

    /// Spill file for backlog that does not fit in memory
    #[arg(long, value_name = "PATH")]
    pub tmpfile: Option<String>,

    /// Maximum spill file size in 1024-based units, e.g. '2GB' (default: 2GB)
    #[arg(long = "tmpfile-size", value_name = "SIZE")]
    pub tmpfile_size: Option<String>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for redis-port
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE_NAME)]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    ///
    /// Exits the process on usage errors, `--help` and `--version`.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Parses CLI arguments from an iterator without exiting.
    ///
    /// # Errors
    ///
    /// Returns the clap error for usage errors, and also for `--help` and
    /// `--version`, which clap reports as errors of a display kind.
    pub fn try_parse_from_iter<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
