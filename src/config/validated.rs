//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration handed to the
//! migration engine. All validation is performed during construction; the
//! result is immutable and carries the database policy explicitly rather
//! than through shared state.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::TimeDelta;
use tracing::{debug, warn};

use crate::database::{DbPolicy, parse_db, parse_dbmap};
use crate::expire::parse_expire_offset;
use crate::spill::{SpillFile, parse_size};
use crate::time::{Clock, SystemClock};

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, option};
use super::parallelism::{detected_ncpu, parallelism_for, parse_ncpu};
use super::toml::TomlConfig;

/// Fully validated migration configuration.
///
/// # Construction
///
/// Use [`MigrationConfig::from_raw`] to create from CLI args and optional
/// TOML config, or [`MigrationConfig::load`] to also read `--config`.
#[derive(Debug, Clone)]
pub struct MigrationConfig {
    /// Source endpoint or input file. Required-ness is checked by the caller.
    pub source: Option<String>,

    /// Target endpoint or output file. Required-ness is checked by the caller.
    pub target: Option<String>,

    /// Effective processor count, used to size the engine's scheduler
    pub ncpu: usize,

    /// Number of concurrent migration workers
    pub parallelism: usize,

    /// Append-only file to replay, if any
    pub aof: Option<PathBuf>,

    /// Signed shift applied to every migrated key's expiration
    pub expire_offset: TimeDelta,

    /// Which source databases are migrated and where to
    pub db_policy: DbPolicy,

    /// On-disk spill file, if enabled
    pub spill: Option<SpillFile>,

    /// Read buffer size in bytes
    pub reader_buffer_size: usize,

    /// Write buffer size in bytes
    pub writer_buffer_size: usize,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for MigrationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spill_str = self
            .spill
            .as_ref()
            .map_or_else(|| "none".to_string(), ToString::to_string);
        let aof_str = self
            .aof
            .as_ref()
            .map_or_else(|| "none".to_string(), |p| p.display().to_string());

        write!(
            f,
            "Config {{ source: {}, target: {}, ncpu: {}, parallelism: {}, aof: {}, \
             expire_offset: {}ms, db: {}, spill: {} }}",
            self.source.as_deref().unwrap_or("none"),
            self.target.as_deref().unwrap_or("none"),
            self.ncpu,
            self.parallelism,
            aof_str,
            self.expire_offset.num_milliseconds(),
            self.db_policy,
            spill_str,
        )
    }
}

impl MigrationConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values. Uses the system
    /// clock and the detected processor count.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if any option value is malformed or out of range.
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        Self::from_raw_with(cli, toml, &SystemClock, detected_ncpu())
    }

    /// Like [`from_raw`](Self::from_raw) with an explicit clock and processor count.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if any option value is malformed or out of range.
    pub fn from_raw_with(
        cli: &Cli,
        toml: Option<&TomlConfig>,
        clock: &dyn Clock,
        detected_ncpu: usize,
    ) -> Result<Self, ConfigError> {
        let ncpu = Self::resolve_ncpu(cli, toml, detected_ncpu)?;
        let parallelism = parallelism_for(ncpu);
        debug!(ncpu, parallelism, "resolved worker count");

        let source = Self::resolve_source(cli, toml);
        let target = Self::resolve_target(cli, toml);

        let aof =
            pick(cli.aof.as_deref(), toml.and_then(|t| t.aof.as_deref())).map(PathBuf::from);

        let expire_offset = Self::resolve_expire_offset(cli, toml, clock)?;

        let db_policy = Self::resolve_db_policy(cli, toml)?;

        let spill = Self::resolve_spill(cli, toml)?;

        Ok(Self {
            source,
            target,
            ncpu,
            parallelism,
            aof,
            expire_offset,
            db_policy,
            spill,
            reader_buffer_size: defaults::READER_BUFFER_SIZE,
            writer_buffer_size: defaults::WRITER_BUFFER_SIZE,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_ncpu(
        cli: &Cli,
        toml: Option<&TomlConfig>,
        detected: usize,
    ) -> Result<usize, ConfigError> {
        pick(cli.ncpu.as_deref(), toml.and_then(|t| t.ncpu.as_deref()))
            .map_or(Ok(detected.max(defaults::NCPU_MIN)), parse_ncpu)
    }

    fn resolve_source(cli: &Cli, toml: Option<&TomlConfig>) -> Option<String> {
        // Generic input first, then the replication master
        let from_cli = [&cli.positional_input, &cli.input, &cli.master]
            .into_iter()
            .find_map(|alias| non_empty(alias.as_deref()));

        pick(from_cli, toml.and_then(|t| t.source.as_deref())).map(str::to_string)
    }

    fn resolve_target(cli: &Cli, toml: Option<&TomlConfig>) -> Option<String> {
        let from_cli = [&cli.output, &cli.target]
            .into_iter()
            .find_map(|alias| non_empty(alias.as_deref()));

        pick(from_cli, toml.and_then(|t| t.target.as_deref())).map(str::to_string)
    }

    fn resolve_expire_offset(
        cli: &Cli,
        toml: Option<&TomlConfig>,
        clock: &dyn Clock,
    ) -> Result<TimeDelta, ConfigError> {
        let Some(raw) = pick(
            cli.unixtime_in_milliseconds.as_deref(),
            toml.and_then(|t| t.unixtime_in_milliseconds.as_deref()),
        ) else {
            return Ok(TimeDelta::zero());
        };

        let offset = parse_expire_offset(raw, clock)
            .map_err(|e| ConfigError::invalid(option::EXPIRE, raw, e))?;
        debug!(raw, offset_ms = offset.num_milliseconds(), "resolved expire offset");
        Ok(offset)
    }

    fn resolve_db_policy(cli: &Cli, toml: Option<&TomlConfig>) -> Result<DbPolicy, ConfigError> {
        let db = match pick(cli.db.as_deref(), toml.and_then(|t| t.db.as_deref())) {
            Some(raw) => parse_db(raw).map_err(|e| ConfigError::invalid(option::DB, raw, e))?,
            None => None,
        };

        let dbmap = match pick(cli.dbmap.as_deref(), toml.and_then(|t| t.dbmap.as_deref())) {
            Some(raw) => Some(
                parse_dbmap(raw).map_err(|e| ConfigError::invalid(option::DBMAP, raw, e))?,
            ),
            None => None,
        };

        if let (Some(id), Some(_)) = (db, &dbmap) {
            warn!(db = id, "--dbmap takes precedence, ignoring --db");
        }

        let policy = DbPolicy::resolve(db, dbmap);
        debug!(%policy, "resolved database policy");
        Ok(policy)
    }

    fn resolve_spill(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Option<SpillFile>, ConfigError> {
        let path = pick(cli.tmpfile.as_deref(), toml.and_then(|t| t.tmpfile.as_deref()));

        let size = match pick(
            cli.tmpfile_size.as_deref(),
            toml.and_then(|t| t.tmpfile_size.as_deref()),
        ) {
            Some(raw) => Some(
                parse_size(raw).map_err(|e| ConfigError::invalid(option::TMPFILE_SIZE, raw, e))?,
            ),
            None => None,
        };

        let spill = match (path, size) {
            (Some(path), Some(size)) => Some(SpillFile::new(path).with_size(size)),
            (Some(path), None) => Some(SpillFile::new(path)),
            (None, Some(size)) => {
                warn!(size, "--tmpfile-size has no effect without --tmpfile");
                None
            }
            (None, None) => None,
        };
        Ok(spill)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

/// Treats empty strings as absent.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// CLI value if non-empty, else TOML value if non-empty.
fn pick<'a>(cli: Option<&'a str>, toml: Option<&'a str>) -> Option<&'a str> {
    non_empty(cli).or_else(|| non_empty(toml))
}
