//! TOML configuration file parsing.
//!
//! The file carries the same settings as the command line, as raw strings,
//! so both sources go through identical validation.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Source endpoint or input file
    pub source: Option<String>,

    /// Target endpoint or output file
    pub target: Option<String>,

    /// Processor count override
    pub ncpu: Option<String>,

    /// Append-only file path
    pub aof: Option<String>,

    /// Expiration offset expression
    pub unixtime_in_milliseconds: Option<String>,

    /// Single database filter
    pub db: Option<String>,

    /// Database remap list
    pub dbmap: Option<String>,

    /// Spill file path
    pub tmpfile: Option<String>,

    /// Spill file capacity
    pub tmpfile_size: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# redis-port configuration file
# Every value is a string. Command-line options override these settings.

# Source endpoint or input file (--input, --master, or positional INPUT)
# source = "127.0.0.1:6379"

# Target endpoint or output file (--output, --target)
# target = "127.0.0.1:6380"

# Number of processors to use, 1-1024 (default: all detected)
# ncpu = "4"

# Append-only file to replay
# aof = "/data/appendonly.aof"

# Shift every key's expiration:
#   "+1h" / "-30m"          relative duration
#   "@1577836800000"        now minus this Unix time in milliseconds
#   "2020-01-01 00:00:00"   now minus this UTC date-time
# unixtime_in_milliseconds = "+1h"

# Only migrate one database ("*" for all)
# db = "*"

# Remap databases as "src:dst,src:dst". Takes precedence over db.
# dbmap = "0:1,2:3"

# Spill file for backlog that does not fit in memory
# tmpfile = "/tmp/redis-port.spill"

# Maximum spill file size; K/M/G/T units are powers of 1024 (default: 2GB)
# tmpfile_size = "2GB"
"#
    .to_string()
}
