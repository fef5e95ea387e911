//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Covers invalid option values and configuration file I/O. Usage errors
/// (unknown flags, missing values) are reported by clap before resolution.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// An option value is malformed or out of range.
    #[error("Invalid {option}={value:?}: {reason}")]
    InvalidArgument {
        /// Name of the option, e.g. `--ncpu`
        option: &'static str,
        /// The raw value as supplied
        value: String,
        /// Why the value was rejected
        reason: String,
    },
}

/// Well-known option names for `InvalidArgument` errors.
///
/// Use these constants for compile-time safety when matching option names.
pub mod option {
    /// Processor count override.
    pub const NCPU: &str = "--ncpu";
    /// Expiration offset expression.
    pub const EXPIRE: &str = "--unixtime-in-milliseconds";
    /// Single database filter.
    pub const DB: &str = "--db";
    /// Database remap list.
    pub const DBMAP: &str = "--dbmap";
    /// Spill file capacity.
    pub const TMPFILE_SIZE: &str = "--tmpfile-size";
}

impl ConfigError {
    /// Creates an `InvalidArgument` error for `option` with raw `value`.
    pub fn invalid(option: &'static str, value: &str, reason: impl std::fmt::Display) -> Self {
        Self::InvalidArgument {
            option,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}
