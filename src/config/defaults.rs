//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

/// Lowest accepted `--ncpu` value.
pub const NCPU_MIN: usize = 1;

/// Highest accepted `--ncpu` value.
pub const NCPU_MAX: usize = 1024;

/// Read buffer size for source connections and files (128 KiB).
pub const READER_BUFFER_SIZE: usize = 128 * 1024;

/// Write buffer size for target connections (128 KiB).
pub const WRITER_BUFFER_SIZE: usize = 128 * 1024;

/// Default output path of the `init` subcommand.
pub const CONFIG_FILE_NAME: &str = "redis-port.toml";
