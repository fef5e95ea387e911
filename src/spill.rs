//! On-disk spill file settings.
//!
//! When the in-memory backlog of a sync exceeds what it may buffer, the
//! engine spills the overflow into a temporary file of bounded size.

use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;

use byte_unit::Byte;
use thiserror::Error;

/// Default spill file capacity: 2 GiB.
pub const DEFAULT_SIZE_BYTES: u64 = 2 * 1024 * 1024 * 1024;

/// Spill file location and capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpillFile {
    /// Path of the spill file
    pub path: PathBuf,

    /// Maximum size of the spill file in bytes (always positive)
    pub size_bytes: u64,
}

impl SpillFile {
    /// Creates spill settings with the default capacity.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            size_bytes: DEFAULT_SIZE_BYTES,
        }
    }

    /// Overrides the capacity.
    #[must_use]
    pub const fn with_size(mut self, size_bytes: u64) -> Self {
        self.size_bytes = size_bytes;
        self
    }
}

impl fmt::Display for SpillFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} bytes)", self.path.display(), self.size_bytes)
    }
}

/// Error parsing a byte-size literal.
#[derive(Debug, Error)]
pub enum SizeError {
    /// Not a byte-size literal.
    #[error("invalid byte size: {0}")]
    Invalid(#[source] byte_unit::ParseError),

    /// Parsed to zero.
    #[error("size must be greater than 0")]
    Zero,

    /// Has a fractional part.
    #[error("size must be a whole number")]
    Fractional,

    /// Does not fit a signed 64-bit byte count.
    #[error("size {0} bytes is too large")]
    TooLarge(u64),
}

/// Parses a byte-size literal such as `1024`, `512M`, `2GB` or `2GiB`.
///
/// Units are powers of 1024 whether or not they carry the `i`: `2GB` and
/// `2GiB` are both 2147483648 bytes. Units are case-insensitive and the
/// count must be a whole number.
///
/// # Errors
///
/// Returns an error if the literal is malformed, fractional, zero, or does
/// not fit in an `i64`.
pub fn parse_size(raw: &str) -> Result<u64, SizeError> {
    if raw.contains('.') {
        return Err(SizeError::Fractional);
    }

    let bytes = Byte::parse_str(binary_units(raw), true)
        .map_err(SizeError::Invalid)?
        .as_u64();

    if bytes == 0 {
        return Err(SizeError::Zero);
    }
    if i64::try_from(bytes).is_err() {
        return Err(SizeError::TooLarge(bytes));
    }
    Ok(bytes)
}

/// Rewrites a `K`/`M`/`G`/`T`/`P` unit, with or without `B`, to its `KiB`..`PiB` form.
fn binary_units(raw: &str) -> Cow<'_, str> {
    let split = raw.find(|c: char| !c.is_ascii_digit()).unwrap_or(raw.len());
    let (count, unit) = raw.split_at(split);

    let binary = match unit.trim_start().to_ascii_uppercase().as_str() {
        "K" | "KB" => "KiB",
        "M" | "MB" => "MiB",
        "G" | "GB" => "GiB",
        "T" | "TB" => "TiB",
        "P" | "PB" => "PiB",
        _ => return Cow::Borrowed(raw),
    };
    Cow::Owned(format!("{count}{binary}"))
}
