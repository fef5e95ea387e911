//! Parsers for the raw `--db` and `--dbmap` values.

use std::num::ParseIntError;

use thiserror::Error;
use tracing::warn;

use super::policy::DbMap;

/// Wildcard accepted by `--db` meaning "every database".
pub const ANY_DB: &str = "*";

/// Error parsing a database id or a remap list.
#[derive(Debug, Error)]
pub enum DbParseError {
    /// The value is not a decimal integer.
    #[error("not an integer: {0}")]
    NotInteger(#[source] ParseIntError),

    /// The value is a negative integer.
    #[error("database id must not be negative, got {0}")]
    Negative(i64),

    /// A `source:target` entry of a remap list has a bad id.
    #[error("invalid mapping '{entry}': {source}")]
    Mapping {
        /// The offending `source:target` entry
        entry: String,
        /// What was wrong with it
        #[source]
        source: Box<DbParseError>,
    },
}

/// Parses a `--db` value.
///
/// Returns `Ok(None)` for an empty value or the `*` wildcard.
///
/// # Errors
///
/// Returns an error if the value is not a non-negative integer.
pub fn parse_db(raw: &str) -> Result<Option<u64>, DbParseError> {
    if raw.is_empty() || raw == ANY_DB {
        return Ok(None);
    }
    parse_id(raw).map(Some)
}

/// Parses a `--dbmap` value of the form `src:dst,src:dst,...`.
///
/// Entries that do not split into exactly two `:`-separated fields are
/// skipped. A later entry for the same source id replaces an earlier one.
///
/// # Errors
///
/// Returns an error if either id of a two-field entry is not a
/// non-negative integer.
pub fn parse_dbmap(raw: &str) -> Result<DbMap, DbParseError> {
    let mut map = DbMap::new();

    for entry in raw.split(',') {
        let fields: Vec<&str> = entry.split(':').collect();
        let [source, target] = fields.as_slice() else {
            warn!(entry, "skipping malformed --dbmap entry");
            continue;
        };

        let wrap = |e: DbParseError| DbParseError::Mapping {
            entry: entry.to_string(),
            source: Box::new(e),
        };
        let source = parse_id(source).map_err(wrap)?;
        let target = parse_id(target).map_err(wrap)?;
        map.insert(source, target);
    }

    Ok(map)
}

fn parse_id(s: &str) -> Result<u64, DbParseError> {
    let n: i64 = s.parse().map_err(DbParseError::NotInteger)?;
    u64::try_from(n).map_err(|_| DbParseError::Negative(n))
}
