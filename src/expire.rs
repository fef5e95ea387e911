//! Expiration offset expressions.
//!
//! Every migrated key's expiration timestamp is shifted by a signed offset.
//! The offset is written in one of three forms:
//!
//! | Form | Example | Offset |
//! |---|---|---|
//! | signed duration | `+1h`, `-30m` | the duration itself |
//! | `@` + epoch milliseconds | `@1577836800000` | now − that instant |
//! | UTC date-time | `2020-01-01 00:00:00` | now − that instant |
//!
//! The absolute forms re-base expirations recorded at some past moment
//! onto the current moment.

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};
use thiserror::Error;

use crate::time::Clock;

/// Layout accepted for absolute date-times.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Length of a date-time written with zero-padded fields.
const DATETIME_LEN: usize = "2006-01-02 15:04:05".len();

/// Error parsing an expiration offset expression.
#[derive(Debug, Error)]
pub enum ExpireError {
    /// The expression was empty.
    #[error("empty expression")]
    Empty,

    /// The remainder after `+`/`-` is not a duration literal.
    #[error("invalid duration: {0}")]
    Duration(#[source] humantime::DurationError),

    /// The remainder after `@` is not an integer.
    #[error("invalid epoch milliseconds: {0}")]
    EpochMillis(#[source] std::num::ParseIntError),

    /// The expression does not match the date-time layout.
    #[error("invalid date-time (expected YYYY-MM-DD HH:MM:SS): {0}")]
    DateTime(#[source] chrono::ParseError),

    /// A date-time field is not zero-padded to its full width.
    #[error("date-time fields must be zero-padded (expected YYYY-MM-DD HH:MM:SS)")]
    DateTimeLayout,

    /// The value cannot be represented as an offset.
    #[error("value out of range")]
    OutOfRange,
}

/// Parses an expiration offset expression relative to `clock`.
///
/// # Errors
///
/// Returns an [`ExpireError`] if `raw` matches none of the accepted forms.
pub fn parse_expire_offset(raw: &str, clock: &dyn Clock) -> Result<TimeDelta, ExpireError> {
    match raw.chars().next() {
        None => Err(ExpireError::Empty),
        Some(sign @ ('+' | '-')) => {
            let delta = parse_unsigned_duration(&raw[1..])?;
            Ok(if sign == '-' { -delta } else { delta })
        }
        Some('@') => {
            let millis: i64 = raw[1..].parse().map_err(ExpireError::EpochMillis)?;
            let instant = DateTime::from_timestamp_millis(millis).ok_or(ExpireError::OutOfRange)?;
            Ok(since(clock, instant))
        }
        Some(_) => {
            let instant = NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT)
                .map_err(ExpireError::DateTime)?
                .and_utc();
            if raw.len() != DATETIME_LEN {
                return Err(ExpireError::DateTimeLayout);
            }
            Ok(since(clock, instant))
        }
    }
}

fn parse_unsigned_duration(literal: &str) -> Result<TimeDelta, ExpireError> {
    let duration =
        humantime::parse_duration(&literal.to_lowercase()).map_err(ExpireError::Duration)?;
    TimeDelta::from_std(duration).map_err(|_| ExpireError::OutOfRange)
}

fn since(clock: &dyn Clock, instant: DateTime<Utc>) -> TimeDelta {
    clock.now_utc().signed_duration_since(instant)
}

#[cfg(test)]
#[path = "expire_tests.rs"]
mod tests;
