//! Source database selection.
//!
//! A Redis instance holds numbered logical databases. This module decides
//! which of them are migrated and which target database each one lands in:
//!
//! - [`DbPolicy`] answers "is this database migrated, and where to?"
//! - [`parse_db`] and [`parse_dbmap`] turn the raw `--db` / `--dbmap`
//!   values into the inputs of [`DbPolicy::resolve`].

mod policy;
mod select;

pub use policy::{DbMap, DbPolicy};
pub use select::{DbParseError, parse_db, parse_dbmap};
