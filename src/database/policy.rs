//! Database acceptance and remapping policy.

use std::collections::BTreeMap;
use std::fmt;

/// Source database id to target database id.
pub type DbMap = BTreeMap<u64, u64>;

/// Decides which source databases are migrated and where they land.
///
/// Precedence when building from options is explicit, see [`DbPolicy::resolve`]:
/// a remap table beats a single database, which beats the default.
///
/// # Examples
///
/// ```
/// use redis_port::database::{DbMap, DbPolicy};
///
/// let policy = DbPolicy::resolve(Some(5), Some(DbMap::from([(0, 1), (2, 3)])));
///
/// assert!(policy.accepts(0));
/// assert!(!policy.accepts(5)); // the remap table wins over --db
/// assert_eq!(policy.target_db(2), Some(3));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DbPolicy {
    /// Every database is migrated into the database with the same id.
    #[default]
    AcceptAll,

    /// Only the given database is migrated, into the same id.
    AcceptOne(u64),

    /// Only databases present in the table are migrated, each into its mapped id.
    ///
    /// An empty table accepts nothing.
    AcceptMapped(DbMap),
}

impl DbPolicy {
    /// Builds the policy from the parsed `--db` and `--dbmap` values.
    ///
    /// A remap table, even an empty one, always takes precedence over a
    /// single database selection.
    #[must_use]
    pub fn resolve(db: Option<u64>, dbmap: Option<DbMap>) -> Self {
        match (db, dbmap) {
            (_, Some(map)) => Self::AcceptMapped(map),
            (Some(id), None) => Self::AcceptOne(id),
            (None, None) => Self::AcceptAll,
        }
    }

    /// Returns `true` if records from source database `db` are migrated.
    #[must_use]
    pub fn accepts(&self, db: u64) -> bool {
        match self {
            Self::AcceptAll => true,
            Self::AcceptOne(id) => *id == db,
            Self::AcceptMapped(map) => map.contains_key(&db),
        }
    }

    /// Returns the target database for source database `db`, or `None` if
    /// `db` is not migrated.
    #[must_use]
    pub fn target_db(&self, db: u64) -> Option<u64> {
        match self {
            Self::AcceptMapped(map) => map.get(&db).copied(),
            _ if self.accepts(db) => Some(db),
            _ => None,
        }
    }
}

impl fmt::Display for DbPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AcceptAll => f.write_str("all"),
            Self::AcceptOne(id) => write!(f, "db{id}"),
            Self::AcceptMapped(map) => {
                f.write_str("[")?;
                for (i, (source, target)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{source}:{target}")?;
                }
                f.write_str("]")
            }
        }
    }
}
