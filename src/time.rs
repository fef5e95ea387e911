//! Time abstraction for expiration offsets.
//!
//! Absolute expiration expressions (`@<millis>` and date-times) are turned
//! into offsets relative to "now". The [`Clock`] trait lets tests pin "now"
//! while production code reads the system clock.

use std::time::SystemTime;

use chrono::{DateTime, Utc};

/// Source of the current instant.
///
/// # Example
///
/// ```
/// use redis_port::time::{Clock, SystemClock};
///
/// let now = SystemClock.now_utc();
/// assert!(now.timestamp() > 0);
/// ```
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> SystemTime;

    /// Returns the current time as a UTC date-time.
    fn now_utc(&self) -> DateTime<Utc> {
        DateTime::<Utc>::from(self.now())
    }
}

/// Clock backed by [`SystemTime::now()`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Clock frozen at a fixed number of milliseconds after the Unix epoch.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct FixedClock {
    pub(crate) millis: u64,
}

#[cfg(test)]
impl FixedClock {
    pub(crate) const fn at_millis(millis: u64) -> Self {
        Self { millis }
    }
}

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> SystemTime {
        SystemTime::UNIX_EPOCH + std::time::Duration::from_millis(self.millis)
    }
}
