//! Processor count and worker fan-out.
//!
//! Migration is I/O bound, so small machines are oversubscribed heavily
//! while large ones get a more modest multiple of their processor count:
//!
//! | ncpu | workers |
//! |---|---|
//! | 1 | 8 |
//! | 2..=8 | 4 × ncpu |
//! | > 8 | 2 × ncpu |

use super::defaults::{NCPU_MAX, NCPU_MIN};
use super::error::{ConfigError, option};

/// Returns the number of logical processors, at least 1.
#[must_use]
pub fn detected_ncpu() -> usize {
    num_cpus::get().max(NCPU_MIN)
}

/// Parses a raw `--ncpu` value.
///
/// # Errors
///
/// Returns `InvalidArgument` if the value is not an integer in `1..=1024`.
pub fn parse_ncpu(raw: &str) -> Result<usize, ConfigError> {
    let n: i64 = raw
        .parse()
        .map_err(|e| ConfigError::invalid(option::NCPU, raw, e))?;

    usize::try_from(n)
        .ok()
        .filter(|n| (NCPU_MIN..=NCPU_MAX).contains(n))
        .ok_or_else(|| {
            ConfigError::invalid(
                option::NCPU,
                raw,
                format!("must be between {NCPU_MIN} and {NCPU_MAX}"),
            )
        })
}

/// Returns the number of migration workers for `ncpu` processors.
#[must_use]
pub const fn parallelism_for(ncpu: usize) -> usize {
    match ncpu {
        0 | 1 => 8,
        2..=8 => 4 * ncpu,
        _ => 2 * ncpu,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_cpu_gets_eight_workers() {
        assert_eq!(parallelism_for(1), 8);
    }

    #[test]
    fn small_machines_get_four_per_cpu() {
        for ncpu in 2..=8 {
            assert_eq!(parallelism_for(ncpu), 4 * ncpu, "ncpu = {ncpu}");
        }
    }

    #[test]
    fn large_machines_get_two_per_cpu() {
        assert_eq!(parallelism_for(9), 18);
        assert_eq!(parallelism_for(64), 128);
        assert_eq!(parallelism_for(1024), 2048);
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(parallelism_for(2), 8);
        assert_eq!(parallelism_for(8), 32);
        assert_eq!(parallelism_for(9), 18);
    }

    #[test]
    fn detected_is_positive() {
        assert!(detected_ncpu() >= 1);
    }

    #[test]
    fn parse_accepts_range_bounds() {
        assert_eq!(parse_ncpu("1").unwrap(), 1);
        assert_eq!(parse_ncpu("1024").unwrap(), 1024);
    }

    #[test]
    fn parse_rejects_zero() {
        assert!(matches!(
            parse_ncpu("0"),
            Err(ConfigError::InvalidArgument { option: "--ncpu", .. })
        ));
    }

    #[test]
    fn parse_rejects_above_max() {
        assert!(matches!(
            parse_ncpu("1025"),
            Err(ConfigError::InvalidArgument { option: "--ncpu", .. })
        ));
    }

    #[test]
    fn parse_rejects_negative() {
        assert!(parse_ncpu("-4").is_err());
    }

    #[test]
    fn parse_rejects_non_integer() {
        let err = parse_ncpu("abc").unwrap_err();
        match err {
            ConfigError::InvalidArgument { option, value, .. } => {
                assert_eq!(option, "--ncpu");
                assert_eq!(value, "abc");
            }
            other => panic!("Expected InvalidArgument, got {other:?}"),
        }
    }
}
