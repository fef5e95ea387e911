//! Tests for validated configuration.

use chrono::TimeDelta;

use crate::database::{DbMap, DbPolicy};
use crate::time::FixedClock;

use super::ConfigError;
use super::cli::Cli;
use super::toml::TomlConfig;
use super::validated::MigrationConfig;

/// 2020-01-01 00:00:00 UTC in milliseconds.
const NOW_MS: u64 = 1_577_836_800_000;

/// Processor count reported as "detected" in tests.
const DETECTED_NCPU: usize = 4;

/// Helper to create CLI args from a slice
fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["redis-port"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args)
}

/// Helper to parse TOML config
fn toml(content: &str) -> TomlConfig {
    TomlConfig::parse(content).unwrap()
}

/// Resolves with a pinned clock and processor count.
fn resolve(cli: &Cli, toml: Option<&TomlConfig>) -> Result<MigrationConfig, ConfigError> {
    MigrationConfig::from_raw_with(cli, toml, &FixedClock::at_millis(NOW_MS), DETECTED_NCPU)
}

/// Asserts `result` is an `InvalidArgument` for `option` quoting `value`.
#[track_caller]
fn assert_invalid(result: Result<MigrationConfig, ConfigError>, option: &str, value: &str) {
    match result {
        Err(ConfigError::InvalidArgument {
            option: o,
            value: v,
            ..
        }) => {
            assert_eq!(o, option);
            assert_eq!(v, value);
        }
        other => panic!("Expected InvalidArgument for {option}, got {other:?}"),
    }
}

mod database_tests;
mod loading_tests;
