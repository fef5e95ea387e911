//! Configuration layer for redis-port.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`MigrationConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Each setting is resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - the first non-empty alias wins
//! 2. **TOML config file** - values from the configuration file
//! 3. **Built-in defaults** - hardcoded default values
//!
//! Empty strings count as absent in both sources.
//!
//! # Aliases
//!
//! The source endpoint is taken from the positional `INPUT`, `--input` or
//! `--master`, in that order. The target is taken from `--output` or
//! `--target`. Neither is required here; the engine decides which of them
//! its mode needs.
//!
//! # Database Selection
//!
//! `--db` and `--dbmap` are resolved independently (CLI over TOML for each)
//! and then combined by [`DbPolicy::resolve`](crate::database::DbPolicy::resolve):
//! a remap list always wins over a single database, even when they come
//! from different sources.

mod cli;
pub mod defaults;
mod error;
pub mod parallelism;
mod toml;
mod validated;

#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command};
pub use error::{ConfigError, option};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{MigrationConfig, write_default_config};
