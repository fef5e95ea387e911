//! redis-port: Redis database migration and replication
//!
//! A library for resolving the configuration of a migration run: which
//! endpoints to copy between, which databases to migrate and where, how
//! many workers to run, and how to shift key expirations.

pub mod config;
pub mod database;
pub mod expire;
pub mod spill;
pub mod time;
