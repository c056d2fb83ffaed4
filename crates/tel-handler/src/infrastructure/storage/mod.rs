//! Storage infrastructure: configuration file persistence.
//!
//! - **`config`** – Reads and writes `config.xml` in the per-user local data
//!   directory.
//! - **`memory`** – Keeps the configuration in memory; used by tests to script
//!   missing, corrupt, or unwritable storage.

pub mod config;
pub mod memory;
