//! Domain layer: pure data and rules with no I/O.
//!
//! - **`config`** – `HandlerConfig`, the single persisted setting.
//! - **`number`** – `tel:` URI normalization and dial-string construction.
//! - **`line`** – Name-based line lookup rules.

pub mod config;
pub mod line;
pub mod number;
