//! # tel-core
//!
//! Shared domain library for the `tel:` protocol handler.
//!
//! This crate has zero dependencies on OS APIs, UI frameworks, or the file
//! system.  Everything here is a pure function or a plain data type, which
//! keeps the decision logic of the handler testable on any platform.
//!
//! # What does the handler do? (for beginners)
//!
//! When a user clicks a `tel:+31201234567` link, the operating system starts
//! the handler with that URI as its first argument.  The handler turns the URI
//! into a dialable number, picks the telephony line the user configured once,
//! and asks that line to place the call.
//!
//! This crate defines:
//!
//! - **`domain::config`** – The persisted settings record (`HandlerConfig`)
//!   and the location of its file relative to the per-user data directory.
//!
//! - **`domain::number`** – Turns the raw `tel:` argument into the number to
//!   dial (`+` becomes `00`) and builds the final dial string with the
//!   outbound trunk-access digit.
//!
//! - **`domain::line`** – Matches the configured line name against the names
//!   reported by the telephony provider.

pub mod domain;

pub use domain::config::HandlerConfig;
pub use domain::line::{match_line_name, LineMatch};
pub use domain::number::{dial_string, normalize_number, NumberError};
