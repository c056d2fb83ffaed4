//! Line picker implementations.
//!
//! - **`console`** – `dialoguer` selection list on the terminal.
//! - **`mock`** – Scripted selections for tests; records what was shown.

pub mod console;
pub mod mock;

pub use console::ConsoleLinePicker as NativeLinePicker;
