//! User notifier implementations.
//!
//! | Module    | OS         | Presentation                               |
//! |-----------|------------|--------------------------------------------|
//! | `windows` | Windows    | `MessageBoxW` dialogs                      |
//! | `console` | all        | stderr output and `dialoguer` prompts      |
//! | `mock`    | all        | records notices, scripted yes/no answers   |
//!
//! `NativeNotifier` is the one `main` wires in.

pub mod console;
pub mod mock;

#[cfg(target_os = "windows")]
pub mod windows;

/// Message boxes on Windows.
#[cfg(target_os = "windows")]
pub use windows::MessageBoxNotifier as NativeNotifier;

/// Terminal output everywhere else.
#[cfg(not(target_os = "windows"))]
pub use console::ConsoleNotifier as NativeNotifier;
