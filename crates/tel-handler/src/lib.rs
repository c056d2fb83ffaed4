//! tel-handler library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does tel-handler do? (for beginners)
//!
//! tel-handler is registered with the operating system as the handler for
//! `tel:` links.  Clicking such a link starts the process with the URI as its
//! only argument, and the handler:
//!
//! 1. Loads the per-user configuration (the name of the line to dial on).
//! 2. Checks that the line still exists, asking the user to pick one if not.
//! 3. Turns the URI into a dialable number (`tel:+31…` → `0031…`).
//! 4. Asks the telephony provider to place the call, then exits.
//!
//! Started without arguments, it runs the installer and then lets the user
//! choose a line.

/// Application layer: use cases and the collaborator traits they depend on.
pub mod application;

/// Infrastructure layer: OS adapters, configuration storage, and test doubles.
pub mod infrastructure;
