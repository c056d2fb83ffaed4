//! Telephony provider implementations.
//!
//! Each platform provides a [`TelephonyProvider`]; the correct one is selected
//! at compile time via `#[cfg(target_os = ...)]` and re-exported as
//! `NativeTelephony`:
//!
//! | Module        | OS         | API used                          |
//! |---------------|------------|-----------------------------------|
//! | `windows`     | Windows    | TAPI 3 (`ITTAPI`, `ITAddress`)    |
//! | `unsupported` | all others | none; `initialize` always fails   |
//!
//! A [`mock::MockTelephony`] is always compiled (not guarded by `#[cfg]`) so
//! tests on any platform can use it without a telephony stack.
//!
//! [`TelephonyProvider`]: crate::application::telephony::TelephonyProvider

pub mod mock;

// ── Windows implementation ────────────────────────────────────────────────────

#[cfg(target_os = "windows")]
pub mod windows;

/// Re-export the TAPI provider as `NativeTelephony` on Windows.
#[cfg(target_os = "windows")]
pub use windows::TapiProvider as NativeTelephony;

// ── Other platforms ───────────────────────────────────────────────────────────

#[cfg(not(target_os = "windows"))]
pub mod unsupported;

/// Re-export the placeholder provider as `NativeTelephony` elsewhere.
#[cfg(not(target_os = "windows"))]
pub use unsupported::UnsupportedTelephony as NativeTelephony;
