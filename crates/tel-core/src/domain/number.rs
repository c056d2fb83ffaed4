//! `tel:` URI normalization and dial-string construction.
//!
//! The OS hands the handler a URI such as `tel:+31201234567`.  Two rules turn
//! it into what the telephony line is asked to dial:
//!
//! 1. [`normalize_number`] strips the `tel:` scheme and rewrites a leading
//!    `+` to the international access prefix `00`:
//!    `tel:+31201234567` → `0031201234567`.
//! 2. [`dial_string`] prepends the outbound trunk-access digit `0`:
//!    `0031201234567` → `00031201234567`.
//!
//! No other characters are checked or removed.  Separators, letters or
//! `;ext=` parameters pass through untouched; the telephony provider is the
//! one that rejects what it cannot dial.

use thiserror::Error;

/// URI scheme the handler is registered for.
pub const TEL_SCHEME: &str = "tel:";

/// Replacement for a leading `+` (international dialing convention).
pub const INTERNATIONAL_PREFIX: &str = "00";

/// Digit dialed first to reach an outside line.
pub const TRUNK_ACCESS_PREFIX: &str = "0";

/// Reasons a raw argument list cannot be turned into a number.
///
/// The `Display` text is shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    /// The process was started without any argument.
    #[error("No arguments given.")]
    NoArguments,

    /// The first argument is not a `tel:` URI.
    #[error("Unexpected input. Expected argument to start with '{expected}'.")]
    MissingScheme {
        /// The scheme that was expected (`tel:`).
        expected: &'static str,
    },
}

/// Extracts the number to dial from the raw process arguments.
///
/// Only the first argument is consumed; the rest are ignored.
///
/// # Errors
///
/// - [`NumberError::NoArguments`] if `args` is empty.
/// - [`NumberError::MissingScheme`] if the first argument does not start with
///   `tel:` (the check is case-sensitive).
///
/// ```rust
/// use tel_core::normalize_number;
///
/// assert_eq!(normalize_number(&["tel:+4930123"]).unwrap(), "004930123");
/// assert_eq!(normalize_number(&["tel:0301234"]).unwrap(), "0301234");
/// ```
pub fn normalize_number<S: AsRef<str>>(args: &[S]) -> Result<String, NumberError> {
    let raw = args.first().ok_or(NumberError::NoArguments)?.as_ref();

    let number = raw
        .strip_prefix(TEL_SCHEME)
        .ok_or(NumberError::MissingScheme {
            expected: TEL_SCHEME,
        })?;

    Ok(match number.strip_prefix('+') {
        Some(rest) => format!("{INTERNATIONAL_PREFIX}{rest}"),
        None => number.to_string(),
    })
}

/// Builds the dial string handed to the telephony line.
///
/// The trunk-access digit is always prepended; there is no setting to turn
/// it off.
pub fn dial_string(number: &str) -> String {
    format!("{TRUNK_ACCESS_PREFIX}{number}")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
