//! Name-based line lookup.
//!
//! Telephony providers identify their lines (TAPI calls them *addresses*) by
//! a human-readable name such as `"SIP Line"` or `"Line 1 (Office)"`.  The
//! handler stores that name and finds the line again on every run by exact,
//! case-sensitive string equality.

use tracing::warn;

/// Result of matching the configured line name against the provider's lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMatch {
    /// Exactly one line carries the name.
    Unique(usize),
    /// Several lines carry the name; `first` is the earliest.
    Ambiguous { first: usize, count: usize },
    /// No line carries the name.
    Missing,
}

impl LineMatch {
    /// Index of the line to use, if any.
    ///
    /// Ambiguous matches resolve to the first line with the name.
    pub fn index(self) -> Option<usize> {
        match self {
            LineMatch::Unique(i) | LineMatch::Ambiguous { first: i, .. } => Some(i),
            LineMatch::Missing => None,
        }
    }
}

/// Finds `wanted` among `names`.
///
/// An empty `wanted` never matches, even if a provider reports a line with an
/// empty name.
pub fn match_line_name<I, S>(names: I, wanted: &str) -> LineMatch
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if wanted.is_empty() {
        return LineMatch::Missing;
    }

    let mut first = None;
    let mut count = 0usize;
    for (i, name) in names.into_iter().enumerate() {
        if name.as_ref() == wanted {
            first.get_or_insert(i);
            count += 1;
        }
    }

    match (first, count) {
        (None, _) => LineMatch::Missing,
        (Some(i), 1) => LineMatch::Unique(i),
        (Some(first), count) => {
            warn!("{count} telephony lines are named '{wanted}'; using the first one");
            LineMatch::Ambiguous { first, count }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
