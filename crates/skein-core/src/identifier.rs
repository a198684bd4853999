//! Thread identifiers — normalization and ordering of raw catalog numbers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A normalized thread identifier: either a non-negative catalog number or
/// an opaque text code (e.g. "B5200", "Ecru").
///
/// Two raw strings that normalize to the same numeric value denote the same
/// thread, so comparison and hashing work over the normalized form, never
/// the raw text.
///
/// Variant order matters: the derived `Ord` sorts every `Text` identifier
/// before every `Numeric` one, text lexicographically and numbers ascending.
/// That is the fixed display ordering palettes use.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThreadId {
    Text(String),
    Numeric(u32),
}

impl ThreadId {
    /// Normalize a raw, already-trimmed identifier.
    ///
    /// A successful non-negative integer parse yields `Numeric`, so `"07"`
    /// and `"7"` collapse to the same identifier. Everything else is kept
    /// verbatim as `Text` — including the empty string, which must never
    /// become `Numeric(0)` (that would collide with a thread literally
    /// numbered 0).
    ///
    /// Only integral strings count as numeric: decimal, exponent, or
    /// out-of-range forms such as `"3.5"` or `"1e3"` deliberately stay
    /// `Text` and sort with the alpha group. Catalog numbers are integral,
    /// so nothing real is lost, and the integral payload keeps identifiers
    /// hashable and totally ordered for the inventory index.
    pub fn normalize(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::Text(String::new());
        }
        match raw.parse::<u32>() {
            Ok(n) => Self::Numeric(n),
            Err(_) => Self::Text(raw.to_string()),
        }
    }

    /// True for the empty text identifier produced by blank palette slots.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }
}

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Numeric(n) => write!(f, "{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_numeric() {
        assert_eq!(ThreadId::normalize("7"), ThreadId::Numeric(7));
        assert_eq!(ThreadId::normalize("310"), ThreadId::Numeric(310));
        assert_eq!(ThreadId::normalize("0"), ThreadId::Numeric(0));
    }

    #[test]
    fn test_leading_zero_merges_with_plain_form() {
        // "07" and "7" are the same catalog number once normalized.
        assert_eq!(ThreadId::normalize("07"), ThreadId::Numeric(7));
        assert_eq!(ThreadId::normalize("07"), ThreadId::normalize("7"));
    }

    #[test]
    fn test_normalize_text() {
        assert_eq!(
            ThreadId::normalize("B5200"),
            ThreadId::Text("B5200".into())
        );
        // Not lower-cased or otherwise altered.
        assert_eq!(ThreadId::normalize("Ecru"), ThreadId::Text("Ecru".into()));
        // Non-integral numeric forms are not catalog numbers; they stay
        // text and sort with the alpha group.
        assert_eq!(ThreadId::normalize("3.5"), ThreadId::Text("3.5".into()));
        assert_eq!(ThreadId::normalize("1e3"), ThreadId::Text("1e3".into()));
    }

    #[test]
    fn test_empty_string_stays_text() {
        let blank = ThreadId::normalize("");
        assert_eq!(blank, ThreadId::Text(String::new()));
        assert_ne!(blank, ThreadId::Numeric(0));
        assert!(blank.is_blank());
        assert!(!ThreadId::Numeric(0).is_blank());
    }

    #[test]
    fn test_text_sorts_before_numeric() {
        let mut ids = vec![
            ThreadId::normalize("2"),
            ThreadId::normalize("B5200"),
            ThreadId::normalize("1"),
            ThreadId::normalize("Ecru"),
            ThreadId::normalize(""),
            ThreadId::normalize("310"),
        ];
        ids.sort();
        let split = ids
            .iter()
            .position(|id| matches!(id, ThreadId::Numeric(_)))
            .unwrap();
        assert!(ids[..split].iter().all(|id| matches!(id, ThreadId::Text(_))));
        assert!(ids[split..].iter().all(|id| matches!(id, ThreadId::Numeric(_))));
    }

    #[test]
    fn test_numeric_ascending_text_lexicographic() {
        let mut ids = vec![
            ThreadId::Numeric(310),
            ThreadId::Text("X".into()),
            ThreadId::Numeric(7),
            ThreadId::Text("B".into()),
            ThreadId::Numeric(7),
        ];
        ids.sort();
        assert_eq!(
            ids,
            vec![
                ThreadId::Text("B".into()),
                ThreadId::Text("X".into()),
                ThreadId::Numeric(7),
                ThreadId::Numeric(7),
                ThreadId::Numeric(310),
            ]
        );
    }

    #[test]
    fn test_untagged_serialization() {
        let json = serde_json::to_string(&ThreadId::Numeric(310)).unwrap();
        assert_eq!(json, "310");
        let json = serde_json::to_string(&ThreadId::Text("B5200".into())).unwrap();
        assert_eq!(json, "\"B5200\"");
    }

    #[test]
    fn test_display() {
        assert_eq!(ThreadId::Numeric(310).to_string(), "310");
        assert_eq!(ThreadId::Text("Ecru".into()).to_string(), "Ecru");
    }
}
