//! Punctuation and zero-padding normalization helpers.

use crate::error::{NotationError, Result};

/// Characters that mark an expression as needing expansion.
pub const NOTATION_MARKERS: [char; 3] = ['*', '-', ':'];

/// Which end of a code to strip zeros from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZeroSide {
    /// Strip leading zeros (`"0501"` -> `"501"`).
    Leading,
    /// Strip trailing zeros (`"K5010"` -> `"K501"`).
    Trailing,
    /// Strip both ends.
    Both,
}

/// Removes every `.` from a code.
///
/// ```
/// use codeset_notation::normalize::drop_dots;
///
/// assert_eq!(drop_dots("K50.1"), "K501");
/// ```
pub fn drop_dots(code: &str) -> String {
    code.replace('.', "")
}

/// Removes zeros from one or both ends of a code.
pub fn drop_zeros(code: &str, side: ZeroSide) -> String {
    match side {
        ZeroSide::Leading => code.trim_start_matches('0'),
        ZeroSide::Trailing => code.trim_end_matches('0'),
        ZeroSide::Both => code.trim_matches('0'),
    }
    .to_string()
}

/// Returns true if the text contains a star, hyphen, or colon marker.
pub fn has_notation(text: &str) -> bool {
    text.contains(NOTATION_MARKERS)
}

/// Splits an expression around its single `marker`.
///
/// Returns `Ok(None)` when the marker is absent, and an error when it occurs
/// more than once.
pub(crate) fn split_marker(expr: &str, marker: char) -> Result<Option<(&str, &str)>> {
    let Some((left, right)) = expr.split_once(marker) else {
        return Ok(None);
    };
    if right.contains(marker) {
        return Err(NotationError::malformed(expr, marker));
    }
    Ok(Some((left, right)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_dots() {
        assert_eq!(drop_dots("K50.11"), "K5011");
        assert_eq!(drop_dots("K50"), "K50");
    }

    #[test]
    fn test_drop_zeros() {
        assert_eq!(drop_zeros("00501", ZeroSide::Leading), "501");
        assert_eq!(drop_zeros("K5000", ZeroSide::Trailing), "K5");
        assert_eq!(drop_zeros("050", ZeroSide::Both), "5");
        assert_eq!(drop_zeros("K050", ZeroSide::Leading), "K050");
    }

    #[test]
    fn test_has_notation() {
        assert!(has_notation("K50*"));
        assert!(has_notation("K50-K52"));
        assert!(has_notation("K50:K52"));
        assert!(!has_notation("K50.1"));
    }

    #[test]
    fn test_split_marker() {
        assert_eq!(split_marker("K50", '-').unwrap(), None);
        assert_eq!(split_marker("K50-K52", '-').unwrap(), Some(("K50", "K52")));
        assert_eq!(split_marker("*5", '*').unwrap(), Some(("", "5")));

        let err = split_marker("K50-K52-K53", '-').unwrap_err();
        assert_eq!(err.code(), "N008");
    }
}
