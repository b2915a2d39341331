//! Colon ranges: `K50:K52`, `K50.5:K52.19`.
//!
//! Unlike hyphen ranges these are positional: the result is the run of the
//! code universe between the two endpoints, so endpoints may differ in length
//! and number of decimals.

use tracing::debug;

use crate::error::{Notation, NotationError, Result};
use crate::input::{CodeInput, CodeSet};
use crate::normalize::split_marker;
use crate::universe::CodeUniverse;

/// Expands colon ranges in every expression of `input`.
///
/// Sequences are concatenated in order without deduplication.
pub fn expand_colon(input: &CodeInput, universe: Option<&CodeUniverse>) -> Result<CodeSet> {
    input.expand_each(|expr| expand_colon_str(expr, universe), |codes| codes)
}

/// Expands a single colon range into a slice of the universe.
///
/// Both endpoints must be members of the universe; the slice includes them.
///
/// ```
/// use codeset_notation::{expand_colon_str, CodeUniverse};
///
/// let universe = CodeUniverse::new(["K50", "K51", "K52", "K53", "L10"]);
/// let codes = expand_colon_str("K50:K52", Some(&universe)).unwrap();
/// assert_eq!(codes, ["K50", "K51", "K52"]);
/// ```
pub fn expand_colon_str(expr: &str, universe: Option<&CodeUniverse>) -> Result<Vec<String>> {
    let Some((start, end)) = split_marker(expr, ':')? else {
        return Ok(vec![expr.to_string()]);
    };
    let universe = universe.ok_or_else(|| NotationError::configuration(Notation::Colon, expr))?;

    let start = start.trim();
    let end = end.trim();
    let lookup = |code: &str| {
        universe.position(code).ok_or_else(|| NotationError::Lookup {
            code: code.to_string(),
            expr: expr.to_string(),
        })
    };
    let start_pos = lookup(start)?;
    let end_pos = lookup(end)?;

    if end_pos < start_pos {
        return Err(NotationError::Range {
            expr: expr.to_string(),
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    let codes = universe.slice(start_pos, end_pos).to_vec();
    debug!(expr, count = codes.len(), "expanded colon range");
    Ok(codes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn universe() -> CodeUniverse {
        CodeUniverse::new(["K50", "K51", "K52", "K53", "L10"])
    }

    #[test]
    fn test_positional_slice() {
        let codes = expand_colon_str("K50:K52", Some(&universe())).unwrap();
        assert_eq!(codes, ["K50", "K51", "K52"]);
    }

    #[test]
    fn test_endpoint_trimmed() {
        let codes = expand_colon_str(" K53 : L10 ", Some(&universe())).unwrap();
        assert_eq!(codes, ["K53", "L10"]);
    }

    #[test]
    fn test_mixed_lengths() {
        let universe = CodeUniverse::new(["K50", "K50.1", "K50.11", "K51", "K52.0"]);
        let codes = expand_colon_str("K50.1:K52.0", Some(&universe)).unwrap();
        assert_eq!(codes, ["K50.1", "K50.11", "K51", "K52.0"]);
    }

    #[test]
    fn test_missing_endpoint_fails() {
        let universe = CodeUniverse::new(["K50", "K51", "K53"]);
        let err = expand_colon_str("K50:K52", Some(&universe)).unwrap_err();
        match err {
            NotationError::Lookup { code, .. } => assert_eq!(code, "K52"),
            other => panic!("expected lookup error, got {:?}", other),
        }
    }

    #[test]
    fn test_reversed_endpoints_fail() {
        let err = expand_colon_str("K52:K50", Some(&universe())).unwrap_err();
        assert!(matches!(err, NotationError::Range { .. }));
    }

    #[test]
    fn test_no_colon_is_identity() {
        assert_eq!(expand_colon_str("K50", None).unwrap(), ["K50"]);
    }

    #[test]
    fn test_missing_universe_fails() {
        let err = expand_colon_str("K50:K52", None).unwrap_err();
        assert_eq!(err.code(), "N006");
    }

    #[test]
    fn test_sequence_keeps_duplicates() {
        let input = CodeInput::from(["K50:K51", "K51:K52"]);
        let out = expand_colon(&input, Some(&universe())).unwrap();
        assert_eq!(out.codes().unwrap(), ["K50", "K51", "K51", "K52"]);
    }
}
