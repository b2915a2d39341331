//! Regular expression selection over the code universe.

use regex::Regex;
use std::collections::BTreeSet;
use tracing::debug;

use crate::error::{Notation, NotationError, Result};
use crate::input::{sorted_unique, CodeInput, CodeSet};
use crate::universe::CodeUniverse;

/// Selects universe codes matching any pattern in `input`.
pub fn expand_regex(input: &CodeInput, universe: Option<&CodeUniverse>) -> Result<CodeSet> {
    input.expand_each(|expr| expand_regex_str(expr, universe), sorted_unique)
}

/// Returns the universe codes that `pattern` matches at position 0.
///
/// Matching is anchored at the start only, so `K50` selects `K500` as well.
/// The result is sorted.
pub fn expand_regex_str(pattern: &str, universe: Option<&CodeUniverse>) -> Result<Vec<String>> {
    let universe =
        universe.ok_or_else(|| NotationError::configuration(Notation::Regex, pattern))?;
    let regex = compile_anchored(pattern)?;

    let codes: BTreeSet<&str> = universe.iter().filter(|code| regex.is_match(code)).collect();

    debug!(pattern, count = codes.len(), "expanded regex");
    Ok(codes.into_iter().map(str::to_string).collect())
}

fn compile_anchored(pattern: &str) -> Result<Regex> {
    Regex::new(&format!("^(?:{})", pattern)).map_err(|e| NotationError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}
