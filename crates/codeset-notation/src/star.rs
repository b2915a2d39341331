//! Star wildcards: `K50*`, `*5`, `K*5`.

use std::collections::BTreeSet;
use tracing::debug;

use crate::error::{Notation, NotationError, Result};
use crate::input::{sorted_unique, CodeInput, CodeSet};
use crate::normalize::split_marker;
use crate::universe::CodeUniverse;

/// Expands star wildcards in every expression of `input`.
///
/// Sequence results are concatenated, deduplicated, and sorted.
pub fn expand_star(input: &CodeInput, universe: Option<&CodeUniverse>) -> Result<CodeSet> {
    input.expand_each(|expr| expand_star_str(expr, universe), sorted_unique)
}

/// Expands a single star pattern against the universe.
///
/// The text before `*` must be a prefix and the text after it a suffix of
/// every matching code. An expression without `*` is returned unchanged and
/// does not need a universe.
///
/// ```
/// use codeset_notation::{expand_star_str, CodeUniverse};
///
/// let universe = CodeUniverse::new(["K500", "K501", "K509", "L100"]);
/// let codes = expand_star_str("K50*", Some(&universe)).unwrap();
/// assert_eq!(codes, ["K500", "K501", "K509"]);
/// ```
pub fn expand_star_str(expr: &str, universe: Option<&CodeUniverse>) -> Result<Vec<String>> {
    let Some((prefix, suffix)) = split_marker(expr, '*')? else {
        return Ok(vec![expr.to_string()]);
    };
    let universe = universe.ok_or_else(|| NotationError::configuration(Notation::Star, expr))?;

    let codes: BTreeSet<&str> = universe
        .iter()
        .filter(|code| code.starts_with(prefix) && code.ends_with(suffix))
        .collect();

    debug!(expr, count = codes.len(), "expanded star pattern");
    Ok(codes.into_iter().map(str::to_string).collect())
}
