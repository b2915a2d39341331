//! The expansion pipeline.
//!
//! Stages always run in the order hyphen, star, colon, each consuming the
//! previous stage's output:
//!
//! - hyphen first, since its arithmetic expects a single numeric group and
//!   carries any `*` through verbatim (`C00*-C26*` becomes `C00*` .. `C26*`);
//! - star next, narrowing wildcards to concrete universe members;
//! - colon last, since its endpoints must already be concrete codes.
//!
//! Regex mode replaces the whole chain.

use tracing::{debug, debug_span};

use crate::colon::expand_colon_str;
use crate::error::{NotationError, Result};
use crate::hyphen::expand_hyphen_str;
use crate::input::{sorted_unique, CodeInput, CodeSet};
use crate::normalize::{drop_dots, drop_zeros, ZeroSide};
use crate::options::ExpandOptions;
use crate::pattern::expand_regex_str;
use crate::star::expand_star_str;
use crate::universe::CodeUniverse;

/// Expands every expression of `input` through the pipeline.
///
/// Sequence results are always deduplicated and sorted, regardless of
/// [`ExpandOptions::sort_unique`]. Mappings are expanded per key.
///
/// ```
/// use codeset_notation::{expand_code, CodeInput, CodeUniverse, ExpandOptions};
///
/// let universe = CodeUniverse::new(["K50", "K51", "K52", "K53", "L10"]);
/// let input = CodeInput::from(["K50:K51", "L1*"]);
/// let codes = expand_code(&input, Some(&universe), &ExpandOptions::default()).unwrap();
/// assert_eq!(codes.codes().unwrap(), ["K50", "K51", "L10"]);
/// ```
pub fn expand_code(
    input: &CodeInput,
    universe: Option<&CodeUniverse>,
    options: &ExpandOptions,
) -> Result<CodeSet> {
    input.expand_each(|expr| expand_code_str(expr, universe, options), sorted_unique)
}

/// Expands a single expression through the pipeline.
pub fn expand_code_str(
    expr: &str,
    universe: Option<&CodeUniverse>,
    options: &ExpandOptions,
) -> Result<Vec<String>> {
    check_notation_mix(expr, options)?;

    let _span = debug_span!("expand_code", expr).entered();

    if options.regex {
        return expand_regex_str(expr, universe);
    }

    let mut code = expr.to_string();
    if options.drop_dot {
        code = drop_dots(&code);
    }
    if options.drop_leading_zero {
        code = drop_zeros(&code, ZeroSide::Leading);
    }

    let mut codes = vec![code];
    if options.hyphen {
        codes = flat_expand(&codes, expand_hyphen_str)?;
        debug!(stage = "hyphen", count = codes.len());
    }
    if options.star {
        codes = sorted_unique(flat_expand(&codes, |c| expand_star_str(c, universe))?);
        debug!(stage = "star", count = codes.len());
    }
    if options.colon {
        codes = flat_expand(&codes, |c| expand_colon_str(c, universe))?;
        debug!(stage = "colon", count = codes.len());
    }

    if options.sort_unique {
        codes = sorted_unique(codes);
    }
    Ok(codes)
}

/// Rejects colon notation combined with hyphen or star notation.
///
/// A colon range slices between concrete codes; with a wildcard or numeric
/// range on either side there is no single endpoint to slice from.
fn check_notation_mix(expr: &str, options: &ExpandOptions) -> Result<()> {
    if !options.regex && expr.contains(':') && (expr.contains('-') || expr.contains('*')) {
        return Err(NotationError::NotationConflict {
            expr: expr.to_string(),
        });
    }
    Ok(())
}

fn flat_expand<F>(codes: &[String], stage: F) -> Result<Vec<String>>
where
    F: Fn(&str) -> Result<Vec<String>>,
{
    let mut expanded = Vec::with_capacity(codes.len());
    for code in codes {
        expanded.extend(stage(code)?);
    }
    Ok(expanded)
}
