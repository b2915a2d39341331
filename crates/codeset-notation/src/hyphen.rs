//! Hyphen ranges: `K50-K53`, `n02.2-n02.7`, `C00*-C26*`.
//!
//! Expansion is pure integer arithmetic over the first numeric token of each
//! endpoint; no code universe is involved. The decimal point is removed
//! before counting (`2.5` counts as `25`) and put back when rendering, and
//! the rendered number is zero-padded to the width of the start token so
//! that leading zeros survive (`b001-b009`).
//!
//! When the endpoints have a different number of decimals, the step size is
//! only defined if the start has fewer decimals and both share an integer
//! part (`K1.1-K1.15` expands the decimal suffix). Everything else is
//! rejected as ambiguous: in `C26.0-C27.11` it is unclear whether `C27.1`
//! or `C27.10` is meant.

use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;
use tracing::debug;

use crate::error::{NotationError, Result};
use crate::input::{CodeInput, CodeSet};
use crate::normalize::split_marker;

/// First run of digits, optionally with one decimal point and trailing digits.
const NUMBER_PATTERN: &str = r"[0-9]*\.[0-9]+|[0-9]+";

static NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();

fn number_regex() -> &'static Regex {
    NUMBER_REGEX.get_or_init(|| Regex::new(NUMBER_PATTERN).expect("invalid regex pattern"))
}

/// The numeric token located inside one endpoint.
#[derive(Debug, Clone)]
struct NumericToken<'a> {
    text: &'a str,
    span: Range<usize>,
    /// Digits before the decimal point (may be empty, as in `.5`).
    integer: &'a str,
    /// Digits after the decimal point, if there is one.
    fraction: Option<&'a str>,
}

impl<'a> NumericToken<'a> {
    fn find(side: &'a str) -> Option<Self> {
        let m = number_regex().find(side)?;
        let text = m.as_str();
        let (integer, fraction) = match text.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (text, None),
        };
        Some(Self {
            text,
            span: m.range(),
            integer,
            fraction,
        })
    }

    fn decimals(&self) -> usize {
        self.fraction.map_or(0, str::len)
    }

    /// The token with its decimal point removed, as an integer.
    fn scaled(&self) -> Option<u128> {
        let digits: String = self.text.chars().filter(|c| *c != '.').collect();
        digits.parse().ok()
    }

    /// Byte span of the fractional digits within the endpoint.
    fn fraction_span(&self) -> Option<Range<usize>> {
        let fraction = self.fraction?;
        Some(self.span.end - fraction.len()..self.span.end)
    }
}

/// Expands hyphen ranges in every expression of `input`.
///
/// Sequences are concatenated in order without deduplication; mappings keep
/// their keys.
pub fn expand_hyphen(input: &CodeInput) -> Result<CodeSet> {
    input.expand_each(expand_hyphen_str, |codes| codes)
}

/// Expands a single hyphen range.
///
/// An expression without `-` is returned unchanged.
///
/// ```
/// use codeset_notation::expand_hyphen_str;
///
/// assert_eq!(expand_hyphen_str("K51-K53").unwrap(), ["K51", "K52", "K53"]);
/// assert_eq!(expand_hyphen_str("b01-b03").unwrap(), ["b01", "b02", "b03"]);
/// ```
pub fn expand_hyphen_str(expr: &str) -> Result<Vec<String>> {
    let Some((lower, upper)) = split_marker(expr, '-')? else {
        return Ok(vec![expr.to_string()]);
    };
    let lower = lower.trim();
    let upper = upper.trim();

    let lo = NumericToken::find(lower).ok_or_else(|| missing_number(expr, lower))?;
    let hi = NumericToken::find(upper).ok_or_else(|| missing_number(expr, upper))?;

    let codes = if lo.decimals() == hi.decimals() {
        expand_scaled(expr, lower, &lo, &hi)?
    } else if lo.decimals() < hi.decimals() && lo.fraction.is_some() && lo.integer == hi.integer {
        expand_fraction(expr, lower, &lo, &hi)?
    } else {
        return Err(NotationError::AmbiguousRange {
            expr: expr.to_string(),
        });
    };

    debug!(expr, count = codes.len(), "expanded hyphen range");
    Ok(codes)
}

/// Counts over the whole token with equal decimals on both ends.
fn expand_scaled(
    expr: &str,
    lower: &str,
    lo: &NumericToken<'_>,
    hi: &NumericToken<'_>,
) -> Result<Vec<String>> {
    let start = lo.scaled().ok_or_else(|| missing_number(expr, lo.text))?;
    let end = hi.scaled().ok_or_else(|| missing_number(expr, hi.text))?;
    check_order(expr, lo.text, hi.text, start, end)?;

    let decimals = lo.decimals();
    let width = lo.text.len();
    Ok((start..=end)
        .map(|n| splice(lower, lo.span.clone(), &render(n, decimals, width)))
        .collect())
}

/// Counts over the fractional digits only (`K1.1-K1.15`).
fn expand_fraction(
    expr: &str,
    lower: &str,
    lo: &NumericToken<'_>,
    hi: &NumericToken<'_>,
) -> Result<Vec<String>> {
    let (Some(lo_fraction), Some(hi_fraction), Some(span)) =
        (lo.fraction, hi.fraction, lo.fraction_span())
    else {
        return Err(NotationError::AmbiguousRange {
            expr: expr.to_string(),
        });
    };
    let start: u128 = lo_fraction
        .parse()
        .map_err(|_| missing_number(expr, lo.text))?;
    let end: u128 = hi_fraction
        .parse()
        .map_err(|_| missing_number(expr, hi.text))?;
    check_order(expr, lo.text, hi.text, start, end)?;

    Ok((start..=end)
        .map(|n| splice(lower, span.clone(), &n.to_string()))
        .collect())
}

fn check_order(expr: &str, lo: &str, hi: &str, start: u128, end: u128) -> Result<()> {
    if end < start {
        return Err(NotationError::Range {
            expr: expr.to_string(),
            start: lo.to_string(),
            end: hi.to_string(),
        });
    }
    Ok(())
}

/// Renders a scaled integer as fixed-point text, zero-padded to `width`.
fn render(n: u128, decimals: usize, width: usize) -> String {
    let mut text = n.to_string();
    if decimals > 0 {
        text = format!("{:0>1$}", text, decimals + 1);
        text.insert(text.len() - decimals, '.');
    }
    format!("{:0>width$}", text)
}

/// Replaces `span` of `code` with `replacement`, keeping everything around it.
fn splice(code: &str, span: Range<usize>, replacement: &str) -> String {
    let mut out = String::with_capacity(code.len() + replacement.len());
    out.push_str(&code[..span.start]);
    out.push_str(replacement);
    out.push_str(&code[span.end..]);
    out
}

fn missing_number(expr: &str, side: &str) -> NotationError {
    NotationError::MissingNumber {
        expr: expr.to_string(),
        side: side.to_string(),
    }
}
