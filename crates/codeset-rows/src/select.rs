//! Row selection: mark rows whose target columns hold any target code.

use codeset_notation::{
    expand_code, expand_hyphen, has_notation, CodeInput, CodeUniverse, ExpandOptions,
};
use regex::{Regex, RegexBuilder};
use std::borrow::Cow;
use std::collections::HashSet;
use tracing::debug;

use crate::columns::expand_columns;
use crate::error::Result;
use crate::mask::RowMask;
use crate::table::CodeTable;
use crate::unique::unique_codes;

/// Compiled size limit for the combined code pattern.
const PATTERN_SIZE_LIMIT: usize = 64 * (1 << 20);

/// What to look for, and where.
#[derive(Debug, Clone, Default)]
pub struct RowQuery {
    /// Codes or code expressions to look for.
    pub codes: Vec<String>,
    /// Columns to search; may use notation (`icd*`, `icd1:icd5`).
    pub columns: Vec<String>,
    /// Separator for cells holding several codes (e.g. `","`).
    pub separator: Option<String>,
    /// Expand notation in `codes` before matching.
    pub expand: bool,
    /// Universe for star, colon, and regex expansion. When absent, the
    /// distinct values of the target columns are used.
    pub universe: Option<CodeUniverse>,
    /// Options for the expansion pipeline.
    pub options: ExpandOptions,
}

impl RowQuery {
    /// Creates a query for `codes` in `columns`, without expansion.
    pub fn new<C, S, K, T>(codes: C, columns: K) -> Self
    where
        C: IntoIterator<Item = S>,
        S: Into<String>,
        K: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
            columns: columns.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Sets the multi-value separator.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// Sets whether code notation is expanded.
    pub fn expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    /// Sets the code universe used for expansion.
    pub fn universe(mut self, universe: CodeUniverse) -> Self {
        self.universe = Some(universe);
        self
    }

    /// Sets the expansion options.
    pub fn options(mut self, options: ExpandOptions) -> Self {
        self.options = options;
        self
    }
}

/// Returns a mask that is true for every row where any target column holds
/// any target code.
///
/// With `expand`, trailing-star codes (`K50*`, `K50*-K52*`) take a fast path
/// that tests prefixes directly on the table instead of materializing a
/// universe. Other notation is expanded with [`expand_code`].
///
/// # Example
///
/// ```
/// use codeset_rows::{select_rows, Frame, RowQuery};
///
/// let table = Frame::new()
///     .with_text_column("diag", ["K50", "L10", "K52"])
///     .unwrap();
/// let query = RowQuery::new(["K50:K52"], ["diag"]).expand(true);
/// let mask = select_rows(&table, &query).unwrap();
/// assert_eq!(mask.as_slice(), [true, false, true]);
/// ```
pub fn select_rows<T>(table: &T, query: &RowQuery) -> Result<RowMask>
where
    T: CodeTable + ?Sized,
{
    let columns = expand_columns(table, &query.columns)?;
    let separator = query.separator.as_deref();

    let mut codes = query.codes.clone();
    let mut prefix_rows = None;

    if query.expand {
        let (prefixed, rest): (Vec<String>, Vec<String>) = codes
            .into_iter()
            .partition(|code| !query.options.regex && is_prefix_pattern(code));
        codes = rest;

        if !prefixed.is_empty() {
            let prefixed = expand_hyphen(&CodeInput::Sequence(prefixed))?.flatten();
            let prefixes: Vec<&str> = prefixed
                .iter()
                .map(|code| code.trim_end_matches('*'))
                .collect();
            debug!(?prefixes, "matching prefix codes directly");
            let mask = prefix_mask(table, &prefixes, &columns, separator)?;
            if codes.is_empty() {
                return Ok(mask);
            }
            prefix_rows = Some(mask);
        }

        if query.options.regex || codes.iter().any(|code| has_notation(code)) {
            let universe = match &query.universe {
                Some(universe) => Cow::Borrowed(universe),
                None => Cow::Owned(unique_codes(
                    table,
                    Some(columns.as_slice()),
                    separator,
                    true,
                )?),
            };
            codes = expand_code(
                &CodeInput::Sequence(codes),
                Some(&*universe),
                &query.options,
            )?
            .flatten();
            debug!(count = codes.len(), "expanded codes for row selection");
        }
    }

    let mut rows = exact_mask(table, &codes, &columns, separator)?;
    if let Some(prefix_rows) = prefix_rows {
        rows |= prefix_rows;
    }
    Ok(rows)
}

/// Codes that only need a prefix test: `K50*`, or a hyphen range whose
/// endpoints each end in their only `*`. Colon ranges never qualify.
fn is_prefix_pattern(code: &str) -> bool {
    fn trailing_star(side: &str) -> bool {
        let side = side.trim();
        side.len() > 1 && side.ends_with('*') && side.matches('*').count() == 1
    }

    if code.contains(':') {
        return false;
    }
    match code.split_once('-') {
        Some((lower, upper)) => {
            !upper.contains('-') && trailing_star(lower) && trailing_star(upper)
        }
        None => trailing_star(code),
    }
}

fn exact_mask<T>(
    table: &T,
    codes: &[String],
    columns: &[String],
    separator: Option<&str>,
) -> Result<RowMask>
where
    T: CodeTable + ?Sized,
{
    let mut rows = RowMask::new(table.row_count());
    if codes.is_empty() {
        return Ok(rows);
    }

    match separator {
        Some(sep) => {
            let pattern = delimited_pattern(codes.iter().map(String::as_str), sep, true)?;
            for column in columns {
                rows |= table.contains(column, &pattern)?;
            }
        }
        None => {
            let codes: HashSet<String> = codes.iter().cloned().collect();
            for column in columns {
                rows |= table.is_in(column, &codes)?;
            }
        }
    }
    Ok(rows)
}

fn prefix_mask<T>(
    table: &T,
    prefixes: &[&str],
    columns: &[String],
    separator: Option<&str>,
) -> Result<RowMask>
where
    T: CodeTable + ?Sized,
{
    let mut rows = RowMask::new(table.row_count());
    match separator {
        Some(sep) => {
            let pattern = delimited_pattern(prefixes.iter().copied(), sep, false)?;
            for column in columns {
                rows |= table.contains(column, &pattern)?;
            }
        }
        None => {
            for column in columns {
                for prefix in prefixes {
                    rows |= table.starts_with(column, prefix)?;
                }
            }
        }
    }
    Ok(rows)
}

/// Builds a pattern matching any code as one item of a delimited cell.
///
/// With `whole`, the code must fill the item; otherwise it only has to start it.
fn delimited_pattern<'a, I>(codes: I, separator: &str, whole: bool) -> Result<Regex>
where
    I: IntoIterator<Item = &'a str>,
{
    let alternatives = codes
        .into_iter()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|");
    let sep = regex::escape(separator);
    let pattern = if whole {
        format!(r"(?:^|{sep})\s*(?:{alternatives})\s*(?:{sep}|$)")
    } else {
        format!(r"(?:^|{sep})\s*(?:{alternatives})")
    };
    Ok(RegexBuilder::new(&pattern)
        .size_limit(PATTERN_SIZE_LIMIT)
        .build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Frame;

    fn single_valued() -> Frame {
        Frame::new()
            .with_text_column("diag", ["K50", "L10", "K52", "K501", ""])
            .unwrap()
            .with_text_column("bdiag", ["", "K51", "", "", "K53"])
            .unwrap()
    }

    fn multi_valued() -> Frame {
        Frame::new()
            .with_text_column("diag", ["K50, L10", "L10,K5", "K501", "X,K51"])
            .unwrap()
    }

    #[test]
    fn test_plain_codes() {
        let query = RowQuery::new(["K50", "K53"], ["diag", "bdiag"]);
        let mask = select_rows(&single_valued(), &query).unwrap();
        assert_eq!(mask.as_slice(), [true, false, false, false, true]);
    }

    #[test]
    fn test_colon_expansion_uses_table_values() {
        let query = RowQuery::new(["K50:K52"], ["diag"]).expand(true);
        let mask = select_rows(&single_valued(), &query).unwrap();
        assert_eq!(mask.as_slice(), [true, false, true, true, false]);
    }

    #[test]
    fn test_prefix_fast_path() {
        let query = RowQuery::new(["K5*"], ["diag"]).expand(true);
        let mask = select_rows(&single_valued(), &query).unwrap();
        assert_eq!(mask.as_slice(), [true, false, true, true, false]);
    }

    #[test]
    fn test_prefix_fast_path_with_hyphen() {
        let query = RowQuery::new(["K51*-K53*"], ["diag", "bdiag"]).expand(true);
        let mask = select_rows(&single_valued(), &query).unwrap();
        assert_eq!(mask.as_slice(), [false, true, true, false, true]);
    }

    #[test]
    fn test_prefix_range_ignores_supplied_universe() {
        let table = Frame::new()
            .with_text_column("diag", ["K521", "K531", "K510", "K54"])
            .unwrap();
        let query = RowQuery::new(["K52*-K53*"], ["diag"])
            .expand(true)
            .universe(CodeUniverse::new(["K51"]));
        let mask = select_rows(&table, &query).unwrap();
        assert_eq!(mask.as_slice(), [true, true, false, false]);
    }

    #[test]
    fn test_hyphen_with_star_on_upper_only_matches_exactly() {
        let table = Frame::new()
            .with_text_column("diag", ["K500", "K50", "K51"])
            .unwrap();
        let query = RowQuery::new(["K50-K51*"], ["diag"]).expand(true);
        let mask = select_rows(&table, &query).unwrap();
        assert_eq!(mask.as_slice(), [false, true, true]);
    }

    #[test]
    fn test_prefix_and_exact_combined() {
        let query = RowQuery::new(["K501*", "L10"], ["diag"]).expand(true);
        let mask = select_rows(&single_valued(), &query).unwrap();
        assert_eq!(mask.as_slice(), [false, true, false, true, false]);
    }

    #[test]
    fn test_without_expand_notation_is_literal() {
        let query = RowQuery::new(["K5*"], ["diag"]);
        let mask = select_rows(&single_valued(), &query).unwrap();
        assert!(!mask.any());
    }

    #[test]
    fn test_multi_valued_exact() {
        let query = RowQuery::new(["K50", "K51"], ["diag"]).separator(",");
        let mask = select_rows(&multi_valued(), &query).unwrap();
        assert_eq!(mask.as_slice(), [true, false, false, true]);
    }

    #[test]
    fn test_multi_valued_prefix() {
        let query = RowQuery::new(["K5*"], ["diag"]).separator(",").expand(true);
        let mask = select_rows(&multi_valued(), &query).unwrap();
        assert_eq!(mask.as_slice(), [true, true, true, true]);

        let query = RowQuery::new(["L1*"], ["diag"]).separator(",").expand(true);
        let mask = select_rows(&multi_valued(), &query).unwrap();
        assert_eq!(mask.as_slice(), [true, true, false, false]);
    }

    #[test]
    fn test_supplied_universe() {
        let universe = CodeUniverse::new(["K50", "K51", "K52"]);
        let query = RowQuery::new(["K50:K51"], ["diag", "bdiag"])
            .expand(true)
            .universe(universe);
        let mask = select_rows(&single_valued(), &query).unwrap();
        assert_eq!(mask.as_slice(), [true, true, false, false, false]);
    }

    #[test]
    fn test_column_notation() {
        let query = RowQuery::new(["K53"], ["*diag"]);
        let mask = select_rows(&single_valued(), &query).unwrap();
        assert_eq!(mask.matching_rows(), vec![4]);
    }

    #[test]
    fn test_empty_codes() {
        let query = RowQuery::new(Vec::<String>::new(), ["diag"]).expand(true);
        let mask = select_rows(&single_valued(), &query).unwrap();
        assert_eq!(mask.len(), 5);
        assert!(!mask.any());
    }

    #[test]
    fn test_notation_error_propagates() {
        let query = RowQuery::new(["K50:K99"], ["diag"]).expand(true);
        let err = select_rows(&single_valued(), &query).unwrap_err();
        assert_eq!(err.code(), "N005");
    }

    #[test]
    fn test_is_prefix_pattern() {
        assert!(is_prefix_pattern("K50*"));
        assert!(is_prefix_pattern("K50*-K52*"));
        assert!(!is_prefix_pattern("*50"));
        assert!(!is_prefix_pattern("K*5*"));
        assert!(!is_prefix_pattern("K50"));
        assert!(is_prefix_pattern("K50* - K52*"));
        assert!(!is_prefix_pattern("K50-K51*"));
        assert!(!is_prefix_pattern("K50*-K51"));
        assert!(!is_prefix_pattern("K50*-K51*-K52*"));
        assert!(!is_prefix_pattern("K50*:K52*"));
        assert!(!is_prefix_pattern("*"));
    }
}
