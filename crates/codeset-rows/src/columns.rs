//! Column selection with notation: `icd1-icd3`, `diag*`, `dia1:dia5`.

use codeset_notation::{expand_code, has_notation, CodeInput, CodeUniverse, ExpandOptions};
use tracing::debug;

use crate::error::Result;
use crate::table::CodeTable;

/// Resolves column names that use star, hyphen, or colon notation.
///
/// Names that exist verbatim in the table are kept as they are, so a column
/// literally called `diag-1` is never treated as a range. Everything else is
/// expanded against the table's own column list, where colon ranges follow
/// table order.
pub fn expand_columns<T>(table: &T, columns: &[String]) -> Result<Vec<String>>
where
    T: CodeTable + ?Sized,
{
    let names = table.column_names();
    let (literal, patterns): (Vec<&String>, Vec<&String>) = columns
        .iter()
        .partition(|col| names.contains(&col.as_str()) || !has_notation(col));

    let mut resolved: Vec<String> = literal.into_iter().cloned().collect();
    if patterns.is_empty() {
        return Ok(resolved);
    }

    let universe = CodeUniverse::new(names);
    let input = CodeInput::Sequence(patterns.into_iter().cloned().collect());
    let expanded = expand_code(&input, Some(&universe), &ExpandOptions::default())?.flatten();
    debug!(patterns = ?input, count = expanded.len(), "expanded column names");

    for name in expanded {
        if !resolved.contains(&name) {
            resolved.push(name);
        }
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Frame;

    fn frame() -> Frame {
        let mut frame = Frame::new();
        for name in ["pid", "icd1", "icd2", "icd3", "diag-1"] {
            frame = frame.with_text_column(name, ["x"]).unwrap();
        }
        frame
    }

    fn names(cols: &[&str]) -> Vec<String> {
        cols.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_plain_columns_untouched() {
        let cols = expand_columns(&frame(), &names(&["pid", "icd2"])).unwrap();
        assert_eq!(cols, names(&["pid", "icd2"]));
    }

    #[test]
    fn test_literal_column_with_hyphen() {
        let cols = expand_columns(&frame(), &names(&["diag-1"])).unwrap();
        assert_eq!(cols, names(&["diag-1"]));
    }

    #[test]
    fn test_star_and_colon_columns() {
        let cols = expand_columns(&frame(), &names(&["icd*"])).unwrap();
        assert_eq!(cols, names(&["icd1", "icd2", "icd3"]));

        let cols = expand_columns(&frame(), &names(&["icd2", "icd1:icd3"])).unwrap();
        assert_eq!(cols, names(&["icd2", "icd1", "icd3"]));
    }

    #[test]
    fn test_hyphen_columns() {
        let cols = expand_columns(&frame(), &names(&["icd1-icd2"])).unwrap();
        assert_eq!(cols, names(&["icd1", "icd2"]));
    }

    #[test]
    fn test_unknown_colon_endpoint() {
        let err = expand_columns(&frame(), &names(&["icd1:icd9"])).unwrap_err();
        assert_eq!(err.code(), "N005");
    }
}
