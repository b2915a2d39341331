//! Building a code universe from the values present in a table.

use codeset_notation::CodeUniverse;
use std::collections::BTreeSet;

use crate::error::Result;
use crate::table::CodeTable;

/// Collects the distinct codes found in `columns` (all columns if `None`).
///
/// With a separator, each cell is split into several codes. With `strip`,
/// surrounding whitespace is removed from every code. Empty codes are
/// skipped. The result is sorted.
pub fn unique_codes<T>(
    table: &T,
    columns: Option<&[String]>,
    separator: Option<&str>,
    strip: bool,
) -> Result<CodeUniverse>
where
    T: CodeTable + ?Sized,
{
    let names: Vec<String> = match columns {
        Some(columns) => columns.to_vec(),
        None => table.column_names().into_iter().map(str::to_string).collect(),
    };

    let mut codes = BTreeSet::new();
    for name in &names {
        for cell in table.values(name)?.iter().flatten() {
            let parts: Vec<&str> = match separator {
                Some(sep) => cell.split(sep).collect(),
                None => vec![cell.as_str()],
            };
            for part in parts {
                let part = if strip { part.trim() } else { part };
                if !part.is_empty() {
                    codes.insert(part.to_string());
                }
            }
        }
    }

    Ok(CodeUniverse::new(codes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Frame;

    fn frame() -> Frame {
        Frame::new()
            .with_text_column("diag", ["K50, K51", "L10", ""])
            .unwrap()
            .with_text_column("bdiag", ["K51", "K50,X1", "A00"])
            .unwrap()
    }

    #[test]
    fn test_single_valued() {
        let columns = vec!["bdiag".to_string()];
        let universe = unique_codes(&frame(), Some(columns.as_slice()), None, false).unwrap();
        assert_eq!(universe.as_slice(), ["A00", "K50,X1", "K51"]);
    }

    #[test]
    fn test_separator_and_strip() {
        let universe = unique_codes(&frame(), None, Some(","), true).unwrap();
        assert_eq!(universe.as_slice(), ["A00", "K50", "K51", "L10", "X1"]);
    }

    #[test]
    fn test_separator_without_strip_keeps_spaces() {
        let columns = vec!["diag".to_string()];
        let universe =
            unique_codes(&frame(), Some(columns.as_slice()), Some(","), false).unwrap();
        assert!(universe.contains(" K51"));
    }

    #[test]
    fn test_unknown_column() {
        let columns = vec!["nope".to_string()];
        assert!(unique_codes(&frame(), Some(columns.as_slice()), None, false).is_err());
    }
}
