//! The table capability used by row selection, and an in-memory table.

use regex::Regex;
use std::collections::HashSet;

use crate::error::{Result, RowsError};
use crate::mask::RowMask;

/// A table of optional text cells addressed by column name.
///
/// Implementors provide column access; the membership, substring, and prefix
/// tests used by row selection are derived from it.
pub trait CodeTable {
    /// Number of rows.
    fn row_count(&self) -> usize;

    /// Column names in table order.
    fn column_names(&self) -> Vec<&str>;

    /// Cells of a column, or `None` if the column does not exist.
    fn column(&self, name: &str) -> Option<&[Option<String>]>;

    /// Cells of a column, failing for unknown columns.
    fn values(&self, name: &str) -> Result<&[Option<String>]> {
        self.column(name)
            .ok_or_else(|| RowsError::UnknownColumn(name.to_string()))
    }

    /// Rows whose cell equals one of `codes`.
    fn is_in(&self, name: &str, codes: &HashSet<String>) -> Result<RowMask> {
        Ok(self
            .values(name)?
            .iter()
            .map(|cell| cell.as_deref().is_some_and(|v| codes.contains(v)))
            .collect())
    }

    /// Rows whose cell contains a match for `pattern`.
    fn contains(&self, name: &str, pattern: &Regex) -> Result<RowMask> {
        Ok(self
            .values(name)?
            .iter()
            .map(|cell| cell.as_deref().is_some_and(|v| pattern.is_match(v)))
            .collect())
    }

    /// Rows whose cell starts with `prefix`.
    fn starts_with(&self, name: &str, prefix: &str) -> Result<RowMask> {
        Ok(self
            .values(name)?
            .iter()
            .map(|cell| cell.as_deref().is_some_and(|v| v.starts_with(prefix)))
            .collect())
    }
}

/// An in-memory, column-oriented table.
///
/// Missing cells are `None`. All columns have the same length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    columns: Vec<(String, Vec<Option<String>>)>,
}

impl Frame {
    /// Creates an empty frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a column of optional cells.
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        cells: Vec<Option<String>>,
    ) -> Result<Self> {
        self.push_column(name.into(), cells)?;
        Ok(self)
    }

    /// Adds a column of text cells; empty strings become missing cells.
    pub fn with_text_column<I, S>(self, name: impl Into<String>, cells: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cells = cells
            .into_iter()
            .map(Into::into)
            .map(|cell: String| (!cell.is_empty()).then_some(cell))
            .collect();
        self.with_column(name, cells)
    }

    /// Builds a frame from a header row and records, as read from CSV.
    ///
    /// Empty fields become missing cells; short records are padded.
    pub fn from_records(headers: Vec<String>, records: Vec<Vec<String>>) -> Result<Self> {
        let mut columns: Vec<Vec<Option<String>>> =
            vec![Vec::with_capacity(records.len()); headers.len()];
        for record in records {
            let mut fields = record.into_iter();
            for column in columns.iter_mut() {
                let cell = fields.next().filter(|field| !field.is_empty());
                column.push(cell);
            }
        }

        let mut frame = Self::new();
        for (name, cells) in headers.into_iter().zip(columns) {
            frame.push_column(name, cells)?;
        }
        Ok(frame)
    }

    fn push_column(&mut self, name: String, cells: Vec<Option<String>>) -> Result<()> {
        if let Some((_, first)) = self.columns.first() {
            if first.len() != cells.len() {
                return Err(RowsError::ColumnLength {
                    column: name,
                    expected: first.len(),
                    found: cells.len(),
                });
            }
        }
        match self.columns.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, existing)) => *existing = cells,
            None => self.columns.push((name, cells)),
        }
        Ok(())
    }
}

impl CodeTable for Frame {
    fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |(_, cells)| cells.len())
    }

    fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(name, _)| name.as_str()).collect()
    }

    fn column(&self, name: &str) -> Option<&[Option<String>]> {
        self.columns
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, cells)| cells.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> Frame {
        Frame::new()
            .with_text_column("diag", ["K50", "", "K521"])
            .unwrap()
            .with_text_column("bdiag", ["L10", "K50", "X"])
            .unwrap()
    }

    #[test]
    fn test_shape() {
        let frame = frame();
        assert_eq!(frame.row_count(), 3);
        assert_eq!(frame.column_names(), vec!["diag", "bdiag"]);
        assert_eq!(frame.column("diag").unwrap()[1], None);
    }

    #[test]
    fn test_column_length_mismatch() {
        let err = Frame::new()
            .with_text_column("a", ["1", "2"])
            .unwrap()
            .with_text_column("b", ["1"])
            .unwrap_err();
        assert_eq!(err.code(), "R002");
    }

    #[test]
    fn test_is_in() {
        let codes: HashSet<String> = ["K50".to_string()].into_iter().collect();
        let mask = frame().is_in("diag", &codes).unwrap();
        assert_eq!(mask.as_slice(), [true, false, false]);
    }

    #[test]
    fn test_starts_with_skips_missing() {
        let mask = frame().starts_with("diag", "K5").unwrap();
        assert_eq!(mask.as_slice(), [true, false, true]);
    }

    #[test]
    fn test_contains() {
        let pattern = Regex::new("^[LX]").unwrap();
        let mask = frame().contains("bdiag", &pattern).unwrap();
        assert_eq!(mask.as_slice(), [true, false, true]);
    }

    #[test]
    fn test_unknown_column() {
        let err = frame().starts_with("nope", "K").unwrap_err();
        assert!(matches!(err, RowsError::UnknownColumn(name) if name == "nope"));
    }

    #[test]
    fn test_from_records_pads_short_rows() {
        let frame = Frame::from_records(
            vec!["pid".to_string(), "diag".to_string()],
            vec![
                vec!["1".to_string(), "K50".to_string()],
                vec!["2".to_string()],
            ],
        )
        .unwrap();
        assert_eq!(frame.row_count(), 2);
        assert_eq!(frame.column("diag").unwrap()[1], None);
    }
}
