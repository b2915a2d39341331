//! Error types for row selection.

use codeset_notation::NotationError;
use thiserror::Error;

/// Result alias for row selection.
pub type Result<T, E = RowsError> = std::result::Result<T, E>;

/// Errors raised while selecting rows.
#[derive(Debug, Error)]
pub enum RowsError {
    /// A requested column does not exist in the table.
    #[error("unknown column '{0}'")]
    UnknownColumn(String),

    /// A column's length does not match the table's row count.
    #[error("column '{column}' has {found} rows, expected {expected}")]
    ColumnLength {
        /// The offending column.
        column: String,
        /// The table's row count.
        expected: usize,
        /// The column's length.
        found: usize,
    },

    /// Expanding the code expressions failed.
    #[error(transparent)]
    Notation(#[from] NotationError),

    /// The combined code pattern failed to compile.
    #[error("invalid code pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl RowsError {
    /// Returns the stable error code string (e.g., "R001").
    ///
    /// Notation errors pass their own code through.
    pub fn code(&self) -> &'static str {
        match self {
            RowsError::UnknownColumn(_) => "R001",
            RowsError::ColumnLength { .. } => "R002",
            RowsError::Notation(e) => e.code(),
            RowsError::Pattern(_) => "R003",
        }
    }
}
