//! codeset row selection
//!
//! Marks the rows of a table whose code columns contain any of a set of
//! target codes. Codes and column names may use the notation understood by
//! [`codeset_notation`].
//!
//! # Example
//!
//! ```
//! use codeset_rows::{select_rows, Frame, RowQuery};
//!
//! let table = Frame::new()
//!     .with_text_column("icd1", ["K50", "L10", "K521"])
//!     .unwrap()
//!     .with_text_column("icd2", ["", "K51", ""])
//!     .unwrap();
//!
//! let query = RowQuery::new(["K51*"], ["icd*"]).expand(true);
//! let mask = select_rows(&table, &query).unwrap();
//! assert_eq!(mask.matching_rows(), vec![1]);
//! ```

pub mod columns;
pub mod error;
pub mod mask;
pub mod select;
pub mod table;
pub mod unique;

pub use columns::expand_columns;
pub use error::{Result, RowsError};
pub use mask::RowMask;
pub use select::{select_rows, RowQuery};
pub use table::{CodeTable, Frame};
pub use unique::unique_codes;
