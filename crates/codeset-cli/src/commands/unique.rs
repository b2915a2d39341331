//! Unique command implementation
//!
//! Lists the distinct codes found in columns of a CSV table. The output can
//! be used directly as a `--universe` file.

use anyhow::Result;
use codeset_rows::{expand_columns, unique_codes};
use std::path::Path;
use std::process::ExitCode;

use crate::input::load_table;

/// Run the unique command
///
/// # Arguments
/// * `input` - CSV file with a header row
/// * `cols` - Columns to read (may use notation); all columns when empty
/// * `sep` - Separator for cells holding several codes
/// * `strip` - Trim whitespace around each code
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(input: &str, cols: &[String], sep: Option<&str>, strip: bool) -> Result<ExitCode> {
    let table = load_table(Path::new(input))?;
    let columns = if cols.is_empty() {
        None
    } else {
        Some(expand_columns(&table, cols)?)
    };

    let universe = unique_codes(&table, columns.as_deref(), sep, strip)?;
    for code in universe.iter() {
        println!("{}", code);
    }

    Ok(ExitCode::SUCCESS)
}
