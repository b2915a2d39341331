//! Rows command implementation
//!
//! Reports which rows of a CSV table contain any of the given codes.

use anyhow::Result;
use codeset_rows::{expand_columns, select_rows, CodeTable, Frame, RowQuery, RowsError};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use tracing::info;

use super::expand::{load_settings, PipelineFlags};
use super::json_output::{print_json, JsonError, RowsOutput, RowsResult};
use crate::input::{load_table, InputError};

/// Codes, columns, and matching behavior for one `rows` invocation.
#[derive(Debug, Clone, Default)]
pub struct RowsArgs<'a> {
    /// CSV file with a header row
    pub input: &'a str,
    /// Codes or code expressions to look for
    pub codes: &'a [String],
    /// Columns to search (may use notation)
    pub cols: &'a [String],
    /// Separator for cells holding several codes
    pub sep: Option<&'a str>,
    /// Expand code notation before matching
    pub expand: bool,
    /// Code universe file for expansion
    pub universe: Option<&'a str>,
    /// JSON file with pipeline options
    pub options: Option<&'a str>,
}

fn build_query(args: &RowsArgs<'_>, flags: &PipelineFlags) -> Result<RowQuery, InputError> {
    let (universe, options) = load_settings(args.universe, args.options, flags)?;
    let mut query = RowQuery::new(args.codes.iter().cloned(), args.cols.iter().cloned())
        .expand(args.expand)
        .options(options);
    if let Some(sep) = args.sep {
        query = query.separator(sep);
    }
    if let Some(universe) = universe {
        query = query.universe(universe);
    }
    Ok(query)
}

fn select(table: &Frame, query: &RowQuery) -> Result<RowsResult, RowsError> {
    let columns = expand_columns(table, &query.columns)?;
    let mask = select_rows(table, query)?;
    info!(rows = mask.count(), total = mask.len(), "row selection finished");
    Ok(RowsResult {
        columns,
        total: mask.len(),
        count: mask.count(),
        rows: mask.matching_rows(),
    })
}

/// Run the rows command
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(args: &RowsArgs<'_>, flags: &PipelineFlags, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(args, flags)
    } else {
        run_human(args, flags)
    }
}

fn run_human(args: &RowsArgs<'_>, flags: &PipelineFlags) -> Result<ExitCode> {
    let table = load_table(Path::new(args.input))?;
    let query = build_query(args, flags)?;
    let result = select(&table, &query)?;

    println!(
        "{} {} of {} rows match in {}",
        "ok".green().bold(),
        result.count,
        table.row_count(),
        result.columns.join(", ")
    );
    for row in &result.rows {
        println!("{}", row);
    }

    Ok(ExitCode::SUCCESS)
}

fn run_json(args: &RowsArgs<'_>, flags: &PipelineFlags) -> Result<ExitCode> {
    let loaded = load_table(Path::new(args.input))
        .and_then(|table| Ok((table, build_query(args, flags)?)));
    let (table, query) = match loaded {
        Ok(loaded) => loaded,
        Err(e) => {
            print_json(&RowsOutput::failure(vec![JsonError::from(&e)]))?;
            return Ok(ExitCode::from(1));
        }
    };

    match select(&table, &query) {
        Ok(result) => {
            print_json(&RowsOutput::success(result))?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            let error = JsonError::new(e.code(), e.to_string()).with_file(args.input);
            print_json(&RowsOutput::failure(vec![error]))?;
            Ok(ExitCode::from(1))
        }
    }
}
