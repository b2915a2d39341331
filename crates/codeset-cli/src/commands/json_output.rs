//! JSON output types for machine-readable CLI output.
//!
//! Every command that accepts `--json` prints exactly one of these objects
//! to stdout, whether it succeeds or fails.

use anyhow::{Context, Result};
use codeset_notation::CodeSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::input::InputError;

/// Prints `output` to stdout as pretty JSON.
pub fn print_json<T: Serialize>(output: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(output).context("Failed to serialize JSON output")?;
    println!("{}", json);
    Ok(())
}

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
/// Format: CLI_XXX for CLI-level errors; notation (Nxxx) and row selection
/// (Rxxx) codes pass through unchanged.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// JSON parse error
    pub const JSON_PARSE: &str = "CLI_003";
    /// CSV read error
    pub const CSV_READ: &str = "CLI_004";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "N005")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl From<&InputError> for JsonError {
    fn from(error: &InputError) -> Self {
        JsonError::new(error.code(), error.to_string())
            .with_file(error.path().display().to_string())
    }
}

/// Expanded codes: a flat list, or named groups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ExpandResult {
    /// Codes from positional expressions.
    Codes(Vec<String>),
    /// Codes per group from a groups file.
    Groups(BTreeMap<String, Vec<String>>),
}

impl From<CodeSet> for ExpandResult {
    fn from(set: CodeSet) -> Self {
        match set {
            CodeSet::Codes(codes) => ExpandResult::Codes(codes),
            CodeSet::Groups(groups) => ExpandResult::Groups(groups),
        }
    }
}

/// JSON output for the `expand` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpandOutput {
    /// Whether expansion succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Expanded codes (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ExpandResult>,
}

impl ExpandOutput {
    /// Creates a successful expand output.
    pub fn success(result: ExpandResult) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed expand output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// Matching rows for the `rows` command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RowsResult {
    /// Columns searched, after column notation was resolved
    pub columns: Vec<String>,
    /// Total rows in the table
    pub total: usize,
    /// Number of matching rows
    pub count: usize,
    /// Zero-based indices of matching rows
    pub rows: Vec<usize>,
}

/// JSON output for the `rows` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowsOutput {
    /// Whether selection succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Selection result (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<RowsResult>,
}

impl RowsOutput {
    /// Creates a successful rows output.
    pub fn success(result: RowsResult) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed rows output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}
