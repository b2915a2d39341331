//! Loading code universes, option files, code groups, and CSV tables.
//!
//! Universe files dispatch by extension: `.json` holds an array of codes,
//! anything else is read as one code per line.

use codeset_notation::{CodeInput, CodeUniverse, ExpandOptions, NotationError};
use codeset_rows::{Frame, RowsError};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::commands::json_output::error_codes;

/// Recognized JSON extensions.
pub const JSON_EXTENSIONS: &[&str] = &["json"];

/// Errors that can occur while loading command inputs.
#[derive(Debug, Error)]
pub enum InputError {
    /// File could not be read.
    #[error("failed to read file '{}': {}", path.display(), source)]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing failed.
    #[error("JSON parse error in '{}': {}", path.display(), message)]
    JsonParse { path: PathBuf, message: String },

    /// The groups file is not a mapping of group names to expressions.
    #[error("invalid code groups in '{}': {}", path.display(), source)]
    Groups {
        path: PathBuf,
        #[source]
        source: NotationError,
    },

    /// CSV reading failed.
    #[error("CSV error in '{}': {}", path.display(), source)]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The CSV rows could not be assembled into a table.
    #[error("invalid table in '{}': {}", path.display(), source)]
    Table {
        path: PathBuf,
        #[source]
        source: RowsError,
    },
}

impl InputError {
    /// Returns the file the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            InputError::FileRead { path, .. }
            | InputError::JsonParse { path, .. }
            | InputError::Groups { path, .. }
            | InputError::Csv { path, .. }
            | InputError::Table { path, .. } => path,
        }
    }

    /// Returns the stable error code for JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            InputError::FileRead { .. } => error_codes::FILE_READ,
            InputError::JsonParse { .. } => error_codes::JSON_PARSE,
            InputError::Groups { source, .. } => source.code(),
            InputError::Csv { .. } => error_codes::CSV_READ,
            InputError::Table { source, .. } => source.code(),
        }
    }
}

/// Returns true if the path has a JSON extension.
pub fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| JSON_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn read(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| InputError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

fn json_error(path: &Path, e: impl std::fmt::Display) -> InputError {
    InputError::JsonParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

/// Loads a code universe, keeping the file's order.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use codeset_cli::input::load_universe;
///
/// let universe = load_universe(Path::new("icd10.txt")).unwrap();
/// println!("{} codes", universe.len());
/// ```
pub fn load_universe(path: &Path) -> Result<CodeUniverse, InputError> {
    let content = read(path)?;
    let universe = if is_json(path) {
        let codes: Vec<String> =
            serde_json::from_str(&content).map_err(|e| json_error(path, e))?;
        CodeUniverse::new(codes)
    } else {
        CodeUniverse::new(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty()),
        )
    };
    debug!(path = %path.display(), codes = universe.len(), "loaded code universe");
    Ok(universe)
}

/// Loads expansion options from a JSON object; missing fields take defaults.
pub fn load_options(path: &Path) -> Result<ExpandOptions, InputError> {
    let content = read(path)?;
    ExpandOptions::from_json(&content).map_err(|e| json_error(path, e))
}

/// Loads named groups of expressions from a JSON object.
pub fn load_groups(path: &Path) -> Result<CodeInput, InputError> {
    let content = read(path)?;
    let value: serde_json::Value =
        serde_json::from_str(&content).map_err(|e| json_error(path, e))?;
    if !value.is_object() {
        return Err(InputError::Groups {
            path: path.to_path_buf(),
            source: NotationError::InvalidArgumentType {
                found: "a JSON value that is not an object".to_string(),
            },
        });
    }
    CodeInput::from_value(&value).map_err(|source| InputError::Groups {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a CSV file with a header row into a table.
///
/// Empty fields become missing cells.
pub fn load_table(path: &Path) -> Result<Frame, InputError> {
    let csv_error = |source: csv::Error| InputError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(csv_error)?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(str::to_string)
        .collect();

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        records.push(record.iter().map(str::to_string).collect());
    }
    debug!(path = %path.display(), rows = records.len(), "loaded table");

    Frame::from_records(headers, records).map_err(|source| InputError::Table {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use codeset_rows::CodeTable;

    fn write(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn universe_from_lines_keeps_order() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write(&tmp, "codes.txt", "K52\n\n  K50 \nK51\nK50\n");
        let universe = load_universe(&path).unwrap();
        assert_eq!(universe.as_slice(), ["K52", "K50", "K51"]);
    }

    #[test]
    fn universe_from_json_array() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write(&tmp, "codes.JSON", r#"["A01", "A00"]"#);
        let universe = load_universe(&path).unwrap();
        assert_eq!(universe.as_slice(), ["A01", "A00"]);
    }

    #[test]
    fn universe_json_parse_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write(&tmp, "codes.json", r#"{"a": 1}"#);
        let err = load_universe(&path).unwrap_err();
        assert!(matches!(err, InputError::JsonParse { .. }));
        assert_eq!(err.code(), error_codes::JSON_PARSE);
    }

    #[test]
    fn missing_file() {
        let err = load_universe(Path::new("/nonexistent/codes.txt")).unwrap_err();
        assert_eq!(err.code(), error_codes::FILE_READ);
    }

    #[test]
    fn options_with_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write(&tmp, "options.json", r#"{"star": false, "drop_dot": true}"#);
        let options = load_options(&path).unwrap();
        assert!(!options.star);
        assert!(options.drop_dot);
        assert!(options.hyphen);
    }

    #[test]
    fn groups_must_be_an_object() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write(&tmp, "groups.json", r#"{"ibd": ["K50*", "K51*"], "uc": "K51*"}"#);
        let groups = load_groups(&path).unwrap();
        assert_eq!(groups.expressions(), vec!["K50*", "K51*", "K51*"]);

        let path = write(&tmp, "list.json", r#"["K50*"]"#);
        let err = load_groups(&path).unwrap_err();
        assert_eq!(err.code(), "N001");
    }

    #[test]
    fn table_from_csv() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write(&tmp, "events.csv", "pid,icd1,icd2\n1,K50,\n2,L10,K51\n3\n");
        let table = load_table(&path).unwrap();
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_names(), vec!["pid", "icd1", "icd2"]);
        assert_eq!(table.column("icd2").unwrap()[0], None);
        assert_eq!(table.column("icd1").unwrap()[2], None);
    }
}
