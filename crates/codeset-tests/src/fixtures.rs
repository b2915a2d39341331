//! Test fixtures: a small ICD-10 style universe and on-disk input files.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use codeset_notation::CodeUniverse;

/// Codes from the digestive chapter and a few neighbours, in ICD order.
pub const ICD_CODES: &[&str] = &[
    "C18", "C180", "C181", "C189", "C19", "C20", "K50", "K500", "K501", "K508", "K509", "K51",
    "K510", "K511", "K512", "K513", "K519", "K52", "K520", "K521", "K528", "K529", "K55", "K550",
    "L10", "L100", "S72", "S720",
];

/// The ICD fixture codes as a universe.
pub fn icd_universe() -> CodeUniverse {
    CodeUniverse::new(ICD_CODES.iter().copied())
}

/// A temporary directory holding input files for a test run.
pub struct InputFixture {
    pub root: TempDir,
}

impl InputFixture {
    /// Create a new empty fixture directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        Self { root }
    }

    /// Get the fixture root path.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Write a file and return its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(name);
        fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    /// Write the ICD fixture codes, one per line.
    pub fn write_universe_lines(&self, name: &str) -> PathBuf {
        self.write(name, &(ICD_CODES.join("\n") + "\n"))
    }

    /// Write the ICD fixture codes as a JSON array.
    pub fn write_universe_json(&self, name: &str) -> PathBuf {
        let json = serde_json::to_string(ICD_CODES).expect("Failed to serialize codes");
        self.write(name, &json)
    }

    /// Write a patient event table with three diagnosis columns.
    pub fn write_events(&self, name: &str) -> PathBuf {
        self.write(
            name,
            "pid,icd1,icd2,icd3\n\
             1,K500,,\n\
             2,L100,K511,\n\
             3,K52,,S720\n\
             4,C181,C20,\n\
             5,K55,,\n",
        )
    }
}

impl Default for InputFixture {
    fn default() -> Self {
        Self::new()
    }
}
