//! The code universe: all valid concrete codes known to the caller.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An ordered, deduplicated list of valid codes.
///
/// Order is the caller's: colon ranges slice by position, so the universe
/// must already be in the domain's canonical order. Construction never
/// re-sorts; duplicates keep their first position.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct CodeUniverse {
    codes: Vec<String>,
    positions: HashMap<String, usize>,
}

impl CodeUniverse {
    /// Creates a universe from codes in the given order.
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut universe = Self::default();
        for code in codes {
            let code = code.into();
            if universe.positions.contains_key(&code) {
                continue;
            }
            universe.positions.insert(code.clone(), universe.codes.len());
            universe.codes.push(code);
        }
        universe
    }

    /// Creates a universe sorted in ascending lexical order.
    pub fn sorted<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut codes: Vec<String> = codes.into_iter().map(Into::into).collect();
        codes.sort();
        codes.dedup();
        Self::new(codes)
    }

    /// Returns the position of `code`, if present.
    pub fn position(&self, code: &str) -> Option<usize> {
        self.positions.get(code).copied()
    }

    /// Returns true if `code` is a member.
    pub fn contains(&self, code: &str) -> bool {
        self.positions.contains_key(code)
    }

    /// Returns the codes between two positions, both inclusive.
    pub fn slice(&self, start: usize, end: usize) -> &[String] {
        &self.codes[start..=end]
    }

    /// Returns all codes in universe order.
    pub fn as_slice(&self) -> &[String] {
        &self.codes
    }

    /// Iterates over codes in universe order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }

    /// Returns the number of codes.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns true if the universe holds no codes.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl PartialEq for CodeUniverse {
    fn eq(&self, other: &Self) -> bool {
        self.codes == other.codes
    }
}

impl Eq for CodeUniverse {}

impl From<Vec<String>> for CodeUniverse {
    fn from(codes: Vec<String>) -> Self {
        Self::new(codes)
    }
}

impl From<CodeUniverse> for Vec<String> {
    fn from(universe: CodeUniverse) -> Self {
        universe.codes
    }
}

impl<S: Into<String>> FromIterator<S> for CodeUniverse {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
