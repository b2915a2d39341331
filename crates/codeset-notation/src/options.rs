//! Expansion options.

use serde::{Deserialize, Serialize};

/// Which notation stages run, and how input and output are normalized.
///
/// All fields default independently, so a partial JSON object such as
/// `{"regex": true}` is a valid options file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExpandOptions {
    /// Expand `start-end` numeric ranges.
    pub hyphen: bool,
    /// Expand `*` wildcards against the universe.
    pub star: bool,
    /// Expand `start:end` positional ranges against the universe.
    pub colon: bool,
    /// Treat each expression as a regex; bypasses the other stages.
    pub regex: bool,
    /// Remove `.` from expressions before expansion.
    pub drop_dot: bool,
    /// Remove leading `0` characters from expressions before expansion.
    pub drop_leading_zero: bool,
    /// Deduplicate and sort the result of a single expression.
    pub sort_unique: bool,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self {
            hyphen: true,
            star: true,
            colon: true,
            regex: false,
            drop_dot: false,
            drop_leading_zero: false,
            sort_unique: true,
        }
    }
}

impl ExpandOptions {
    /// Options that treat every expression as a regular expression.
    pub fn regex_only() -> Self {
        Self {
            regex: true,
            ..Self::default()
        }
    }

    /// Sets whether hyphen ranges are expanded.
    pub fn hyphen(mut self, on: bool) -> Self {
        self.hyphen = on;
        self
    }

    /// Sets whether star wildcards are expanded.
    pub fn star(mut self, on: bool) -> Self {
        self.star = on;
        self
    }

    /// Sets whether colon ranges are expanded.
    pub fn colon(mut self, on: bool) -> Self {
        self.colon = on;
        self
    }

    /// Sets regex mode.
    pub fn regex(mut self, on: bool) -> Self {
        self.regex = on;
        self
    }

    /// Sets whether dots are dropped before expansion.
    pub fn drop_dot(mut self, on: bool) -> Self {
        self.drop_dot = on;
        self
    }

    /// Sets whether leading zeros are dropped before expansion.
    pub fn drop_leading_zero(mut self, on: bool) -> Self {
        self.drop_leading_zero = on;
        self
    }

    /// Sets whether single-expression results are deduplicated and sorted.
    pub fn sort_unique(mut self, on: bool) -> Self {
        self.sort_unique = on;
        self
    }

    /// Parses options from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = ExpandOptions::default();
        assert!(opts.hyphen && opts.star && opts.colon);
        assert!(!opts.regex);
        assert!(!opts.drop_dot && !opts.drop_leading_zero);
        assert!(opts.sort_unique);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let opts = ExpandOptions::from_json(r#"{"regex": true, "drop_dot": true}"#).unwrap();
        assert!(opts.regex);
        assert!(opts.drop_dot);
        assert!(opts.hyphen);
        assert!(opts.sort_unique);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(ExpandOptions::from_json(r#"{"hypen": false}"#).is_err());
    }

    #[test]
    fn test_builder() {
        let opts = ExpandOptions::default().hyphen(false).sort_unique(false);
        assert!(!opts.hyphen);
        assert!(!opts.sort_unique);
        assert!(ExpandOptions::regex_only().regex);
    }
}
