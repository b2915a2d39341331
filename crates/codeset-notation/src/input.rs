//! Input and output shapes for expansion calls.
//!
//! Every expander handles a single expression; [`CodeInput::expand_each`]
//! lifts that single-expression step over sequences and mappings.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::error::{NotationError, Result};

/// One or more code expressions to expand.
///
/// Deserializes through [`CodeInput::from_value`], so group values may be a
/// single expression as well as a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CodeInput {
    /// A single expression, e.g. `"K50-K52"`.
    Single(String),
    /// An ordered list of expressions.
    Sequence(Vec<String>),
    /// Named groups of expressions, e.g. `{"crohns": ["K50*"]}`.
    Mapping(BTreeMap<String, Vec<String>>),
}

impl CodeInput {
    /// Builds an input from a JSON value.
    ///
    /// Accepts a string, an array of strings, or an object whose values are
    /// strings or arrays of strings. Anything else is rejected with
    /// [`NotationError::InvalidArgumentType`].
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        use serde_json::Value;

        match value {
            Value::String(s) => Ok(CodeInput::Single(s.clone())),
            Value::Array(items) => Ok(CodeInput::Sequence(string_list(items)?)),
            Value::Object(map) => {
                let mut groups = BTreeMap::new();
                for (name, entry) in map {
                    let exprs = match entry {
                        Value::String(s) => vec![s.clone()],
                        Value::Array(items) => string_list(items)?,
                        other => return Err(invalid_type(other)),
                    };
                    groups.insert(name.clone(), exprs);
                }
                Ok(CodeInput::Mapping(groups))
            }
            other => Err(invalid_type(other)),
        }
    }

    /// Parses an input from a JSON string.
    ///
    /// Malformed JSON is reported as [`NotationError::InvalidArgumentType`].
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| NotationError::InvalidArgumentType {
                found: format!("unparseable JSON ({})", e),
            })?;
        Self::from_value(&value)
    }

    /// Returns all expressions in input order, flattening groups.
    pub fn expressions(&self) -> Vec<&str> {
        match self {
            CodeInput::Single(expr) => vec![expr.as_str()],
            CodeInput::Sequence(exprs) => exprs.iter().map(String::as_str).collect(),
            CodeInput::Mapping(groups) => groups
                .values()
                .flat_map(|exprs| exprs.iter().map(String::as_str))
                .collect(),
        }
    }

    /// Applies `single` to every expression.
    ///
    /// A sequence is expanded element-wise, concatenated in order, then
    /// passed through `merge`. A mapping applies the sequence rule per key.
    pub(crate) fn expand_each<F, M>(&self, single: F, merge: M) -> Result<CodeSet>
    where
        F: Fn(&str) -> Result<Vec<String>>,
        M: Fn(Vec<String>) -> Vec<String>,
    {
        let sequence = |exprs: &[String]| -> Result<Vec<String>> {
            let mut expanded = Vec::new();
            for expr in exprs {
                expanded.extend(single(expr)?);
            }
            Ok(merge(expanded))
        };

        match self {
            CodeInput::Single(expr) => Ok(CodeSet::Codes(single(expr)?)),
            CodeInput::Sequence(exprs) => Ok(CodeSet::Codes(sequence(exprs)?)),
            CodeInput::Mapping(groups) => {
                let mut expanded = BTreeMap::new();
                for (name, exprs) in groups {
                    expanded.insert(name.clone(), sequence(exprs)?);
                }
                Ok(CodeSet::Groups(expanded))
            }
        }
    }
}

impl<'de> Deserialize<'de> for CodeInput {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        CodeInput::from_value(&value).map_err(serde::de::Error::custom)
    }
}

fn string_list(items: &[serde_json::Value]) -> Result<Vec<String>> {
    items
        .iter()
        .map(|item| match item {
            serde_json::Value::String(s) => Ok(s.clone()),
            other => Err(invalid_type(other)),
        })
        .collect()
}

fn invalid_type(value: &serde_json::Value) -> NotationError {
    use serde_json::Value;

    let found = match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    };
    NotationError::InvalidArgumentType {
        found: found.to_string(),
    }
}

impl From<&str> for CodeInput {
    fn from(expr: &str) -> Self {
        CodeInput::Single(expr.to_string())
    }
}

impl From<String> for CodeInput {
    fn from(expr: String) -> Self {
        CodeInput::Single(expr)
    }
}

impl From<Vec<String>> for CodeInput {
    fn from(exprs: Vec<String>) -> Self {
        CodeInput::Sequence(exprs)
    }
}

impl From<&[&str]> for CodeInput {
    fn from(exprs: &[&str]) -> Self {
        CodeInput::Sequence(exprs.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for CodeInput {
    fn from(exprs: [&str; N]) -> Self {
        CodeInput::Sequence(exprs.iter().map(|s| s.to_string()).collect())
    }
}

impl From<BTreeMap<String, Vec<String>>> for CodeInput {
    fn from(groups: BTreeMap<String, Vec<String>>) -> Self {
        CodeInput::Mapping(groups)
    }
}

/// The result of an expansion call.
///
/// Mirrors the shape of the [`CodeInput`]: single expressions and sequences
/// produce [`CodeSet::Codes`], mappings produce [`CodeSet::Groups`] with the
/// same keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CodeSet {
    /// A flat list of codes.
    Codes(Vec<String>),
    /// Expanded codes per group name.
    Groups(BTreeMap<String, Vec<String>>),
}

impl CodeSet {
    /// Returns the flat code list, if this is not a grouped result.
    pub fn codes(&self) -> Option<&[String]> {
        match self {
            CodeSet::Codes(codes) => Some(codes),
            CodeSet::Groups(_) => None,
        }
    }

    /// Returns the grouped codes, if this is a grouped result.
    pub fn groups(&self) -> Option<&BTreeMap<String, Vec<String>>> {
        match self {
            CodeSet::Codes(_) => None,
            CodeSet::Groups(groups) => Some(groups),
        }
    }

    /// Consumes the set and returns the flat code list, or `None` for groups.
    pub fn into_codes(self) -> Option<Vec<String>> {
        match self {
            CodeSet::Codes(codes) => Some(codes),
            CodeSet::Groups(_) => None,
        }
    }

    /// Total number of codes across all groups.
    pub fn len(&self) -> usize {
        match self {
            CodeSet::Codes(codes) => codes.len(),
            CodeSet::Groups(groups) => groups.values().map(Vec::len).sum(),
        }
    }

    /// Returns true if no codes were produced.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flattens groups into one sorted, deduplicated list.
    pub fn flatten(self) -> Vec<String> {
        match self {
            CodeSet::Codes(codes) => codes,
            CodeSet::Groups(groups) => sorted_unique(groups.into_values().flatten().collect()),
        }
    }
}

/// Sorts ascending and removes duplicates.
pub(crate) fn sorted_unique(mut codes: Vec<String>) -> Vec<String> {
    codes.sort();
    codes.dedup();
    codes
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_from_value_shapes() {
        assert_eq!(
            CodeInput::from_value(&json!("K50")).unwrap(),
            CodeInput::Single("K50".to_string())
        );
        assert_eq!(
            CodeInput::from_value(&json!(["K50", "K51"])).unwrap(),
            CodeInput::from(["K50", "K51"])
        );

        let input = CodeInput::from_value(&json!({"ibd": "K50*", "ra": ["M05*", "M06*"]})).unwrap();
        let groups = match input {
            CodeInput::Mapping(groups) => groups,
            other => panic!("expected mapping, got {:?}", other),
        };
        assert_eq!(groups["ibd"], vec!["K50*".to_string()]);
        assert_eq!(groups["ra"].len(), 2);
    }

    #[test]
    fn test_deserialize_accepts_single_expression_groups() {
        let input: CodeInput = serde_json::from_str(r#"{"g": "K50*"}"#).unwrap();
        assert_eq!(input, CodeInput::from_json(r#"{"g": ["K50*"]}"#).unwrap());

        let input: CodeInput = serde_json::from_str(r#"["K50", "K51"]"#).unwrap();
        assert_eq!(input, CodeInput::from(["K50", "K51"]));

        let err = serde_json::from_str::<CodeInput>("[1, 2]").unwrap_err();
        assert!(err.to_string().contains("got a number"));
    }

    #[test]
    fn test_from_value_rejects_other_types() {
        for value in [json!(42), json!(null), json!(true), json!([1, 2]), json!({"a": 1})] {
            let err = CodeInput::from_value(&value).unwrap_err();
            assert_eq!(err.code(), "N001", "value: {}", value);
        }
    }

    #[test]
    fn test_expand_each_preserves_mapping_keys() {
        let mut groups = BTreeMap::new();
        groups.insert("a".to_string(), vec!["x".to_string(), "y".to_string()]);
        groups.insert("b".to_string(), vec![]);
        let input = CodeInput::from(groups);

        let out = input
            .expand_each(|e| Ok(vec![e.to_uppercase()]), |v| v)
            .unwrap();
        let groups = out.groups().unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups["a"], vec!["X".to_string(), "Y".to_string()]);
        assert!(groups["b"].is_empty());
    }

    #[test]
    fn test_expand_each_aborts_on_first_error() {
        let input = CodeInput::from(["ok", "bad", "ok"]);
        let result = input.expand_each(
            |e| {
                if e == "bad" {
                    Err(NotationError::AmbiguousRange {
                        expr: e.to_string(),
                    })
                } else {
                    Ok(vec![e.to_string()])
                }
            },
            |v| v,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_code_set_flatten() {
        let mut groups = BTreeMap::new();
        groups.insert("a".to_string(), vec!["K51".to_string(), "K50".to_string()]);
        groups.insert("b".to_string(), vec!["K50".to_string()]);
        let set = CodeSet::Groups(groups);
        assert_eq!(set.len(), 3);
        assert_eq!(set.flatten(), vec!["K50".to_string(), "K51".to_string()]);
    }
}
