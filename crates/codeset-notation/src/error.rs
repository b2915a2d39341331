//! Error types for notation expansion.

use thiserror::Error;

/// Result alias used throughout the notation engine.
pub type Result<T, E = NotationError> = std::result::Result<T, E>;

/// Notation kinds, used to report which expander needed a code universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notation {
    /// `prefix*suffix` wildcards.
    Star,
    /// `start:end` positional ranges.
    Colon,
    /// Regular expression patterns.
    Regex,
}

impl Notation {
    /// Returns the notation name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Notation::Star => "star",
            Notation::Colon => "colon",
            Notation::Regex => "regex",
        }
    }
}

impl std::fmt::Display for Notation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors raised while expanding code notation.
///
/// Every error is raised at the point of detection and aborts the whole
/// call, including calls over sequences and mappings.
#[derive(Debug, Error)]
pub enum NotationError {
    /// Input is neither a single expression, a sequence, nor a mapping.
    #[error("expected a code expression, a list of expressions, or a mapping of lists; got {found}")]
    InvalidArgumentType {
        /// Short description of what was supplied instead.
        found: String,
    },

    /// The end of a range precedes its start.
    #[error("the start code cannot come after the end code in '{expr}' ({start} > {end})")]
    Range {
        /// The offending expression.
        expr: String,
        /// Start value as parsed.
        start: String,
        /// End value as parsed.
        end: String,
    },

    /// Range endpoints have a different number of decimals and differing integer parts.
    #[error("the start code and the end code do not have the same number of decimals in '{expr}'")]
    AmbiguousRange {
        /// The offending expression.
        expr: String,
    },

    /// Colon notation mixed with hyphen or star notation in one expression.
    #[error("colon notation must start and end in specific codes, not codes using star or hyphen: '{expr}'")]
    NotationConflict {
        /// The offending expression.
        expr: String,
    },

    /// A colon endpoint is not a member of the code universe.
    #[error("code '{code}' not found in code universe (in '{expr}')")]
    Lookup {
        /// The missing code.
        code: String,
        /// The expression that referenced it.
        expr: String,
    },

    /// Expansion requires a code universe but none was supplied.
    #[error("{notation} expansion of '{expr}' requires a code universe")]
    Configuration {
        /// The notation that needed the universe.
        notation: Notation,
        /// The expression being expanded.
        expr: String,
    },

    /// A regular expression failed to compile.
    #[error("invalid regex pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The pattern as supplied.
        pattern: String,
        /// Compiler message.
        message: String,
    },

    /// A notation marker appears more than once in a single expression.
    #[error("expected at most one '{marker}' in '{expr}'")]
    MalformedExpression {
        /// The offending expression.
        expr: String,
        /// The repeated marker.
        marker: char,
    },

    /// One side of a hyphen range has no numeric component.
    #[error("no numeric component in '{side}' (in '{expr}')")]
    MissingNumber {
        /// The offending expression.
        expr: String,
        /// The side without a number.
        side: String,
    },
}

impl NotationError {
    /// Returns the stable error code string (e.g., "N001").
    pub fn code(&self) -> &'static str {
        match self {
            NotationError::InvalidArgumentType { .. } => "N001",
            NotationError::Range { .. } => "N002",
            NotationError::AmbiguousRange { .. } => "N003",
            NotationError::NotationConflict { .. } => "N004",
            NotationError::Lookup { .. } => "N005",
            NotationError::Configuration { .. } => "N006",
            NotationError::InvalidPattern { .. } => "N007",
            NotationError::MalformedExpression { .. } => "N008",
            NotationError::MissingNumber { .. } => "N009",
        }
    }

    pub(crate) fn configuration(notation: Notation, expr: &str) -> Self {
        NotationError::Configuration {
            notation,
            expr: expr.to_string(),
        }
    }

    pub(crate) fn malformed(expr: &str, marker: char) -> Self {
        NotationError::MalformedExpression {
            expr: expr.to_string(),
            marker,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = NotationError::AmbiguousRange {
            expr: "C26.0-C27.11".to_string(),
        };
        assert_eq!(err.code(), "N003");

        let err = NotationError::configuration(Notation::Star, "K50*");
        assert_eq!(err.code(), "N006");
        assert_eq!(
            err.to_string(),
            "star expansion of 'K50*' requires a code universe"
        );
    }

    #[test]
    fn test_lookup_display() {
        let err = NotationError::Lookup {
            code: "K52".to_string(),
            expr: "K50:K52".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "code 'K52' not found in code universe (in 'K50:K52')"
        );
    }

    #[test]
    fn test_notation_names() {
        assert_eq!(Notation::Star.to_string(), "star");
        assert_eq!(Notation::Colon.as_str(), "colon");
        assert_eq!(Notation::Regex.to_string(), "regex");
    }
}
