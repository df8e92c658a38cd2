//! Layered error types for rule compilation and factory construction

use std::path::PathBuf;
use thiserror::Error;

/// Escape-decoding failure
///
/// Internal to the escape decoder; the rule parser always surfaces it
/// wrapped inside [`EngineError::MalformedRule`] so callers see which rule
/// line carried the bad escape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedEscape {
    /// A lone backslash at the end of the input
    #[error("trailing escape character in [{0}]")]
    TrailingBackslash(String),

    /// A `\u` escape with fewer than four characters left
    #[error("\\u escape needs four hex digits in [{0}]")]
    TruncatedUnicode(String),

    /// A `\u` escape whose digits are not hex or name no valid code point
    #[error("\\u escape is not a valid code point in [{0}]")]
    InvalidCodePoint(String),
}

/// Engine-level errors
///
/// Every variant is fatal to factory construction: there is no partial
/// table and no skipping of bad lines. Variants carry the offending raw
/// rule text so the operator can correct configuration.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A configuration line does not match the `lhs => rhs` grammar
    #[error("malformed mapping rule [{rule}]")]
    MalformedRule {
        /// The raw rule line
        rule: String,
        /// The escape-decoding failure, when that is what broke the rule
        #[source]
        cause: Option<MalformedEscape>,
    },

    /// A rule whose left-hand side is not exactly one character
    #[error("invalid mapping in rule [{rule}]: left-hand side must be a single character")]
    InvalidMapping {
        /// The raw rule line
        rule: String,
    },

    /// A rule whose right-hand side is not a recognized class name
    #[error("unknown word-break class `{name}` in rule [{rule}]")]
    UnknownWordBreakClass {
        /// The raw rule line
        rule: String,
        /// The unrecognized right-hand side
        name: String,
    },

    /// Two rules map the same character
    #[error("duplicate mapping for {ch:?} in rule [{rule}]")]
    DuplicateMapping {
        /// The raw rule line of the second mapping
        rule: String,
        /// The character mapped twice
        ch: char,
    },

    /// Neither inline rules nor a rules file yielded any mapping
    #[error("word-boundary overrides require either `mappings` or `mappings_path` to be configured")]
    MissingConfiguration,

    /// The rules file could not be read
    #[error("failed to read word list {path}: {source}")]
    WordListIo {
        /// The resolved rules file path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_rule_carries_raw_text() {
        let err = EngineError::MalformedRule {
            rule: "no separator here".to_string(),
            cause: None,
        };
        assert_eq!(err.to_string(), "malformed mapping rule [no separator here]");
    }

    #[test]
    fn malformed_rule_exposes_escape_source() {
        use std::error::Error as _;

        let err = EngineError::MalformedRule {
            rule: "\\ => L".to_string(),
            cause: Some(MalformedEscape::TrailingBackslash("\\".to_string())),
        };
        let source = err.source().expect("escape cause should be the source");
        assert!(source.to_string().contains("trailing escape"));
    }

    #[test]
    fn duplicate_mapping_display() {
        let err = EngineError::DuplicateMapping {
            rule: "z => N".to_string(),
            ch: 'z',
        };
        assert_eq!(err.to_string(), "duplicate mapping for 'z' in rule [z => N]");
    }
}
