//! Mapping-rule parsing and compilation
//!
//! A rule file is an ordered list of lines of the form `lhs => rhs`: the
//! left-hand side decodes to exactly one character, the right-hand side is
//! one of the symbolic class names below. Compilation is all-or-nothing;
//! the first bad line aborts with an error naming that line.

use crate::error::{EngineError, Result};
use crate::escape;
use crate::table::ClassificationTable;
use kerf_core::WordBreakClass;
use std::collections::HashMap;

/// The symbolic class names accepted on the right-hand side of a rule
pub const CLASS_SYMBOLS: [&str; 9] = ["L", "N", "EXNL", "MNL", "MN", "ML", "SQ", "DQ", "BRK"];

/// Resolve a symbolic rule name to its word-break class
///
/// Case-sensitive exact match; returns `None` for anything outside the
/// closed set.
pub fn class_for_symbol(name: &str) -> Option<WordBreakClass> {
    match name {
        "L" => Some(WordBreakClass::Letter),
        "N" => Some(WordBreakClass::Numeric),
        "EXNL" => Some(WordBreakClass::ExtendedNumLetter),
        "MNL" => Some(WordBreakClass::MidNumberLetter),
        "MN" => Some(WordBreakClass::MidNumber),
        "ML" => Some(WordBreakClass::MidLetter),
        "SQ" => Some(WordBreakClass::SingleQuote),
        "DQ" => Some(WordBreakClass::DoubleQuote),
        "BRK" => Some(WordBreakClass::Break),
        _ => None,
    }
}

/// A single validated mapping rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingRule {
    /// The character being re-classed
    pub ch: char,
    /// The class it is assigned to
    pub class: WordBreakClass,
}

impl MappingRule {
    /// Parse one configuration line
    ///
    /// The separator is the last `=>` in the line (mirroring the greedy
    /// pattern the classic rule format used); both sides are trimmed of
    /// surrounding whitespace before escape decoding.
    pub fn parse(line: &str) -> Result<Self> {
        let sep = line.rfind("=>").ok_or_else(|| EngineError::MalformedRule {
            rule: line.to_string(),
            cause: None,
        })?;

        let lhs = decode_side(line, line[..sep].trim())?;
        let rhs = decode_side(line, line[sep + 2..].trim())?;

        let mut lhs_chars = lhs.chars();
        let ch = match (lhs_chars.next(), lhs_chars.next()) {
            (Some(ch), None) => ch,
            _ => {
                return Err(EngineError::InvalidMapping {
                    rule: line.to_string(),
                })
            }
        };

        let class = class_for_symbol(&rhs).ok_or_else(|| EngineError::UnknownWordBreakClass {
            rule: line.to_string(),
            name: rhs.clone(),
        })?;

        Ok(Self { ch, class })
    }
}

fn decode_side(line: &str, side: &str) -> Result<String> {
    escape::decode(side).map_err(|cause| EngineError::MalformedRule {
        rule: line.to_string(),
        cause: Some(cause),
    })
}

/// Compile an ordered sequence of rule lines into a classification table
///
/// Fail-fast: any malformed line aborts compilation and no partial table
/// is exposed. A character mapped by two different lines is rejected as
/// [`EngineError::DuplicateMapping`]. An empty sequence compiles to an
/// empty table; whether that is acceptable is the caller's decision.
pub fn compile_rules<I, S>(lines: I) -> Result<ClassificationTable>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut map = HashMap::new();
    for line in lines {
        let line = line.as_ref();
        let rule = MappingRule::parse(line)?;
        if map.insert(rule.ch, rule.class).is_some() {
            return Err(EngineError::DuplicateMapping {
                rule: line.to_string(),
                ch: rule.ch,
            });
        }
    }
    Ok(ClassificationTable::new(map))
}
