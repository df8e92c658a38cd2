//! Compiled character classification table
//!
//! The table is built once by the rule compiler and never mutated again.
//! Tokenizers share it behind an `Arc`, so concurrent reads need no
//! synchronization.

use kerf_core::{CharClassifier, DefaultClassifier, WordBreakClass};
use std::collections::HashMap;
use std::sync::Arc;

/// Immutable character → word-break-class mapping
///
/// Absence of a character means "use the engine's built-in default
/// classification", never `Break` or any other implicit class.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassificationTable {
    map: HashMap<char, WordBreakClass>,
}

impl ClassificationTable {
    pub(crate) fn new(map: HashMap<char, WordBreakClass>) -> Self {
        Self { map }
    }

    /// Look up the overridden class for a character, if any
    pub fn lookup(&self, ch: char) -> Option<WordBreakClass> {
        self.map.get(&ch).copied()
    }

    /// Number of overridden characters
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the table holds no overrides
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over the overridden characters and their classes
    pub fn iter(&self) -> impl Iterator<Item = (char, WordBreakClass)> + '_ {
        self.map.iter().map(|(&ch, &class)| (ch, class))
    }
}

/// Classifier that consults the override table before the built-in defaults
///
/// This is the classification source handed to the override-aware
/// tokenizer; the table is shared by reference with every engine instance
/// the factory creates.
#[derive(Debug, Clone)]
pub struct OverrideClassifier {
    table: Arc<ClassificationTable>,
    fallback: DefaultClassifier,
}

impl OverrideClassifier {
    /// Wrap a shared table over the default classification
    pub fn new(table: Arc<ClassificationTable>) -> Self {
        Self {
            table,
            fallback: DefaultClassifier,
        }
    }

    /// The underlying override table
    pub fn table(&self) -> &ClassificationTable {
        &self.table
    }
}

impl CharClassifier for OverrideClassifier {
    fn classify(&self, ch: char) -> WordBreakClass {
        self.table
            .lookup(ch)
            .unwrap_or_else(|| self.fallback.classify(ch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::compile_rules;

    #[test]
    fn lookup_hits_and_misses() {
        let table = compile_rules(["z => BRK"]).unwrap();
        assert_eq!(table.lookup('z'), Some(WordBreakClass::Break));
        assert_eq!(table.lookup('y'), None);
        assert_eq!(table.len(), 1);
        assert!(!table.is_empty());
    }

    #[test]
    fn override_classifier_falls_back_to_defaults() {
        let table = Arc::new(compile_rules(["z => BRK", "- => EXNL"]).unwrap());
        let classifier = OverrideClassifier::new(table);

        // overridden
        assert_eq!(classifier.classify('z'), WordBreakClass::Break);
        assert_eq!(classifier.classify('-'), WordBreakClass::ExtendedNumLetter);
        // untouched characters keep their built-in classes
        assert_eq!(classifier.classify('a'), WordBreakClass::Letter);
        assert_eq!(classifier.classify('_'), WordBreakClass::ExtendedNumLetter);
        assert_eq!(classifier.classify(' '), WordBreakClass::Break);
    }

    #[test]
    fn table_is_shared_not_copied() {
        let table = Arc::new(compile_rules(["z => BRK"]).unwrap());
        let a = OverrideClassifier::new(Arc::clone(&table));
        let b = OverrideClassifier::new(Arc::clone(&table));
        assert!(std::ptr::eq(a.table(), b.table()));
    }

    #[test]
    fn iter_covers_all_mappings() {
        let table = compile_rules(["a => L", "b => N"]).unwrap();
        let mut seen: Vec<(char, WordBreakClass)> = table.iter().collect();
        seen.sort_by_key(|&(ch, _)| ch);
        assert_eq!(
            seen,
            vec![
                ('a', WordBreakClass::Letter),
                ('b', WordBreakClass::Numeric)
            ]
        );
    }
}
