//! Tokenizer factory and the override-aware tokenizer
//!
//! The factory compiles the configured rules exactly once and then hands
//! out tokenizers on demand. Only two construction outcomes exist: an
//! override-aware
//! tokenizer fed the shared table, or the unmodified default tokenizer
//! when the engine predates override support (a graceful downgrade, not
//! an error).

use crate::config::TokenizerConfig;
use crate::environment::Environment;
use crate::error::Result;
use crate::rules::compile_rules;
use crate::table::{ClassificationTable, OverrideClassifier};
use kerf_core::{DefaultClassifier, Segmenter, TokenSpan};
use std::sync::Arc;

/// A word token cut out of the input text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token text
    pub text: String,
    /// Location of the token in the input
    pub span: TokenSpan,
}

enum TokenizerImpl {
    /// Override-aware engine consulting the classification table
    Override(Segmenter<OverrideClassifier>),
    /// Unmodified default engine
    Default(Segmenter<DefaultClassifier>),
}

/// A ready-to-use word tokenizer
///
/// Cheap to create; the factory builds one per analysis run while the
/// compiled table stays shared behind an `Arc`.
pub struct WordTokenizer {
    inner: TokenizerImpl,
}

impl WordTokenizer {
    /// The unmodified default tokenizer
    pub fn standard() -> Self {
        Self {
            inner: TokenizerImpl::Default(Segmenter::new(DefaultClassifier)),
        }
    }

    /// An override-aware tokenizer reading the shared table
    pub fn with_overrides(table: Arc<ClassificationTable>) -> Self {
        Self {
            inner: TokenizerImpl::Override(Segmenter::new(OverrideClassifier::new(table))),
        }
    }

    /// Whether this instance consults an override table
    pub fn has_overrides(&self) -> bool {
        matches!(self.inner, TokenizerImpl::Override(_))
    }

    /// Segment `text` into token spans
    pub fn spans(&self, text: &str) -> Vec<TokenSpan> {
        match &self.inner {
            TokenizerImpl::Override(segmenter) => segmenter.segment(text),
            TokenizerImpl::Default(segmenter) => segmenter.segment(text),
        }
    }

    /// Segment `text` into owned tokens
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        self.spans(text)
            .into_iter()
            .map(|span| Token {
                text: span.slice(text).to_string(),
                span,
            })
            .collect()
    }
}

/// Builds tokenizers from a compiled override table and a capability gate
///
/// Construction performs the whole compilation pass: rule-source
/// resolution, parsing, validation, and the version check. `create()`
/// afterwards is infallible and keeps no mutable state between calls.
#[derive(Debug)]
pub struct TokenizerFactory {
    table: Arc<ClassificationTable>,
    overrides_supported: bool,
}

impl TokenizerFactory {
    /// Build a factory from configuration, loading rule files as needed
    pub fn new(config: &TokenizerConfig, env: &Environment) -> Result<Self> {
        let lines = config.resolve_rules(env)?;
        let table = compile_rules(lines)?;
        Ok(Self::from_table(
            table,
            config.version.supports_word_break_overrides(),
        ))
    }

    /// Build a factory from an already-compiled table and capability flag
    ///
    /// The capability seam for callers that resolve engine support
    /// themselves (and for tests).
    pub fn from_table(table: ClassificationTable, overrides_supported: bool) -> Self {
        Self {
            table: Arc::new(table),
            overrides_supported,
        }
    }

    /// The compiled override table
    ///
    /// Present even when the version gate failed; the downgrade decision
    /// is made per `create()`, not by discarding the table.
    pub fn table(&self) -> &ClassificationTable {
        &self.table
    }

    /// Whether created tokenizers will consult the override table
    pub fn overrides_supported(&self) -> bool {
        self.overrides_supported
    }

    /// Create a tokenizer instance
    pub fn create(&self) -> WordTokenizer {
        if self.overrides_supported {
            WordTokenizer::with_overrides(Arc::clone(&self.table))
        } else {
            WordTokenizer::standard()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::EngineVersion;

    fn words(tokenizer: &WordTokenizer, text: &str) -> Vec<String> {
        tokenizer.tokenize(text).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn factory_compiles_once_and_creates_many() {
        let config = TokenizerConfig::builder()
            .mapping("z => BRK")
            .version(EngineVersion::new(5, 5))
            .build();
        let factory = TokenizerFactory::new(&config, &Environment::new()).unwrap();
        assert_eq!(factory.table().len(), 1);

        for _ in 0..3 {
            let tokenizer = factory.create();
            assert!(tokenizer.has_overrides());
            assert_eq!(words(&tokenizer, "foozbar"), vec!["foo", "bar"]);
        }
    }

    #[test]
    fn old_engine_downgrades_to_default() {
        let config = TokenizerConfig::builder()
            .mapping("z => BRK")
            .version(EngineVersion::new(5, 4))
            .build();
        let factory = TokenizerFactory::new(&config, &Environment::new()).unwrap();

        // table is still compiled and validated
        assert_eq!(factory.table().len(), 1);
        assert!(!factory.overrides_supported());

        let tokenizer = factory.create();
        assert!(!tokenizer.has_overrides());
        assert_eq!(words(&tokenizer, "foozbar"), vec!["foozbar"]);
    }

    #[test]
    fn missing_rule_source_fails_construction() {
        let config = TokenizerConfig::default();
        let err = TokenizerFactory::new(&config, &Environment::new()).unwrap_err();
        assert!(matches!(err, crate::EngineError::MissingConfiguration));
    }

    #[test]
    fn bad_rules_fail_construction() {
        let config = TokenizerConfig::with_mappings(["z => FOO"]);
        let err = TokenizerFactory::new(&config, &Environment::new()).unwrap_err();
        assert!(matches!(
            err,
            crate::EngineError::UnknownWordBreakClass { .. }
        ));
    }

    #[test]
    fn tokens_carry_offsets() {
        let factory = TokenizerFactory::from_table(ClassificationTable::default(), true);
        let tokens = factory.create().tokenize("foo bar");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "foo");
        assert_eq!(tokens[0].span.byte_start, 0);
        assert_eq!(tokens[0].span.byte_end, 3);
        assert_eq!(tokens[1].span.byte_start, 4);
        assert_eq!(tokens[1].span.char_start, 4);
    }

    #[test]
    fn capable_engine_with_empty_table_matches_default() {
        let with_empty = TokenizerFactory::from_table(ClassificationTable::default(), true);
        let downgraded = TokenizerFactory::from_table(ClassificationTable::default(), false);

        let text = "foo_bar can't 3.14 #tag";
        assert_eq!(
            words(&with_empty.create(), text),
            words(&downgraded.create(), text)
        );
    }
}
