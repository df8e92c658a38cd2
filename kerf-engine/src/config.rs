//! Tokenizer configuration surface
//!
//! Mirrors the settings the host analysis pipeline exposes: an inline
//! `mappings` list, or a `mappings_path` pointing at a rules file, plus
//! the engine version the factory targets.

use crate::environment::Environment;
use crate::error::{EngineError, Result};
use crate::version::EngineVersion;
use std::path::PathBuf;

/// Configuration for building a [`crate::TokenizerFactory`]
///
/// Exactly one of `mappings` and `mappings_path` must resolve to a
/// non-empty rule list; the factory rejects everything else as
/// [`EngineError::MissingConfiguration`].
#[derive(Debug, Clone, Default)]
pub struct TokenizerConfig {
    /// Inline ordered rule lines
    pub mappings: Option<Vec<String>>,
    /// Path to a rules file, one rule per line
    pub mappings_path: Option<PathBuf>,
    /// Version of the segmentation engine in use
    pub version: EngineVersion,
}

impl TokenizerConfig {
    /// Create a builder
    pub fn builder() -> TokenizerConfigBuilder {
        TokenizerConfigBuilder::default()
    }

    /// Configuration from inline rule lines
    pub fn with_mappings<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mappings: Some(lines.into_iter().map(Into::into).collect()),
            ..Default::default()
        }
    }

    /// Configuration from a rules file
    pub fn with_mappings_path<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            mappings_path: Some(path.into()),
            ..Default::default()
        }
    }

    /// Resolve the configured rule source into a line list
    ///
    /// Fails with [`EngineError::MissingConfiguration`] when neither source
    /// is supplied, when both are, or when the supplied source resolves to
    /// zero rule lines.
    pub(crate) fn resolve_rules(&self, env: &Environment) -> Result<Vec<String>> {
        let lines = match (&self.mappings, &self.mappings_path) {
            (Some(inline), None) => inline.clone(),
            (None, Some(path)) => env.word_list(path)?,
            _ => return Err(EngineError::MissingConfiguration),
        };
        if lines.is_empty() {
            return Err(EngineError::MissingConfiguration);
        }
        Ok(lines)
    }
}

/// Builder for [`TokenizerConfig`]
#[derive(Debug, Default)]
pub struct TokenizerConfigBuilder {
    config: TokenizerConfig,
}

impl TokenizerConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inline rule lines
    pub fn mappings<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.mappings = Some(lines.into_iter().map(Into::into).collect());
        self
    }

    /// Append a single inline rule line
    pub fn mapping<S: Into<String>>(mut self, line: S) -> Self {
        self.config
            .mappings
            .get_or_insert_with(Vec::new)
            .push(line.into());
        self
    }

    /// Set the rules-file path
    pub fn mappings_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.mappings_path = Some(path.into());
        self
    }

    /// Set the engine version
    pub fn version(mut self, version: EngineVersion) -> Self {
        self.config.version = version;
        self
    }

    /// Build the configuration
    pub fn build(self) -> TokenizerConfig {
        self.config
    }
}
