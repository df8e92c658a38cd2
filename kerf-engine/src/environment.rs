//! Word-list file loading
//!
//! The factory only consumes a resolved line list; reading rule files off
//! disk is this collaborator's job. Paths may be resolved relative to a
//! configuration directory, and the usual word-list conventions apply:
//! blank lines and `#` comment lines are skipped.

use crate::error::{EngineError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File-system environment for resolving and loading rule files
#[derive(Debug, Clone, Default)]
pub struct Environment {
    config_dir: Option<PathBuf>,
}

impl Environment {
    /// Environment resolving paths as given
    pub fn new() -> Self {
        Self::default()
    }

    /// Environment resolving relative paths against `config_dir`
    pub fn with_config_dir<P: Into<PathBuf>>(config_dir: P) -> Self {
        Self {
            config_dir: Some(config_dir.into()),
        }
    }

    /// Resolve a rules-file path against the configuration directory
    pub fn resolve(&self, path: &Path) -> PathBuf {
        match &self.config_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Load a word list: one entry per line, blanks and `#` comments skipped
    pub fn word_list(&self, path: &Path) -> Result<Vec<String>> {
        let resolved = self.resolve(path);
        let content = fs::read_to_string(&resolved).map_err(|source| EngineError::WordListIo {
            path: resolved.clone(),
            source,
        })?;

        Ok(content
            .lines()
            .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect())
    }
}
