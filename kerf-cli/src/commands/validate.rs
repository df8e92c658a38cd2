//! Validate command implementation

use anyhow::Result;
use clap::Args;
use kerf_engine::{Environment, TokenizerConfig, TokenizerFactory};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Inline mapping rule, `lhs => rhs` (repeatable)
    #[arg(short, long, value_name = "RULE")]
    pub mapping: Vec<String>,

    /// File with one mapping rule per line
    #[arg(long, value_name = "FILE")]
    pub mappings_path: Option<PathBuf>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        let mut builder = TokenizerConfig::builder();
        if !self.mapping.is_empty() {
            builder = builder.mappings(self.mapping.iter().cloned());
        }
        if let Some(path) = &self.mappings_path {
            builder = builder.mappings_path(path);
        }

        match TokenizerFactory::new(&builder.build(), &Environment::new()) {
            Ok(factory) => {
                println!("✓ Mapping rules are valid!");
                println!("  Overridden characters: {}", factory.table().len());
                let mut entries: Vec<_> = factory.table().iter().collect();
                entries.sort_by_key(|&(ch, _)| ch);
                for (ch, class) in entries {
                    println!("  {ch:?} => {class}");
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Mapping rules are invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
