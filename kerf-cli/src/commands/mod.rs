//! CLI command implementations

use clap::Subcommand;

pub mod tokenize;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Tokenize text with optional word-boundary overrides
    Tokenize(tokenize::TokenizeArgs),

    /// Validate a set of mapping rules
    Validate(validate::ValidateArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_debug_format() {
        let tokenize_cmd = Commands::Tokenize(tokenize::TokenizeArgs {
            text: Some("foo bar".to_string()),
            input: Vec::new(),
            mapping: vec!["z => BRK".to_string()],
            mappings_path: None,
            engine_version: None,
            format: tokenize::OutputFormat::Text,
            output: None,
            quiet: false,
            verbose: 0,
        });

        let debug_str = format!("{:?}", tokenize_cmd);
        assert!(debug_str.contains("Tokenize"));
        assert!(debug_str.contains("foo bar"));

        let validate_cmd = Commands::Validate(validate::ValidateArgs {
            mapping: Vec::new(),
            mappings_path: Some("rules.txt".into()),
        });

        let debug_str = format!("{:?}", validate_cmd);
        assert!(debug_str.contains("Validate"));
        assert!(debug_str.contains("rules.txt"));
    }
}
