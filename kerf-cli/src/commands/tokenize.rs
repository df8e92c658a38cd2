//! Tokenize command implementation

use crate::error::CliError;
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use anyhow::{Context, Result};
use clap::Args;
use kerf_engine::{EngineVersion, Environment, TokenizerConfig, TokenizerFactory};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Arguments for the tokenize command
#[derive(Debug, Args)]
pub struct TokenizeArgs {
    /// Text to tokenize (reads stdin when neither text nor --input is given)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Input files to tokenize
    #[arg(short, long, value_name = "FILE")]
    pub input: Vec<PathBuf>,

    /// Inline mapping rule, `lhs => rhs` (repeatable)
    #[arg(short, long, value_name = "RULE")]
    pub mapping: Vec<String>,

    /// File with one mapping rule per line
    #[arg(long, value_name = "FILE")]
    pub mappings_path: Option<PathBuf>,

    /// Engine version to target, e.g. `5.4` (default: latest)
    #[arg(long, value_name = "VERSION")]
    pub engine_version: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one token per line
    Text,
    /// JSON array of tokens with offsets
    Json,
}

impl TokenizeArgs {
    /// Execute the tokenize command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting tokenization");
        log::debug!("Arguments: {:?}", self);

        let factory = self.build_factory()?;
        if !factory.overrides_supported() {
            log::warn!(
                "engine version predates word-break overrides; using the default tokenizer"
            );
        }
        let tokenizer = factory.create();

        let text = self.read_text()?;
        let tokens = tokenizer.tokenize(&text);
        log::info!("Produced {} tokens", tokens.len());

        let mut formatter = self.formatter()?;
        for token in &tokens {
            formatter.format_token(token)?;
        }
        formatter.finish()?;

        Ok(())
    }

    /// Build the tokenizer factory from the rule options
    fn build_factory(&self) -> Result<TokenizerFactory> {
        let mut builder = TokenizerConfig::builder();
        if !self.mapping.is_empty() {
            builder = builder.mappings(self.mapping.iter().cloned());
        }
        if let Some(path) = &self.mappings_path {
            builder = builder.mappings_path(path);
        }
        if let Some(version) = &self.engine_version {
            let version: EngineVersion = version
                .parse()
                .map_err(|e| CliError::ConfigError(format!("{e}")))?;
            builder = builder.version(version);
        }

        TokenizerFactory::new(&builder.build(), &Environment::new())
            .context("failed to compile word-boundary overrides")
    }

    /// Gather the input text from the positional argument, files, or stdin
    fn read_text(&self) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if !self.input.is_empty() {
            let mut combined = String::new();
            for path in &self.input {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read file: {}", path.display()))?;
                combined.push_str(&content);
                if !combined.ends_with('\n') {
                    combined.push('\n');
                }
            }
            return Ok(combined);
        }

        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        Ok(buffer)
    }

    /// Build the output formatter for the selected format and destination
    fn formatter(&self) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn std::io::Write> = match &self.output {
            Some(path) => Box::new(
                fs::File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?,
            ),
            None => Box::new(std::io::stdout()),
        };

        Ok(match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
