//! Output formatting module

use anyhow::Result;
use kerf_engine::Token;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single token
    fn format_token(&mut self, token: &Token) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
