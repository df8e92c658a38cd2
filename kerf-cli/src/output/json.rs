//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use kerf_engine::Token;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs tokens as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    tokens: Vec<TokenData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenData {
    /// The token text
    pub text: String,
    /// Starting byte offset in the original text
    pub start: usize,
    /// Ending byte offset in the original text
    pub end: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            tokens: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_token(&mut self, token: &Token) -> Result<()> {
        self.tokens.push(TokenData {
            text: token.text.clone(),
            start: token.span.byte_start,
            end: token.span.byte_end,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.tokens)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kerf_engine::TokenSpan;

    #[test]
    fn test_json_array_output() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer);
            formatter
                .format_token(&Token {
                    text: "foo".to_string(),
                    span: TokenSpan {
                        byte_start: 0,
                        byte_end: 3,
                        char_start: 0,
                        char_end: 3,
                    },
                })
                .unwrap();
            formatter.finish().unwrap();
        }
        let parsed: Vec<TokenData> =
            serde_json::from_slice(&buffer).expect("output should be valid JSON");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].text, "foo");
        assert_eq!(parsed[0].start, 0);
        assert_eq!(parsed[0].end, 3);
    }
}
