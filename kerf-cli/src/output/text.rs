//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use kerf_engine::Token;
use std::io::Write;

/// Text formatter - outputs one token per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_token(&mut self, token: &Token) -> Result<()> {
        writeln!(self.writer, "{}", token.text)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kerf_engine::TokenSpan;

    fn token(text: &str, byte_start: usize) -> Token {
        Token {
            text: text.to_string(),
            span: TokenSpan {
                byte_start,
                byte_end: byte_start + text.len(),
                char_start: byte_start,
                char_end: byte_start + text.chars().count(),
            },
        }
    }

    #[test]
    fn test_one_token_per_line() {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer);
            formatter.format_token(&token("foo", 0)).unwrap();
            formatter.format_token(&token("bar", 4)).unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(buffer).unwrap(), "foo\nbar\n");
    }
}
