//! Backslash-escape decoding for rule strings
//!
//! Rule files need a way to spell whitespace and the separator characters
//! themselves, so both sides of a mapping rule use the same escape syntax
//! as the classic mapping char-filter format: `\\`, `\n`, `\t`, `\r`,
//! `\b`, `\f` and `\uXXXX`. Any other escaped character is passed through
//! with the backslash dropped.

use crate::error::MalformedEscape;

/// Decode an escaped source string into its literal content
///
/// Pure function; the input is never modified. Errors when a backslash is
/// the last character, or a `\u` escape lacks four hex digits naming a
/// valid code point.
pub fn decode(input: &str) -> Result<String, MalformedEscape> {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        let escaped = chars
            .next()
            .ok_or_else(|| MalformedEscape::TrailingBackslash(input.to_string()))?;
        match escaped {
            '\\' => out.push('\\'),
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'b' => out.push('\u{0008}'),
            'f' => out.push('\u{000C}'),
            'u' => out.push(decode_unicode(input, &mut chars)?),
            other => out.push(other),
        }
    }
    Ok(out)
}

fn decode_unicode(input: &str, chars: &mut std::str::Chars<'_>) -> Result<char, MalformedEscape> {
    let mut value: u32 = 0;
    for _ in 0..4 {
        let digit = chars
            .next()
            .ok_or_else(|| MalformedEscape::TruncatedUnicode(input.to_string()))?;
        let digit = digit
            .to_digit(16)
            .ok_or_else(|| MalformedEscape::InvalidCodePoint(input.to_string()))?;
        value = value * 16 + digit;
    }
    char::from_u32(value).ok_or_else(|| MalformedEscape::InvalidCodePoint(input.to_string()))
}
