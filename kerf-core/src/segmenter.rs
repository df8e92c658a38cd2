//! Word-break state machine
//!
//! A single forward pass over the classified character stream. Between every
//! adjacent character pair the join rules below decide whether a boundary
//! exists; maximal unbroken runs that contain at least one anchoring
//! character become tokens.
//!
//! The rules are a condensed form of UAX #29 WB5-WB13b:
//!
//! - letter x letter, numeric x numeric, letter x numeric (both ways)
//! - letter (MidLetter | MidNumberLetter | SingleQuote) letter
//! - numeric (MidNumber | MidNumberLetter | SingleQuote) numeric
//! - ExtendedNumLetter joins to and from letters, numerics, and itself
//!
//! DoubleQuote appears in no join rule; like Break it always separates.

use crate::classify::CharClassifier;
use crate::types::{TokenSpan, WordBreakClass};

/// Segments text into token spans using a pluggable classifier
#[derive(Debug, Clone)]
pub struct Segmenter<C: CharClassifier> {
    classifier: C,
}

/// One classified character with its location
#[derive(Clone, Copy)]
struct Classified {
    byte: usize,
    ch: char,
    class: WordBreakClass,
}

impl<C: CharClassifier> Segmenter<C> {
    /// Create a segmenter around the given classifier
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }

    /// Access the underlying classifier
    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Segment `text` into token spans
    ///
    /// Spans are returned in input order and never overlap. Characters that
    /// end up outside every token (separators, unattached mid characters)
    /// are simply not covered by any span.
    pub fn segment(&self, text: &str) -> Vec<TokenSpan> {
        let chars: Vec<Classified> = text
            .char_indices()
            .map(|(byte, ch)| Classified {
                byte,
                ch,
                class: self.classifier.classify(ch),
            })
            .collect();

        let mut spans = Vec::new();
        let mut start = 0;
        for i in 1..=chars.len() {
            if i == chars.len() || breaks_between(&chars, i) {
                if chars[start..i].iter().any(|c| c.class.is_anchor()) {
                    let last = &chars[i - 1];
                    spans.push(TokenSpan {
                        byte_start: chars[start].byte,
                        byte_end: last.byte + last.ch.len_utf8(),
                        char_start: start,
                        char_end: i,
                    });
                }
                start = i;
            }
        }
        spans
    }
}

/// Does a word boundary fall between `chars[i - 1]` and `chars[i]`?
fn breaks_between(chars: &[Classified], i: usize) -> bool {
    use WordBreakClass::*;

    let left = chars[i - 1].class;
    let right = chars[i].class;
    let before_left = (i >= 2).then(|| chars[i - 2].class);
    let after_right = chars.get(i + 1).map(|c| c.class);

    match (left, right) {
        // WB5, WB8, WB9, WB10
        (Letter, Letter) | (Numeric, Numeric) | (Letter, Numeric) | (Numeric, Letter) => false,
        // WB13a / WB13b
        (Letter | Numeric | ExtendedNumLetter, ExtendedNumLetter) => false,
        (ExtendedNumLetter, Letter | Numeric) => false,
        // WB6: letter x mid, only if a letter follows the mid
        (Letter, MidLetter | MidNumberLetter | SingleQuote) => after_right != Some(Letter),
        // WB7: mid x letter, only if a letter precedes the mid
        (MidLetter | MidNumberLetter | SingleQuote, Letter) => before_left != Some(Letter),
        // WB12: numeric x mid, only if a numeric follows the mid
        (Numeric, MidNumber | MidNumberLetter | SingleQuote) => after_right != Some(Numeric),
        // WB11: mid x numeric, only if a numeric precedes the mid
        (MidNumber | MidNumberLetter | SingleQuote, Numeric) => before_left != Some(Numeric),
        _ => true,
    }
}
