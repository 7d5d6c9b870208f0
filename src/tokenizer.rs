//! Whitespace word scanning
//!
//! Segmentation operates on whitespace-delimited words, never on raw
//! characters. The scanner records the byte position of every word so the
//! downstream spans can point back into the source unchanged. Line feeds
//! are surfaced as words of their own; whether they terminate a sentence
//! is a classification decision, not a scanning one.

use crate::types::{Token, Word};

/// Splits source text into positioned words.
///
/// Implementations must keep `start` a byte offset into the scanned text
/// and must not alter word content; span extraction depends on both.
pub trait WordTokenizer: Send + Sync {
    /// Scan `text` into words carrying their byte offsets.
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Word<'a>>;
}

/// Default scanner: a word is a maximal run of non-whitespace, plus a
/// standalone word for each `\n`.
///
/// All other whitespace (spaces, tabs, `\r`) only separates words. A CRLF
/// pair therefore still yields exactly one newline word.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl WordTokenizer for WhitespaceTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Word<'a>> {
        let mut words = Vec::new();
        let mut start = None;
        for (i, ch) in text.char_indices() {
            if ch.is_whitespace() {
                if let Some(s) = start.take() {
                    words.push(Word {
                        text: &text[s..i],
                        start: s,
                    });
                }
                if ch == '\n' {
                    words.push(Word {
                        text: &text[i..i + 1],
                        start: i,
                    });
                }
            } else if start.is_none() {
                start = Some(i);
            }
        }
        if let Some(s) = start {
            words.push(Word {
                text: &text[s..],
                start: s,
            });
        }
        words
    }
}

/// Tokenize pre-split chunks, shifting each word into the absolute
/// coordinates the chunks carry.
pub(crate) fn scan_chunks<'a>(
    tokenizer: &dyn WordTokenizer,
    chunks: &'a [Token],
) -> Vec<Word<'a>> {
    let mut words = Vec::new();
    for chunk in chunks {
        for mut word in tokenizer.tokenize(&chunk.value) {
            word.start += chunk.index;
            words.push(word);
        }
    }
    words
}
