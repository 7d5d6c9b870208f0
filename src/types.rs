//! Core data types for sentence boundary detection

use serde::{Deserialize, Serialize};

/// A token of source text with its absolute position.
///
/// Tokens are the exchange format for pre-tokenized input: upstream
/// extraction (for example HTML-to-text) hands the segmenter an ordered
/// sequence of tokens whose `index` values point back into the original
/// markup. `value` must appear contiguously in the source starting at
/// `index`; gaps (stripped markup) may only occur between tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Text of the token
    pub value: String,
    /// Absolute byte offset of `value` in the original source
    pub index: usize,
    /// Byte length of `value`
    pub offset: usize,
}

impl Token {
    /// Create a token at `index`, deriving `offset` from the value length.
    pub fn new(value: impl Into<String>, index: usize) -> Self {
        let value = value.into();
        let offset = value.len();
        Self {
            value,
            index,
            offset,
        }
    }

    /// End position of the token in the original source (`index + offset`).
    pub fn end(&self) -> usize {
        self.index + self.offset
    }
}

/// One detected sentence with its absolute source range.
///
/// `value` concatenates the sentence's tokens with the original inter-token
/// separators preserved. `offset` measures the covered source range
/// (`end - index`); for pre-tokenized input whose tokens do not tile the
/// source, the range includes gaps and `offset` exceeds `value.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceSpan {
    /// Sentence text as present in the source
    pub value: String,
    /// Absolute byte offset of the first constituent token
    pub index: usize,
    /// Length of the covered source range in bytes
    pub offset: usize,
}

impl SentenceSpan {
    /// End position of the span in the original source (`index + offset`).
    pub fn end(&self) -> usize {
        self.index + self.offset
    }
}

/// A single word produced by a [`WordTokenizer`](crate::WordTokenizer).
///
/// Borrows from the text it was scanned from; `start` is a byte offset into
/// the original source (the segmenter shifts chunk-relative positions to
/// absolute ones before classification).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word<'a> {
    /// Word text, without surrounding whitespace
    pub text: &'a str,
    /// Absolute byte offset of the word in the source
    pub start: usize,
}

impl Word<'_> {
    /// End position of the word (`start + text.len()`).
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// View of the source text that spans are extracted from.
///
/// Plain input knows every byte; chunked input only knows the ranges covered
/// by its tokens, so extraction skips the gaps in between.
pub(crate) enum SourceText<'a> {
    /// Raw text, positions are direct byte offsets
    Plain(&'a str),
    /// Pre-built tokens covering disjoint, ascending ranges
    Chunks(&'a [Token]),
}

impl SourceText<'_> {
    /// Extract the text covered by `start..end`.
    ///
    /// Out-of-range or misaligned positions degrade to empty contributions
    /// rather than panicking; malformed chunk offsets therefore produce
    /// undefined but safe output.
    pub(crate) fn extract(&self, start: usize, end: usize) -> String {
        match self {
            SourceText::Plain(text) => text.get(start..end).unwrap_or_default().to_string(),
            SourceText::Chunks(chunks) => {
                let mut out = String::new();
                for chunk in chunks.iter() {
                    let chunk_start = chunk.index;
                    let chunk_end = chunk.index + chunk.value.len();
                    let lo = start.max(chunk_start);
                    let hi = end.min(chunk_end);
                    if lo < hi {
                        if let Some(part) = chunk.value.get(lo - chunk_start..hi - chunk_start) {
                            out.push_str(part);
                        }
                    }
                }
                out
            }
        }
    }
}
