//! Rule-based English sentence boundary detection with offset-preserving
//! spans
//!
//! Text is split into whitespace-delimited words, each word is classified
//! by an ordered chain of boundary rules (terminal punctuation, known
//! abbreviations, numbers, URLs, phone numbers), and consecutive words are
//! merged into sentence spans. Every span records where it sits in the
//! source, so results map back onto the original text byte for byte;
//! nothing is normalized or rewritten along the way.
//!
//! Input can be raw text or tokens pre-positioned by an upstream extractor
//! (for example an HTML stripper); in the latter case span offsets point
//! into the original markup, not the extracted text.
//!
//! # Example
//!
//! ```rust
//! use sentspan::Segmenter;
//!
//! let segmenter = Segmenter::new();
//! let spans = segmenter.segment("On Jan. 20, it snowed. Nobody minded.");
//!
//! let sentences: Vec<&str> = spans.iter().map(|s| s.value.as_str()).collect();
//! assert_eq!(sentences, ["On Jan. 20, it snowed.", " Nobody minded."]);
//!
//! // Spans index into the source text.
//! assert_eq!((spans[1].index, spans[1].offset), (22, 15));
//! ```

#![warn(missing_docs)]

mod api;
mod domain;
mod error;
mod tokenizer;
mod types;

pub use api::{Input, Segmenter, SegmenterBuilder, SegmenterConfig};
pub use domain::abbreviations::AbbreviationSet;
pub use error::{Error, Result};
pub use tokenizer::{WhitespaceTokenizer, WordTokenizer};
pub use types::{SentenceSpan, Token, Word};
