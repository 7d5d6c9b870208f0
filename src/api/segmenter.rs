//! Sentence segmenter
//!
//! Front door of the crate: owns the tokenizer, the abbreviation
//! dictionary and the configuration, and wires them through the
//! classification and merge stages.

use std::borrow::Cow;
use std::sync::Arc;

use tracing::debug;

use super::config::SegmenterConfig;
use super::input::Input;
use crate::domain::abbreviations::AbbreviationSet;
use crate::domain::classifier::Classifier;
use crate::domain::merge::merge_words;
use crate::tokenizer::{scan_chunks, WhitespaceTokenizer, WordTokenizer};
use crate::types::{SentenceSpan, SourceText, Word};

/// Segments text into sentence spans.
///
/// Segmentation is deterministic and never fails; malformed input yields
/// fewer or stranger sentences, not errors. A segmenter is immutable after
/// construction and can be shared across threads.
///
/// # Example
///
/// ```
/// use sentspan::Segmenter;
///
/// let segmenter = Segmenter::new();
/// let spans = segmenter.segment("This is my first sentence. Second one.");
/// assert_eq!(spans.len(), 2);
/// assert_eq!(spans[0].value, "This is my first sentence.");
/// assert_eq!((spans[1].index, spans[1].offset), (26, 12));
/// ```
pub struct Segmenter {
    tokenizer: Arc<dyn WordTokenizer>,
    abbreviations: Cow<'static, AbbreviationSet>,
    config: SegmenterConfig,
}

impl Segmenter {
    /// Segmenter with the bundled English dictionary and default
    /// configuration.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start building a customized segmenter.
    pub fn builder() -> SegmenterBuilder {
        SegmenterBuilder::default()
    }

    /// Segmenter with `config` and the bundled English dictionary.
    pub fn with_config(config: SegmenterConfig) -> Self {
        let mut segmenter = Self::new();
        segmenter.config = config;
        segmenter
    }

    /// Split `input` into sentence spans.
    ///
    /// Accepts anything convertible to [`Input`]: `&str`, `String`, or a
    /// `Vec<Token>` of pre-positioned tokens. Offsets in the returned spans
    /// point into the input's coordinate space.
    pub fn segment(&self, input: impl Into<Input>) -> Vec<SentenceSpan> {
        match input.into() {
            Input::Text(text) => {
                let words = self.tokenizer.tokenize(&text);
                self.run(&words, &SourceText::Plain(&text))
            }
            Input::Tokens(tokens) => {
                let words = scan_chunks(self.tokenizer.as_ref(), &tokens);
                self.run(&words, &SourceText::Chunks(&tokens))
            }
        }
    }

    fn run(&self, words: &[Word<'_>], source: &SourceText<'_>) -> Vec<SentenceSpan> {
        let classifier = Classifier::new(
            self.abbreviations.as_ref(),
            self.config.newline_boundary,
        );
        let spans = merge_words(words, source, &classifier);
        debug!(
            words = words.len(),
            sentences = spans.len(),
            "segmented input"
        );
        spans
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`Segmenter`].
///
/// Every knob is optional; [`build`](Self::build) cannot fail.
#[derive(Default)]
pub struct SegmenterBuilder {
    tokenizer: Option<Arc<dyn WordTokenizer>>,
    abbreviations: Option<AbbreviationSet>,
    config: SegmenterConfig,
}

impl SegmenterBuilder {
    /// Replace the whitespace scanner.
    pub fn tokenizer(mut self, tokenizer: impl WordTokenizer + 'static) -> Self {
        self.tokenizer = Some(Arc::new(tokenizer));
        self
    }

    /// Use a custom abbreviation dictionary instead of the bundled English
    /// one.
    pub fn abbreviations(mut self, abbreviations: AbbreviationSet) -> Self {
        self.abbreviations = Some(abbreviations);
        self
    }

    /// Toggle newline boundary handling (on by default).
    pub fn newline_boundary(mut self, enabled: bool) -> Self {
        self.config.newline_boundary = enabled;
        self
    }

    /// Finish the segmenter.
    pub fn build(self) -> Segmenter {
        Segmenter {
            tokenizer: self
                .tokenizer
                .unwrap_or_else(|| Arc::new(WhitespaceTokenizer)),
            abbreviations: self
                .abbreviations
                .map(Cow::Owned)
                .unwrap_or_else(|| Cow::Borrowed(AbbreviationSet::english())),
            config: self.config,
        }
    }
}
