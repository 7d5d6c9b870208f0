//! Token merge engine
//!
//! Folds the classified word stream into sentence spans with absolute
//! source ranges. The engine is a two-state machine: it is either seeking
//! the start of the next sentence or accumulating an open one. Terminators
//! close the open range at the word's end; the following sentence resumes
//! exactly there, so inter-sentence whitespace lands at the front of the
//! next span and reconstruction stays lossless. Newline boundaries close
//! the range without the newline and resume after it.

use super::classifier::{embedded_break, Classifier, Verdict};
use crate::types::{SentenceSpan, SourceText, Word};

/// Merge progress between words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MergeState {
    /// No sentence open; the next one starts at `resume_at`, or at the next
    /// word's own position when `None` (stream start)
    Seeking { resume_at: Option<usize> },
    /// A sentence is open covering `start..end` of the source
    Accumulating { start: usize, end: usize },
}

impl MergeState {
    /// Fold a word covering `word_start..word_end` into the open range.
    fn extend(self, word_start: usize, word_end: usize) -> Self {
        match self {
            MergeState::Seeking { resume_at } => MergeState::Accumulating {
                start: resume_at.unwrap_or(word_start),
                end: word_end,
            },
            MergeState::Accumulating { start, .. } => MergeState::Accumulating {
                start,
                end: word_end,
            },
        }
    }
}

/// Run the classifier over `words` and merge them into sentence spans.
pub(crate) fn merge_words(
    words: &[Word<'_>],
    source: &SourceText<'_>,
    classifier: &Classifier<'_>,
) -> Vec<SentenceSpan> {
    let mut spans = Vec::new();
    let mut state = MergeState::Seeking { resume_at: None };

    for (i, word) in words.iter().enumerate() {
        let prev = i.checked_sub(1).map(|p| words[p].text);
        let next = words.get(i + 1).map(|w| w.text);

        match classifier.classify(word.text, prev, next) {
            Verdict::Terminator => {
                state = state.extend(word.start, word.end());
                state = finalize(state, source, &mut spans);
            }
            Verdict::NewlineBoundary => {
                finalize(state, source, &mut spans);
                // The newline belongs to no sentence; resume past it.
                state = MergeState::Seeking {
                    resume_at: Some(word.end()),
                };
            }
            Verdict::PassThrough => match embedded_break(word.text) {
                Some(cut) => {
                    let cut_abs = word.start + cut;
                    state = state.extend(word.start, cut_abs);
                    state = finalize(state, source, &mut spans);
                    // The second half opens the next sentence, unexamined.
                    state = state.extend(cut_abs, word.end());
                }
                None => {
                    state = state.extend(word.start, word.end());
                }
            },
        }
    }

    // Stream exhausted: an open span is emitted even without a terminator.
    finalize(state, source, &mut spans);
    spans
}

/// Close the open span, if any, and push it.
fn finalize(
    state: MergeState,
    source: &SourceText<'_>,
    spans: &mut Vec<SentenceSpan>,
) -> MergeState {
    match state {
        MergeState::Accumulating { start, end } => {
            // Malformed upstream positions can leave `end` behind `start`;
            // the range degrades to empty instead of underflowing.
            spans.push(SentenceSpan {
                value: source.extract(start, end),
                index: start,
                offset: end.saturating_sub(start),
            });
            MergeState::Seeking {
                resume_at: Some(end),
            }
        }
        seeking @ MergeState::Seeking { .. } => seeking,
    }
}
