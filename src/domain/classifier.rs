//! Boundary classification rules
//!
//! Decides, one word at a time, whether the word ends the current sentence.
//! The decision is an ordered chain of named rules evaluated top to bottom;
//! the first rule with an opinion wins and anything unclaimed passes through.
//! The order is load-bearing: each rule assumes the earlier ones did not
//! match, and reordering changes how ambiguous abbreviations classify.

use super::abbreviations::AbbreviationSet;
use super::lexis;
use tracing::trace;

/// Classification of a single word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Verdict {
    /// The word closes the current sentence and belongs to it
    Terminator,
    /// The word continues the current sentence
    PassThrough,
    /// A bare newline acting as a hard boundary; belongs to no sentence
    NewlineBoundary,
}

/// Rule signature; `None` means "no opinion", letting the chain continue.
type Rule = fn(&Classifier<'_>, &str, Option<&str>) -> Option<Verdict>;

/// Ordered decision chain. First verdict wins.
///
/// Entries are closures rather than the methods themselves so the table
/// stays generic over the classifier lifetime; a direct method reference
/// would pin it to one instantiation.
const RULE_CHAIN: &[(&str, Rule)] = &[
    ("newline", |c, word, next| c.newline_rule(word, next)),
    ("hard terminator", |c, word, next| c.hard_terminator_rule(word, next)),
    ("trailing period", |c, word, next| c.trailing_period_rule(word, next)),
    ("embedded period", |c, word, next| c.embedded_period_rule(word, next)),
];

/// Applies the boundary heuristics with a bound abbreviation set.
pub(crate) struct Classifier<'a> {
    abbreviations: &'a AbbreviationSet,
    newline_boundary: bool,
}

impl<'a> Classifier<'a> {
    pub(crate) fn new(abbreviations: &'a AbbreviationSet, newline_boundary: bool) -> Self {
        Self {
            abbreviations,
            newline_boundary,
        }
    }

    /// Classify `word` given its neighbors.
    ///
    /// The preceding word is part of the interface but no current rule
    /// consults it.
    pub(crate) fn classify(&self, word: &str, _prev: Option<&str>, next: Option<&str>) -> Verdict {
        for (name, rule) in RULE_CHAIN {
            if let Some(verdict) = rule(self, word, next) {
                trace!(rule = name, word, ?verdict, "classified");
                return verdict;
            }
        }
        let verdict = Verdict::PassThrough;
        trace!(rule = "default", word, ?verdict, "classified");
        verdict
    }

    /// Bare newline in newline-boundary mode.
    fn newline_rule(&self, word: &str, _next: Option<&str>) -> Option<Verdict> {
        (self.newline_boundary && word == "\n").then_some(Verdict::NewlineBoundary)
    }

    /// Standalone `.`/`!`/`?` tokens and anything ending in `?` or `!`.
    ///
    /// Question and exclamation marks are never abbreviation exceptions.
    fn hard_terminator_rule(&self, word: &str, _next: Option<&str>) -> Option<Verdict> {
        (lexis::is_boundary_char(word) || word.ends_with(['?', '!']))
            .then_some(Verdict::Terminator)
    }

    /// The cascade for words ending in a period.
    fn trailing_period_rule(&self, word: &str, next: Option<&str>) -> Option<Verdict> {
        if !word.ends_with('.') {
            return None;
        }
        let Some(next) = next else {
            // End of stream always closes the sentence.
            return Some(Verdict::Terminator);
        };
        if is_single_initial(word) {
            return Some(Verdict::PassThrough);
        }
        if self.abbreviations.contains_word(word) {
            return Some(Verdict::PassThrough);
        }
        if lexis::is_sentence_starter(next) {
            if lexis::is_time_abbreviation(word, next) {
                return Some(Verdict::PassThrough);
            }
            if lexis::is_number(next) && lexis::is_custom_abbreviation(word) {
                return Some(Verdict::PassThrough);
            }
        } else {
            if word.ends_with("..") {
                return Some(Verdict::PassThrough);
            }
            if lexis::is_dotted_abbreviation(word) || lexis::is_custom_abbreviation(word) {
                return Some(Verdict::PassThrough);
            }
        }
        Some(Verdict::Terminator)
    }

    /// Internal dots: decimals, dotted abbreviations, URLs, phone numbers.
    ///
    /// Never terminates; unprotected internal punctuation is the merge
    /// engine's business (see [`embedded_break`]).
    fn embedded_period_rule(&self, word: &str, _next: Option<&str>) -> Option<Verdict> {
        let dot = word.find('.')?;
        if lexis::is_number_at(word, dot) {
            return Some(Verdict::PassThrough);
        }
        if lexis::is_dotted_abbreviation(word) {
            return Some(Verdict::PassThrough);
        }
        if lexis::is_url(word) || lexis::is_phone_number(word) {
            return Some(Verdict::PassThrough);
        }
        None
    }
}

/// Two characters ending in a dot, first not a digit: a single-letter
/// initial like "A.".
fn is_single_initial(word: &str) -> bool {
    let mut chars = word.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(first), Some('.'), None) if !first.is_ascii_digit()
    )
}

/// Where a concatenated word should be cut in two, if anywhere.
///
/// Upstream extraction can glue two sentences into one word
/// ("Barney.The"). The candidate cut is after the first `.` in the word
/// (falling back to the first `!`, then the first `?`) when that character
/// is not leading and is immediately followed by an ASCII letter. Only that
/// one candidate is considered. Words ending in terminal punctuation stay
/// whole (the trailing-period cascade owns them), as do words protected as
/// numbers, dotted abbreviations, URLs or phone numbers. Returns the byte
/// offset where the second part starts.
pub(crate) fn embedded_break(word: &str) -> Option<usize> {
    if lexis::ends_with_terminal(word) {
        return None;
    }
    let punct = word
        .find('.')
        .or_else(|| word.find('!'))
        .or_else(|| word.find('?'))?;
    let follower = word[punct + 1..].chars().next()?;
    if punct == 0 || !follower.is_ascii_alphabetic() {
        return None;
    }
    if lexis::is_number_at(word, punct)
        || lexis::is_dotted_abbreviation(word)
        || lexis::is_url(word)
        || lexis::is_phone_number(word)
    {
        return None;
    }
    Some(punct + 1)
}
