//! Lexical predicates for boundary classification
//!
//! Small pure functions over token values. These encode the shapes the
//! classifier must tell apart: capitalized words, numerals, quoted openings,
//! dotted abbreviations, decimal numbers, URLs and phone numbers. Pattern
//! tests are fixed regular expressions compiled once; classification results
//! are compatibility-sensitive, so the patterns are not meant to be tuned.

use regex::Regex;
use std::sync::LazyLock;

/// Generic host-name / URL shape, also matching e-mail addresses.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[-a-zA-Z0-9@:%._+~#=]{2,256}\.[a-z]{2,6}\b[-a-zA-Z0-9@:%_+.~#?&/=]*")
        .expect("URL pattern must compile")
});

/// North-American phone number, optionally with country/area code and
/// extension; separators may be dots, which is why the classifier consults it.
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?:\+?1\s*(?:[.-]\s*)?)?(?:\(\s*(?:[2-9]1[02-9]|[2-9][02-8]1|[2-9][02-8][02-9])\s*\)|(?:[2-9]1[02-9]|[2-9][02-8]1|[2-9][02-8][02-9]))\s*(?:[.-]\s*)?)?(?:[2-9]1[02-9]|[2-9][02-9]1|[2-9][02-9]{2})\s*(?:[.-]\s*)?(?:[0-9]{4})(?:\s*(?:#|x\.?|ext\.?|extension)\s*(?:\d+))?$",
    )
    .expect("phone pattern must compile")
});

/// One or more "any char followed by a dot" pairs, anchored at the start.
static DOTTED_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:.\.)+").expect("dotted pattern must compile"));

/// True iff `word` is a standalone terminator token: `.`, `!` or `?`.
#[inline]
pub(crate) fn is_boundary_char(word: &str) -> bool {
    matches!(word, "." | "!" | "?")
}

/// True iff the last character of `s` is `.`, `!` or `?`.
#[inline]
pub(crate) fn ends_with_terminal(s: &str) -> bool {
    s.ends_with(['.', '!', '?'])
}

/// Uppercase-then-lowercase start, or a numeral.
///
/// All-caps words do not count; numbers do, so that "42" can open a sentence.
pub(crate) fn is_capitalized(s: &str) -> bool {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(first), Some(second))
            if first.is_ascii_uppercase() && second.is_ascii_lowercase() =>
        {
            true
        }
        _ => is_number(s),
    }
}

/// Does `s` look like the start of a new sentence?
///
/// Capitalized words and numerals qualify, as does an opening quote mark
/// (double backtick pair, straight double or single quote) within the first
/// two characters.
pub(crate) fn is_sentence_starter(s: &str) -> bool {
    if is_capitalized(s) {
        return true;
    }
    let head: String = s.chars().take(2).collect();
    head == "``" || head.contains('"') || head.contains('\'')
}

/// "a.m." / "p.m." followed by a day-like word ("Monday", "today", ...).
pub(crate) fn is_time_abbreviation(word: &str, next: &str) -> bool {
    if word != "a.m." && word != "p.m." {
        return false;
    }
    strip_non_word(next).to_ascii_lowercase().ends_with("day")
}

/// Dotted abbreviation shape ("U.S.", "I.C.T"), brackets ignored.
pub(crate) fn is_dotted_abbreviation(word: &str) -> bool {
    let cleaned: String = word
        .chars()
        .filter(|c| !matches!(c, '(' | ')' | '[' | ']' | '{' | '}'))
        .collect();
    DOTTED_PATTERN.is_match(&cleaned)
}

/// Short or capitalized word treated as a plausible ad-hoc abbreviation.
///
/// The length check counts the trailing dot, so "Go." qualifies by length
/// and "Prof." by capitalization.
pub(crate) fn is_custom_abbreviation(word: &str) -> bool {
    word.chars().count() <= 3 || is_capitalized(word)
}

/// Does `s` parse as a numeric literal?
///
/// Word forms accepted by the float parser ("inf", "NaN") are rejected;
/// exponent notation is kept.
pub(crate) fn is_number(s: &str) -> bool {
    s.parse::<f64>().is_ok()
        && !s
            .chars()
            .any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E'))
}

/// Numeric test on the up-to-3-character window centered on byte `pos`.
///
/// `pos` must sit on a character boundary; the window clamps at the edges of
/// the word ("3.14" at the dot gives "3.1", "9." at the dot gives "9.").
pub(crate) fn is_number_at(s: &str, pos: usize) -> bool {
    let Some(center) = s[pos..].chars().next() else {
        return false;
    };
    let mut window = String::with_capacity(6);
    if let Some(before) = s[..pos].chars().next_back() {
        window.push(before);
    }
    window.push(center);
    if let Some(after) = s[pos + center.len_utf8()..].chars().next() {
        window.push(after);
    }
    is_number(&window)
}

/// North-American phone number test (whole-string match).
pub(crate) fn is_phone_number(s: &str) -> bool {
    PHONE_PATTERN.is_match(s)
}

/// Host-name / URL / e-mail test (substring match).
pub(crate) fn is_url(s: &str) -> bool {
    URL_PATTERN.is_match(s)
}

/// Remove every character outside `[A-Za-z0-9_]`.
pub(crate) fn strip_non_word(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_char() {
        assert!(is_boundary_char("."));
        assert!(is_boundary_char("!"));
        assert!(is_boundary_char("?"));
        assert!(!is_boundary_char(".."));
        assert!(!is_boundary_char("a."));
        assert!(!is_boundary_char(""));
    }

    #[test]
    fn test_ends_with_terminal() {
        assert!(ends_with_terminal("word."));
        assert!(ends_with_terminal("why?"));
        assert!(ends_with_terminal("now!"));
        assert!(!ends_with_terminal("word"));
        assert!(!ends_with_terminal(""));
    }

    #[test]
    fn test_capitalized() {
        assert!(is_capitalized("Hello"));
        assert!(is_capitalized("McDonald"));
        assert!(!is_capitalized("hello"));
        assert!(!is_capitalized("HELLO"));
        assert!(!is_capitalized("H"));
    }

    #[test]
    fn test_capitalized_numbers() {
        // Numerals count as capitalized so they can start sentences.
        assert!(is_capitalized("42"));
        assert!(is_capitalized("3.5"));
        assert!(!is_capitalized("42,"));
    }

    #[test]
    fn test_sentence_starter() {
        assert!(is_sentence_starter("Hello"));
        assert!(is_sentence_starter("42"));
        assert!(is_sentence_starter("\"Quoted"));
        assert!(is_sentence_starter("'twas"));
        assert!(is_sentence_starter("``speech"));
        assert!(!is_sentence_starter("`x"));
        assert!(!is_sentence_starter("lower"));
        assert!(!is_sentence_starter("UPPER"));
    }

    #[test]
    fn test_time_abbreviation() {
        assert!(is_time_abbreviation("a.m.", "Monday"));
        assert!(is_time_abbreviation("p.m.", "today"));
        assert!(is_time_abbreviation("p.m.", "Tuesday,"));
        assert!(!is_time_abbreviation("A.M.", "Monday"));
        assert!(!is_time_abbreviation("a.m.", "We"));
        assert!(!is_time_abbreviation("noon", "Monday"));
    }

    #[test]
    fn test_dotted_abbreviation() {
        assert!(is_dotted_abbreviation("U.S."));
        assert!(is_dotted_abbreviation("I.C.T"));
        assert!(is_dotted_abbreviation("(U.S.)"));
        assert!(is_dotted_abbreviation("e.g."));
        assert!(!is_dotted_abbreviation("Mr."));
        assert!(!is_dotted_abbreviation("word"));
    }

    #[test]
    fn test_dotted_abbreviation_leading_dots() {
        // A leading ellipsis forms "any char + dot" pairs and is protected.
        assert!(is_dotted_abbreviation("...well"));
    }

    #[test]
    fn test_custom_abbreviation() {
        assert!(is_custom_abbreviation("Go."));
        assert!(is_custom_abbreviation("No."));
        assert!(is_custom_abbreviation("Prof."));
        assert!(is_custom_abbreviation("Barney."));
        assert!(!is_custom_abbreviation("word."));
        assert!(!is_custom_abbreviation("lowercase."));
    }

    #[test]
    fn test_number() {
        assert!(is_number("42"));
        assert!(is_number("3.14"));
        assert!(is_number("-2.5"));
        assert!(is_number("1e5"));
        assert!(is_number(".5"));
        assert!(is_number("4."));
        assert!(!is_number("abc"));
        assert!(!is_number(""));
        assert!(!is_number("inf"));
        assert!(!is_number("NaN"));
        assert!(!is_number("20,"));
    }

    #[test]
    fn test_number_at_window() {
        assert!(is_number_at("3.14", 1));
        assert!(is_number_at("1.2.3", 1));
        assert!(is_number_at("x9.5", 2));
        assert!(!is_number_at("late.Night", 4));
        assert!(!is_number_at("a.m", 1));
    }

    #[test]
    fn test_number_at_edges() {
        // Window clamps when the dot is the first or last character.
        assert!(is_number_at("9.", 1));
        assert!(is_number_at(".5", 0));
    }

    #[test]
    fn test_phone_number() {
        assert!(is_phone_number("555-0199"));
        assert!(is_phone_number("(202) 555-0199"));
        assert!(is_phone_number("202.555.0199"));
        assert!(is_phone_number("1-800-555-0199"));
        assert!(!is_phone_number("123-4567"));
        assert!(!is_phone_number("555-0199x"));
        assert!(!is_phone_number("word"));
    }

    #[test]
    fn test_url() {
        assert!(is_url("www.google.fr"));
        assert!(is_url("https://www.google.fr."));
        assert!(is_url("example.com/path?q=1"));
        assert!(is_url("user@example.org"));
        assert!(!is_url("word"));
        assert!(!is_url("x.y"));
    }

    #[test]
    fn test_url_requires_lowercase_tld() {
        // Capital after the dot fails the host pattern, so concatenated
        // sentences like "Barney.The" are not mistaken for URLs.
        assert!(!is_url("Barney.The"));
    }

    #[test]
    fn test_strip_non_word() {
        assert_eq!(strip_non_word("U.S."), "US");
        assert_eq!(strip_non_word("Mr."), "Mr");
        assert_eq!(strip_non_word("(a.m.)"), "am");
        assert_eq!(strip_non_word("it's"), "its");
        assert_eq!(strip_non_word("under_score"), "under_score");
        assert_eq!(strip_non_word("..."), "");
    }
}
