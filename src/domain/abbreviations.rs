//! Abbreviation dictionary
//!
//! A flat, immutable set of known abbreviation strings. The bundled English
//! set is embedded at compile time and parsed once on first use; callers can
//! also supply their own set, either programmatically or as a TOML document
//! using the same schema as the bundled file.

use crate::domain::lexis::strip_non_word;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

static ENGLISH: OnceLock<AbbreviationSet> = OnceLock::new();

const ENGLISH_TOML: &str = include_str!("../../configs/english.toml");

#[derive(Debug, Deserialize)]
struct DictionaryFile {
    #[serde(default)]
    metadata: Option<Metadata>,
    abbreviations: Categories,
}

#[derive(Debug, Deserialize)]
struct Metadata {
    code: String,
}

#[derive(Debug, Deserialize)]
struct Categories {
    #[serde(flatten)]
    categories: HashMap<String, Vec<String>>,
}

/// Immutable set of abbreviation strings.
///
/// Lookups strip non-word characters from the queried token and then match
/// case-sensitively: "Mr." and "(Mr)." both hit an entry "Mr", while "mr."
/// does not. Entries are stored exactly as listed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbbreviationSet {
    entries: HashSet<String>,
}

impl AbbreviationSet {
    /// The bundled English abbreviation set.
    ///
    /// Parsed from the embedded dictionary on first call; later calls return
    /// the same instance. Panics only if the embedded data is malformed,
    /// which is covered by tests.
    pub fn english() -> &'static AbbreviationSet {
        ENGLISH.get_or_init(|| {
            let (code, entries) = parse_document(ENGLISH_TOML)
                .expect("embedded English abbreviation dictionary must parse");
            assert_eq!(
                code.as_deref(),
                Some("en"),
                "embedded English abbreviation dictionary has wrong code"
            );
            AbbreviationSet { entries }
        })
    }

    /// Build a set from explicit entries.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a set from a TOML document.
    ///
    /// The document uses the same schema as the bundled dictionary: an
    /// `[abbreviations]` table whose entries are arrays of strings grouped
    /// into arbitrarily named categories, plus an optional `[metadata]`
    /// table.
    ///
    /// # Example
    ///
    /// ```
    /// use sentspan::AbbreviationSet;
    ///
    /// let set = AbbreviationSet::from_toml_str(
    ///     "[abbreviations]\nstreets = [\"Blvd\", \"Ave\"]\n",
    /// )?;
    /// assert!(set.contains_word("Blvd."));
    /// # Ok::<(), sentspan::Error>(())
    /// ```
    pub fn from_toml_str(document: &str) -> Result<Self> {
        let (_, entries) = parse_document(document)?;
        Ok(Self { entries })
    }

    /// Look up a token, stripping non-word characters first.
    pub fn contains_word(&self, word: &str) -> bool {
        self.entries.contains(strip_non_word(word).as_str())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the set has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_document(document: &str) -> Result<(Option<String>, HashSet<String>)> {
    let file: DictionaryFile =
        toml::from_str(document).map_err(|e| Error::Dictionary(e.to_string()))?;
    let mut entries = HashSet::new();
    for list in file.abbreviations.categories.into_values() {
        entries.extend(list);
    }
    Ok((file.metadata.map(|m| m.code), entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_contains_expected_entries() {
        let set = AbbreviationSet::english();
        for entry in ["Mr", "Mrs", "Dr", "Prof", "Jan", "Dec", "Sen", "No", "vs"] {
            assert!(set.entries.contains(entry), "missing entry: {entry}");
        }
    }

    #[test]
    fn test_english_excludes_ordinary_words() {
        let set = AbbreviationSet::english();
        assert!(!set.contains_word("US"));
        assert!(!set.contains_word("First"));
        assert!(!set.contains_word("word"));
    }

    #[test]
    fn test_english_is_shared() {
        let a = AbbreviationSet::english();
        let b = AbbreviationSet::english();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_contains_word_strips_punctuation() {
        let set = AbbreviationSet::english();
        assert!(set.contains_word("Jan."));
        assert!(set.contains_word("(Mr)."));
        assert!(set.contains_word("Sen"));
    }

    #[test]
    fn test_contains_word_is_case_sensitive() {
        let set = AbbreviationSet::english();
        assert!(set.contains_word("Mr."));
        assert!(!set.contains_word("mr."));
        assert!(!set.contains_word("JAN."));
    }

    #[test]
    fn test_dotted_entries_are_inert() {
        // "U.S" is a listed entry, but a stripped query can never contain
        // a dot, so the entry can never match.
        let set = AbbreviationSet::english();
        assert!(!set.contains_word("U.S."));
    }

    #[test]
    fn test_from_entries() {
        let set = AbbreviationSet::from_entries(["Blvd", "Ave"]);
        assert_eq!(set.len(), 2);
        assert!(set.contains_word("Blvd."));
        assert!(!set.contains_word("Mr."));
    }

    #[test]
    fn test_from_toml_str() {
        let set = AbbreviationSet::from_toml_str(
            r#"
            [metadata]
            code = "x-test"

            [abbreviations]
            one = ["Aaa", "Bbb"]
            two = ["Ccc"]
            "#,
        )
        .unwrap();
        assert_eq!(set.len(), 3);
        assert!(set.contains_word("Ccc."));
    }

    #[test]
    fn test_from_toml_str_without_metadata() {
        let set = AbbreviationSet::from_toml_str("[abbreviations]\nx = [\"Qq\"]\n").unwrap();
        assert!(set.contains_word("Qq"));
    }

    #[test]
    fn test_from_toml_str_rejects_malformed() {
        let err = AbbreviationSet::from_toml_str("not toml [").unwrap_err();
        assert!(matches!(err, Error::Dictionary(_)));
    }

    #[test]
    fn test_from_toml_str_requires_abbreviations_table() {
        assert!(AbbreviationSet::from_toml_str("[metadata]\ncode = \"en\"\n").is_err());
    }

    #[test]
    fn test_empty_set() {
        let set = AbbreviationSet::default();
        assert!(set.is_empty());
        assert!(!set.contains_word("Mr."));
    }
}
