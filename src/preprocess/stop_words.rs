use ahash::RandomState;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_STOP_WORD_DELIMITER;

/// Stop-word set
/// Words are stored lower-cased; iteration follows insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StopWords {
    words: IndexSet<String, RandomState>,
}

impl StopWords {
    pub fn new() -> Self {
        Self { words: IndexSet::with_hasher(RandomState::new()) }
    }

    /// Parse a stop-word list: one word per line, trimmed, blank lines skipped
    pub fn from_lines(text: &str) -> Self {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }

    #[inline]
    pub fn insert(&mut self, word: &str) -> bool {
        self.words.insert(word.to_lowercase())
    }

    /// Case-insensitive membership
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word.to_lowercase().as_str())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Drop stop words from one document
    ///
    /// The document is split on single spaces, not on whitespace runs,
    /// and survivors are rejoined with single spaces.
    pub fn filter(&self, text: &str) -> String {
        text.split(DEFAULT_STOP_WORD_DELIMITER)
            .filter(|word| !self.contains(word))
            .collect::<Vec<&str>>()
            .join(DEFAULT_STOP_WORD_DELIMITER)
    }
}

impl<S> FromIterator<S> for StopWords
where
    S: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = StopWords::new();
        for word in iter {
            set.insert(word.as_ref());
        }
        set
    }
}

/// Remove stop words from every document, keeping document order
pub fn remove_stop_words<S>(documents: &[S], stop_words: &StopWords) -> Vec<String>
where
    S: AsRef<str>,
{
    documents
        .iter()
        .map(|doc| stop_words.filter(doc.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_listed_words() {
        let stop: StopWords = ["the"].into_iter().collect();
        assert_eq!(remove_stop_words(&["the cat sat"], &stop), vec!["cat sat"]);
    }

    #[test]
    fn membership_is_case_insensitive() {
        let stop: StopWords = ["The", "a"].into_iter().collect();
        assert_eq!(stop.filter("THE Cat and A dog"), "Cat and dog");
        assert!(stop.contains("the"));
    }

    #[test]
    fn splits_on_single_spaces_only() {
        let stop: StopWords = ["the"].into_iter().collect();
        // double space leaves an empty word that survives
        assert_eq!(stop.filter("cat  the sat"), "cat  sat");
        // a tab is not a delimiter
        assert_eq!(stop.filter("the\tcat the"), "the\tcat");
    }

    #[test]
    fn parses_stop_word_file() {
        let stop = StopWords::from_lines("the\n  a \n\nDe\r\n");
        assert_eq!(stop.iter().collect::<Vec<_>>(), vec!["the", "a", "de"]);
        assert_eq!(stop.len(), 3);
    }

    #[test]
    fn empty_set_is_identity() {
        let stop = StopWords::new();
        assert!(stop.is_empty());
        assert_eq!(stop.filter("keep every word"), "keep every word");
    }
}
