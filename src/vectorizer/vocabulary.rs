use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Ordered, de-duplicated set of terms spanning a document collection
///
/// Order is first occurrence: documents are scanned in input order,
/// tokens within a document left to right.
/// The position of a term is its dimension in every TF / IDF / TF-IDF vector.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Vocabulary {
    terms: IndexSet<String>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self { terms: IndexSet::new() }
    }

    /// Build the vocabulary from tokenized documents
    ///
    /// # Arguments
    /// * `docs_tokens` - token sequence of every document, in input order
    pub fn from_documents<D, T>(docs_tokens: &[D]) -> Self
    where
        D: AsRef<[T]>,
        T: AsRef<str>,
    {
        let mut vocab = Self::new();
        for tokens in docs_tokens {
            for token in tokens.as_ref() {
                vocab.insert(token.as_ref());
            }
        }
        vocab
    }

    /// Insert a term, keeping the first-occurrence position when already present
    ///
    /// # Returns
    /// * `usize` - index of the term
    #[inline]
    pub fn insert(&mut self, term: &str) -> usize {
        match self.terms.get_index_of(term) {
            Some(idx) => idx,
            None => self.terms.insert_full(term.to_string()).0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    #[inline]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.terms.get_index_of(term)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.terms.iter().cloned().collect()
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a String;
    type IntoIter = indexmap::set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}
