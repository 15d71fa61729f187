pub mod clean;
pub mod lemma;
pub mod stop_words;

use tracing::debug;

use crate::preprocess::{
    lemma::{LemmaMap, Lemmatizer},
    stop_words::StopWords,
};

/// Stop-word filter followed by lemma substitution
///
/// Stop words are removed first, so a stop word is matched against the
/// surface form, not its lemma.
#[derive(Debug, Clone, Default)]
pub struct Preprocessor {
    stop_words: StopWords,
    lemmatizer: Option<Lemmatizer>,
}

impl Preprocessor {
    pub fn new(stop_words: StopWords, lemmas: Option<&LemmaMap>) -> Self {
        Self {
            stop_words,
            lemmatizer: lemmas.map(Lemmatizer::new),
        }
    }

    /// Preprocess one document
    pub fn apply(&self, text: &str) -> String {
        let filtered = self.stop_words.filter(text);
        match &self.lemmatizer {
            Some(lemmatizer) => lemmatizer.apply(&filtered),
            None => filtered,
        }
    }

    /// Preprocess every document, keeping document order
    pub fn run<S>(&self, documents: &[S]) -> Vec<String>
    where
        S: AsRef<str>,
    {
        debug!(
            documents = documents.len(),
            stop_words = self.stop_words.len(),
            lemmatize = self.lemmatizer.is_some(),
            "preprocessing"
        );
        documents.iter().map(|doc| self.apply(doc.as_ref())).collect()
    }
}
