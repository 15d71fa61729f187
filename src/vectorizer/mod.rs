pub mod compute;
pub mod corpus;
pub mod report;
pub mod term;
pub mod tfidf;
pub mod token;
pub mod vocabulary;

use std::marker::PhantomData;

use tracing::debug;

use crate::config::{AnalysisConfig, IdfVariant};
use crate::vectorizer::{
    compute::cosine_similarity_matrix,
    corpus::Corpus,
    report::{Analysis, DocumentReport, TermRow},
    term::TermFrequency,
    tfidf::{DefaultTFIDFEngine, TFIDFEngine, UnsmoothedTFIDFEngine},
    token::Tokenize,
    vocabulary::Vocabulary,
};

/// TF-IDF Analyzer
///
/// Runs one full pass over a document collection:
/// tokenize -> vocabulary -> TF / IDF -> TF-IDF -> cosine similarity.
/// Nothing is cached between calls.
///
/// `E` selects the IDF variant (see [`DefaultTFIDFEngine`] and
/// [`UnsmoothedTFIDFEngine`]).
#[derive(Debug, Clone, Copy)]
pub struct TFIDFAnalyzer<E = DefaultTFIDFEngine>
where
    E: TFIDFEngine<f64>,
{
    _marker: PhantomData<E>,
}

impl<E> Default for TFIDFAnalyzer<E>
where
    E: TFIDFEngine<f64>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TFIDFAnalyzer<E>
where
    E: TFIDFEngine<f64>,
{
    pub fn new() -> Self {
        Self { _marker: PhantomData }
    }

    /// Analyze already preprocessed documents
    ///
    /// # Arguments
    /// * `documents` - document texts in input order
    ///
    /// # Returns
    /// * `Analysis` - vocabulary, matrices and per-document tables
    pub fn analyze<S>(&self, documents: &[S]) -> Analysis
    where
        S: AsRef<str>,
    {
        let docs_tokens: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| doc.as_ref().tokens())
            .collect();
        let vocabulary = Vocabulary::from_documents(&docs_tokens);
        let freqs: Vec<TermFrequency> = docs_tokens
            .iter()
            .map(|tokens| TermFrequency::from(&tokens[..]))
            .collect();
        let corpus = Corpus::from_documents(&freqs);
        debug!(
            documents = documents.len(),
            vocabulary = vocabulary.len(),
            "tokenized corpus"
        );

        let tf_matrix: Vec<Vec<f64>> = freqs
            .iter()
            .map(|freq| E::tf_vec(freq, &vocabulary))
            .collect();
        let idf_vector: Vec<f64> = E::idf_vec(&corpus, &vocabulary);
        let tfidf_matrix = E::tfidf_matrix(&tf_matrix, &idf_vector);
        let cosine_matrix = cosine_similarity_matrix(&tfidf_matrix);

        let reports = documents
            .iter()
            .enumerate()
            .map(|(i, doc)| DocumentReport {
                number: i + 1,
                content: doc.as_ref().to_string(),
                rows: vocabulary
                    .iter()
                    .enumerate()
                    .map(|(idx, term)| TermRow {
                        index: idx,
                        term: term.to_string(),
                        tf: tf_matrix[i][idx],
                        idf: idf_vector[idx],
                        tfidf: tfidf_matrix[i][idx],
                    })
                    .collect(),
            })
            .collect();

        Analysis {
            vocabulary,
            tf_matrix,
            idf_vector,
            tfidf_matrix,
            cosine_matrix,
            documents: reports,
        }
    }
}

/// Analyze with the default (smoothed IDF) engine
pub fn analyze_documents<S>(documents: &[S]) -> Analysis
where
    S: AsRef<str>,
{
    TFIDFAnalyzer::<DefaultTFIDFEngine>::new().analyze(documents)
}

/// Analyze with the IDF variant named in the config
pub fn analyze_with_config<S>(documents: &[S], config: &AnalysisConfig) -> Analysis
where
    S: AsRef<str>,
{
    match config.idf {
        IdfVariant::Smoothed => TFIDFAnalyzer::<DefaultTFIDFEngine>::new().analyze(documents),
        IdfVariant::Unsmoothed => TFIDFAnalyzer::<UnsmoothedTFIDFEngine>::new().analyze(documents),
    }
}
