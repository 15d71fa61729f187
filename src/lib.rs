//! This crate is a document similarity engine: TF, IDF, TF-IDF and
//! pairwise cosine similarity over a small document collection.
pub mod config;
pub mod error;
pub mod input;
pub mod preprocess;
pub mod render;
pub mod utils;
pub mod vectorizer;

/// TF-IDF Analyzer
/// The top-level struct of this crate.
/// It runs tokenization, vocabulary construction, TF / IDF / TF-IDF
/// computation and the cosine similarity matrix in a single pass.
///
/// `TFIDFAnalyzer<E>` is generic over the IDF strategy:
/// - `DefaultTFIDFEngine`: `ln(N / (1 + df))`
/// - `UnsmoothedTFIDFEngine`: `ln(N / df)`
pub use vectorizer::{analyze_documents, analyze_with_config, TFIDFAnalyzer};

/// Analysis result
/// Vocabulary, TF / IDF / TF-IDF matrices, cosine matrix and a per-document
/// table with one row per vocabulary term. Values are unrounded.
pub use vectorizer::report::{Analysis, DocumentReport, TableOrder, TermRow};

/// TF IDF Calculation Engine Trait
/// Plug a different TF / IDF formula into `TFIDFAnalyzer<E>`.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine, UnsmoothedTFIDFEngine};

/// Term Frequency structure
/// Occurrence counts of every term in one document and the total token count.
pub use vectorizer::term::TermFrequency;

/// Corpus
/// Number of documents and the number of documents each term appears in.
pub use vectorizer::corpus::Corpus;

/// Vocabulary
/// Ordered, de-duplicated term set; a term's position is its vector dimension.
pub use vectorizer::vocabulary::Vocabulary;

/// Tokenizer
pub use vectorizer::token::{tokenize, tokenize_parts, Tokenize};

/// Similarity
/// Cosine similarity with the zero-norm convention (0, never NaN).
pub use vectorizer::compute::{compare::{cosine_similarity, Compare, DefaultCompare}, cosine_similarity_matrix};

/// Preprocessing
/// Stop-word filter and dictionary lemma substitution.
pub use preprocess::{
    clean::clean_text,
    lemma::{lemmatize, LemmaMap, Lemmatizer},
    stop_words::{remove_stop_words, StopWords},
    Preprocessor,
};

pub use config::{AnalysisConfig, IdfVariant};
pub use error::{Error, Result};
