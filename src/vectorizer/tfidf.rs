use num::Float;

use crate::vectorizer::{corpus::Corpus, term::TermFrequency, vocabulary::Vocabulary};

/// TF-IDF calculation strategy
///
/// Every vector returned is aligned to the vocabulary order.
pub trait TFIDFEngine<N>
where
    N: Float,
{
    /// Build the TF vector of one document
    /// # Arguments
    /// * `freq` - term counts of one document
    /// * `vocabulary` - term dimensions
    /// # Returns
    /// * `Vec<N>` - count / total per term; all zero for a document without tokens
    fn tf_vec(freq: &TermFrequency, vocabulary: &Vocabulary) -> Vec<N> {
        if freq.is_empty() {
            return vec![N::zero(); vocabulary.len()];
        }
        vocabulary
            .iter()
            .map(|term| cast::<N>(freq.probability(term)))
            .collect()
    }

    /// Build the IDF vector over the vocabulary
    /// # Arguments
    /// * `corpus` - document frequencies
    /// * `vocabulary` - term dimensions
    /// # Returns
    /// * `Vec<N>` - one weight per vocabulary term
    fn idf_vec(corpus: &Corpus, vocabulary: &Vocabulary) -> Vec<N>;

    /// TF matrix x IDF vector, broadcast per vocabulary column
    fn tfidf_matrix(tf_matrix: &[Vec<N>], idf_vec: &[N]) -> Vec<Vec<N>> {
        tf_matrix
            .iter()
            .map(|tf_vec| {
                assert_eq!(
                    tf_vec.len(),
                    idf_vec.len(),
                    "TF row and IDF vector must share the vocabulary dimension."
                );
                tf_vec.iter().zip(idf_vec).map(|(&tf, &idf)| tf * idf).collect()
            })
            .collect()
    }
}

#[inline]
fn cast<N: Float>(value: f64) -> N {
    N::from(value).unwrap_or_else(N::nan)
}

/// Default TF-IDF engine
/// smoothed IDF: `ln(N / (1 + df))`
///
/// Finite for every vocabulary term. Terms present in every document get a
/// negative weight (`ln(N / (N + 1))`).
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl<N> TFIDFEngine<N> for DefaultTFIDFEngine
where
    N: Float,
{
    fn idf_vec(corpus: &Corpus, vocabulary: &Vocabulary) -> Vec<N> {
        let doc_num = corpus.get_doc_num() as f64;
        vocabulary
            .iter()
            .map(|term| {
                let doc_freq = corpus.get_term_count(term) as f64;
                cast::<N>((doc_num / (1.0 + doc_freq)).ln())
            })
            .collect()
    }
}

/// unsmoothed IDF: `ln(N / df)`, 0 when the term is in no document
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsmoothedTFIDFEngine;

impl<N> TFIDFEngine<N> for UnsmoothedTFIDFEngine
where
    N: Float,
{
    fn idf_vec(corpus: &Corpus, vocabulary: &Vocabulary) -> Vec<N> {
        let doc_num = corpus.get_doc_num() as f64;
        vocabulary
            .iter()
            .map(|term| {
                let doc_freq = corpus.get_term_count(term);
                if doc_freq == 0 {
                    N::zero()
                } else {
                    cast::<N>((doc_num / doc_freq as f64).ln())
                }
            })
            .collect()
    }
}
