use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::utils::math::round_to;
use crate::vectorizer::vocabulary::Vocabulary;

/// Row order of a per-document term table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableOrder {
    /// canonical vocabulary order
    #[default]
    Vocabulary,
    /// TF descending, ties keep vocabulary order
    TfDescending,
}

/// One vocabulary term's weights within one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermRow {
    /// position of the term in the vocabulary
    pub index: usize,
    pub term: String,
    pub tf: f64,
    pub idf: f64,
    pub tfidf: f64,
}

impl TermRow {
    /// Copy with every weight rounded for display
    pub fn rounded(&self, decimals: u32) -> TermRow {
        TermRow {
            index: self.index,
            term: self.term.clone(),
            tf: round_to(self.tf, decimals),
            idf: round_to(self.idf, decimals),
            tfidf: round_to(self.tfidf, decimals),
        }
    }
}

/// Per-document breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentReport {
    /// 1-based position in the input collection
    pub number: usize,
    /// the document text as analyzed
    pub content: String,
    /// one row per vocabulary term, vocabulary order
    pub rows: Vec<TermRow>,
}

impl DocumentReport {
    /// Rows sorted by TF descending
    /// `rows` itself is left in vocabulary order.
    pub fn sorted_by_tf_desc(&self) -> Vec<&TermRow> {
        let mut rows: Vec<&TermRow> = self.rows.iter().collect();
        // stable, so equal TF keeps vocabulary order
        rows.sort_by(|a, b| b.tf.partial_cmp(&a.tf).unwrap_or(Ordering::Equal));
        rows
    }

    /// Rows in the requested presentation order
    pub fn ordered_rows(&self, order: TableOrder) -> Vec<&TermRow> {
        match order {
            TableOrder::Vocabulary => self.rows.iter().collect(),
            TableOrder::TfDescending => self.sorted_by_tf_desc(),
        }
    }
}

/// Result of one analysis pass
///
/// All numbers are unrounded. Rounding happens only through
/// [`TermRow::rounded`] at presentation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub vocabulary: Vocabulary,
    /// documents x vocabulary
    pub tf_matrix: Vec<Vec<f64>>,
    /// one weight per vocabulary term
    pub idf_vector: Vec<f64>,
    /// documents x vocabulary
    pub tfidf_matrix: Vec<Vec<f64>>,
    /// documents x documents, symmetric
    pub cosine_matrix: Vec<Vec<f64>>,
    pub documents: Vec<DocumentReport>,
}

impl Analysis {
    #[inline]
    pub fn doc_num(&self) -> usize {
        self.documents.len()
    }

    /// Similarity of two documents by 0-based index
    #[inline]
    pub fn similarity(&self, a: usize, b: usize) -> Option<f64> {
        self.cosine_matrix.get(a).and_then(|row| row.get(b)).copied()
    }

    /// The other document most similar to `doc` (0-based)
    ///
    /// # Returns
    /// * `Option<(usize, f64)>` - (index, similarity); None with fewer than two documents
    pub fn most_similar(&self, doc: usize) -> Option<(usize, f64)> {
        let row = self.cosine_matrix.get(doc)?;
        row.iter()
            .copied()
            .enumerate()
            .filter(|&(idx, _)| idx != doc)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal).then(b.0.cmp(&a.0)))
    }
}
