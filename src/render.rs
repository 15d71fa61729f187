//! Plain-text tables for an [`Analysis`].
//!
//! Only formats numbers already in the result; rounding happens here.

use std::fmt::Write;

use crate::config::MAX_DISPLAY_DECIMALS;
use crate::utils::math::round_to;
use crate::vectorizer::report::{Analysis, DocumentReport, TableOrder};

/// Term table of one document
pub fn render_document(report: &DocumentReport, order: TableOrder, decimals: u32) -> String {
    let decimals = decimals.min(MAX_DISPLAY_DECIMALS);
    let prec = decimals as usize;
    let rows: Vec<_> = report
        .ordered_rows(order)
        .into_iter()
        .map(|row| row.rounded(decimals))
        .collect();
    let term_width = rows
        .iter()
        .map(|row| row.term.chars().count())
        .max()
        .unwrap_or(0)
        .max("Term".len());
    let num_width = (prec + 4).max("TF-IDF".len());

    let mut out = String::new();
    let _ = writeln!(out, "Document {}: {}", report.number, report.content);
    let _ = writeln!(
        out,
        "{:>5}  {:<tw$}  {:>nw$}  {:>nw$}  {:>nw$}",
        "Index", "Term", "TF", "IDF", "TF-IDF",
        tw = term_width,
        nw = num_width
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:>5}  {:<tw$}  {:>nw$.prec$}  {:>nw$.prec$}  {:>nw$.prec$}",
            row.index, row.term, row.tf, row.idf, row.tfidf,
            tw = term_width,
            nw = num_width,
            prec = prec
        );
    }
    out
}

/// Cosine similarity matrix with 1-based document labels
pub fn render_cosine_matrix(analysis: &Analysis, decimals: u32) -> String {
    let decimals = decimals.min(MAX_DISPLAY_DECIMALS);
    let prec = decimals as usize;
    let width = (prec + 4).max(6);
    let mut out = String::new();
    let _ = write!(out, "{:>6}", "");
    for j in 0..analysis.doc_num() {
        let _ = write!(out, " {:>width$}", format!("D{}", j + 1), width = width);
    }
    out.push('\n');
    for (i, row) in analysis.cosine_matrix.iter().enumerate() {
        let _ = write!(out, "{:>6}", format!("D{}", i + 1));
        for &sim in row {
            let _ = write!(out, " {:>width$.prec$}", round_to(sim, decimals), width = width, prec = prec);
        }
        out.push('\n');
    }
    out
}

/// Every document table followed by the similarity matrix
pub fn render_analysis(analysis: &Analysis, order: TableOrder, decimals: u32) -> String {
    let mut out = String::new();
    for report in &analysis.documents {
        out.push_str(&render_document(report, order, decimals));
        out.push('\n');
    }
    out.push_str("Cosine similarity\n");
    out.push_str(&render_cosine_matrix(analysis, decimals));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze_documents;

    #[test]
    fn document_table_shows_rounded_values() {
        let analysis = analyze_documents(&["cat sat", "cat ran"]);
        let table = render_document(&analysis.documents[0], TableOrder::Vocabulary, 3);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "Document 1: cat sat");
        assert!(lines[2].contains("cat"));
        assert!(lines[2].contains("0.500"));
        assert!(lines[2].contains("-0.405"));
        assert!(lines[2].contains("-0.203"));
        assert_eq!(lines.len(), 2 + 3);
    }

    #[test]
    fn tf_order_puts_present_terms_first() {
        let analysis = analyze_documents(&["a b", "c c c"]);
        let table = render_document(&analysis.documents[1], TableOrder::TfDescending, 2);
        let first_row = table.lines().nth(2).unwrap();
        assert!(first_row.contains(" c "));
        assert!(first_row.contains("1.00"));
    }

    #[test]
    fn oversized_decimals_render_numbers_not_nan() {
        let analysis = analyze_documents(&["x y", "y z"]);
        let text = render_analysis(&analysis, TableOrder::Vocabulary, 400);
        assert!(!text.contains("NaN"));
        let matrix = render_cosine_matrix(&analysis, u32::MAX);
        assert!(!matrix.contains("NaN"));
        assert!(matrix.contains(&format!("{:.15}", 1.0)));
    }

    #[test]
    fn matrix_has_a_row_per_document() {
        let analysis = analyze_documents(&["x y", "y z", "z"]);
        let text = render_cosine_matrix(&analysis, 3);
        assert_eq!(text.lines().count(), 4);
        assert!(text.lines().next().unwrap().contains("D3"));
    }
}
