use doc_similarity::{analyze_documents, cosine_similarity, Preprocessor, StopWords, TableOrder};

const EPS: f64 = 1e-9;

fn trace() -> doc_similarity::Analysis {
    let stop: StopWords = ["the", "a"].into_iter().collect();
    let docs = Preprocessor::new(stop, None).run(&["the cat sat", "a cat ran"]);
    assert_eq!(docs, vec!["cat sat", "cat ran"]);
    analyze_documents(&docs)
}

#[test]
fn vocabulary_and_tf() {
    let analysis = trace();
    assert_eq!(analysis.vocabulary.to_vec(), vec!["cat", "sat", "ran"]);
    assert_eq!(analysis.tf_matrix[0], vec![0.5, 0.5, 0.0]);
    assert_eq!(analysis.tf_matrix[1], vec![0.5, 0.0, 0.5]);
}

#[test]
fn idf_and_tfidf() {
    let analysis = trace();
    let cat_idf = (2.0f64 / 3.0).ln();
    assert!((analysis.idf_vector[0] - cat_idf).abs() < EPS);
    assert!((analysis.idf_vector[0] - -0.405).abs() < 1e-3);
    // sat and ran: ln(2 / 2)
    assert!(analysis.idf_vector[1].abs() < EPS);
    assert!(analysis.idf_vector[2].abs() < EPS);

    let tfidf = &analysis.tfidf_matrix;
    assert!((tfidf[0][0] - 0.5 * cat_idf).abs() < EPS);
    assert!(tfidf[0][1].abs() < EPS);
    assert!((tfidf[1][0] - 0.5 * cat_idf).abs() < EPS);
}

#[test]
fn cosine_matrix_from_trace() {
    let analysis = trace();
    // both vectors are [0.5 * ln(2/3), 0, 0]
    let expected = cosine_similarity(&analysis.tfidf_matrix[0], &analysis.tfidf_matrix[1]);
    assert!((expected - 1.0).abs() < EPS);
    for i in 0..2 {
        for j in 0..2 {
            assert!((analysis.cosine_matrix[i][j] - 1.0).abs() < EPS);
        }
    }
}

#[test]
fn per_document_tables() {
    let analysis = trace();
    let report = &analysis.documents[0];
    assert_eq!(report.number, 1);
    assert_eq!(report.content, "cat sat");
    let shown: Vec<_> = report.rows.iter().map(|r| r.rounded(3)).collect();
    assert_eq!(shown[0].term, "cat");
    assert_eq!(shown[0].tf, 0.5);
    assert_eq!(shown[0].idf, -0.405);
    assert_eq!(shown[0].tfidf, -0.203);
    // raw values stay unrounded
    assert!((report.rows[0].idf - (2.0f64 / 3.0).ln()).abs() < EPS);

    let by_tf: Vec<&str> = analysis.documents[1]
        .ordered_rows(TableOrder::TfDescending)
        .iter()
        .map(|r| r.term.as_str())
        .collect();
    assert_eq!(by_tf, vec!["cat", "ran", "sat"]);
    assert_eq!(analysis.vocabulary.to_vec(), vec!["cat", "sat", "ran"]);
}

#[test]
fn distinct_documents_score_below_one() {
    let analysis = analyze_documents(&["rust fast safe", "rust slow tool", "python slow easy"]);
    let m = &analysis.cosine_matrix;
    for i in 0..3 {
        assert!((m[i][i] - 1.0).abs() < EPS);
        for j in 0..3 {
            assert_eq!(m[i][j], m[j][i]);
            assert!(m[i][j] <= 1.0 + EPS && m[i][j] >= -1.0 - EPS);
        }
    }
    assert!(m[0][2].abs() < EPS);
    assert!(m[0][1] < 1.0);
}

#[test]
fn json_round_trip_keeps_vocabulary_order() {
    let analysis = trace();
    let json = serde_json::to_string(&analysis).unwrap();
    let back: doc_similarity::Analysis = serde_json::from_str(&json).unwrap();
    assert_eq!(back.vocabulary.to_vec(), vec!["cat", "sat", "ran"]);
    assert_eq!(back.documents.len(), 2);
}
