use num::Num;

use crate::vectorizer::compute::compare::{Compare, DefaultCompare};

pub mod compare;

/// Pairwise cosine similarity of every document vector
///
/// Each unordered pair is computed once and mirrored, so the result is
/// symmetric. The diagonal follows the same zero-norm rule: an all-zero
/// vector has self-similarity 0.
///
/// # Arguments
/// * `vectors` - one vector per document, all of the same length
///
/// # Returns
/// * `Vec<Vec<f64>>` - n x n matrix
pub fn cosine_similarity_matrix<N>(vectors: &[Vec<N>]) -> Vec<Vec<f64>>
where
    N: Num + Copy + Into<f64>,
{
    similarity_matrix::<N, DefaultCompare>(vectors)
}

/// Same as [`cosine_similarity_matrix`] with a pluggable [`Compare`]
pub fn similarity_matrix<N, C>(vectors: &[Vec<N>]) -> Vec<Vec<f64>>
where
    N: Num + Copy,
    C: Compare<N>,
{
    let n = vectors.len();
    let mut matrix = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in i..n {
            let sim = C::cosine_similarity(&vectors[i], &vectors[j]);
            matrix[i][j] = sim;
            matrix[j][i] = sim;
        }
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_is_symmetric_with_unit_diagonal() {
        let vectors = vec![vec![1.0, 0.0, 2.0], vec![0.5, 1.0, 0.0], vec![3.0, 3.0, 3.0]];
        let m = cosine_similarity_matrix(&vectors);
        for i in 0..3 {
            assert!((m[i][i] - 1.0).abs() < 1e-9);
            for j in 0..3 {
                assert_eq!(m[i][j], m[j][i]);
            }
        }
    }

    #[test]
    fn zero_vector_row_is_all_zero() {
        let vectors = vec![vec![0.0, 0.0], vec![1.0, 1.0]];
        let m = cosine_similarity_matrix(&vectors);
        assert_eq!(m[0], vec![0.0, 0.0]);
        assert_eq!(m[1][0], 0.0);
        assert!((m[1][1] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn empty_input_gives_empty_matrix() {
        let m = cosine_similarity_matrix::<f64>(&[]);
        assert!(m.is_empty());
    }
}
