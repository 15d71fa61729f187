use num::Num;

pub trait Compare<N>
where
    N: Num + Copy,
{
    /// Dot product
    /// d(a, b) = Σ(a_i * b_i)
    fn dot(vec: &[N], other: &[N]) -> f64;
    /// Euclidean norm
    /// ||a|| = sqrt(Σ(a_i^2))
    fn norm(vec: &[N]) -> f64;
    /// Cosine similarity
    /// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
    /// 0 when either vector is all zeros
    fn cosine_similarity(vec: &[N], other: &[N]) -> f64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCompare;

#[inline]
fn max_abs<N>(vec: &[N]) -> f64
where
    N: Copy + Into<f64>,
{
    vec.iter()
        .map(|&a| Into::<f64>::into(a).abs())
        .fold(0.0, f64::max)
}

impl<N> Compare<N> for DefaultCompare
where
    N: Num + Copy + Into<f64>,
{
    #[inline]
    fn dot(vec: &[N], other: &[N]) -> f64 {
        assert_eq!(
            vec.len(),
            other.len(),
            "Vectors must be of the same length to compute dot product."
        );
        vec.iter()
            .zip(other)
            .map(|(&a, &b)| a.into() * b.into())
            .sum()
    }

    /// scaled by the largest component, so tiny or huge values neither underflow nor overflow
    #[inline]
    fn norm(vec: &[N]) -> f64 {
        let scale = max_abs(vec);
        if scale == 0.0 {
            return 0.0;
        }
        let sum: f64 = vec
            .iter()
            .map(|&a| {
                let a = a.into() / scale;
                a * a
            })
            .sum();
        scale * sum.sqrt()
    }

    #[inline]
    fn cosine_similarity(vec: &[N], other: &[N]) -> f64 {
        assert_eq!(
            vec.len(),
            other.len(),
            "Vectors must be of the same length to compute cosine similarity."
        );
        let scale_a = max_abs(vec);
        let scale_b = max_abs(other);
        if scale_a == 0.0 || scale_b == 0.0 {
            return 0.0;
        }
        // cosine is scale invariant: work on both vectors divided by their max component
        let mut dot = 0.0;
        let mut sum_a = 0.0;
        let mut sum_b = 0.0;
        for (&a, &b) in vec.iter().zip(other) {
            let a = a.into() / scale_a;
            let b = b.into() / scale_b;
            dot += a * b;
            sum_a += a * a;
            sum_b += b * b;
        }
        dot / (sum_a.sqrt() * sum_b.sqrt())
    }
}

/// Cosine similarity of two dense vectors with [`DefaultCompare`]
#[inline]
pub fn cosine_similarity<N>(vec: &[N], other: &[N]) -> f64
where
    N: Num + Copy + Into<f64>,
{
    DefaultCompare::cosine_similarity(vec, other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_similarity_is_one() {
        let v = [0.3, -1.2, 4.0];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn orthogonal_vectors_are_zero() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn zero_norm_gives_zero_not_nan() {
        let zero = [0.0, 0.0];
        assert_eq!(cosine_similarity(&zero, &zero), 0.0);
        assert_eq!(cosine_similarity(&zero, &[1.0, 2.0]), 0.0);
    }

    #[test]
    fn opposite_vectors_are_minus_one() {
        assert!((cosine_similarity(&[1.0, 2.0], &[-1.0, -2.0]) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn works_for_integer_vectors() {
        let a: [u32; 3] = [1, 2, 0];
        let b: [u32; 3] = [2, 4, 0];
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-12);
        assert_eq!(<DefaultCompare as Compare<u32>>::dot(&a, &b), 10.0);
    }

    #[test]
    fn tiny_components_keep_self_similarity_one() {
        let v = [1e-170f64, 1e-170];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-9);
        let w = [1e-200f64, 0.0, 3e-200];
        assert!((cosine_similarity(&w, &w) - 1.0).abs() < 1e-9);
        assert!(<DefaultCompare as Compare<f64>>::norm(&v) > 0.0);
    }

    #[test]
    fn huge_components_do_not_overflow() {
        let v = [1e200f64, 1e200];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-9);
        assert!((cosine_similarity(&v, &[1e200, -1e200])).abs() < 1e-9);
        let norm = <DefaultCompare as Compare<f64>>::norm(&v);
        assert!((norm / (1e200 * 2f64.sqrt()) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn tiny_and_regular_vectors_compare_by_direction() {
        let sim = cosine_similarity(&[1e-300f64, 0.0], &[5.0, 0.0]);
        assert!((sim - 1.0).abs() < 1e-9);
    }

    #[test]
    #[should_panic]
    fn length_mismatch_panics() {
        let _ = cosine_similarity(&[1.0, 2.0], &[1.0]);
    }
}
