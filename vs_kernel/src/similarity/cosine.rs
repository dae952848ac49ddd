use crate::error::{Error, Result};

#[inline]
fn sums<T>(u: &[T], v: &[T], scale_u: f64, scale_v: f64) -> (f64, f64, f64)
where
    T: Copy + Into<f64>,
{
    let mut dot = 0.0_f64;
    let mut norm_u = 0.0_f64;
    let mut norm_v = 0.0_f64;

    for (&x, &y) in u.iter().zip(v) {
        let x: f64 = x.into();
        let y: f64 = y.into();
        let (x, y) = (x / scale_u, y / scale_v);
        dot += x * y;
        norm_u += x * x;
        norm_v += y * y;
    }

    (dot, norm_u, norm_v)
}

fn max_abs<T>(v: &[T]) -> f64
where
    T: Copy + Into<f64>,
{
    v.iter().fold(0.0_f64, |acc, &x| acc.max(Into::<f64>::into(x).abs()))
}

/// Cosine similarity between `u` and `v`, accumulated in `f64`; a zero vector scores `0.0`.
#[inline]
pub fn cosine_similarity<T>(u: &[T], v: &[T]) -> Result<f64>
where
    T: Copy + Into<f64>,
{
    if u.len() != v.len() {
        return Err(Error::DimensionMismatch {
            expected: u.len(),
            found: v.len(),
        });
    }

    let (mut dot, mut norm_u, mut norm_v) = sums(u, v, 1.0, 1.0);

    if norm_u == 0.0 || norm_v == 0.0 {
        return Ok(0.0);
    }

    // squares overflowed: rescale each side by its largest component and redo the pass
    if !(dot.is_finite() && norm_u.is_finite() && norm_v.is_finite()) {
        (dot, norm_u, norm_v) = sums(u, v, max_abs(u), max_abs(v));
    }

    Ok((dot / (norm_u.sqrt() * norm_v.sqrt())).clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_identical_vectors() {
        let v = [1.0_f64, 2.0, 3.0, 4.0];
        assert_relative_eq!(cosine_similarity(&v, &v).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_orthogonal_vectors() {
        let a = [1.0_f64, 0.0, 0.0];
        let b = [0.0_f64, 1.0, 0.0];
        assert_eq!(cosine_similarity(&a, &b).unwrap(), 0.0);
    }

    #[test]
    fn test_opposite_vectors() {
        let a = [1.0_f64, 2.0, 3.0];
        let b = [-1.0_f64, -2.0, -3.0];
        assert_relative_eq!(cosine_similarity(&a, &b).unwrap(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_known_angle() {
        let a = [1.0_f64, 0.0];
        let b = [1.0_f64, 1.0];
        assert_relative_eq!(
            cosine_similarity(&a, &b).unwrap(),
            std::f64::consts::FRAC_1_SQRT_2,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_zero_vector_scores_zero() {
        let u = [3.0_f64, -4.0];
        let z = [0.0_f64, 0.0];
        assert_eq!(cosine_similarity(&u, &z).unwrap(), 0.0);
        assert_eq!(cosine_similarity(&z, &u).unwrap(), 0.0);
        assert_eq!(cosine_similarity(&z, &z).unwrap(), 0.0);
    }

    #[test]
    fn test_empty_vectors_score_zero() {
        let empty: [f64; 0] = [];
        assert_eq!(cosine_similarity(&empty, &empty).unwrap(), 0.0);
    }

    #[test]
    fn test_dimension_mismatch() {
        let u = [1.0_f64, 2.0, 3.0];
        let v = [1.0_f64, 2.0];
        let err = cosine_similarity(&u, &v).unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch {
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn test_f32_input_accumulates_in_f64() {
        let a = [0.1_f32, 0.2, 0.3];
        let b = [0.3_f32, 0.2, 0.1];
        let a64: Vec<f64> = a.iter().map(|&x| x as f64).collect();
        let b64: Vec<f64> = b.iter().map(|&x| x as f64).collect();
        assert_eq!(
            cosine_similarity(&a, &b).unwrap(),
            cosine_similarity(&a64, &b64).unwrap()
        );
    }

    #[test]
    fn test_integer_input() {
        let a = [1_i32, 0];
        let b = [2_i32, 0];
        assert_eq!(cosine_similarity(&a, &b).unwrap(), 1.0);
    }

    #[test]
    fn test_large_magnitudes_stay_in_range() {
        let big = [1e160_f64, 1e160];
        assert_relative_eq!(cosine_similarity(&big, &big).unwrap(), 1.0, epsilon = 1e-12);

        let a = [1e150_f64, 1e150, 1e150];
        let b = [1e150_f64, 0.0, 0.0];
        assert_relative_eq!(
            cosine_similarity(&a, &b).unwrap(),
            1.0 / 3.0_f64.sqrt(),
            epsilon = 1e-12
        );

        let c = [1e200_f64, 0.0];
        let d = [-1e200_f64, -1e200];
        assert_relative_eq!(
            cosine_similarity(&c, &d).unwrap(),
            -std::f64::consts::FRAC_1_SQRT_2,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_mixed_magnitudes_stay_in_range() {
        let small = [1e-3_f64, 2e-3];
        let big = [1e200_f64, 2e200];
        let score = cosine_similarity(&small, &big).unwrap();
        assert!((-1.0..=1.0).contains(&score));
        assert_relative_eq!(score, 1.0, epsilon = 1e-12);
    }

    fn non_zero_vec(dim: usize) -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(-1000.0_f64..1000.0, dim)
            .prop_filter("vector must have magnitude", |v| v.iter().any(|&x| x != 0.0))
    }

    fn two_non_zero_vecs() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
        (1usize..64).prop_flat_map(|dim| (non_zero_vec(dim), non_zero_vec(dim)))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn test_prop_self_similarity((u, _) in two_non_zero_vecs()) {
            let score = cosine_similarity(&u, &u).unwrap();
            prop_assert!((score - 1.0).abs() < 1e-12, "score = {}", score);
        }

        #[test]
        fn test_prop_symmetry((u, v) in two_non_zero_vecs()) {
            prop_assert_eq!(
                cosine_similarity(&u, &v).unwrap(),
                cosine_similarity(&v, &u).unwrap()
            );
        }

        #[test]
        fn test_prop_bounded((u, v) in two_non_zero_vecs()) {
            let score = cosine_similarity(&u, &v).unwrap();
            prop_assert!((-1.0..=1.0).contains(&score), "score = {}", score);
        }

        #[test]
        fn test_prop_zero_vector((u, _) in two_non_zero_vecs()) {
            let z = vec![0.0_f64; u.len()];
            prop_assert_eq!(cosine_similarity(&u, &z).unwrap(), 0.0);
        }

        #[test]
        fn test_prop_positive_scaling((u, v) in two_non_zero_vecs(), k in 0.01_f64..100.0) {
            let scaled: Vec<f64> = u.iter().map(|x| x * k).collect();
            let expected = cosine_similarity(&u, &v).unwrap();
            let actual = cosine_similarity(&scaled, &v).unwrap();
            prop_assert!((expected - actual).abs() < 1e-9, "{} vs {}", expected, actual);
        }
    }
}
