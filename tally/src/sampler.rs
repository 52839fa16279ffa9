//! Workload generators.
//!
//! Generators never see an instrument. The random source is always passed in, so a
//! workload is fully determined by the seed of the generator handed to it.

use std::f64::consts::TAU;

use rand::{Rng, seq::SliceRandom};

/// Draws a workload from a random permutation of `0..population`.
///
/// The length is uniform in `min_len..population`, so the values are distinct
/// integers and the longest workload is `population - 1` values.
///
/// # Panics
/// If `min_len >= population`.
pub fn uniform_permutation<R: Rng>(
    rng: &mut R,
    population: usize,
    min_len: usize,
) -> Vec<f64> {
    let mut perm: Vec<usize> = (0..population).collect();
    perm.shuffle(rng);
    let n = rng.gen_range(min_len..population);
    perm.into_iter().take(n).map(|v| v as f64).collect()
}

/// One sample from N(0, 1).
pub fn standard_normal<R: Rng>(rng: &mut R) -> f64 {
    // Box-Muller. `gen` is in [0, 1), so u1 is in (0, 1] and ln(u1) stays finite.
    let u1 = 1.0 - rng.r#gen::<f64>();
    let u2 = rng.r#gen::<f64>();
    (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
}

/// `samples` values from N(mean, stdev²).
pub fn normal_workload<R: Rng>(
    rng: &mut R,
    mean: f64,
    stdev: f64,
    samples: usize,
) -> Vec<f64> {
    (0..samples)
        .map(|_| mean + stdev * standard_normal(rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn same_seed_same_workload() {
        let a = normal_workload(&mut StdRng::seed_from_u64(11), 500.0, 25.0, 64);
        let b = normal_workload(&mut StdRng::seed_from_u64(11), 500.0, 25.0, 64);
        assert_eq!(a, b);

        let c = uniform_permutation(&mut StdRng::seed_from_u64(11), 100, 0);
        let d = uniform_permutation(&mut StdRng::seed_from_u64(11), 100, 0);
        assert_eq!(c, d);
    }

    #[test]
    fn normal_workload_moments() {
        let mut rng = StdRng::seed_from_u64(2024);
        let w = normal_workload(&mut rng, 500.0, 25.0, 20_000);
        let n = w.len() as f64;
        let mean = w.iter().sum::<f64>() / n;
        let var = w.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;

        // Standard error of the mean is 25 / sqrt(20000) ≈ 0.18.
        assert!((mean - 500.0).abs() < 1.5, "mean {mean}");
        assert!((var.sqrt() - 25.0).abs() < 1.0, "stdev {}", var.sqrt());
    }

    #[test]
    fn single_value_population() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(uniform_permutation(&mut rng, 1, 0).is_empty());
    }

    proptest! {
        #[test]
        fn permutation_values_are_distinct_and_in_range(
            seed in any::<u64>(),
            population in 2usize..=200,
            min_len in 0usize..=1,
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let w = uniform_permutation(&mut rng, population, min_len);

            prop_assert!(w.len() >= min_len);
            prop_assert!(w.len() < population);
            let distinct: HashSet<u64> = w.iter().map(|v| *v as u64).collect();
            prop_assert_eq!(distinct.len(), w.len());
            for v in &w {
                prop_assert!(*v >= 0.0 && *v < population as f64);
                prop_assert_eq!(v.fract(), 0.0);
            }
        }

        #[test]
        fn standard_normal_is_finite(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            for _ in 0..32 {
                prop_assert!(standard_normal(&mut rng).is_finite());
            }
        }
    }
}
