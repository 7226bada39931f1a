//! Seeded Gaussian noise source.

use rand::prelude::*;
use rand_distr::Normal;

use super::SignalError;

/// Generates `count` samples drawn from `N(mean, stddev)`.
///
/// The RNG is constructed locally from `seed`, so two calls with identical
/// arguments are bit-reproducible and concurrent calls cannot interleave
/// each other's draws. A process-wide RNG would break both guarantees.
pub fn generate_noise(
    count: usize,
    mean: f64,
    stddev: f64,
    seed: u64,
) -> Result<Vec<f64>, SignalError> {
    if count == 0 {
        return Err(SignalError::invalid("count", 0));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Normal::new(mean, stddev)
        .map_err(|_| SignalError::Computation { index: 0, value: stddev })?;

    Ok((0..count).map(|_| dist.sample(&mut rng)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_is_bit_reproducible() {
        let a = generate_noise(512, 220.0, 5.0, 42).unwrap();
        let b = generate_noise(512, 220.0, 5.0, 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_diverge() {
        let a = generate_noise(64, 0.0, 1.0, 1).unwrap();
        let b = generate_noise(64, 0.0, 1.0, 2).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn zero_count_is_rejected() {
        let err = generate_noise(0, 0.0, 1.0, 7).unwrap_err();
        assert!(matches!(
            err,
            SignalError::InvalidParameter { name: "count", .. }
        ));
    }

    #[test]
    fn samples_cluster_around_mean() {
        let series = generate_noise(10_000, 220.0, 5.0, 9).unwrap();
        let mean = series.iter().sum::<f64>() / series.len() as f64;
        assert!((mean - 220.0).abs() < 1.0, "sample mean was {mean}");
    }
}
