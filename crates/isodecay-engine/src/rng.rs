//! Seedable [`RandomSource`] backed by `rand` and `rand_distr`.

use isodecay_core::traits::RandomSource;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Binomial, Distribution, Normal};

/// Production random source.
///
/// Two sources built with the same seed produce identical draw sequences.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    /// Reproducible source from a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Source seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomSource for SeededSource {
    fn gaussian(&mut self, mean: f64, std_dev: f64) -> f64 {
        if std_dev <= 0.0 || !std_dev.is_finite() {
            return mean;
        }
        match Normal::new(mean, std_dev) {
            Ok(dist) => dist.sample(&mut self.rng),
            Err(_) => mean,
        }
    }

    fn binomial(&mut self, n: u64, p: f64) -> u64 {
        if n == 0 || p <= 0.0 || p.is_nan() {
            return 0;
        }
        if p >= 1.0 {
            return n;
        }
        match Binomial::new(n, p) {
            Ok(dist) => dist.sample(&mut self.rng).min(n),
            Err(_) => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_std_dev_returns_mean_exactly() {
        let mut src = SeededSource::from_seed(1);
        assert_eq!(src.gaussian(1000.0, 0.0), 1000.0);
        assert_eq!(src.gaussian(-3.5, 0.0), -3.5);
    }

    #[test]
    fn same_seed_same_draws() {
        let mut a = SeededSource::from_seed(42);
        let mut b = SeededSource::from_seed(42);
        for _ in 0..100 {
            assert_eq!(a.gaussian(0.0, 1.0), b.gaussian(0.0, 1.0));
            assert_eq!(a.binomial(1000, 0.3), b.binomial(1000, 0.3));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SeededSource::from_seed(1);
        let mut b = SeededSource::from_seed(2);
        let da: Vec<f64> = (0..10).map(|_| a.gaussian(0.0, 1.0)).collect();
        let db: Vec<f64> = (0..10).map(|_| b.gaussian(0.0, 1.0)).collect();
        assert_ne!(da, db);
    }

    #[test]
    fn gaussian_sample_mean_near_target() {
        let mut src = SeededSource::from_seed(7);
        let n = 20_000;
        let mean: f64 = (0..n).map(|_| src.gaussian(100.0, 5.0)).sum::<f64>() / n as f64;
        assert!((mean - 100.0).abs() < 0.25, "sample mean {mean}");
    }

    #[test]
    fn binomial_degenerate_cases() {
        let mut src = SeededSource::from_seed(3);
        assert_eq!(src.binomial(0, 0.5), 0);
        assert_eq!(src.binomial(500, 0.0), 0);
        assert_eq!(src.binomial(500, 1.0), 500);
    }

    #[test]
    fn binomial_sample_mean_near_np() {
        let mut src = SeededSource::from_seed(11);
        let trials = 2_000;
        let mean = (0..trials).map(|_| src.binomial(1000, 0.812) as f64).sum::<f64>()
            / trials as f64;
        assert!((mean - 812.0).abs() < 2.0, "sample mean {mean}");
    }

    proptest! {
        #[test]
        fn binomial_bounded(seed in any::<u64>(), n in 0u64..1_000_000, p in 0.0f64..=1.0) {
            let mut src = SeededSource::from_seed(seed);
            prop_assert!(src.binomial(n, p) <= n);
        }
    }
}
