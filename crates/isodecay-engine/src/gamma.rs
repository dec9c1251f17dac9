//! Gamma emission model.
//!
//! Each decayed atom emits a gamma photon with probability `p`. The decayed
//! amount is rounded to a non-negative atom count `n` and the photon count is
//! drawn from `Binomial(n, p)`, so `0 <= gamma <= n` always holds.

use isodecay_core::error::DecayError;
use isodecay_core::traits::RandomSource;

use crate::decay::DecaySeries;

/// Binomial photon-count sampler for one isotope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GammaEmissionModel {
    probability: f64,
}

impl GammaEmissionModel {
    /// `probability` must lie in `[0, 1]`.
    pub fn new(probability: f64) -> Result<Self, DecayError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(DecayError::InvalidIsotope(format!(
                "gamma emission probability must be in [0, 1], got {probability}"
            )));
        }
        Ok(Self { probability })
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Sampled photon count at each point of `series`.
    pub fn sample<R: RandomSource + ?Sized>(&self, series: &DecaySeries, rng: &mut R) -> Vec<u64> {
        series
            .decayed
            .iter()
            .map(|&d| {
                let n = atom_count(d);
                if n == 0 || self.probability == 0.0 {
                    0
                } else {
                    rng.binomial(n, self.probability).min(n)
                }
            })
            .collect()
    }
}

/// `max(0, round(decayed))` as an integer atom count.
pub fn atom_count(decayed: f64) -> u64 {
    if decayed.is_nan() || decayed <= 0.0 {
        0
    } else {
        // Saturates at u64::MAX for huge or infinite inputs.
        decayed.round() as u64
    }
}
