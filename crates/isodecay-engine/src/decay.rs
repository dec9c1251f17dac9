//! Decay calculator: exponential decay law plus Gaussian measurement noise.
//!
//! For each sample `i`:
//! - `ideal[i]     = N0 * exp(-λ * t[i])`
//! - `remaining[i] = ideal[i] + Normal(0, noise% / 100 * ideal[i])`
//! - `decayed[i]   = N0 - remaining[i]`
//!
//! A zero noise percentage gives a zero standard deviation, which reproduces
//! the noiseless curve exactly.

use isodecay_core::error::DecayError;
use isodecay_core::traits::RandomSource;
use isodecay_core::types::{IsotopeParameters, SimulationConfig};

/// Remaining and decayed amounts from one noise draw.
///
/// Downstream models (activity, gamma emission) consume this series rather
/// than recomputing decay, so every output of a run shares the same noise.
#[derive(Debug, Clone, PartialEq)]
pub struct DecaySeries {
    pub remaining: Vec<f64>,
    pub decayed: Vec<f64>,
}

/// Run context for one isotope: validated parameters and the derived decay
/// constant `λ = ln(2) / half_life`.
#[derive(Debug, Clone)]
pub struct DecayCalculator {
    isotope: IsotopeParameters,
    decay_constant: f64,
}

impl DecayCalculator {
    /// Validate the isotope and derive its decay constant.
    pub fn new(isotope: &IsotopeParameters) -> Result<Self, DecayError> {
        isotope.validate()?;
        Ok(Self {
            isotope: isotope.clone(),
            decay_constant: isotope.decay_constant(),
        })
    }

    pub fn isotope(&self) -> &IsotopeParameters {
        &self.isotope
    }

    /// `λ`, per unit of the isotope's half-life unit.
    pub fn decay_constant(&self) -> f64 {
        self.decay_constant
    }

    /// Noiseless remaining amount at time `t`.
    pub fn ideal_remaining(&self, initial_amount: f64, t: f64) -> f64 {
        initial_amount * (-self.decay_constant * t).exp()
    }

    /// Compute the remaining and decayed series, drawing one noise sample per index.
    ///
    /// The config is assumed valid (see [`SimulationConfig::validate`]).
    pub fn calculate<R: RandomSource + ?Sized>(
        &self,
        config: &SimulationConfig,
        rng: &mut R,
    ) -> DecaySeries {
        let n0 = config.initial_amount;
        let noise_scale = config.noise_percentage / 100.0;

        let remaining: Vec<f64> = config
            .time_span
            .iter()
            .map(|&t| {
                let ideal = self.ideal_remaining(n0, t);
                rng.gaussian(ideal, noise_scale * ideal)
            })
            .collect();

        let decayed = remaining.iter().map(|&r| n0 - r).collect();

        DecaySeries { remaining, decayed }
    }
}
