//! Decay engine: validates a request and runs the three models in order.
//!
//! Validation happens before any random draw, so a rejected request never
//! consumes randomness or yields partial results.

use isodecay_core::error::DecayError;
use isodecay_core::traits::RandomSource;
use isodecay_core::types::{IsotopeParameters, SimulationConfig, SimulationResult};
use tracing::debug;

use crate::activity::activity;
use crate::decay::DecayCalculator;
use crate::gamma::GammaEmissionModel;
use crate::rng::SeededSource;

/// Simulation engine owning an injected random source.
///
/// Runs are independent; the engine keeps no state between them other than
/// the position of its random stream.
#[derive(Debug, Clone)]
pub struct DecayEngine<R: RandomSource = SeededSource> {
    rng: R,
}

impl DecayEngine<SeededSource> {
    /// Engine with a reproducible random stream.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SeededSource::from_seed(seed))
    }

    /// Engine seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self::new(SeededSource::from_entropy())
    }
}

impl<R: RandomSource> DecayEngine<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Simulate `isotope` over `config.time_span`.
    ///
    /// Time values are read in the isotope's half-life unit.
    pub fn simulate(
        &mut self,
        isotope: &IsotopeParameters,
        config: &SimulationConfig,
    ) -> Result<SimulationResult, DecayError> {
        isotope.validate()?;
        config.validate()?;

        let calculator = DecayCalculator::new(isotope)?;
        let gamma_model = GammaEmissionModel::new(isotope.gamma_emission_probability())?;

        debug!(
            isotope = isotope.name(),
            samples = config.time_points(),
            decay_constant = calculator.decay_constant(),
            noise = config.noise_percentage,
            "Running decay simulation"
        );

        let series = calculator.calculate(config, &mut self.rng);
        let activity = activity(calculator.decay_constant(), &series);
        let gamma_counts = gamma_model.sample(&series, &mut self.rng);

        Ok(SimulationResult {
            isotope: isotope.name().to_string(),
            half_life: isotope.half_life(),
            time_unit: isotope.half_life_unit(),
            time_span: config.time_span.clone(),
            remaining: series.remaining,
            decayed: series.decayed,
            activity,
            gamma_counts,
        })
    }

    /// Consume the engine and return its random source.
    pub fn into_source(self) -> R {
        self.rng
    }
}
