//! Activity: instantaneous decay rate `A = λ * N`.
//!
//! Takes an already-computed [`DecaySeries`] so activity always tracks the
//! reported remaining amount, including its noise.

use crate::decay::DecaySeries;

/// Activity at each sample, in decays per unit of the half-life unit.
pub fn activity(decay_constant: f64, series: &DecaySeries) -> Vec<f64> {
    series.remaining.iter().map(|&n| decay_constant * n).collect()
}
