//! Range checks for user-supplied simulation requests.
//!
//! Applied at the CLI and HTTP boundaries before a [`SimulationConfig`] is
//! built. The engine asserts its own, looser preconditions separately.
//!
//! [`SimulationConfig`]: crate::types::SimulationConfig

use crate::constants::{
    MAX_INITIAL_AMOUNT, MAX_NOISE_PERCENTAGE, MAX_TIME_POINTS, MIN_INITIAL_AMOUNT, MIN_TIME_POINTS,
};
use crate::error::DecayError;

/// Validate the three user-facing simulation inputs.
///
/// - `1 <= initial_amount <= 1e15`
/// - `10 <= time_points <= 1000`
/// - `0 <= noise_percentage <= 20`
pub fn validate_request(
    initial_amount: f64,
    time_points: usize,
    noise_percentage: f64,
) -> Result<(), DecayError> {
    if !initial_amount.is_finite() || initial_amount < MIN_INITIAL_AMOUNT {
        return Err(DecayError::InvalidConfig(format!(
            "initial_amount must be at least {MIN_INITIAL_AMOUNT}, got {initial_amount}"
        )));
    }
    if initial_amount > MAX_INITIAL_AMOUNT {
        return Err(DecayError::InvalidConfig(format!(
            "initial_amount must be at most {MAX_INITIAL_AMOUNT:e}, got {initial_amount:e}"
        )));
    }
    if !(MIN_TIME_POINTS..=MAX_TIME_POINTS).contains(&time_points) {
        return Err(DecayError::InvalidConfig(format!(
            "time_points must be in [{MIN_TIME_POINTS}, {MAX_TIME_POINTS}], got {time_points}"
        )));
    }
    if !(0.0..=MAX_NOISE_PERCENTAGE).contains(&noise_percentage) {
        return Err(DecayError::InvalidConfig(format!(
            "noise must be in [0, {MAX_NOISE_PERCENTAGE}], got {noise_percentage}"
        )));
    }
    Ok(())
}
