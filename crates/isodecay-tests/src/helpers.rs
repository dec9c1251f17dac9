//! Shared test helpers for scenario and property tests.

use isodecay_core::catalog::Catalog;
use isodecay_core::types::{IsotopeParameters, SimulationConfig, SimulationResult};
use isodecay_core::units::TimeUnit;
use isodecay_engine::DecayEngine;

/// Built-in catalog entry by key. Panics if absent.
pub fn builtin(key: &str) -> IsotopeParameters {
    Catalog::builtin()
        .get(key)
        .cloned()
        .unwrap_or_else(|| panic!("builtin isotope {key} missing"))
}

/// Isotope with the given half-life in seconds and no gamma emission.
pub fn plain_isotope(half_life: f64) -> IsotopeParameters {
    IsotopeParameters::new("test", half_life, TimeUnit::Seconds, 0.0).expect("valid isotope")
}

/// Noise-free run over an explicit time span.
pub fn noiseless_run(iso: &IsotopeParameters, initial: f64, times: &[f64]) -> SimulationResult {
    let cfg = SimulationConfig::new(initial, 0.0, times.to_vec());
    DecayEngine::seeded(0).simulate(iso, &cfg).expect("valid run")
}

/// Assert `actual` is within `rtol` of `expected`, relative to `expected`.
pub fn assert_close(actual: f64, expected: f64, rtol: f64) {
    let tol = rtol * expected.abs().max(f64::MIN_POSITIVE);
    assert!(
        (actual - expected).abs() <= tol,
        "{actual} not within {rtol} of {expected}"
    );
}
