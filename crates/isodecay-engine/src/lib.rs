//! # isodecay-engine: Radioactive decay simulation engine.
//!
//! Evaluated leaf-to-root for each run:
//! - **Decay calculator**: exponential decay `N0 * e^(-λt)` with one Gaussian
//!   noise draw per sample, `σ = noise% / 100 * ideal`.
//! - **Activity**: `λ * remaining`, computed from the same noisy series.
//! - **Gamma emission**: `Binomial(round(decayed), p)` per sample.
//!
//! All randomness flows through an injected [`RandomSource`]; a
//! [`SeededSource`] with a fixed seed reproduces a run exactly.
//!
//! [`RandomSource`]: isodecay_core::traits::RandomSource

pub mod activity;
pub mod decay;
pub mod engine;
pub mod gamma;
pub mod rng;

pub use decay::{DecayCalculator, DecaySeries};
pub use engine::DecayEngine;
pub use gamma::GammaEmissionModel;
pub use rng::SeededSource;
