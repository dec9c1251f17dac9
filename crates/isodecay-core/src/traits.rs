//! Trait interfaces for the Isodecay simulator.
//!
//! These traits define the contracts between crates:
//! - [`RandomSource`]: stochastic draws for noise and gamma sampling (isodecay-engine implements)
//! - [`IsotopeCatalog`]: read-only isotope lookup (isodecay-core `catalog` implements)

use crate::error::CatalogError;
use crate::types::IsotopeParameters;

/// Source of random draws used by the decay and gamma models.
///
/// Injected into the engine at construction so a run is reproducible from a
/// fixed seed. Implementations must honour the degenerate cases exactly:
/// a zero standard deviation returns `mean` without drawing, and a binomial
/// with `n == 0` or `p == 0` returns 0.
pub trait RandomSource: Send {
    /// Draw from a Gaussian with the given mean and standard deviation.
    ///
    /// `std_dev` is non-negative.
    fn gaussian(&mut self, mean: f64, std_dev: f64) -> f64;

    /// Draw the number of successes in `n` trials with success probability `p`.
    ///
    /// `p` lies in `[0, 1]`. The result never exceeds `n`.
    fn binomial(&mut self, n: u64, p: f64) -> u64;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn gaussian(&mut self, mean: f64, std_dev: f64) -> f64 {
        (**self).gaussian(mean, std_dev)
    }

    fn binomial(&mut self, n: u64, p: f64) -> u64 {
        (**self).binomial(n, p)
    }
}

/// Read-only isotope lookup.
///
/// Loaded once and shared between concurrent simulations; no method mutates.
pub trait IsotopeCatalog: Send + Sync {
    /// Look up an isotope by its lowercase key.
    fn lookup(&self, key: &str) -> Result<&IsotopeParameters, CatalogError>;

    /// All `(key, isotope)` pairs in key order.
    fn entries(&self) -> Vec<(&str, &IsotopeParameters)>;

    /// Whether `key` names a catalog entry.
    ///
    /// Default implementation delegates to [`lookup`](Self::lookup).
    fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_ok()
    }
}
