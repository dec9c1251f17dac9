//! Core simulation types: isotopes, run configuration, result series.
//!
//! Time values in a [`SimulationConfig`] are expressed in the isotope's own
//! half-life unit. Amounts are unitless (mass or atom count, as supplied).

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::constants::{
    DEFAULT_HALF_LIVES, MAX_INITIAL_AMOUNT, MAX_NOISE_PERCENTAGE, MAX_TIME_POINTS,
};
use crate::error::DecayError;
use crate::units::TimeUnit;

/// Physical parameters of a radioactive isotope.
///
/// Immutable once built. Every constructor validates, so a value of this type
/// always has a positive finite half-life and a gamma probability in `[0, 1]`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(try_from = "RawIsotope")]
pub struct IsotopeParameters {
    name: String,
    half_life: f64,
    half_life_unit: TimeUnit,
    gamma_emission_probability: f64,
}

#[derive(Deserialize)]
struct RawIsotope {
    name: String,
    half_life: f64,
    half_life_unit: TimeUnit,
    gamma_emission_probability: f64,
}

impl TryFrom<RawIsotope> for IsotopeParameters {
    type Error = DecayError;

    fn try_from(raw: RawIsotope) -> Result<Self, Self::Error> {
        Self::new(
            raw.name,
            raw.half_life,
            raw.half_life_unit,
            raw.gamma_emission_probability,
        )
    }
}

impl IsotopeParameters {
    /// Build an isotope from a gamma emission probability in `[0, 1]`.
    pub fn new(
        name: impl Into<String>,
        half_life: f64,
        half_life_unit: TimeUnit,
        gamma_emission_probability: f64,
    ) -> Result<Self, DecayError> {
        let iso = Self {
            name: name.into(),
            half_life,
            half_life_unit,
            gamma_emission_probability,
        };
        iso.validate()?;
        Ok(iso)
    }

    /// Build an isotope from a gamma emission percentage in `[0, 100]`,
    /// the form used by catalogs and the custom-isotope form.
    pub fn from_percent(
        name: impl Into<String>,
        half_life: f64,
        half_life_unit: TimeUnit,
        gamma_emission_percent: f64,
    ) -> Result<Self, DecayError> {
        Self::new(name, half_life, half_life_unit, gamma_emission_percent / 100.0)
    }

    /// Check the isotope invariants.
    pub fn validate(&self) -> Result<(), DecayError> {
        if self.name.trim().is_empty() {
            return Err(DecayError::InvalidIsotope("name is empty".into()));
        }
        if !self.half_life.is_finite() || self.half_life <= 0.0 {
            return Err(DecayError::InvalidIsotope(format!(
                "half-life must be positive and finite, got {}",
                self.half_life
            )));
        }
        let p = self.gamma_emission_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(DecayError::InvalidIsotope(format!(
                "gamma emission probability must be in [0, 1], got {p}"
            )));
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn half_life(&self) -> f64 {
        self.half_life
    }

    pub fn half_life_unit(&self) -> TimeUnit {
        self.half_life_unit
    }

    pub fn gamma_emission_probability(&self) -> f64 {
        self.gamma_emission_probability
    }

    /// Decay constant `ln(2) / half_life`, per unit of [`half_life_unit`](Self::half_life_unit).
    pub fn decay_constant(&self) -> f64 {
        std::f64::consts::LN_2 / self.half_life
    }
}

/// Parameters of one simulation run.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Amount of material at `t = 0`.
    pub initial_amount: f64,
    /// Noise standard deviation as a percentage of the ideal remaining amount.
    pub noise_percentage: f64,
    /// Sample times, in the isotope's half-life unit. Starts at 0, strictly increasing.
    pub time_span: Vec<f64>,
}

impl SimulationConfig {
    pub fn new(initial_amount: f64, noise_percentage: f64, time_span: Vec<f64>) -> Self {
        Self {
            initial_amount,
            noise_percentage,
            time_span,
        }
    }

    /// Evenly spaced grid from 0 to [`DEFAULT_HALF_LIVES`] half-lives.
    pub fn spanning_half_lives(
        initial_amount: f64,
        time_points: usize,
        noise_percentage: f64,
        half_life: f64,
    ) -> Self {
        Self::new(
            initial_amount,
            noise_percentage,
            linspace(0.0, DEFAULT_HALF_LIVES * half_life, time_points),
        )
    }

    /// Number of samples.
    pub fn time_points(&self) -> usize {
        self.time_span.len()
    }

    /// Check the engine preconditions.
    ///
    /// A zero `initial_amount` is allowed here; the stricter user-facing
    /// bounds live in [`crate::validation`].
    pub fn validate(&self) -> Result<(), DecayError> {
        if !self.initial_amount.is_finite() || self.initial_amount < 0.0 {
            return Err(DecayError::InvalidConfig(format!(
                "initial amount must be non-negative and finite, got {}",
                self.initial_amount
            )));
        }
        if self.initial_amount > MAX_INITIAL_AMOUNT {
            return Err(DecayError::InvalidConfig(format!(
                "initial amount must be at most {MAX_INITIAL_AMOUNT:e}, got {:e}",
                self.initial_amount
            )));
        }
        if !(0.0..=MAX_NOISE_PERCENTAGE).contains(&self.noise_percentage) {
            return Err(DecayError::InvalidConfig(format!(
                "noise percentage must be in [0, {MAX_NOISE_PERCENTAGE}], got {}",
                self.noise_percentage
            )));
        }
        let n = self.time_span.len();
        if n == 0 || n > MAX_TIME_POINTS {
            return Err(DecayError::InvalidConfig(format!(
                "time span must hold 1..={MAX_TIME_POINTS} samples, got {n}"
            )));
        }
        if self.time_span[0] != 0.0 {
            return Err(DecayError::InvalidConfig(format!(
                "time span must start at 0, got {}",
                self.time_span[0]
            )));
        }
        for (i, w) in self.time_span.windows(2).enumerate() {
            if !w[1].is_finite() || w[1] <= w[0] {
                return Err(DecayError::InvalidConfig(format!(
                    "time span must be strictly increasing: t[{}]={} after t[{}]={}",
                    i + 1,
                    w[1],
                    i,
                    w[0]
                )));
            }
        }
        Ok(())
    }
}

/// `n` evenly spaced values from `start` to `stop`, both inclusive.
///
/// # Examples
///
/// ```
/// use isodecay_core::types::linspace;
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(linspace(0.0, 1.0, 1), vec![0.0]);
/// ```
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { stop } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Output of one simulation run.
///
/// All series are aligned index-for-index with `time_span`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SimulationResult {
    pub isotope: String,
    pub half_life: f64,
    pub time_unit: TimeUnit,
    pub time_span: Vec<f64>,
    pub remaining: Vec<f64>,
    pub decayed: Vec<f64>,
    /// Decays per unit of `time_unit`.
    pub activity: Vec<f64>,
    pub gamma_counts: Vec<u64>,
}

impl SimulationResult {
    pub fn len(&self) -> usize {
        self.time_span.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_span.is_empty()
    }

    /// Position of the first half-life on the time axis.
    pub fn half_life_marker(&self) -> f64 {
        self.half_life
    }

    /// Per-sample records for tabular or JSON output.
    pub fn samples(&self) -> Vec<DataPoint> {
        (0..self.len())
            .map(|i| DataPoint {
                time: self.time_span[i],
                remaining: self.remaining[i],
                decayed: self.decayed[i],
                rate: self.activity[i],
                gamma: self.gamma_counts[i],
            })
            .collect()
    }

    /// Re-express the time axis (and activity) in another unit.
    pub fn rescale_time(mut self, to: TimeUnit) -> Self {
        let from = self.time_unit;
        if from == to {
            return self;
        }
        for t in &mut self.time_span {
            *t = from.convert(*t, to);
        }
        self.half_life = from.convert(self.half_life, to);
        // Activity is per unit time, so it scales inversely with the axis.
        let per = from.convert(1.0, to);
        for a in &mut self.activity {
            *a /= per;
        }
        self.time_unit = to;
        self
    }
}

/// One sample of a simulation, as emitted to downstream consumers.
///
/// Serializes numeric fields as two-decimal strings and `gamma` as an
/// integer string.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct DataPoint {
    #[serde(serialize_with = "two_decimals")]
    pub time: f64,
    #[serde(serialize_with = "two_decimals")]
    pub remaining: f64,
    #[serde(serialize_with = "two_decimals")]
    pub decayed: f64,
    #[serde(serialize_with = "two_decimals")]
    pub rate: f64,
    #[serde(serialize_with = "integer_string")]
    pub gamma: u64,
}

fn two_decimals<S: Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format!("{v:.2}"))
}

fn integer_string<S: Serializer>(v: &u64, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&v.to_string())
}

impl fmt::Display for DataPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>14.2} {:>14.2} {:>14.2} {:>14.2} {:>10}",
            self.time, self.remaining, self.decayed, self.rate, self.gamma
        )
    }
}
