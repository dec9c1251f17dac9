//! Time unit conversion between seconds, days and years.
//!
//! Every conversion goes through seconds:
//! `convert(v, a, b) = v * seconds_per(a) / seconds_per(b)`.
//! Converting a unit to itself is the identity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{SECONDS_PER_DAY, SECONDS_PER_YEAR};
use crate::error::DecayError;

/// Unit of a half-life or time-axis value.
///
/// Parses the short tokens `s`, `d`, `y` as well as common long forms,
/// case-insensitively. Serializes to the short token.
///
/// # Examples
///
/// ```
/// use isodecay_core::units::TimeUnit;
/// let unit: TimeUnit = "Years".parse().unwrap();
/// assert_eq!(unit, TimeUnit::Years);
/// assert_eq!(unit.token(), "y");
/// ```
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "&'static str")]
pub enum TimeUnit {
    Seconds,
    Days,
    Years,
}

impl TimeUnit {
    /// All supported units, shortest first.
    pub const ALL: [TimeUnit; 3] = [TimeUnit::Seconds, TimeUnit::Days, TimeUnit::Years];

    /// Number of seconds in one of this unit.
    pub fn seconds_per(self) -> f64 {
        match self {
            Self::Seconds => 1.0,
            Self::Days => SECONDS_PER_DAY,
            Self::Years => SECONDS_PER_YEAR,
        }
    }

    /// Short token used in datasets and on the wire.
    pub fn token(self) -> &'static str {
        match self {
            Self::Seconds => "s",
            Self::Days => "d",
            Self::Years => "y",
        }
    }

    /// Convert `value` expressed in `self` into `to`.
    pub fn convert(self, value: f64, to: TimeUnit) -> f64 {
        if self == to {
            return value;
        }
        value * self.seconds_per() / to.seconds_per()
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.token())
    }
}

impl FromStr for TimeUnit {
    type Err = DecayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s" | "sec" | "secs" | "second" | "seconds" => Ok(Self::Seconds),
            "d" | "day" | "days" => Ok(Self::Days),
            "y" | "yr" | "yrs" | "year" | "years" => Ok(Self::Years),
            _ => Err(DecayError::InvalidUnit(s.to_string())),
        }
    }
}

impl TryFrom<String> for TimeUnit {
    type Error = DecayError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TimeUnit> for &'static str {
    fn from(unit: TimeUnit) -> Self {
        unit.token()
    }
}

/// Convert `value` between two unit tokens.
///
/// Fails with [`DecayError::InvalidUnit`] when either token is unrecognised.
///
/// # Examples
///
/// ```
/// use isodecay_core::units::convert;
/// assert_eq!(convert(1.0, "d", "s").unwrap(), 86_400.0);
/// assert!(convert(1.0, "fortnight", "s").is_err());
/// ```
pub fn convert(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, DecayError> {
    let from: TimeUnit = from_unit.parse()?;
    let to: TimeUnit = to_unit.parse()?;
    Ok(from.convert(value, to))
}
