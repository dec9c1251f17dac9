//! Simulation constants. Times are in seconds unless a unit is named.

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Seconds in one year.
///
/// 365.242 days, rounded to whole seconds. Round-trip conversions depend on
/// this exact value.
pub const SECONDS_PER_YEAR: f64 = 31_556_926.0;

/// Lower bound on `initial_amount` accepted from users.
pub const MIN_INITIAL_AMOUNT: f64 = 1.0;

/// Upper bound on `initial_amount`, for users and the engine alike.
///
/// Rounded decayed amounts, including noise, must stay well below `i64::MAX`
/// for binomial gamma sampling.
pub const MAX_INITIAL_AMOUNT: f64 = 1.0e15;

/// Sample-count bounds accepted from users.
pub const MIN_TIME_POINTS: usize = 10;
pub const MAX_TIME_POINTS: usize = 1000;

/// Upper bound on the noise percentage. The lower bound is zero.
pub const MAX_NOISE_PERCENTAGE: f64 = 20.0;

/// Default time grid covers this many half-lives.
pub const DEFAULT_HALF_LIVES: f64 = 4.0;

/// Key that selects a user-supplied isotope instead of a catalog entry.
pub const CUSTOM_ISOTOPE_KEY: &str = "custom";
