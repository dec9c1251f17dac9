//! Isotope catalog: built-in entries and JSON dataset loading.
//!
//! Keys are lowercase (`"iodine-131"`, `"i-131"`). Datasets store the gamma
//! emission probability as a percentage string such as `"81.2 %"`; only the
//! leading token is parsed.
//!
//! A [`Catalog`] is immutable after construction and is shared read-only
//! between concurrent simulations.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{CatalogError, DecayError};
use crate::traits::IsotopeCatalog;
use crate::types::IsotopeParameters;
use crate::units::TimeUnit;

/// Built-in isotopes: `(key, name, half-life, unit, gamma emission %)`.
const BUILTIN: [(&str, &str, f64, TimeUnit, f64); 6] = [
    ("carbon-14", "Carbon-14", 5730.0, TimeUnit::Years, 0.0),
    // 3.59% at 186.2 keV
    ("radium-226", "Radium-226", 1600.0, TimeUnit::Years, 3.59),
    // 99.85% at 1173.23 keV, 99.98% at 1332.49 keV
    ("cobalt-60", "Cobalt-60", 5.27, TimeUnit::Years, 99.85),
    ("iodine-131", "Iodine-131", 8.02, TimeUnit::Days, 81.2),
    // weak, ~0.06-0.2%
    ("uranium-238", "Uranium-238", 4.468e9, TimeUnit::Years, 0.06),
    ("cesium-137", "Cesium-137", 30.08, TimeUnit::Years, 85.1),
];

/// Read-only isotope catalog ordered by key.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: BTreeMap<String, IsotopeParameters>,
}

impl Catalog {
    /// The six isotopes shipped with the simulator.
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .filter_map(|&(key, name, half_life, unit, percent)| {
                match IsotopeParameters::from_percent(name, half_life, unit, percent) {
                    Ok(iso) => Some((key.to_string(), iso)),
                    Err(e) => {
                        debug_assert!(false, "built-in isotope {key} is invalid: {e}");
                        warn!(key, reason = %e, "Skipping built-in isotope");
                        None
                    }
                }
            })
            .collect();
        Self { entries }
    }

    /// Parse a JSON dataset of `key -> {name, half_life, half_life_unit, decay_mode}`.
    ///
    /// Entries with an unknown unit or invalid parameters are skipped with a
    /// warning; only malformed JSON fails the whole dataset.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let raw: BTreeMap<String, DatasetEntry> = serde_json::from_str(json)?;
        let mut entries = BTreeMap::new();
        for (key, entry) in raw {
            let key = key.to_lowercase();
            match entry.into_isotope() {
                Ok(iso) => {
                    entries.insert(key, iso);
                }
                Err(e) => warn!(key = %key, reason = %e, "Skipping isotope dataset entry"),
            }
        }
        debug!(count = entries.len(), "Parsed isotope dataset");
        Ok(Self { entries })
    }

    /// Load a JSON dataset from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        debug!(path = %path.display(), count = catalog.len(), "Loaded isotope catalog");
        Ok(catalog)
    }

    /// Load `path` if given; otherwise the default dataset when it exists;
    /// otherwise the built-in catalog.
    pub fn resolve(path: Option<&Path>) -> Result<Self, CatalogError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match default_dataset_path() {
            Some(default) if default.is_file() => Self::load(default),
            _ => Ok(Self::builtin()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up by key, case-insensitively.
    pub fn get(&self, key: &str) -> Option<&IsotopeParameters> {
        self.entries.get(&key.trim().to_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &IsotopeParameters)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl IsotopeCatalog for Catalog {
    fn lookup(&self, key: &str) -> Result<&IsotopeParameters, CatalogError> {
        self.get(key)
            .ok_or_else(|| CatalogError::NotFound(key.to_string()))
    }

    fn entries(&self) -> Vec<(&str, &IsotopeParameters)> {
        self.iter().collect()
    }
}

#[derive(Deserialize)]
struct DatasetEntry {
    name: String,
    half_life: NumberOrText,
    half_life_unit: String,
    #[serde(default)]
    decay_mode: Option<DecayMode>,
}

#[derive(Deserialize)]
struct DecayMode {
    #[serde(default)]
    probability: Option<String>,
}

/// A number that may arrive as a JSON number or as numeric text.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum NumberOrText {
    Number(f64),
    Text(String),
}

impl NumberOrText {
    pub(crate) fn to_f64(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl DatasetEntry {
    fn into_isotope(self) -> Result<IsotopeParameters, DecayError> {
        let half_life = self.half_life.to_f64().ok_or_else(|| {
            DecayError::InvalidIsotope(format!("unparsable half-life for {}", self.name))
        })?;
        let unit: TimeUnit = self
            .half_life_unit
            .parse()
            .map_err(|_| DecayError::InvalidIsotope(format!("unknown unit {:?}", self.half_life_unit)))?;
        let percent = self
            .decay_mode
            .and_then(|m| m.probability)
            .map(|p| extract_gamma_percent(&p))
            .unwrap_or(0.0);
        IsotopeParameters::from_percent(self.name, half_life, unit, percent)
    }
}

/// `<data_dir>/isodecay/isotopes.json`, when the platform has a data directory.
pub fn default_dataset_path() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("isodecay").join("isotopes.json"))
}

/// Parse the leading number of a dataset probability string, as a percentage.
///
/// Returns 0 when the string has no leading number.
///
/// # Examples
///
/// ```
/// use isodecay_core::catalog::extract_gamma_percent;
/// assert_eq!(extract_gamma_percent("81.2 %"), 81.2);
/// assert_eq!(extract_gamma_percent("unknown"), 0.0);
/// ```
pub fn extract_gamma_percent(probability: &str) -> f64 {
    probability
        .split_whitespace()
        .next()
        .and_then(|tok| tok.trim_end_matches('%').parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

// ── Target isotope groups ───────────────────────────────────────────────────

pub const URANIUM_238_SERIES: &[&str] = &[
    "U-238", "Th-234", "Pa-234m", "U-234", "Th-230", "Ra-226", "Rn-222", "Po-218", "Pb-214",
    "Bi-214", "Po-214", "Pb-210", "Bi-210", "Po-210", "Pb-206",
];

pub const THORIUM_232_SERIES: &[&str] = &[
    "Th-232", "Ra-228", "Ac-228", "Th-228", "Ra-224", "Rn-220", "Po-216", "Pb-212", "Bi-212",
    "Po-212", "Pb-208",
];

pub const URANIUM_235_SERIES: &[&str] = &[
    "U-235", "Th-231", "Pa-231", "Ac-227", "Th-227", "Ra-223", "Rn-219", "Po-215", "Pb-211",
    "Bi-211", "Tl-207", "Pb-207",
];

pub const NEPTUNIUM_237_SERIES: &[&str] = &[
    "Np-237", "Pa-233", "U-233", "Th-229", "Ra-225", "Ac-225", "Fr-221", "At-217", "Bi-213",
    "Po-213", "Pb-209", "Bi-209",
];

pub const MEDICAL_ISOTOPES: &[&str] = &[
    "I-131", "Tc-99m", "Co-60", "Cs-137", "Sr-90", "P-32", "Y-90", "Mo-99", "Lu-177", "Ir-192",
];

pub const FISSION_PRODUCTS: &[&str] = &[
    "Cs-137", "Sr-90", "I-131", "Xe-133", "Kr-85", "Ru-106", "Ce-144", "Zr-95",
];

/// Named target groups, in display order.
pub fn target_groups() -> [(&'static str, &'static [&'static str]); 6] {
    [
        ("uranium-238 series", URANIUM_238_SERIES),
        ("thorium-232 series", THORIUM_232_SERIES),
        ("uranium-235 series", URANIUM_235_SERIES),
        ("neptunium-237 series", NEPTUNIUM_237_SERIES),
        ("medical/industrial", MEDICAL_ISOTOPES),
        ("fission products", FISSION_PRODUCTS),
    ]
}

/// Union of all target groups.
pub fn target_isotopes() -> BTreeSet<&'static str> {
    target_groups()
        .into_iter()
        .flat_map(|(_, members)| members.iter().copied())
        .collect()
}
