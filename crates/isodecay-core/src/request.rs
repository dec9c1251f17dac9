//! User-facing simulation requests and responses.
//!
//! A [`SimulationRequest`] carries the fields of the web form (or the CLI
//! flags): an isotope key or `"custom"` with custom-isotope fields, plus the
//! initial amount, sample count and noise. Numeric fields accept JSON numbers
//! or numeric strings.

use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::NumberOrText;
use crate::constants::CUSTOM_ISOTOPE_KEY;
use crate::error::RequestError;
use crate::traits::IsotopeCatalog;
use crate::types::{DataPoint, IsotopeParameters, SimulationConfig, SimulationResult};
use crate::units::TimeUnit;
use crate::validation::validate_request;

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct SimulationRequest {
    /// Catalog key, or `"custom"`.
    #[serde(default)]
    pub isotope: String,
    #[serde(deserialize_with = "number")]
    pub initial_amount: f64,
    #[serde(deserialize_with = "number")]
    pub time_points: f64,
    #[serde(deserialize_with = "number")]
    pub noise: f64,
    #[serde(default)]
    pub custom_name: Option<String>,
    #[serde(default, deserialize_with = "optional_number")]
    pub custom_half_life: Option<f64>,
    /// Gamma emission percentage, `[0, 100]`.
    #[serde(default, deserialize_with = "optional_number")]
    pub custom_gamma: Option<f64>,
    #[serde(default)]
    pub custom_half_life_unit: Option<String>,
}

fn number<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    NumberOrText::deserialize(d)?
        .to_f64()
        .ok_or_else(|| serde::de::Error::custom("expected a number"))
}

fn optional_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    match Option::<NumberOrText>::deserialize(d)? {
        None => Ok(None),
        Some(NumberOrText::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(v) => v
            .to_f64()
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom("expected a number")),
    }
}

impl SimulationRequest {
    /// Parse a JSON request body.
    pub fn from_json(value: serde_json::Value) -> Result<Self, RequestError> {
        serde_json::from_value(value).map_err(|_| RequestError::InvalidParameters)
    }

    /// Whether the request names a user-supplied isotope.
    pub fn is_custom(&self) -> bool {
        self.isotope.trim().eq_ignore_ascii_case(CUSTOM_ISOTOPE_KEY)
    }

    /// The isotope to simulate: a catalog entry or the custom isotope.
    pub fn resolve_isotope(
        &self,
        catalog: &dyn IsotopeCatalog,
    ) -> Result<IsotopeParameters, RequestError> {
        let key = self.isotope.trim();
        if key.is_empty() {
            return Err(RequestError::NoIsotope);
        }
        if self.is_custom() {
            return self.custom_isotope();
        }
        catalog
            .lookup(&key.to_lowercase())
            .cloned()
            .map_err(|_| RequestError::UnknownIsotope(key.to_string()))
    }

    fn custom_isotope(&self) -> Result<IsotopeParameters, RequestError> {
        let (Some(name), Some(half_life), Some(gamma), Some(unit)) = (
            self.custom_name.as_deref(),
            self.custom_half_life,
            self.custom_gamma,
            self.custom_half_life_unit.as_deref(),
        ) else {
            return Err(RequestError::InvalidCustomIsotope);
        };
        let unit: TimeUnit = unit.parse().map_err(|_| RequestError::InvalidCustomIsotope)?;
        IsotopeParameters::from_percent(name.trim(), half_life, unit, gamma)
            .map_err(|_| RequestError::InvalidCustomIsotope)
    }

    /// Sample count as an integer.
    pub fn sample_count(&self) -> Result<usize, RequestError> {
        let n = self.time_points;
        if !n.is_finite() || n < 0.0 || n.fract() != 0.0 || n > usize::MAX as f64 {
            return Err(RequestError::InvalidParameters);
        }
        Ok(n as usize)
    }

    /// Range-check the request and build the default four-half-life grid.
    pub fn to_config(&self, isotope: &IsotopeParameters) -> Result<SimulationConfig, RequestError> {
        let points = self.sample_count()?;
        validate_request(self.initial_amount, points, self.noise).map_err(RequestError::OutOfRange)?;
        Ok(SimulationConfig::spanning_half_lives(
            self.initial_amount,
            points,
            self.noise,
            isotope.half_life(),
        ))
    }
}

/// Response body for a completed simulation.
#[derive(Serialize, Debug, Clone)]
pub struct SimulationResponse {
    pub isotope: String,
    /// Half-life marker position on the time axis.
    pub half_life: f64,
    pub time_unit: TimeUnit,
    pub data: Vec<DataPoint>,
}

impl From<&SimulationResult> for SimulationResponse {
    fn from(result: &SimulationResult) -> Self {
        Self {
            isotope: result.isotope.clone(),
            half_life: result.half_life_marker(),
            time_unit: result.time_unit,
            data: result.samples(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use serde_json::json;

    fn base() -> SimulationRequest {
        SimulationRequest {
            isotope: "iodine-131".into(),
            initial_amount: 1000.0,
            time_points: 100.0,
            noise: 5.0,
            ..SimulationRequest::default()
        }
    }

    #[test]
    fn parses_strings_and_numbers() {
        let req = SimulationRequest::from_json(json!({
            "isotope": "cobalt-60",
            "initial_amount": "1000",
            "time_points": 50,
            "noise": "3",
            "checkedBoxes": ["remaining"],
        }))
        .unwrap();
        assert_eq!(req.initial_amount, 1000.0);
        assert_eq!(req.sample_count().unwrap(), 50);
        assert_eq!(req.noise, 3.0);
        assert!(!req.is_custom());
    }

    #[test]
    fn blank_custom_fields_are_absent() {
        let req = SimulationRequest::from_json(json!({
            "isotope": "carbon-14",
            "initial_amount": 10,
            "time_points": 10,
            "noise": 0,
            "custom_name": "",
            "custom_half_life": "",
            "custom_gamma": " ",
        }))
        .unwrap();
        assert_eq!(req.custom_half_life, None);
        assert_eq!(req.custom_gamma, None);
    }

    #[test]
    fn missing_or_malformed_parameters() {
        let missing = json!({"isotope": "cobalt-60", "initial_amount": 10});
        assert_eq!(
            SimulationRequest::from_json(missing),
            Err(RequestError::InvalidParameters)
        );
        let malformed = json!({"isotope": "x", "initial_amount": "ten", "time_points": 10, "noise": 0});
        assert_eq!(
            SimulationRequest::from_json(malformed),
            Err(RequestError::InvalidParameters)
        );
    }

    #[test]
    fn resolves_catalog_isotope() {
        let iso = base().resolve_isotope(&Catalog::builtin()).unwrap();
        assert_eq!(iso.name(), "Iodine-131");
    }

    #[test]
    fn empty_isotope_is_no_selection() {
        let req = SimulationRequest { isotope: "  ".into(), ..base() };
        assert_eq!(
            req.resolve_isotope(&Catalog::builtin()),
            Err(RequestError::NoIsotope)
        );
    }

    #[test]
    fn unknown_isotope_message() {
        let req = SimulationRequest { isotope: "unobtainium-1".into(), ..base() };
        let err = req.resolve_isotope(&Catalog::builtin()).unwrap_err();
        assert_eq!(err.to_string(), "Isotope 'unobtainium-1' not found.");
    }

    #[test]
    fn custom_isotope_from_percent() {
        let req = SimulationRequest::from_json(json!({
            "isotope": "custom",
            "initial_amount": 500,
            "time_points": 20,
            "noise": 0,
            "custom_name": "Tc-99m",
            "custom_half_life": "6.01",
            "custom_gamma": 89,
            "custom_half_life_unit": "d",
        }))
        .unwrap();
        let iso = req.resolve_isotope(&Catalog::builtin()).unwrap();
        assert_eq!(iso.name(), "Tc-99m");
        assert_eq!(iso.half_life(), 6.01);
        assert!((iso.gamma_emission_probability() - 0.89).abs() < 1e-12);
    }

    #[test]
    fn custom_isotope_rejections() {
        let incomplete = SimulationRequest {
            isotope: "custom".into(),
            custom_name: Some("X".into()),
            ..base()
        };
        let catalog = Catalog::builtin();
        assert_eq!(
            incomplete.resolve_isotope(&catalog),
            Err(RequestError::InvalidCustomIsotope)
        );

        let negative = SimulationRequest {
            custom_half_life: Some(-1.0),
            custom_gamma: Some(10.0),
            custom_half_life_unit: Some("d".into()),
            ..incomplete.clone()
        };
        assert_eq!(
            negative.resolve_isotope(&catalog),
            Err(RequestError::InvalidCustomIsotope)
        );

        let bad_unit = SimulationRequest {
            custom_half_life: Some(1.0),
            custom_gamma: Some(10.0),
            custom_half_life_unit: Some("hours".into()),
            ..incomplete
        };
        assert_eq!(
            bad_unit.resolve_isotope(&catalog),
            Err(RequestError::InvalidCustomIsotope)
        );
    }

    #[test]
    fn to_config_builds_four_half_life_grid() {
        let req = base();
        let iso = req.resolve_isotope(&Catalog::builtin()).unwrap();
        let cfg = req.to_config(&iso).unwrap();
        assert_eq!(cfg.time_points(), 100);
        assert_eq!(*cfg.time_span.last().unwrap(), 4.0 * 8.02);
        assert_eq!(cfg.noise_percentage, 5.0);
    }

    #[test]
    fn to_config_range_checks() {
        let iso = base().resolve_isotope(&Catalog::builtin()).unwrap();
        let too_noisy = SimulationRequest { noise: 25.0, ..base() };
        assert!(matches!(too_noisy.to_config(&iso), Err(RequestError::OutOfRange(_))));
        let fractional = SimulationRequest { time_points: 10.5, ..base() };
        assert_eq!(fractional.to_config(&iso), Err(RequestError::InvalidParameters));
    }

    #[test]
    fn response_from_result() {
        let result = SimulationResult {
            isotope: "Iodine-131".into(),
            half_life: 8.02,
            time_unit: TimeUnit::Days,
            time_span: vec![0.0, 8.02],
            remaining: vec![1000.0, 500.0],
            decayed: vec![0.0, 500.0],
            activity: vec![86.43, 43.21],
            gamma_counts: vec![0, 406],
        };
        let body = serde_json::to_value(SimulationResponse::from(&result)).unwrap();
        assert_eq!(body["isotope"], "Iodine-131");
        assert_eq!(body["time_unit"], "d");
        assert_eq!(body["data"][1]["gamma"], "406");
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
    }
}
