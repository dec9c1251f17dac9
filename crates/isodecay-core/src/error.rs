//! Error types for the Isodecay simulator.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecayError {
    #[error("invalid isotope: {0}")] InvalidIsotope(String),
    #[error("invalid config: {0}")] InvalidConfig(String),
    #[error("invalid unit: {0}")] InvalidUnit(String),
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("isotope not found: {0}")] NotFound(String),
    #[error("io: {0}")] Io(#[from] std::io::Error),
    #[error("json: {0}")] Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum IsodecayError {
    #[error(transparent)] Decay(#[from] DecayError),
    #[error(transparent)] Catalog(#[from] CatalogError),
    #[error(transparent)] Request(#[from] RequestError),
}

/// Rejections of a user-facing simulation request.
///
/// Messages are shown to end users verbatim.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RequestError {
    #[error("No isotope selected.")] NoIsotope,
    #[error("Isotope '{0}' not found.")] UnknownIsotope(String),
    #[error("Invalid custom isotope input.")] InvalidCustomIsotope,
    #[error("Invalid simulation parameters.")] InvalidParameters,
    #[error("Input values out of range or malformed: {0}")] OutOfRange(DecayError),
}
