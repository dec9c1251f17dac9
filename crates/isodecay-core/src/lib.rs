//! # isodecay-core
//! Foundation types and traits for the Isodecay simulator.

pub mod catalog;
pub mod constants;
pub mod error;
pub mod request;
pub mod traits;
pub mod types;
pub mod units;
pub mod validation;
