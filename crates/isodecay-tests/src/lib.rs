//! Scenario and property test suite for Isodecay.
//!
//! Exercises the engine through the catalog and unit converter the way the
//! CLI and server do, and checks the physical invariants of every run.

pub mod helpers;
