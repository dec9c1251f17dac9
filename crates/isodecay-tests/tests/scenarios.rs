//! End-to-end decay scenarios on catalog isotopes.
//!
//! Each test looks an isotope up in the built-in catalog, runs the engine on
//! an explicit or default time grid, and checks the physical expectations.

use isodecay_core::catalog::Catalog;
use isodecay_core::error::DecayError;
use isodecay_core::traits::IsotopeCatalog;
use isodecay_core::types::{IsotopeParameters, SimulationConfig};
use isodecay_core::units::{self, TimeUnit};
use isodecay_core::validation::validate_request;
use isodecay_engine::DecayEngine;
use isodecay_tests::helpers::*;

#[test]
fn carbon_14_one_half_life() {
    let c14 = builtin("carbon-14");
    let r = noiseless_run(&c14, 1000.0, &[0.0, 5730.0]);
    assert_eq!(r.remaining[0], 1000.0);
    assert_eq!(r.decayed[0], 0.0);
    assert_close(r.remaining[1], 500.0, 0.01);
    assert_close(r.decayed[1], 500.0, 0.01);
    assert_close(r.remaining[1] + r.decayed[1], 1000.0, 1e-12);
}

#[test]
fn iodine_131_two_half_lives() {
    let i131 = builtin("iodine-131");
    let r = noiseless_run(&i131, 1000.0, &[0.0, 8.02, 16.04]);
    assert_close(r.remaining[0], 1000.0, 1e-12);
    assert_close(r.remaining[1], 500.0, 0.01);
    assert_close(r.remaining[2], 250.0, 0.01);
}

#[test]
fn carbon_14_with_small_noise_stays_near_half() {
    let c14 = builtin("carbon-14");
    let cfg = SimulationConfig::new(1000.0, 1.0, vec![0.0, 5730.0]);
    for seed in 0..20 {
        let r = DecayEngine::seeded(seed).simulate(&c14, &cfg).unwrap();
        // 1% noise: five standard deviations is 25 on a 500 mean.
        assert_close(r.remaining[1], 500.0, 0.05);
    }
}

#[test]
fn half_life_properties_for_every_catalog_isotope() {
    let catalog = Catalog::builtin();
    for (key, iso) in catalog.entries() {
        let h = iso.half_life();
        let r = noiseless_run(iso, 1000.0, &[0.0, h, 2.0 * h]);
        assert_eq!(r.remaining[0], 1000.0, "{key} at t=0");
        assert_close(r.remaining[1], 500.0, 0.01);
        assert_close(r.remaining[2], 250.0, 0.01);
    }
}

#[test]
fn activity_at_t_zero() {
    let iso = plain_isotope(100.0);
    let r = noiseless_run(&iso, 1000.0, &[0.0]);
    assert_eq!(r.activity.len(), 1);
    assert_close(r.activity[0], (std::f64::consts::LN_2 / 100.0) * 1000.0, 1e-12);
    assert_close(r.activity[0], 6.931, 0.001);
}

#[test]
fn zero_initial_amount() {
    let iso = plain_isotope(100.0);
    let r = noiseless_run(&iso, 0.0, &[0.0, 50.0]);
    assert!(r.remaining.iter().all(|&v| v == 0.0));
    assert!(r.decayed.iter().all(|&v| v == 0.0));
    assert!(r.gamma_counts.iter().all(|&g| g == 0));
}

#[test]
fn zero_gamma_probability_never_emits() {
    let c14 = builtin("carbon-14");
    let cfg = SimulationConfig::spanning_half_lives(1.0e6, 500, 20.0, c14.half_life());
    let r = DecayEngine::seeded(17).simulate(&c14, &cfg).unwrap();
    assert!(r.gamma_counts.iter().all(|&g| g == 0));
}

#[test]
fn cobalt_60_emits_nearly_every_decay() {
    let co60 = builtin("cobalt-60");
    let cfg = SimulationConfig::spanning_half_lives(1.0e6, 100, 0.0, co60.half_life());
    let r = DecayEngine::seeded(23).simulate(&co60, &cfg).unwrap();
    let last = r.len() - 1;
    let decayed = r.decayed[last].round();
    let ratio = r.gamma_counts[last] as f64 / decayed;
    assert!((ratio - 0.9985).abs() < 0.005, "ratio {ratio}");
}

#[test]
fn custom_isotope_runs_like_catalog_entry() {
    let custom = IsotopeParameters::from_percent("My-Iodine", 8.02, TimeUnit::Days, 81.2).unwrap();
    let cfg = SimulationConfig::spanning_half_lives(1000.0, 50, 5.0, 8.02);
    let a = DecayEngine::seeded(8).simulate(&custom, &cfg).unwrap();
    let b = DecayEngine::seeded(8).simulate(&builtin("iodine-131"), &cfg).unwrap();
    assert_eq!(a.remaining, b.remaining);
    assert_eq!(a.gamma_counts, b.gamma_counts);
    assert_ne!(a.isotope, b.isotope);
}

#[test]
fn boundary_validation_then_engine() {
    assert!(validate_request(1000.0, 100, 5.0).is_ok());
    assert!(matches!(
        validate_request(1000.0, 5, 5.0),
        Err(DecayError::InvalidConfig(_))
    ));
}

#[test]
fn converter_fixed_points() {
    assert_close(units::convert(1.0, "y", "d").unwrap(), 365.242, 1e-4);
    assert_eq!(units::convert(1.0, "d", "s").unwrap(), 86_400.0);
    assert_eq!(
        units::convert(1.0, "d", "weeks"),
        Err(DecayError::InvalidUnit("weeks".into()))
    );
}

#[test]
fn rescaled_result_keeps_half_life_marker_on_curve() {
    let i131 = builtin("iodine-131");
    let r = noiseless_run(&i131, 1000.0, &[0.0, 8.02]).rescale_time(TimeUnit::Seconds);
    assert_close(r.half_life_marker(), 8.02 * 86_400.0, 1e-12);
    assert_close(r.time_span[1], r.half_life_marker(), 1e-12);
    assert_close(r.remaining[1], 500.0, 0.01);
}

#[test]
fn samples_serialize_like_the_web_api() {
    let i131 = builtin("iodine-131");
    let r = noiseless_run(&i131, 1000.0, &[0.0, 8.02]);
    let json = serde_json::to_value(r.samples()).unwrap();
    assert_eq!(json[0]["time"], "0.00");
    assert_eq!(json[0]["remaining"], "1000.00");
    assert_eq!(json[1]["time"], "8.02");
    assert_eq!(json[1]["remaining"], "500.00");
    assert!(json[1]["gamma"].as_str().unwrap().parse::<u64>().is_ok());
}
