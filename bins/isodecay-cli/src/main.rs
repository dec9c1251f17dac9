//! isodecay-cli: Command-line radioactive decay simulator.
//!
//! Runs a simulation for a catalog or custom isotope and prints the sample
//! table (or JSON), lists the isotope catalog, and converts time units.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use isodecay_core::catalog::{Catalog, target_groups};
use isodecay_core::constants::CUSTOM_ISOTOPE_KEY;
use isodecay_core::request::{SimulationRequest, SimulationResponse};
use isodecay_core::types::SimulationResult;
use isodecay_core::units::{self, TimeUnit};
use isodecay_engine::DecayEngine;
use tracing::debug;

/// Isodecay command-line interface.
#[derive(Parser)]
#[command(name = "isodecay-cli")]
#[command(version, about = "Simulate radioactive decay, activity and gamma emission.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a decay simulation.
    Simulate(SimulateArgs),
    /// List the isotope catalog.
    Isotopes(IsotopesArgs),
    /// Convert a time value between units (s, d, y).
    Convert(ConvertArgs),
}

#[derive(Args)]
struct SimulateArgs {
    /// Catalog key (e.g. iodine-131), or "custom" with the --custom-* flags.
    #[arg(short, long, default_value = "carbon-14")]
    isotope: String,

    /// Initial amount of material.
    #[arg(short = 'a', long, default_value = "1000")]
    initial_amount: f64,

    /// Number of samples between 0 and four half-lives.
    #[arg(short = 'n', long, default_value = "100")]
    time_points: usize,

    /// Measurement noise as a percentage of the remaining amount (0-20).
    #[arg(long, default_value = "0")]
    noise: f64,

    /// Fixed random seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// JSON isotope dataset (default: built-in catalog).
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Express the time axis in this unit instead of the half-life unit.
    #[arg(short, long)]
    display_unit: Option<String>,

    /// Print JSON instead of a table.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    custom: CustomArgs,
}

#[derive(Args)]
struct CustomArgs {
    /// Custom isotope name.
    #[arg(long)]
    custom_name: Option<String>,

    /// Custom isotope half-life.
    #[arg(long)]
    custom_half_life: Option<f64>,

    /// Custom isotope half-life unit (s, d, y).
    #[arg(long)]
    custom_unit: Option<String>,

    /// Custom isotope gamma emission percentage (0-100).
    #[arg(long)]
    custom_gamma: Option<f64>,
}

#[derive(Args)]
struct IsotopesArgs {
    /// JSON isotope dataset (default: built-in catalog).
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Also list the target isotope groups.
    #[arg(long)]
    targets: bool,
}

#[derive(Args)]
struct ConvertArgs {
    value: f64,
    from: String,
    to: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate(args) => simulate(args),
        Commands::Isotopes(args) => list_isotopes(args),
        Commands::Convert(args) => convert(args),
    }
}

/// Run one simulation and print it.
fn simulate(args: SimulateArgs) -> Result<()> {
    let catalog = Catalog::resolve(args.catalog.as_deref()).context("Failed to load isotope catalog")?;
    let isotope_key = if args.custom.custom_name.is_some() {
        CUSTOM_ISOTOPE_KEY.to_string()
    } else {
        args.isotope
    };

    let request = SimulationRequest {
        isotope: isotope_key,
        initial_amount: args.initial_amount,
        time_points: args.time_points as f64,
        noise: args.noise,
        custom_name: args.custom.custom_name,
        custom_half_life: args.custom.custom_half_life,
        custom_gamma: args.custom.custom_gamma,
        custom_half_life_unit: args.custom.custom_unit,
    };

    let isotope = request.resolve_isotope(&catalog)?;
    let config = request.to_config(&isotope)?;

    let mut engine = match args.seed {
        Some(seed) => DecayEngine::seeded(seed),
        None => DecayEngine::from_entropy(),
    };
    debug!(isotope = isotope.name(), seed = ?args.seed, "Simulating");
    let mut result = engine.simulate(&isotope, &config)?;

    if let Some(unit) = args.display_unit {
        let unit: TimeUnit = unit.parse()?;
        result = result.rescale_time(unit);
    }

    if args.json {
        let body = SimulationResponse::from(&result);
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        print_table(&result);
    }
    Ok(())
}

fn print_table(result: &SimulationResult) {
    let unit = result.time_unit;
    println!("\n=== DECAY SIMULATION: {} ===", result.isotope);
    println!("Half-life: {} {unit}", result.half_life_marker());
    println!("Samples:   {}", result.len());
    println!();
    println!(
        "{:>14} {:>14} {:>14} {:>14} {:>10}",
        format!("time ({unit})"),
        "remaining",
        "decayed",
        format!("rate (/{unit})"),
        "gamma"
    );
    for point in result.samples() {
        println!("{point}");
    }
}

/// Print every catalog entry, optionally followed by the target groups.
fn list_isotopes(args: IsotopesArgs) -> Result<()> {
    let catalog = Catalog::resolve(args.catalog.as_deref()).context("Failed to load isotope catalog")?;

    println!("{:<16} {:<18} {:>14} {:>5} {:>9}", "key", "name", "half-life", "unit", "gamma %");
    for (key, iso) in catalog.iter() {
        println!(
            "{:<16} {:<18} {:>14} {:>5} {:>9.2}",
            key,
            iso.name(),
            iso.half_life(),
            iso.half_life_unit(),
            iso.gamma_emission_probability() * 100.0
        );
    }

    if args.targets {
        println!();
        for (group, members) in target_groups() {
            println!("{group}: {}", members.join(", "));
        }
    }
    Ok(())
}

fn convert(args: ConvertArgs) -> Result<()> {
    let value = units::convert(args.value, &args.from, &args.to)?;
    println!("{value}");
    Ok(())
}
