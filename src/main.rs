//! Migration synchrony analysis - main entry point.
//!
//! Reproduces a published circular-statistics result (Hulthén et al. 2022,
//! Journal of Animal Ecology): day-of-year synchrony of fish migration
//! events, quantified per (season, lake, year) as the mean resultant vector
//! length ρ, plotted over years.
//!
//! Module organization:
//! - `data`: CSV loading into typed observations
//! - `circular`: date-to-angle conversion and mean vector length
//! - `aggregate`: per-(season, lake, year) ρ and per-series means
//! - `plot`: SVG chart rendering
//! - `config`: fixed run parameters

pub mod aggregate;
pub mod circular;
pub mod config;
pub mod data;
pub mod error;
pub mod plot;

use anyhow::Context;
use config::AnalysisConfig;

fn main() {
    println!("Migration Synchrony v{}", env!("CARGO_PKG_VERSION"));

    let config = AnalysisConfig::default();
    if let Err(e) = run(&config) {
        eprintln!("\n✗ Analysis failed: {:#}", e);
        std::process::exit(1);
    }

    println!("\n✓ Analysis complete");
}

/// Run the whole pipeline: load, aggregate, report, render.
fn run(config: &AnalysisConfig) -> anyhow::Result<()> {
    println!(
        "\n[1/4] Loading observations from {}...",
        config.input_path.display()
    );
    let observations = data::load_observations(&config.input_path)
        .with_context(|| format!("loading {}", config.input_path.display()))?;
    println!("✓ {} observations loaded", observations.len());

    println!("\n[2/4] Aggregating by (season, lake, year)...");
    let results = aggregate::aggregate(&observations);
    println!("✓ {} groups", results.len());

    // Reference check: these means are compared by hand against the
    // published values (Krankesjön spring 0.924, autumn 0.743; Søgård Sø
    // spring 0.981, autumn 0.690).
    println!("\n[3/4] Mean ρ per (season, lake) series...");
    for series in aggregate::series_means(&results) {
        println!("{}, {}", series.season, series.lake);
        println!("{:.6}", series.mean_rho);
    }

    println!("\n[4/4] Rendering chart...");
    plot::render(&results, config).context("rendering chart")?;
    println!("✓ Chart written to {}", config.output_path.display());

    Ok(())
}
