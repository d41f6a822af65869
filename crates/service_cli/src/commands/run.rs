//! Run command implementation
//!
//! Loads an obligor book, drives the aggregation stages and emits a JSON
//! report with the headline risk figures.

use std::fs;
use std::time::Instant;

use crp_engine::{EngineConfig, LossDistribution, PortfolioBuilder};
use serde::Serialize;
use tracing::{debug, info};

use crate::{input, CliError, Result};

/// Tail figures at one confidence level.
#[derive(Debug, Serialize)]
struct TailStatistic {
    level: f64,
    value_at_risk: f64,
    expected_shortfall: f64,
}

/// Headline report for one aggregation run.
#[derive(Debug, Serialize)]
struct RunReport {
    generated_at: String,
    portfolio: String,
    obligor_count: usize,
    total_exposure: f64,
    epsilon: f64,
    band_width: f64,
    dimension: usize,
    total_mass: f64,
    expected_loss: f64,
    unexpected_loss: f64,
    tail: Vec<TailStatistic>,
}

/// Run the aggregation command.
pub fn run(
    portfolio: &str,
    epsilon: f64,
    levels: &[f64],
    output: Option<&str>,
    pmf_csv: Option<&str>,
) -> Result<()> {
    for &level in levels {
        if !(0.0..1.0).contains(&level) || level == 0.0 {
            return Err(CliError::InvalidArgument(format!(
                "confidence level must lie in (0, 1), got {level}"
            )));
        }
    }

    info!("Loading obligor book from {}", portfolio);
    let obligors = input::load_obligors(portfolio)?;
    info!("Loaded {} obligors", obligors.len());

    let started = Instant::now();
    let book = PortfolioBuilder::new().add_obligors(obligors).build()?;
    let obligor_count = book.obligor_count();
    let total_exposure = book.total_exposure();
    info!("Portfolio built: total exposure {:.2}", total_exposure);

    let banded = book.normalize_exposures()?;
    info!(
        "Exposures banded: width {:.4}, highest band {}",
        banded.band_width(),
        banded.highest_band()
    );

    let config = EngineConfig::new().with_epsilon(epsilon);
    let vectors = banded.build_loss_vectors(&config)?;
    debug!(
        "Expanded {} loss vectors to dimension {}",
        vectors.vectors().len(),
        vectors.dimension()
    );

    let distribution = vectors.apply_fft()?;
    info!(
        "Distribution over {} bands recovered in {:.2?}",
        distribution.len(),
        started.elapsed()
    );

    let mut tail = Vec::with_capacity(levels.len());
    for &level in levels {
        let value_at_risk = distribution.value_at_risk(level);
        let expected_shortfall = distribution.expected_shortfall(level);
        match (value_at_risk, expected_shortfall) {
            (Some(value_at_risk), Some(expected_shortfall)) => tail.push(TailStatistic {
                level,
                value_at_risk,
                expected_shortfall,
            }),
            _ => {
                return Err(CliError::InvalidArgument(format!(
                    "distribution mass never reaches confidence level {level}"
                )))
            }
        }
    }

    let report = RunReport {
        generated_at: chrono::Utc::now().to_rfc3339(),
        portfolio: portfolio.to_string(),
        obligor_count,
        total_exposure,
        epsilon,
        band_width: distribution.band_width(),
        dimension: distribution.len(),
        total_mass: distribution.total_mass(),
        expected_loss: distribution.expected_loss(),
        unexpected_loss: distribution.unexpected_loss(),
        tail,
    };

    if let Some(path) = pmf_csv {
        export_pmf(&distribution, path)?;
        info!("Distribution exported to {}", path);
    }

    match output {
        Some(path) => {
            fs::write(path, serde_json::to_string_pretty(&report)?)?;
            info!("Report written to {}", path);
            print_summary(&report);
        }
        None => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    info!("Aggregation complete");
    Ok(())
}

/// One row of the exported distribution.
#[derive(Serialize)]
struct PmfRow {
    band: usize,
    loss: f64,
    probability: f64,
    cumulative: f64,
}

fn export_pmf(distribution: &LossDistribution, path: &str) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    let cumulative = distribution.cumulative();

    for (band, (&probability, &cumulative)) in
        distribution.pmf().iter().zip(&cumulative).enumerate()
    {
        writer.serialize(PmfRow {
            band,
            loss: distribution.loss_at(band),
            probability,
            cumulative,
        })?;
    }

    writer.flush()?;
    Ok(())
}

fn print_summary(report: &RunReport) {
    println!("----------------------------------------------------");
    println!("Obligors:        {}", report.obligor_count);
    println!("Total exposure:  {:.2}", report.total_exposure);
    println!("Band width:      {:.4}", report.band_width);
    println!("Expected loss:   {:.2}", report.expected_loss);
    println!("Unexpected loss: {:.2}", report.unexpected_loss);
    println!("----------------------------------------------------");
    println!(
        "{:<10} {:>18} {:>20}",
        "Level", "VaR", "Expected shortfall"
    );
    println!("----------------------------------------------------");
    for statistic in &report.tail {
        println!(
            "{:<10} {:>18.2} {:>20.2}",
            format!("{:.1}%", statistic.level * 100.0),
            statistic.value_at_risk,
            statistic.expected_shortfall
        );
    }
    println!("----------------------------------------------------");
}
