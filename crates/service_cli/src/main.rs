//! crplus - Command Line Operations for Portfolio Loss Aggregation
//!
//! This is the operational entry point for the credit portfolio loss
//! aggregation library.
//!
//! # Commands
//!
//! - `crplus run --portfolio <file>` - Compute the loss distribution for a book
//! - `crplus generate --output <file>` - Generate a synthetic obligor book
//!
//! # Architecture
//!
//! As the service layer of the workspace, this crate orchestrates the
//! engine stages and handles all file IO; the engine crates themselves
//! stay free of logging and filesystem concerns.

use clap::{Parser, Subcommand};
use crp_engine::DEFAULT_EPSILON;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod input;

pub use error::{CliError, Result};

/// Credit portfolio loss aggregation CLI
#[derive(Parser)]
#[command(name = "crplus")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the portfolio loss distribution from an obligor book
    Run {
        /// Path to the obligor book (CSV with id,exposure,default_probability)
        #[arg(short, long)]
        portfolio: String,

        /// Poisson series truncation threshold
        #[arg(short, long, default_value_t = DEFAULT_EPSILON)]
        epsilon: f64,

        /// Confidence levels for VaR and expected shortfall
        #[arg(long, value_delimiter = ',', default_values_t = vec![0.95, 0.99, 0.999])]
        levels: Vec<f64>,

        /// Write the JSON report to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Also export the full distribution as CSV
        #[arg(long)]
        pmf_csv: Option<String>,
    },

    /// Generate a synthetic obligor book for testing
    Generate {
        /// Number of obligors to generate
        #[arg(short = 'n', long, default_value = "1000")]
        obligors: usize,

        /// Seed for the random generator
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Output CSV path
        #[arg(short, long)]
        output: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialise tracing; RUST_LOG overrides the verbosity flag.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(if cli.verbose { "debug" } else { "info" })
    });
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Run {
            portfolio,
            epsilon,
            levels,
            output,
            pmf_csv,
        } => commands::run::run(
            &portfolio,
            epsilon,
            &levels,
            output.as_deref(),
            pmf_csv.as_deref(),
        ),
        Commands::Generate {
            obligors,
            seed,
            output,
        } => commands::generate::run(obligors, seed, &output),
    }
}
