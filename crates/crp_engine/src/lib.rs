//! # CRP Engine (E: Aggregation Kernel)
//!
//! CreditRisk+ portfolio loss aggregation.
//!
//! This crate provides:
//! - Portfolio construction with running exposure statistics
//! - Band normalisation (exposure expressed in floored-σ units)
//! - Truncated-Poisson loss vectors on a common power-of-two grid
//! - FFT convolution of all obligors into the portfolio loss distribution
//! - Loss-distribution statistics (EL, UL, VaR, expected shortfall)
//!
//! ## Architecture
//!
//! The pipeline is a chain of owned stage types; each transition consumes
//! its input, so stages cannot run out of order and no stage can observe a
//! half-built predecessor:
//!
//! ```text
//! ┌──────────────────┐ build() ┌───────────┐ normalize_exposures()
//! │ PortfolioBuilder ├────────▶│ Portfolio ├────────────────┐
//! └──────────────────┘         └───────────┘                ▼
//!                                                  ┌─────────────────┐
//!                                                  │ BandedPortfolio │
//!                                                  └────────┬────────┘
//!                                build_loss_vectors(&config)│
//!                                                           ▼
//! ┌──────────────────┐  apply_fft()  ┌───────────────┐
//! │ LossDistribution │◀──────────────┤ LossVectorSet │
//! └──────────────────┘               └───────────────┘
//! ```
//!
//! `LossCalculator` wraps the three aggregation transitions behind a single
//! call for callers that do not need the intermediate stages.
//!
//! ## Performance
//!
//! - Per-obligor loss vectors and forward FFTs run in parallel with Rayon
//! - Frequency-domain product folds serially in obligor order (deterministic)
//! - O(n · L log L) for n obligors at common dimension L
//!
//! ## Example
//!
//! ```
//! use crp_core::{Obligor, ObligorId};
//! use crp_engine::{EngineConfig, LossCalculator, PortfolioBuilder};
//!
//! let portfolio = PortfolioBuilder::new()
//!     .add_obligor(Obligor::new(ObligorId::new("OBL001"), 1_000_000.0, 0.01).unwrap())
//!     .add_obligor(Obligor::new(ObligorId::new("OBL002"), 2_500_000.0, 0.015).unwrap())
//!     .build()
//!     .unwrap();
//!
//! let calculator = LossCalculator::new(EngineConfig::default()).unwrap();
//! let distribution = calculator.loss_distribution(portfolio).unwrap();
//!
//! // Zero portfolio loss ⇔ no obligor defaults
//! assert!((distribution.probability(0) - (-0.025_f64).exp()).abs() < 1e-9);
//! ```

#![warn(missing_docs)]

pub mod banding;
pub mod calculator;
pub mod config;
pub mod distribution;
pub mod error;
mod fft;
pub mod portfolio;
pub mod vectors;

// Re-export commonly used types
pub use banding::BandedPortfolio;
pub use calculator::LossCalculator;
pub use config::{EngineConfig, DEFAULT_EPSILON};
pub use distribution::LossDistribution;
pub use error::EngineError;
pub use portfolio::{Portfolio, PortfolioBuilder};
pub use vectors::LossVectorSet;
