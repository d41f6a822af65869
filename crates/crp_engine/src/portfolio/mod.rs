//! Portfolio construction and exposure statistics.
//!
//! This module provides:
//! - `PortfolioBuilder`: obligor collection with running exposure statistics
//! - `Portfolio`: the populated, immutable stage the aggregation starts from
//!
//! A `Portfolio` preserves obligor insertion order (the frequency-domain
//! product later folds in that order) and guarantees at least one obligor
//! and unique obligor ids.
//!
//! # Examples
//!
//! ```
//! use crp_core::{Obligor, ObligorId};
//! use crp_engine::portfolio::PortfolioBuilder;
//!
//! let portfolio = PortfolioBuilder::new()
//!     .add_obligor(Obligor::new(ObligorId::new("OBL001"), 400_000.0, 0.02).unwrap())
//!     .add_obligor(Obligor::new(ObligorId::new("OBL002"), 600_000.0, 0.01).unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(portfolio.obligor_count(), 2);
//! assert_eq!(portfolio.total_exposure(), 1_000_000.0);
//! ```

mod builder;

pub use builder::PortfolioBuilder;

use std::collections::HashMap;

use crp_core::{Obligor, ObligorId};

/// A populated portfolio: ordered obligors plus their running exposure
/// statistics.
///
/// Produced only by [`PortfolioBuilder::build`], which guarantees the
/// portfolio is non-empty and obligor ids are unique. Aggregation proceeds
/// by consuming the portfolio with
/// [`normalize_exposures`](Portfolio::normalize_exposures).
#[derive(Clone, Debug)]
pub struct Portfolio {
    obligors: Vec<Obligor>,
    index: HashMap<ObligorId, usize>,
    total_exposure: f64,
    min_exposure: f64,
    max_exposure: f64,
    average_exposure: f64,
}

impl Portfolio {
    pub(crate) fn from_parts(
        obligors: Vec<Obligor>,
        index: HashMap<ObligorId, usize>,
        total_exposure: f64,
        min_exposure: f64,
        max_exposure: f64,
        average_exposure: f64,
    ) -> Self {
        Self {
            obligors,
            index,
            total_exposure,
            min_exposure,
            max_exposure,
            average_exposure,
        }
    }

    /// Returns the number of obligors (always ≥ 1).
    #[inline]
    pub fn obligor_count(&self) -> usize {
        self.obligors.len()
    }

    /// Returns the obligors in insertion order.
    #[inline]
    pub fn obligors(&self) -> &[Obligor] {
        &self.obligors
    }

    /// Looks up an obligor by id.
    #[inline]
    pub fn obligor(&self, id: &ObligorId) -> Option<&Obligor> {
        self.index.get(id).map(|&i| &self.obligors[i])
    }

    /// Returns the position of an obligor in insertion order.
    #[inline]
    pub(crate) fn position(&self, id: &ObligorId) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Sum of all raw exposures.
    #[inline]
    pub fn total_exposure(&self) -> f64 {
        self.total_exposure
    }

    /// Smallest raw exposure.
    #[inline]
    pub fn min_exposure(&self) -> f64 {
        self.min_exposure
    }

    /// Largest raw exposure.
    #[inline]
    pub fn max_exposure(&self) -> f64 {
        self.max_exposure
    }

    /// Running mean of raw exposures, updated on each addition during the
    /// build.
    #[inline]
    pub fn average_exposure(&self) -> f64 {
        self.average_exposure
    }
}
