//! Builder for assembling portfolios obligor by obligor.

use std::collections::HashMap;

use crp_core::Obligor;

use crate::error::EngineError;
use crate::portfolio::Portfolio;

/// Incremental portfolio builder.
///
/// Exposure statistics are maintained as obligors are added: the total,
/// minimum, and maximum update directly, and the average updates as the
/// running mean `(avg · n + exposure) / (n + 1)`. Validation that needs the
/// whole collection (non-emptiness, id uniqueness) happens in
/// [`build`](PortfolioBuilder::build).
///
/// # Examples
///
/// ```
/// use crp_core::{Obligor, ObligorId};
/// use crp_engine::portfolio::PortfolioBuilder;
///
/// let portfolio = PortfolioBuilder::new()
///     .add_obligor(Obligor::new(ObligorId::new("OBL001"), 100.0, 0.01).unwrap())
///     .build()
///     .unwrap();
/// assert_eq!(portfolio.obligor_count(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct PortfolioBuilder {
    obligors: Vec<Obligor>,
    total_exposure: f64,
    min_exposure: f64,
    max_exposure: f64,
    average_exposure: f64,
}

impl Default for PortfolioBuilder {
    fn default() -> Self {
        Self {
            obligors: Vec::new(),
            total_exposure: 0.0,
            min_exposure: f64::INFINITY,
            max_exposure: f64::NEG_INFINITY,
            average_exposure: 0.0,
        }
    }
}

impl PortfolioBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one obligor, updating the running exposure statistics.
    pub fn add_obligor(mut self, obligor: Obligor) -> Self {
        let exposure = obligor.exposure();
        let n = self.obligors.len() as f64;
        self.average_exposure = (self.average_exposure * n + exposure) / (n + 1.0);
        self.total_exposure += exposure;
        self.min_exposure = self.min_exposure.min(exposure);
        self.max_exposure = self.max_exposure.max(exposure);
        self.obligors.push(obligor);
        self
    }

    /// Adds several obligors in iteration order.
    pub fn add_obligors(mut self, obligors: impl IntoIterator<Item = Obligor>) -> Self {
        for obligor in obligors {
            self = self.add_obligor(obligor);
        }
        self
    }

    /// Returns the number of obligors added so far.
    #[inline]
    pub fn obligor_count(&self) -> usize {
        self.obligors.len()
    }

    /// Validates the collection and produces the populated portfolio.
    ///
    /// # Errors
    ///
    /// - [`EngineError::EmptyPortfolio`] if no obligor was added
    /// - [`EngineError::DuplicateObligor`] if an id appears more than once
    pub fn build(self) -> Result<Portfolio, EngineError> {
        if self.obligors.is_empty() {
            return Err(EngineError::EmptyPortfolio);
        }

        let mut index = HashMap::with_capacity(self.obligors.len());
        for (position, obligor) in self.obligors.iter().enumerate() {
            if index.insert(obligor.id().clone(), position).is_some() {
                return Err(EngineError::DuplicateObligor {
                    id: obligor.id().clone(),
                });
            }
        }

        Ok(Portfolio::from_parts(
            self.obligors,
            index,
            self.total_exposure,
            self.min_exposure,
            self.max_exposure,
            self.average_exposure,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crp_core::ObligorId;

    fn obligor(id: &str, exposure: f64) -> Obligor {
        Obligor::new(ObligorId::new(id), exposure, 0.01).unwrap()
    }

    #[test]
    fn test_empty_build_fails() {
        let result = PortfolioBuilder::new().build();
        assert_eq!(result.unwrap_err(), EngineError::EmptyPortfolio);
    }

    #[test]
    fn test_duplicate_id_fails() {
        let result = PortfolioBuilder::new()
            .add_obligor(obligor("OBL001", 100.0))
            .add_obligor(obligor("OBL001", 200.0))
            .build();
        assert_eq!(
            result.unwrap_err(),
            EngineError::DuplicateObligor {
                id: ObligorId::new("OBL001")
            }
        );
    }

    #[test]
    fn test_add_obligors_bulk() {
        let portfolio = PortfolioBuilder::new()
            .add_obligors((1..=5).map(|i| obligor(&format!("OBL{i:03}"), 100.0 * i as f64)))
            .build()
            .unwrap();
        assert_eq!(portfolio.obligor_count(), 5);
        assert_eq!(portfolio.total_exposure(), 1500.0);
    }

    #[test]
    fn test_builder_count() {
        let builder = PortfolioBuilder::new()
            .add_obligor(obligor("OBL001", 100.0))
            .add_obligor(obligor("OBL002", 200.0));
        assert_eq!(builder.obligor_count(), 2);
    }

    #[test]
    fn test_default_is_empty() {
        assert_eq!(PortfolioBuilder::default().obligor_count(), 0);
    }
}
