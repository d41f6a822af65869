//! One-call orchestration of the aggregation pipeline.

use crate::config::EngineConfig;
use crate::distribution::LossDistribution;
use crate::error::EngineError;
use crate::portfolio::Portfolio;

/// Runs the full aggregation pipeline behind a single entry point.
///
/// Callers that want the intermediate stages (band statistics, loss
/// vectors) can drive the stage types directly; the calculator simply
/// chains `normalize_exposures → build_loss_vectors → apply_fft` with a
/// validated configuration.
///
/// # Examples
///
/// ```
/// use crp_core::{Obligor, ObligorId};
/// use crp_engine::{EngineConfig, LossCalculator, PortfolioBuilder};
///
/// let portfolio = PortfolioBuilder::new()
///     .add_obligor(Obligor::new(ObligorId::new("OBL001"), 750_000.0, 0.02).unwrap())
///     .build()
///     .unwrap();
///
/// let calculator = LossCalculator::new(EngineConfig::default()).unwrap();
/// let distribution = calculator.loss_distribution(portfolio).unwrap();
/// assert!((distribution.total_mass() - 1.0).abs() < 1e-8);
/// ```
#[derive(Clone, Debug)]
pub struct LossCalculator {
    config: EngineConfig,
}

impl LossCalculator {
    /// Creates a calculator, validating the configuration up front.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEpsilon`] for an invalid truncation
    /// epsilon.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the run configuration.
    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Computes the portfolio loss distribution, consuming the portfolio.
    pub fn loss_distribution(
        &self,
        portfolio: Portfolio,
    ) -> Result<LossDistribution, EngineError> {
        portfolio
            .normalize_exposures()?
            .build_loss_vectors(&self.config)?
            .apply_fft()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::PortfolioBuilder;
    use approx::assert_relative_eq;
    use crp_core::{Obligor, ObligorId};

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let result = LossCalculator::new(EngineConfig::new().with_epsilon(-1.0));
        assert_eq!(
            result.unwrap_err(),
            EngineError::InvalidEpsilon { epsilon: -1.0 }
        );
    }

    #[test]
    fn test_single_obligor_distribution() {
        let portfolio = PortfolioBuilder::new()
            .add_obligor(Obligor::new(ObligorId::new("OBL001"), 40.0, 0.05).unwrap())
            .build()
            .unwrap();

        let calculator = LossCalculator::new(EngineConfig::default()).unwrap();
        let distribution = calculator.loss_distribution(portfolio).unwrap();

        assert_relative_eq!(
            distribution.probability(0),
            (-0.05_f64).exp(),
            epsilon = 1e-9
        );
        assert_relative_eq!(distribution.total_mass(), 1.0, epsilon = 1e-8);
    }

    #[test]
    fn test_config_accessor() {
        let calculator = LossCalculator::new(EngineConfig::new().with_epsilon(1e-7)).unwrap();
        assert_eq!(calculator.config().epsilon(), 1e-7);
    }
}
