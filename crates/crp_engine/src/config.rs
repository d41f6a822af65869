//! Run configuration for the aggregation engine.

use crate::error::EngineError;

/// Default truncation epsilon for the Poisson-term expansion.
///
/// Small enough that a single obligor's truncated vector carries its full
/// probability mass to well within floating tolerance.
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Configuration for one aggregation run.
///
/// The truncation epsilon controls where each obligor's Poisson expansion
/// stops (see [`crp_core::math::poisson::truncated_terms`]): smaller values
/// keep more tail terms, producing longer loss vectors and a potentially
/// larger common FFT dimension.
///
/// # Examples
///
/// ```
/// use crp_engine::EngineConfig;
///
/// let config = EngineConfig::default().with_epsilon(1e-12);
/// assert_eq!(config.epsilon(), 1e-12);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    epsilon: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl EngineConfig {
    /// Creates a configuration with the default truncation epsilon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the truncation epsilon.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Returns the truncation epsilon.
    #[inline]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEpsilon`] if the epsilon is NaN,
    /// infinite, zero, or negative.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(EngineError::InvalidEpsilon {
                epsilon: self.epsilon,
            });
        }
        Ok(())
    }
}
