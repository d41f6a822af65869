//! Obligor facts.
//!
//! An obligor is an immutable record of the two raw quantities CreditRisk+
//! needs: the monetary exposure at risk and the one-period probability of
//! default (the Poisson intensity λ). Derived quantities such as band
//! assignments and loss vectors are owned by the engine layer.

use crate::types::{ObligorError, ObligorId};

/// A single borrower contributing exposure and default risk to a portfolio.
///
/// # Examples
///
/// ```
/// use crp_core::types::{Obligor, ObligorId};
///
/// let obligor = Obligor::new(ObligorId::new("OBL001"), 1_000_000.0, 0.02).unwrap();
/// assert_eq!(obligor.exposure(), 1_000_000.0);
/// assert_eq!(obligor.default_probability(), 0.02);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obligor {
    id: ObligorId,
    exposure: f64,
    default_probability: f64,
}

impl Obligor {
    /// Creates a validated obligor.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique obligor identifier
    /// * `exposure` - Monetary amount at risk; finite and strictly positive
    /// * `default_probability` - One-period default probability in [0, 1]
    ///
    /// # Errors
    ///
    /// Returns [`ObligorError::InvalidExposure`] if the exposure is not a
    /// finite positive number, or [`ObligorError::InvalidDefaultProbability`]
    /// if the probability is NaN or outside [0, 1].
    pub fn new(
        id: ObligorId,
        exposure: f64,
        default_probability: f64,
    ) -> Result<Self, ObligorError> {
        if !exposure.is_finite() || exposure <= 0.0 {
            return Err(ObligorError::InvalidExposure { value: exposure });
        }
        if !(0.0..=1.0).contains(&default_probability) {
            return Err(ObligorError::InvalidDefaultProbability {
                value: default_probability,
            });
        }
        Ok(Self {
            id,
            exposure,
            default_probability,
        })
    }

    /// Returns the obligor identifier.
    #[inline]
    pub fn id(&self) -> &ObligorId {
        &self.id
    }

    /// Returns the raw monetary exposure.
    #[inline]
    pub fn exposure(&self) -> f64 {
        self.exposure
    }

    /// Returns the one-period default probability (Poisson intensity λ).
    #[inline]
    pub fn default_probability(&self) -> f64 {
        self.default_probability
    }

    /// Probability of surviving the period with no default, e^(−λ).
    #[inline]
    pub fn no_default_probability(&self) -> f64 {
        (-self.default_probability).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn obligor(exposure: f64, pd: f64) -> Result<Obligor, ObligorError> {
        Obligor::new(ObligorId::new("OBL001"), exposure, pd)
    }

    #[test]
    fn test_valid_obligor() {
        let o = obligor(500_000.0, 0.015).unwrap();
        assert_eq!(o.id().as_str(), "OBL001");
        assert_eq!(o.exposure(), 500_000.0);
        assert_eq!(o.default_probability(), 0.015);
    }

    #[test]
    fn test_boundary_probabilities_accepted() {
        assert!(obligor(100.0, 0.0).is_ok());
        assert!(obligor(100.0, 1.0).is_ok());
    }

    #[test]
    fn test_negative_exposure_rejected() {
        let err = obligor(-100.0, 0.01).unwrap_err();
        assert_eq!(err, ObligorError::InvalidExposure { value: -100.0 });
    }

    #[test]
    fn test_zero_exposure_rejected() {
        assert!(matches!(
            obligor(0.0, 0.01),
            Err(ObligorError::InvalidExposure { .. })
        ));
    }

    #[test]
    fn test_non_finite_exposure_rejected() {
        assert!(obligor(f64::INFINITY, 0.01).is_err());
        assert!(obligor(f64::NAN, 0.01).is_err());
    }

    #[test]
    fn test_out_of_range_probability_rejected() {
        assert!(matches!(
            obligor(100.0, -0.1),
            Err(ObligorError::InvalidDefaultProbability { .. })
        ));
        assert!(matches!(
            obligor(100.0, 1.1),
            Err(ObligorError::InvalidDefaultProbability { .. })
        ));
    }

    #[test]
    fn test_nan_probability_rejected() {
        assert!(obligor(100.0, f64::NAN).is_err());
    }

    #[test]
    fn test_no_default_probability() {
        let o = obligor(100.0, 0.05).unwrap();
        assert_relative_eq!(o.no_default_probability(), (-0.05_f64).exp(), epsilon = 1e-15);
    }

    #[test]
    fn test_clone_and_equality() {
        let a = obligor(100.0, 0.05).unwrap();
        let b = a.clone();
        assert_eq!(a, b);
    }
}
