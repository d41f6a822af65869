//! Error types for the aggregation pipeline.

use crp_core::ObligorId;
use thiserror::Error;

/// Errors raised while building a portfolio or running the aggregation
/// pipeline.
///
/// Stage-ordering mistakes are not represented here: the pipeline's stage
/// types make out-of-order invocation impossible, so the only runtime
/// failures are empty/duplicate inputs, configuration problems, and range
/// overflow in the band arithmetic.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Aggregation requires at least one obligor.
    #[error("portfolio contains no obligors")]
    EmptyPortfolio,

    /// Each obligor id may appear at most once per portfolio.
    #[error("duplicate obligor id: {id}")]
    DuplicateObligor {
        /// The id that was added more than once.
        id: ObligorId,
    },

    /// The truncation epsilon must be a finite, strictly positive number.
    #[error("truncation epsilon must be finite and strictly positive, got {epsilon}")]
    InvalidEpsilon {
        /// The rejected epsilon.
        epsilon: f64,
    },

    /// An obligor's exposure spans more bands than the engine supports.
    #[error("obligor {id} spans {bands} exposure bands, beyond the supported range")]
    BandOverflow {
        /// Obligor whose banded exposure overflowed.
        id: ObligorId,
        /// The computed (unrepresentable) band count.
        bands: f64,
    },

    /// A loss vector's band grid exceeds the addressable FFT dimension.
    #[error("loss vector of length {required} exceeds the addressable FFT dimension")]
    DimensionOverflow {
        /// The unpadded vector length that could not be dimensioned.
        required: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_portfolio_display() {
        assert_eq!(
            EngineError::EmptyPortfolio.to_string(),
            "portfolio contains no obligors"
        );
    }

    #[test]
    fn test_duplicate_obligor_display() {
        let err = EngineError::DuplicateObligor {
            id: ObligorId::new("OBL007"),
        };
        assert_eq!(err.to_string(), "duplicate obligor id: OBL007");
    }

    #[test]
    fn test_invalid_epsilon_display() {
        let err = EngineError::InvalidEpsilon { epsilon: -1e-9 };
        assert_eq!(
            err.to_string(),
            "truncation epsilon must be finite and strictly positive, got -0.000000001"
        );
    }

    #[test]
    fn test_band_overflow_display() {
        let err = EngineError::BandOverflow {
            id: ObligorId::new("OBL001"),
            bands: 1e12,
        };
        assert!(err.to_string().contains("OBL001"));
        assert!(err.to_string().contains("beyond the supported range"));
    }

    #[test]
    fn test_dimension_overflow_display() {
        let err = EngineError::DimensionOverflow { required: 1 << 40 };
        assert!(err.to_string().contains("addressable FFT dimension"));
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(EngineError::EmptyPortfolio, EngineError::EmptyPortfolio);
        assert_ne!(
            EngineError::EmptyPortfolio,
            EngineError::InvalidEpsilon { epsilon: 0.0 }
        );
    }
}
