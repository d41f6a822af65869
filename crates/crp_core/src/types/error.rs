//! Validation errors for obligor inputs.
//!
//! Raw inputs are rejected at construction time so that no downstream
//! aggregation step ever sees an out-of-domain exposure or probability.

use thiserror::Error;

/// Errors produced when raw obligor facts fail validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ObligorError {
    /// Exposure was negative, zero, or not finite.
    ///
    /// A zero exposure is rejected as well: it would band to zero units and
    /// collapse the obligor's loss grid onto a single slot.
    #[error("exposure must be finite and strictly positive, got {value}")]
    InvalidExposure {
        /// The rejected exposure.
        value: f64,
    },

    /// Default probability was outside [0, 1] or NaN.
    #[error("default probability must lie in [0, 1], got {value}")]
    InvalidDefaultProbability {
        /// The rejected probability.
        value: f64,
    },
}
