//! Domain value types for the aggregation engine.
//!
//! This module provides the obligor identity newtype, the validated
//! `Obligor` record, and the error type produced when raw inputs fail
//! validation.

pub mod error;
pub mod ids;
pub mod obligor;

pub use error::ObligorError;
pub use ids::ObligorId;
pub use obligor::Obligor;
