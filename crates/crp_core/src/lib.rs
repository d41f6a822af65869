//! # crp_core: Domain Foundation for CreditRisk+ Aggregation
//!
//! ## Layer C (Core) Role
//!
//! crp_core is the bottom layer of the workspace, providing:
//! - Obligor identity and facts: `ObligorId`, `Obligor` (`types`)
//! - Validation errors: `ObligorError` (`types::error`)
//! - Truncated-Poisson term expansion (`math::poisson`)
//!
//! ## Zero Dependency Principle
//!
//! The core layer has no dependencies on other crp_* crates, with minimal
//! external dependencies:
//! - thiserror: Typed validation errors
//! - serde: Serialisation support (optional)
//!
//! An `Obligor` is an immutable record of raw facts (identity, exposure,
//! default probability). Everything derived from those facts during an
//! aggregation run (band assignments, loss vectors, transforms) is owned
//! by the engine layer, never written back onto the obligor.
//!
//! ## Usage Examples
//!
//! ```rust
//! use crp_core::math::poisson::truncated_terms;
//! use crp_core::types::{Obligor, ObligorId};
//!
//! // An obligor with 2.5m exposure and a 3% annual default probability
//! let obligor = Obligor::new(ObligorId::new("OBL001"), 2_500_000.0, 0.03).unwrap();
//! assert_eq!(obligor.id().as_str(), "OBL001");
//!
//! // Poisson default-count masses, truncated at 1e-9
//! let terms = truncated_terms(obligor.default_probability(), 1e-9);
//! assert!((terms[0] - (-0.03_f64).exp()).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `ObligorId` and `Obligor`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;

pub use types::{Obligor, ObligorError, ObligorId};
