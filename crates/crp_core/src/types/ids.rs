//! Identifier types for portfolio entities.
//!
//! This module provides a strongly-typed identifier for obligors. Using a
//! newtype ensures type safety and prevents accidental misuse of raw
//! strings as identifiers.

use std::fmt;

/// Unique identifier for an obligor.
///
/// # Examples
///
/// ```
/// use crp_core::types::ObligorId;
///
/// let id = ObligorId::new("OBL001");
/// assert_eq!(id.as_str(), "OBL001");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObligorId(String);

impl ObligorId {
    /// Creates a new obligor ID.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObligorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ObligorId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ObligorId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
