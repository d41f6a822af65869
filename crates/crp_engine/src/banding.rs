//! Band normalisation: raw exposures onto the portfolio's integer grid.
//!
//! The band width is one population standard deviation of exposure, floored
//! at 1.0; every obligor's exposure is then expressed as a whole number of
//! bands. Losses later land only on multiples of each obligor's band count,
//! which is what lets independent obligors share one discrete loss grid.

use crp_core::ObligorId;

use crate::error::EngineError;
use crate::portfolio::Portfolio;

/// Largest per-obligor band count the engine accepts.
const MAX_BAND_UNITS: f64 = u32::MAX as f64;

impl Portfolio {
    /// Normalises every exposure into integer band units, consuming the
    /// portfolio.
    ///
    /// The band width is one population standard deviation of exposure,
    /// computed over the complete book. It is floored at 1.0 so a single
    /// obligor or all-equal exposures keep a non-degenerate band. Each
    /// obligor's band count is `ceil(exposure / band_width)`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::BandOverflow`] if any obligor's band count
    /// cannot be represented.
    pub fn normalize_exposures(self) -> Result<BandedPortfolio, EngineError> {
        let n = self.obligor_count() as f64;
        let mean = self.average_exposure();
        let variance = self
            .obligors()
            .iter()
            .map(|o| {
                let dev = o.exposure() - mean;
                dev * dev
            })
            .sum::<f64>()
            / n;
        let band_width = variance.sqrt().max(1.0);

        let mut band_units = Vec::with_capacity(self.obligor_count());
        let mut total_band_units: u64 = 0;
        let mut highest_band: u32 = 0;
        for obligor in self.obligors() {
            let raw = (obligor.exposure() / band_width).ceil();
            // Positive exposure over a width ≥ 1 always yields ≥ 1 band;
            // the range check also rejects NaN from pathological inputs.
            if !(1.0..=MAX_BAND_UNITS).contains(&raw) {
                return Err(EngineError::BandOverflow {
                    id: obligor.id().clone(),
                    bands: raw,
                });
            }
            let units = raw as u32;
            band_units.push(units);
            total_band_units += u64::from(units);
            highest_band = highest_band.max(units);
        }

        Ok(BandedPortfolio {
            portfolio: self,
            band_width,
            band_units,
            total_band_units,
            highest_band,
        })
    }
}

/// A portfolio whose exposures have been normalised onto the band grid.
///
/// Owns the per-obligor band counts (stored in obligor order) alongside the
/// originating portfolio; obligors themselves are never mutated.
#[derive(Clone, Debug)]
pub struct BandedPortfolio {
    portfolio: Portfolio,
    band_width: f64,
    band_units: Vec<u32>,
    total_band_units: u64,
    highest_band: u32,
}

impl BandedPortfolio {
    /// Returns the underlying portfolio.
    #[inline]
    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    /// Width of one exposure band (population σ of exposures, ≥ 1.0).
    #[inline]
    pub fn band_width(&self) -> f64 {
        self.band_width
    }

    /// Per-obligor band counts, in obligor insertion order.
    #[inline]
    pub fn band_units(&self) -> &[u32] {
        &self.band_units
    }

    /// Looks up one obligor's band count by id.
    #[inline]
    pub fn band_units_of(&self, id: &ObligorId) -> Option<u32> {
        self.portfolio.position(id).map(|i| self.band_units[i])
    }

    /// Sum of all obligors' band counts.
    #[inline]
    pub fn total_band_units(&self) -> u64 {
        self.total_band_units
    }

    /// Largest single-obligor band count.
    #[inline]
    pub fn highest_band(&self) -> u32 {
        self.highest_band
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::PortfolioBuilder;
    use approx::assert_relative_eq;
    use crp_core::Obligor;

    fn portfolio(exposures: &[f64]) -> Portfolio {
        let mut builder = PortfolioBuilder::new();
        for (i, &exposure) in exposures.iter().enumerate() {
            let obligor =
                Obligor::new(ObligorId::new(format!("OBL{i:03}")), exposure, 0.01).unwrap();
            builder = builder.add_obligor(obligor);
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_single_obligor_floors_band_width() {
        let banded = portfolio(&[100.0]).normalize_exposures().unwrap();
        assert_eq!(banded.band_width(), 1.0);
        assert_eq!(banded.band_units(), &[100]);
        assert_eq!(banded.total_band_units(), 100);
        assert_eq!(banded.highest_band(), 100);
    }

    #[test]
    fn test_equal_exposures_floor_band_width() {
        let banded = portfolio(&[50.0, 50.0, 50.0]).normalize_exposures().unwrap();
        assert_eq!(banded.band_width(), 1.0);
        assert_eq!(banded.band_units(), &[50, 50, 50]);
    }

    #[test]
    fn test_known_standard_deviation() {
        // mean 200, deviations ±100 ⇒ population σ = 100
        let banded = portfolio(&[100.0, 300.0]).normalize_exposures().unwrap();
        assert_relative_eq!(banded.band_width(), 100.0, epsilon = 1e-12);
        assert_eq!(banded.band_units(), &[1, 3]);
        assert_eq!(banded.total_band_units(), 4);
        assert_eq!(banded.highest_band(), 3);
    }

    #[test]
    fn test_sub_unit_deviation_floors_to_one() {
        let banded = portfolio(&[10.2, 10.4, 10.6]).normalize_exposures().unwrap();
        assert_eq!(banded.band_width(), 1.0);
        assert_eq!(banded.band_units(), &[11, 11, 11]);
    }

    #[test]
    fn test_fractional_ratio_rounds_up() {
        // width 1.0 (single obligor), exposure 2.5 ⇒ 3 bands
        let banded = portfolio(&[2.5]).normalize_exposures().unwrap();
        assert_eq!(banded.band_units(), &[3]);
    }

    #[test]
    fn test_band_units_lookup() {
        let banded = portfolio(&[100.0, 300.0]).normalize_exposures().unwrap();
        assert_eq!(banded.band_units_of(&ObligorId::new("OBL001")), Some(3));
        assert_eq!(banded.band_units_of(&ObligorId::new("MISSING")), None);
    }

    #[test]
    fn test_band_overflow() {
        let result = portfolio(&[1e30]).normalize_exposures();
        assert!(matches!(
            result,
            Err(EngineError::BandOverflow { .. })
        ));
    }

    #[test]
    fn test_portfolio_accessor_preserved() {
        let banded = portfolio(&[100.0, 300.0]).normalize_exposures().unwrap();
        assert_eq!(banded.portfolio().obligor_count(), 2);
        assert_eq!(banded.portfolio().total_exposure(), 400.0);
    }
}
