//! Per-obligor loss vectors on the common FFT grid.
//!
//! Each obligor's truncated Poisson terms are spread onto the band grid:
//! the mass for default count *y* sits at index `y · band_units`, because a
//! loss can only be a whole multiple of the obligor's banded exposure. All
//! vectors are then zero-padded to one common power-of-two dimension so
//! their frequency-domain transforms can be multiplied elementwise.

use rayon::prelude::*;

use crp_core::math::poisson::truncated_terms;

use crate::banding::BandedPortfolio;
use crate::config::EngineConfig;
use crate::error::EngineError;

impl BandedPortfolio {
    /// Builds every obligor's loss probability vector and pads all of them
    /// to the common FFT dimension, consuming the banded portfolio.
    ///
    /// Per-obligor construction is independent and runs in parallel.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidEpsilon`] if the configuration is invalid
    /// - [`EngineError::DimensionOverflow`] if a vector's band grid cannot
    ///   be addressed
    pub fn build_loss_vectors(
        self,
        config: &EngineConfig,
    ) -> Result<LossVectorSet, EngineError> {
        config.validate()?;
        let epsilon = config.epsilon();

        let mut vectors = self
            .portfolio()
            .obligors()
            .par_iter()
            .zip(self.band_units().par_iter())
            .map(|(obligor, &units)| {
                let terms = truncated_terms(obligor.default_probability(), epsilon);
                band_grid_vector(&terms, units)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let longest = vectors.iter().map(Vec::len).max().unwrap_or(1);
        let dimension = common_dimension(longest)?;
        for vector in &mut vectors {
            vector.resize(dimension, 0.0);
        }

        Ok(LossVectorSet {
            banded: self,
            vectors,
            dimension,
        })
    }
}

/// Lays the truncated Poisson terms out on the obligor's band grid.
///
/// The slot for default count `y` is `y · band_units`; the grid is
/// `(K−1) · band_units + 1` slots long for K terms, and every slot between
/// consecutive default counts stays zero.
fn band_grid_vector(terms: &[f64], band_units: u32) -> Result<Vec<f64>, EngineError> {
    let stride = band_units as usize;
    let required = (terms.len() as u64 - 1) * u64::from(band_units) + 1;
    let length =
        usize::try_from(required).map_err(|_| EngineError::DimensionOverflow { required })?;

    let mut vector = vec![0.0; length];
    for (count, term) in terms.iter().enumerate() {
        vector[count * stride] = *term;
    }
    Ok(vector)
}

/// Smallest power of two ≥ `longest`, searched upward from 2³ = 8.
fn common_dimension(longest: usize) -> Result<usize, EngineError> {
    let mut dimension: usize = 8;
    while dimension < longest {
        dimension = dimension
            .checked_mul(2)
            .ok_or(EngineError::DimensionOverflow {
                required: longest as u64,
            })?;
    }
    Ok(dimension)
}

/// All obligors' loss vectors at the common FFT dimension.
///
/// The final aggregation stage before the transform:
/// [`apply_fft`](LossVectorSet::apply_fft) consumes it and yields the
/// portfolio loss distribution.
#[derive(Clone, Debug)]
pub struct LossVectorSet {
    pub(crate) banded: BandedPortfolio,
    pub(crate) vectors: Vec<Vec<f64>>,
    pub(crate) dimension: usize,
}

impl LossVectorSet {
    /// Returns the banded portfolio the vectors were built from.
    #[inline]
    pub fn banded(&self) -> &BandedPortfolio {
        &self.banded
    }

    /// Per-obligor loss vectors (obligor order), all of length
    /// [`dimension`](LossVectorSet::dimension).
    #[inline]
    pub fn vectors(&self) -> &[Vec<f64>] {
        &self.vectors
    }

    /// The common power-of-two FFT dimension.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }
}
