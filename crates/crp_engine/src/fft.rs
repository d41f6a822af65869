//! Frequency-domain aggregation of the per-obligor loss vectors.
//!
//! Independent obligors' losses add, so the portfolio loss distribution is
//! the convolution of every obligor's loss vector; convolution in the index
//! domain is elementwise multiplication in the frequency domain. Forward
//! transforms are unscaled and the single 1/N factor is applied on the
//! inverse, so the inverted product is exactly the convolved pmf.

use num_complex::Complex64;
use rayon::prelude::*;
use rustfft::FftPlanner;

use crate::distribution::LossDistribution;
use crate::error::EngineError;
use crate::vectors::LossVectorSet;

impl LossVectorSet {
    /// Runs the FFT aggregation, consuming the vector set.
    ///
    /// Every obligor's vector is forward-transformed (in parallel), the
    /// transforms are multiplied elementwise (seeded from the first obligor
    /// and folded in obligor order), and the product is inverse-transformed.
    /// The real parts of the result are the portfolio loss pmf; imaginary
    /// parts are numerically negligible and discarded.
    pub fn apply_fft(self) -> Result<LossDistribution, EngineError> {
        let transforms = forward_transforms(&self.vectors, self.dimension);
        let product = frequency_product(&transforms)?;
        let pmf = inverse_real(product);
        Ok(LossDistribution::new(pmf, self.banded.band_width()))
    }
}

/// Forward-transforms each real vector into an unscaled complex spectrum.
fn forward_transforms(vectors: &[Vec<f64>], dimension: usize) -> Vec<Vec<Complex64>> {
    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(dimension);
    vectors
        .par_iter()
        .map(|vector| {
            let mut buffer: Vec<Complex64> =
                vector.iter().map(|&p| Complex64::new(p, 0.0)).collect();
            fft.process(&mut buffer);
            buffer
        })
        .collect()
}

/// Elementwise product of all spectra, seeded from the first.
fn frequency_product(transforms: &[Vec<Complex64>]) -> Result<Vec<Complex64>, EngineError> {
    let (first, rest) = transforms.split_first().ok_or(EngineError::EmptyPortfolio)?;
    let mut product = first.clone();
    for transform in rest {
        for (accumulated, factor) in product.iter_mut().zip(transform) {
            *accumulated *= factor;
        }
    }
    Ok(product)
}

/// Inverse transform with 1/N scaling, keeping real parts only.
fn inverse_real(mut spectrum: Vec<Complex64>) -> Vec<f64> {
    let n = spectrum.len();
    let mut planner = FftPlanner::new();
    let ifft = planner.plan_fft_inverse(n);
    ifft.process(&mut spectrum);
    let scale = 1.0 / n as f64;
    spectrum.iter().map(|value| value.re * scale).collect()
}
