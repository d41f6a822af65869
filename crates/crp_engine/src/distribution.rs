//! The portfolio loss distribution and its summary statistics.

/// Probability mass function over total portfolio loss.
///
/// Index *i* carries the probability that the portfolio loses exactly *i*
/// band units; [`band_width`](LossDistribution::band_width) converts band
/// units back into currency. Produced by
/// [`LossVectorSet::apply_fft`](crate::vectors::LossVectorSet::apply_fft).
///
/// Entries are real parts of an inverse FFT, so values a few ulps below
/// zero or a total mass a few ulps off 1 are expected; the statistics here
/// are tolerant of that noise.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LossDistribution {
    pmf: Vec<f64>,
    band_width: f64,
}

impl LossDistribution {
    pub(crate) fn new(pmf: Vec<f64>, band_width: f64) -> Self {
        Self { pmf, band_width }
    }

    /// The full probability mass function, indexed by band units lost.
    #[inline]
    pub fn pmf(&self) -> &[f64] {
        &self.pmf
    }

    /// Width of one band in currency units.
    #[inline]
    pub fn band_width(&self) -> f64 {
        self.band_width
    }

    /// Number of pmf entries (the common FFT dimension).
    #[inline]
    pub fn len(&self) -> usize {
        self.pmf.len()
    }

    /// True if the pmf has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pmf.is_empty()
    }

    /// Probability of losing exactly `band` band units.
    ///
    /// Indices beyond the support carry zero mass.
    #[inline]
    pub fn probability(&self, band: usize) -> f64 {
        self.pmf.get(band).copied().unwrap_or(0.0)
    }

    /// Currency loss represented by `band` band units.
    #[inline]
    pub fn loss_at(&self, band: usize) -> f64 {
        band as f64 * self.band_width
    }

    /// Total probability mass (≈ 1 for a well-formed run).
    pub fn total_mass(&self) -> f64 {
        self.pmf.iter().sum()
    }

    /// Mean loss in currency units.
    pub fn expected_loss(&self) -> f64 {
        self.mean_band() * self.band_width
    }

    /// Standard deviation of loss in currency units.
    pub fn unexpected_loss(&self) -> f64 {
        let mean = self.mean_band();
        let second_moment: f64 = self
            .pmf
            .iter()
            .enumerate()
            .map(|(band, p)| (band * band) as f64 * p)
            .sum();
        (second_moment - mean * mean).max(0.0).sqrt() * self.band_width
    }

    /// Running cumulative distribution over band units.
    pub fn cumulative(&self) -> Vec<f64> {
        self.pmf
            .iter()
            .scan(0.0, |acc, p| {
                *acc += p;
                Some(*acc)
            })
            .collect()
    }

    /// Smallest band count whose cumulative mass reaches `probability`.
    ///
    /// Returns `None` if `probability` is NaN or outside [0, 1], or if the
    /// cumulative mass never reaches it.
    pub fn quantile(&self, probability: f64) -> Option<usize> {
        if !(0.0..=1.0).contains(&probability) {
            return None;
        }
        let mut cumulative = 0.0;
        for (band, p) in self.pmf.iter().enumerate() {
            cumulative += p;
            if cumulative >= probability {
                return Some(band);
            }
        }
        None
    }

    /// Value-at-Risk: the currency loss at the `confidence` quantile.
    pub fn value_at_risk(&self, confidence: f64) -> Option<f64> {
        self.quantile(confidence).map(|band| self.loss_at(band))
    }

    /// Expected shortfall: mean currency loss conditional on losses at or
    /// beyond the `confidence` quantile.
    pub fn expected_shortfall(&self, confidence: f64) -> Option<f64> {
        let quantile_band = self.quantile(confidence)?;
        let mut tail_mass = 0.0;
        let mut weighted = 0.0;
        for (band, p) in self.pmf.iter().enumerate().skip(quantile_band) {
            tail_mass += p;
            weighted += band as f64 * p;
        }
        if tail_mass > 0.0 {
            Some(weighted / tail_mass * self.band_width)
        } else {
            Some(self.loss_at(quantile_band))
        }
    }

    fn mean_band(&self) -> f64 {
        self.pmf
            .iter()
            .enumerate()
            .map(|(band, p)| band as f64 * p)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn distribution() -> LossDistribution {
        LossDistribution::new(vec![0.9, 0.05, 0.03, 0.02], 2.0)
    }

    #[test]
    fn test_accessors() {
        let d = distribution();
        assert_eq!(d.len(), 4);
        assert!(!d.is_empty());
        assert_eq!(d.band_width(), 2.0);
        assert_eq!(d.probability(1), 0.05);
        assert_eq!(d.probability(100), 0.0);
        assert_eq!(d.loss_at(3), 6.0);
    }

    #[test]
    fn test_total_mass() {
        assert_relative_eq!(distribution().total_mass(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_expected_loss() {
        // mean band = 0.05 + 2·0.03 + 3·0.02 = 0.17 ⇒ 0.34 in currency
        assert_relative_eq!(distribution().expected_loss(), 0.34, epsilon = 1e-12);
    }

    #[test]
    fn test_unexpected_loss() {
        // second moment = 0.05 + 4·0.03 + 9·0.02 = 0.35
        let expected = (0.35_f64 - 0.17 * 0.17).sqrt() * 2.0;
        assert_relative_eq!(distribution().unexpected_loss(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_cumulative() {
        let cdf = distribution().cumulative();
        assert_eq!(cdf.len(), 4);
        assert_relative_eq!(cdf[0], 0.9, epsilon = 1e-12);
        assert_relative_eq!(cdf[3], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_quantile() {
        let d = distribution();
        assert_eq!(d.quantile(0.5), Some(0));
        assert_eq!(d.quantile(0.9), Some(0));
        assert_eq!(d.quantile(0.95), Some(1));
        assert_eq!(d.quantile(0.96), Some(2));
        assert_eq!(d.quantile(0.999), Some(3));
    }

    #[test]
    fn test_quantile_rejects_invalid_probability() {
        let d = distribution();
        assert_eq!(d.quantile(-0.1), None);
        assert_eq!(d.quantile(1.5), None);
        assert_eq!(d.quantile(f64::NAN), None);
    }

    #[test]
    fn test_quantile_at_one_with_exact_mass() {
        let d = LossDistribution::new(vec![0.25, 0.25, 0.25, 0.25], 1.0);
        assert_eq!(d.quantile(1.0), Some(3));
    }

    #[test]
    fn test_value_at_risk() {
        let d = distribution();
        assert_eq!(d.value_at_risk(0.95), Some(2.0));
        assert_eq!(d.value_at_risk(0.96), Some(4.0));
    }

    #[test]
    fn test_expected_shortfall() {
        // tail from band 1: mass 0.1, weighted 0.17 ⇒ 1.7 bands ⇒ 3.4
        let es = distribution().expected_shortfall(0.95).unwrap();
        assert_relative_eq!(es, 3.4, epsilon = 1e-12);
    }

    #[test]
    fn test_expected_shortfall_at_least_var() {
        let d = distribution();
        for confidence in [0.5, 0.9, 0.95, 0.99] {
            let var = d.value_at_risk(confidence).unwrap();
            let es = d.expected_shortfall(confidence).unwrap();
            assert!(es >= var - 1e-12);
        }
    }
}
