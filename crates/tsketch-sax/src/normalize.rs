//! Z-normalization
//!
//! Rescales a series to zero mean and unit population variance so that its
//! values can be compared against standard-normal breakpoints.
//!
//! # Degenerate input
//!
//! A (nearly) constant series has no scale to divide by. When every sample
//! equals the first, or the population standard deviation is at or below the
//! threshold, the result is an all-zero series of the same length. The
//! equality check matters for large constants: rounding in the mean leaves a
//! tiny uniform residual whose standard deviation can clear any absolute
//! threshold. This is a fallback policy, not an error: the
//! caller can detect it through [`ZNormalized::is_degenerate`].

use serde::{Deserialize, Serialize};
use tracing::debug;
use tsketch_core::numeric::{ensure_finite, ensure_non_empty, mean, population_std_dev};
use tsketch_core::{Error, Result};

/// Standard deviation at or below which a series is treated as constant
pub const ZNORM_EPSILON: f64 = 1e-10;

/// A z-normalized series together with the statistics used to produce it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZNormalized {
    values: Vec<f64>,
    mean: f64,
    std_dev: f64,
    degenerate: bool,
}

impl ZNormalized {
    /// The normalized values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Consume and return the normalized values
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Mean of the source series
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Population standard deviation of the source series
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// True when the zero-variance fallback produced an all-zero series
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }
}

/// Z-normalize a series with the default [`ZNORM_EPSILON`] threshold
///
/// # Examples
///
/// ```rust
/// use tsketch_sax::znormalize;
///
/// let normed = znormalize(&[1.0, 2.0, 3.0]).unwrap();
/// assert!((normed[0] + 1.224744871).abs() < 1e-6);
///
/// // Constant input falls back to zeros instead of NaN
/// assert_eq!(znormalize(&[5.0; 4]).unwrap(), vec![0.0; 4]);
/// ```
pub fn znormalize(series: &[f64]) -> Result<Vec<f64>> {
    Ok(znormalize_with_threshold(series, ZNORM_EPSILON)?.into_values())
}

/// Z-normalize a series, treating it as constant when all samples are equal
/// or its standard deviation is at or below `threshold`
///
/// A `threshold` of zero still maps constant input to zeros.
pub fn znormalize_with_threshold(series: &[f64], threshold: f64) -> Result<ZNormalized> {
    ensure_non_empty(series, "z-normalization")?;
    ensure_finite(series, "input series")?;
    if !(threshold >= 0.0 && threshold.is_finite()) {
        return Err(Error::InvalidParameter(format!(
            "Normalization threshold {threshold} must be finite and non-negative"
        )));
    }

    let mu = mean(series);
    let sigma = population_std_dev(series);

    let constant = series.iter().all(|&x| x == series[0]);

    if constant || sigma <= threshold {
        debug!(
            "Degenerate series (constant={}, std_dev={:.3e}, threshold={:.3e}), using all-zero fallback",
            constant, sigma, threshold
        );
        return Ok(ZNormalized {
            values: vec![0.0; series.len()],
            mean: mu,
            std_dev: sigma,
            degenerate: true,
        });
    }

    let values = series.iter().map(|&x| (x - mu) / sigma).collect();
    Ok(ZNormalized {
        values,
        mean: mu,
        std_dev: sigma,
        degenerate: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tsketch_core::numeric::population_variance;

    #[test]
    fn test_zero_mean_unit_variance() {
        let series = vec![4.0, 8.0, 15.0, 16.0, 23.0, 42.0];
        let normed = znormalize(&series).unwrap();

        assert_eq!(normed.len(), series.len());
        assert_relative_eq!(mean(&normed), 0.0, epsilon = 1e-12);
        assert_relative_eq!(population_variance(&normed), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_constant_series_is_all_zeros() {
        for &c in &[0.0, 1.0, -7.25, 1e9, 123456789.123, -9.87654321e11, 3.3e15] {
            let result = znormalize_with_threshold(&[c; 10], ZNORM_EPSILON).unwrap();
            assert!(result.is_degenerate());
            assert_eq!(result.values(), &[0.0; 10]);
            assert!(result.values().iter().all(|v| !v.is_nan()));
        }
    }

    #[test]
    fn test_single_sample_is_degenerate() {
        let result = znormalize_with_threshold(&[3.0], ZNORM_EPSILON).unwrap();
        assert!(result.is_degenerate());
        assert_eq!(result.values(), &[0.0]);
        assert_eq!(result.mean(), 3.0);
    }

    #[test]
    fn test_threshold_controls_fallback() {
        let series = [1.0, 1.001, 0.999, 1.0];
        assert!(!znormalize_with_threshold(&series, ZNORM_EPSILON).unwrap().is_degenerate());
        assert!(znormalize_with_threshold(&series, 0.01).unwrap().is_degenerate());
    }

    #[test]
    fn test_input_not_mutated() {
        let series = vec![3.0, 1.0, 2.0];
        let copy = series.clone();
        let _ = znormalize(&series).unwrap();
        assert_eq!(series, copy);
    }

    #[test]
    fn test_zero_threshold_still_catches_constant_input() {
        let result = znormalize_with_threshold(&[5.0; 4], 0.0).unwrap();
        assert!(result.is_degenerate());
        assert_eq!(result.values(), &[0.0; 4]);

        let result = znormalize_with_threshold(&[5.0, 6.0], 0.0).unwrap();
        assert!(!result.is_degenerate());
        assert_eq!(result.values(), &[-1.0, 1.0]);
    }

    #[test]
    fn test_large_offset_keeps_real_variation() {
        let series = [1e9, 1e9 + 2.0, 1e9 + 4.0];
        let result = znormalize_with_threshold(&series, ZNORM_EPSILON).unwrap();
        assert!(!result.is_degenerate());
        assert_relative_eq!(result.values()[0], -1.224744871391589, epsilon = 1e-6);
        assert_relative_eq!(result.values()[2], 1.224744871391589, epsilon = 1e-6);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(znormalize(&[]).unwrap_err().is_invalid_parameter());
        assert!(matches!(
            znormalize(&[1.0, f64::NAN]),
            Err(Error::Computation(_))
        ));
        assert!(znormalize_with_threshold(&[1.0, 2.0], -1.0).is_err());
        assert!(znormalize_with_threshold(&[1.0, 2.0], f64::NAN).is_err());
    }
}
