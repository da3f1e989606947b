//! Pruned frequency-domain representation and its reconstruction

use num_complex::Complex;
use rustfft::FftPlanner;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use tsketch_core::{Error, Result};

/// One retained DFT bin: original bin index and unmodified coefficient
pub type SpectralBin = (usize, Complex<f64>);

/// The DFT bins that survived pruning plus the length of the source series
///
/// Bins are stored in ascending index order and every index is below
/// `original_length`. Deserialization goes through [`FrequencyDomain::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFrequencyDomain")]
pub struct FrequencyDomain {
    bins: Vec<SpectralBin>,
    original_length: usize,
}

/// Unchecked wire form of [`FrequencyDomain`]
#[derive(Deserialize)]
struct RawFrequencyDomain {
    bins: Vec<SpectralBin>,
    original_length: usize,
}

impl TryFrom<RawFrequencyDomain> for FrequencyDomain {
    type Error = Error;

    fn try_from(raw: RawFrequencyDomain) -> Result<Self> {
        Self::new(raw.bins, raw.original_length)
    }
}

impl FrequencyDomain {
    /// Build a representation from arbitrary bins
    ///
    /// Bins are sorted by index. Indices must be unique and below
    /// `original_length`.
    pub fn new(mut bins: Vec<SpectralBin>, original_length: usize) -> Result<Self> {
        validate_bins(&bins, original_length)?;
        bins.sort_by_key(|&(index, _)| index);
        Ok(Self {
            bins,
            original_length,
        })
    }

    /// Bins already known to be ascending, unique and in range
    pub(crate) fn from_sorted(bins: Vec<SpectralBin>, original_length: usize) -> Self {
        Self {
            bins,
            original_length,
        }
    }

    /// The retained `(index, coefficient)` pairs in ascending index order
    pub fn bins(&self) -> &[SpectralBin] {
        &self.bins
    }

    /// Number of retained bins
    pub fn retained(&self) -> usize {
        self.bins.len()
    }

    /// Length of the series this spectrum was taken from
    pub fn original_length(&self) -> usize {
        self.original_length
    }

    /// Fraction of bins kept: `retained / original_length`
    pub fn compression_ratio(&self) -> f64 {
        self.bins.len() as f64 / self.original_length as f64
    }

    /// Indices of the retained bins
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.bins.iter().map(|&(index, _)| index)
    }

    /// Rebuild the approximate series
    pub fn reconstruct(&self) -> Result<Vec<f64>> {
        reconstruct(&self.bins, self.original_length)
    }

    /// Split into bins and original length
    pub fn into_parts(self) -> (Vec<SpectralBin>, usize) {
        (self.bins, self.original_length)
    }
}

fn validate_bins(bins: &[SpectralBin], original_length: usize) -> Result<()> {
    if original_length == 0 {
        return Err(Error::InvalidParameter(
            "Original length must be at least 1".to_string(),
        ));
    }
    let mut seen = vec![false; original_length];
    for &(index, coefficient) in bins {
        if index >= original_length {
            return Err(Error::InvalidParameter(format!(
                "Bin index {index} out of range for length {original_length}"
            )));
        }
        if seen[index] {
            return Err(Error::InvalidInput(format!("Duplicate bin index {index}")));
        }
        if !(coefficient.re.is_finite() && coefficient.im.is_finite()) {
            return Err(Error::non_finite("spectral coefficients"));
        }
        seen[index] = true;
    }
    Ok(())
}

/// Rebuild an approximate series from retained DFT bins
///
/// The bins are written into a zero-filled spectrum of `original_length`
/// entries, inverse transformed, scaled by `1 / original_length` and reduced
/// to their real parts. The imaginary residue left by pruning an asymmetric
/// set of bins is discarded.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if `original_length` is zero or a bin
/// index is out of range, and [`Error::InvalidInput`] for duplicate indices.
///
/// # Examples
///
/// ```rust
/// use num_complex::Complex;
/// use tsketch_dft::reconstruct;
///
/// // A DC bin of 8 over 4 samples is a constant series of 2
/// let series = reconstruct(&[(0, Complex::new(8.0, 0.0))], 4).unwrap();
/// assert_eq!(series, vec![2.0; 4]);
/// ```
#[instrument(skip(bins), fields(retained = bins.len(), n = original_length))]
pub fn reconstruct(bins: &[SpectralBin], original_length: usize) -> Result<Vec<f64>> {
    validate_bins(bins, original_length)?;

    let mut spectrum = vec![Complex::new(0.0, 0.0); original_length];
    for &(index, coefficient) in bins {
        spectrum[index] = coefficient;
    }

    let mut planner = FftPlanner::<f64>::new();
    let ifft = planner.plan_fft_inverse(original_length);
    ifft.process(&mut spectrum);

    // RustFFT leaves the inverse unnormalized
    let norm_factor = 1.0 / original_length as f64;
    let max_residue = spectrum
        .iter()
        .map(|c| (c.im * norm_factor).abs())
        .fold(0.0, f64::max);
    debug!("Discarding imaginary residue up to {:.3e}", max_residue);

    Ok(spectrum.iter().map(|c| c.re * norm_factor).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_sorts_and_validates() {
        let domain = FrequencyDomain::new(
            vec![(3, Complex::new(1.0, 0.0)), (1, Complex::new(0.0, 1.0))],
            4,
        )
        .unwrap();
        assert_eq!(domain.indices().collect::<Vec<_>>(), vec![1, 3]);
        assert_relative_eq!(domain.compression_ratio(), 0.5);

        assert!(FrequencyDomain::new(vec![(4, Complex::new(1.0, 0.0))], 4)
            .unwrap_err()
            .is_invalid_parameter());
        assert!(matches!(
            FrequencyDomain::new(
                vec![(2, Complex::new(1.0, 0.0)), (2, Complex::new(2.0, 0.0))],
                4
            ),
            Err(Error::InvalidInput(_))
        ));
        assert!(FrequencyDomain::new(vec![], 0).is_err());
    }

    #[test]
    fn test_reconstruct_single_tone() {
        // Bins 1 and n-1 of a cosine with amplitude 1 hold n/2 each
        let n = 16;
        let half = n as f64 / 2.0;
        let series = reconstruct(
            &[(1, Complex::new(half, 0.0)), (n - 1, Complex::new(half, 0.0))],
            n,
        )
        .unwrap();
        for (i, &v) in series.iter().enumerate() {
            let expected = (2.0 * std::f64::consts::PI * i as f64 / n as f64).cos();
            assert_relative_eq!(v, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_reconstruct_empty_bins_is_zero_series() {
        assert_eq!(reconstruct(&[], 5).unwrap(), vec![0.0; 5]);
    }

    #[test]
    fn test_reconstruct_discards_imaginary_part() {
        // A lone positive-frequency bin is a complex exponential; only cos survives
        let n = 8;
        let series = reconstruct(&[(2, Complex::new(n as f64, 0.0))], n).unwrap();
        for (i, &v) in series.iter().enumerate() {
            let expected = (2.0 * std::f64::consts::PI * 2.0 * i as f64 / n as f64).cos();
            assert_relative_eq!(v, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_reconstruct_rejects_bad_bins() {
        assert!(reconstruct(&[(0, Complex::new(1.0, 0.0))], 0).is_err());
        assert!(reconstruct(&[(5, Complex::new(1.0, 0.0))], 5).is_err());
        assert!(reconstruct(&[(1, Complex::new(f64::NAN, 0.0))], 5).is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let domain =
            FrequencyDomain::new(vec![(0, Complex::new(4.0, 0.0)), (2, Complex::new(-1.5, 0.25))], 4)
                .unwrap();
        let json = serde_json::to_string(&domain).unwrap();
        let back: FrequencyDomain = serde_json::from_str(&json).unwrap();
        assert_eq!(domain, back);
    }

    #[test]
    fn test_deserialize_validates_bins() {
        let zero_length = r#"{"bins":[],"original_length":0}"#;
        assert!(serde_json::from_str::<FrequencyDomain>(zero_length).is_err());

        let out_of_range = r#"{"bins":[[4,[1.0,0.0]]],"original_length":4}"#;
        assert!(serde_json::from_str::<FrequencyDomain>(out_of_range).is_err());

        let duplicate = r#"{"bins":[[1,[1.0,0.0]],[1,[2.0,0.0]]],"original_length":4}"#;
        let err = serde_json::from_str::<FrequencyDomain>(duplicate).unwrap_err();
        assert!(err.to_string().contains("Duplicate bin index 1"));

        let unsorted = r#"{"bins":[[3,[1.0,0.0]],[0,[2.0,0.0]]],"original_length":4}"#;
        let domain: FrequencyDomain = serde_json::from_str(unsorted).unwrap();
        assert_eq!(domain.indices().collect::<Vec<_>>(), vec![0, 3]);
        assert_relative_eq!(domain.compression_ratio(), 0.5);
    }
}
