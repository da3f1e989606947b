//! Magnitude-threshold DFT compression

use crate::spectrum::{FrequencyDomain, SpectralBin};
use num_complex::Complex;
use rustfft::FftPlanner;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use tsketch_core::batch::{map_series, ExecutionStrategy};
use tsketch_core::numeric::{ensure_finite, ensure_non_empty};
use tsketch_core::{Error, Result};

/// Compressor that keeps DFT bins whose magnitude is at least a fraction
/// of the largest magnitude
///
/// ## Pruning Rule
///
/// For a series of length N with forward DFT `X[0..N]`:
///
/// ```text
/// threshold = tolerance * max_k |X[k]|
/// keep k  <=>  |X[k]| >= threshold
/// ```
///
/// Kept coefficients are stored unmodified with their original index. A
/// tolerance of 1.0 keeps only the bins tied for the largest magnitude.
///
/// ## All-Zero Input
///
/// When every bin has magnitude zero the threshold is zero and every bin
/// satisfies `0 >= 0`, so all N bins are kept. Reconstruction of that
/// spectrum is exactly the zero series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DftCompressor {
    tolerance: f64,
}

impl DftCompressor {
    /// Create a compressor with relative tolerance in `(0, 1]`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tsketch_dft::DftCompressor;
    ///
    /// assert!(DftCompressor::new(0.1).is_ok());
    /// assert!(DftCompressor::new(0.0).is_err());
    /// assert!(DftCompressor::new(1.5).is_err());
    /// ```
    pub fn new(tolerance: f64) -> Result<Self> {
        if !(tolerance > 0.0 && tolerance <= 1.0) {
            return Err(Error::invalid_tolerance(tolerance));
        }
        Ok(Self { tolerance })
    }

    /// The relative tolerance
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Compress `series` into its surviving DFT bins
    #[instrument(skip(self, series), fields(n = series.len(), tolerance = self.tolerance))]
    pub fn compress(&self, series: &[f64]) -> Result<FrequencyDomain> {
        let spectrum = forward_spectrum(series)?;

        let max_magnitude = spectrum.iter().map(|c| c.norm()).fold(0.0, f64::max);
        let threshold = self.tolerance * max_magnitude;

        let bins: Vec<SpectralBin> = spectrum
            .into_iter()
            .enumerate()
            .filter(|(_, c)| c.norm() >= threshold)
            .collect();

        debug!(
            "Pruning threshold {:.4e} (max |X| = {:.4e}): kept {} of {} bins",
            threshold,
            max_magnitude,
            bins.len(),
            series.len()
        );

        Ok(FrequencyDomain::from_sorted(bins, series.len()))
    }

    /// Compress many series with the same tolerance
    pub fn compress_batch<S>(&self, inputs: &[S], strategy: ExecutionStrategy) -> Vec<Result<FrequencyDomain>>
    where
        S: AsRef<[f64]> + Sync,
    {
        map_series(inputs, strategy, |series| self.compress(series))
    }
}

/// Full, unpruned forward DFT of a real series
///
/// Uses RustFFT's unnormalized forward convention, so bin 0 holds the sum
/// of the samples.
pub fn forward_spectrum(series: &[f64]) -> Result<Vec<Complex<f64>>> {
    ensure_non_empty(series, "DFT")?;
    ensure_finite(series, "input series")?;

    let mut spectrum: Vec<Complex<f64>> = series.iter().map(|&x| Complex::new(x, 0.0)).collect();

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(series.len());
    fft.process(&mut spectrum);

    Ok(spectrum)
}

/// Compress `series`, keeping bins with `|X[k]| >= tolerance * max |X|`
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] for an empty series or a tolerance
/// outside `(0, 1]`, and [`Error::Computation`] for non-finite input.
///
/// # Examples
///
/// ```rust
/// use tsketch_dft::{compress, reconstruct};
///
/// let series: Vec<f64> = (0..64)
///     .map(|i| (2.0 * std::f64::consts::PI * 3.0 * i as f64 / 64.0).sin())
///     .collect();
///
/// // A pure tone lives in two bins
/// let domain = compress(&series, 0.5).unwrap();
/// assert_eq!(domain.indices().collect::<Vec<_>>(), vec![3, 61]);
///
/// let rebuilt = reconstruct(domain.bins(), domain.original_length()).unwrap();
/// for (a, b) in series.iter().zip(&rebuilt) {
///     assert!((a - b).abs() < 1e-9);
/// }
/// ```
pub fn compress(series: &[f64], tolerance: f64) -> Result<FrequencyDomain> {
    DftCompressor::new(tolerance)?.compress(series)
}

/// Compress many series with one tolerance
///
/// Runs on the rayon pool when the `parallel` feature is enabled.
pub fn compress_batch<S>(inputs: &[S], tolerance: f64) -> Result<Vec<Result<FrequencyDomain>>>
where
    S: AsRef<[f64]> + Sync,
{
    let compressor = DftCompressor::new(tolerance)?;
    Ok(compressor.compress_batch(inputs, ExecutionStrategy::auto(inputs.len())))
}
