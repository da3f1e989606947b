//! Piecewise Aggregate Approximation (PAA)
//!
//! Reduces a length-`n` series to `w` segment means.
//!
//! When `w` divides `n` the segments are contiguous blocks of `n / w`
//! samples. Otherwise every sample is stretched over `w` slots of a virtual
//! length-`n * w` sequence and every segment covers `n` consecutive slots, so
//! a sample straddling a segment boundary contributes to both segments in
//! proportion to its overlap.

use tracing::debug;
use tsketch_core::numeric::{ensure_non_empty, mean};
use tsketch_core::{Error, Result};

/// Compute the PAA of `series` with `segments` output points
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if the series is empty, if
/// `segments` is outside `[1, series.len()]`, or if a non-divisible
/// `series.len() * segments` does not fit in `usize`.
///
/// # Examples
///
/// ```rust
/// use tsketch_sax::paa;
///
/// let reduced = paa(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0], 4).unwrap();
/// assert_eq!(reduced, vec![1.5, 3.5, 5.5, 7.5]);
///
/// // Non-divisible lengths use fractional binning
/// let reduced = paa(&[1.0, 2.0, 3.0], 2).unwrap();
/// assert_eq!(reduced, vec![4.0 / 3.0, 8.0 / 3.0]);
/// ```
pub fn paa(series: &[f64], segments: usize) -> Result<Vec<f64>> {
    ensure_non_empty(series, "PAA")?;
    let n = series.len();
    if segments == 0 || segments > n {
        return Err(Error::invalid_segments(segments, n));
    }

    if segments == n {
        return Ok(series.to_vec());
    }

    if n % segments == 0 {
        let width = n / segments;
        return Ok(series.chunks_exact(width).map(mean).collect());
    }

    virtual_length(n, segments)?;
    debug!(
        "PAA: {} samples into {} segments uses fractional binning",
        n, segments
    );
    Ok(fractional_paa(series, segments))
}

/// Length of the virtual sequence used by fractional binning
///
/// Every slot offset in [`fractional_paa`] is at most this value.
fn virtual_length(n: usize, segments: usize) -> Result<usize> {
    n.checked_mul(segments).ok_or_else(|| {
        Error::InvalidParameter(format!(
            "{n} samples into {segments} segments overflows the fractional binning index"
        ))
    })
}

/// Overlap-weighted PAA for lengths that `segments` does not divide
fn fractional_paa(series: &[f64], segments: usize) -> Vec<f64> {
    let n = series.len();
    let w = segments;

    (0..w)
        .map(|j| {
            // Segment j covers virtual slots [j*n, (j+1)*n); sample i covers [i*w, (i+1)*w)
            let seg_start = j * n;
            let seg_end = seg_start + n;
            let first = seg_start / w;
            let last = (seg_end - 1) / w;

            let weighted: f64 = (first..=last)
                .map(|i| {
                    let lo = (i * w).max(seg_start);
                    let hi = ((i + 1) * w).min(seg_end);
                    series[i] * (hi - lo) as f64
                })
                .sum();
            weighted / n as f64
        })
        .collect()
}

/// Expand a PAA series back to `length` samples as a step function
///
/// Sample `i` takes the value of the segment that contains the start of its
/// virtual span, i.e. segment `floor(i * w / length)`. For lengths that are a
/// multiple of `w` this repeats every segment mean `length / w` times.
///
/// # Examples
///
/// ```rust
/// use tsketch_sax::expand_paa;
///
/// let steps = expand_paa(&[1.5, 3.5], 4).unwrap();
/// assert_eq!(steps, vec![1.5, 1.5, 3.5, 3.5]);
/// ```
pub fn expand_paa(paa: &[f64], length: usize) -> Result<Vec<f64>> {
    ensure_non_empty(paa, "PAA expansion")?;
    if length == 0 {
        return Err(Error::InvalidParameter(
            "Expanded length must be at least 1".to_string(),
        ));
    }
    let w = paa.len();
    virtual_length(length, w)?;
    Ok((0..length).map(|i| paa[i * w / length]).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_divisible_segments_are_block_means() {
        let series: Vec<f64> = (1..=12).map(|x| x as f64).collect();
        let reduced = paa(&series, 3).unwrap();
        assert_eq!(reduced, vec![2.5, 6.5, 10.5]);
    }

    #[test]
    fn test_identity_and_single_segment() {
        let series = vec![3.0, -1.0, 4.0, 1.0, -5.0];
        assert_eq!(paa(&series, 5).unwrap(), series);
        assert_relative_eq!(paa(&series, 1).unwrap()[0], 0.4, epsilon = 1e-12);
    }

    #[test]
    fn test_fractional_binning_weights() {
        // n=5, w=2: segment 0 covers samples 0,1 fully and half of sample 2
        let series = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let reduced = paa(&series, 2).unwrap();
        assert_relative_eq!(reduced[0], (2.0 + 4.0 + 3.0) / 5.0, epsilon = 1e-12);
        assert_relative_eq!(reduced[1], (3.0 + 8.0 + 10.0) / 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fractional_preserves_total_mean() {
        let series: Vec<f64> = (0..17).map(|i| (i as f64 * 0.7).sin() * 3.0 + 1.0).collect();
        for w in [2, 3, 4, 5, 6, 7, 16] {
            let reduced = paa(&series, w).unwrap();
            assert_eq!(reduced.len(), w);
            assert_relative_eq!(mean(&reduced), mean(&series), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_constant_series_stays_constant() {
        let reduced = paa(&[2.5; 10], 3).unwrap();
        for v in reduced {
            assert_relative_eq!(v, 2.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_invalid_segment_counts() {
        let series = [1.0, 2.0, 3.0];
        assert!(paa(&series, 0).unwrap_err().is_invalid_parameter());
        assert!(paa(&series, 4).unwrap_err().is_invalid_parameter());
        assert!(paa(&[], 1).unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn test_virtual_length_overflow() {
        assert_eq!(virtual_length(37, 5).unwrap(), 185);
        assert!(virtual_length(usize::MAX / 2, 3)
            .unwrap_err()
            .is_invalid_parameter());
    }

    #[test]
    fn test_expand_paa_fractional() {
        // 3 segments over 7 samples: floor(i*3/7) = 0,0,0,1,1,2,2
        let steps = expand_paa(&[1.0, 2.0, 3.0], 7).unwrap();
        assert_eq!(steps, vec![1.0, 1.0, 1.0, 2.0, 2.0, 3.0, 3.0]);
    }

    #[test]
    fn test_expand_paa_invalid() {
        assert!(expand_paa(&[], 4).is_err());
        assert!(expand_paa(&[1.0], 0).is_err());
    }
}
