//! Numeric helpers shared by the sketch pipelines
//!
//! All helpers are generic over [`num_traits::Float`] so the same code serves
//! `f32` and `f64` series. Variance is the population variance throughout.

use crate::{Error, Result};
use num_traits::Float;

/// Calculate the mean of a slice
///
/// Returns zero for empty slices.
///
/// # Examples
///
/// ```rust
/// use tsketch_core::numeric::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert_eq!(mean::<f64>(&[]), 0.0);
/// ```
pub fn mean<T: Float>(data: &[T]) -> T {
    if data.is_empty() {
        return T::zero();
    }
    let sum = data.iter().fold(T::zero(), |acc, &x| acc + x);
    sum / T::from(data.len()).unwrap_or_else(T::one)
}

/// Calculate the population variance (divides by `n`)
///
/// Returns zero for empty slices.
pub fn population_variance<T: Float>(data: &[T]) -> T {
    if data.is_empty() {
        return T::zero();
    }
    let m = mean(data);
    let ss = data.iter().fold(T::zero(), |acc, &x| {
        let diff = x - m;
        acc + diff * diff
    });
    ss / T::from(data.len()).unwrap_or_else(T::one)
}

/// Calculate the population standard deviation
///
/// # Examples
///
/// ```rust
/// use tsketch_core::numeric::population_std_dev;
///
/// let sd: f64 = population_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
/// assert!((sd - 2.0).abs() < 1e-12);
/// ```
pub fn population_std_dev<T: Float>(data: &[T]) -> T {
    population_variance(data).sqrt()
}

/// Reject series that contain NaN or infinite values
pub fn ensure_finite<T: Float>(data: &[T], context: &str) -> Result<()> {
    if data.iter().any(|x| !x.is_finite()) {
        return Err(Error::non_finite(context));
    }
    Ok(())
}

/// Reject empty series
pub fn ensure_non_empty<T>(data: &[T], operation: &str) -> Result<()> {
    if data.is_empty() {
        return Err(Error::empty_input(operation));
    }
    Ok(())
}

/// Root-mean-square error between two equal-length series
pub fn rmse<T: Float>(expected: &[T], actual: &[T]) -> Result<T> {
    if expected.len() != actual.len() {
        return Err(Error::size_mismatch(expected.len(), actual.len(), "rmse"));
    }
    ensure_non_empty(expected, "rmse")?;
    let ss = expected
        .iter()
        .zip(actual)
        .fold(T::zero(), |acc, (&e, &a)| acc + (e - a) * (e - a));
    let n = T::from(expected.len()).unwrap_or_else(T::one);
    Ok((ss / n).sqrt())
}
