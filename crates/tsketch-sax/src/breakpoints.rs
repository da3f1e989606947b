//! Gaussian breakpoint tables
//!
//! For an alphabet of size `a` the breakpoints are the standard normal
//! quantiles `Φ⁻¹(k / a)` for `k = 1..a`. They split the real line into `a`
//! intervals of equal probability under N(0, 1).

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};
use tsketch_core::{Error, Result};

/// Smallest supported alphabet
pub const MIN_ALPHABET_SIZE: usize = 2;

/// Largest supported alphabet (letters `a` through `z`)
pub const MAX_ALPHABET_SIZE: usize = 26;

/// Ascending cut points for one alphabet size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakpointTable {
    alphabet_size: usize,
    cuts: Vec<f64>,
}

impl BreakpointTable {
    /// Build the table for `alphabet_size` symbols
    ///
    /// The table is symmetric about zero: the upper half mirrors the lower
    /// half and the middle cut of an even alphabet is exactly `0.0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tsketch_sax::BreakpointTable;
    ///
    /// let table = BreakpointTable::new(4).unwrap();
    /// assert_eq!(table.cuts().len(), 3);
    /// assert!((table.cuts()[0] + 0.6744897).abs() < 1e-6);
    /// assert_eq!(table.cuts()[1], 0.0);
    /// ```
    pub fn new(alphabet_size: usize) -> Result<Self> {
        validate_alphabet_size(alphabet_size)?;

        let normal = Normal::new(0.0, 1.0)
            .map_err(|e| Error::Computation(format!("Standard normal unavailable: {e}")))?;

        let a = alphabet_size;
        let mut cuts = vec![0.0; a - 1];
        for k in 1..=(a - 1) / 2 {
            let lower = normal.inverse_cdf(k as f64 / a as f64);
            cuts[k - 1] = lower;
            cuts[a - 1 - k] = -lower;
        }
        // Even alphabets keep their middle cut at exactly zero

        Ok(Self {
            alphabet_size,
            cuts,
        })
    }

    /// Number of symbols this table discretizes into
    pub fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    /// The `alphabet_size - 1` ascending cut points
    pub fn cuts(&self) -> &[f64] {
        &self.cuts
    }

    /// Symbol index of `value`: the number of cut points `<= value`
    pub fn symbol_index(&self, value: f64) -> usize {
        self.cuts.partition_point(|&cut| cut <= value)
    }
}

/// Breakpoints for `alphabet_size` symbols as a plain vector
pub fn breakpoints(alphabet_size: usize) -> Result<Vec<f64>> {
    Ok(BreakpointTable::new(alphabet_size)?.cuts)
}

pub(crate) fn validate_alphabet_size(alphabet_size: usize) -> Result<()> {
    if !(MIN_ALPHABET_SIZE..=MAX_ALPHABET_SIZE).contains(&alphabet_size) {
        return Err(Error::invalid_alphabet(
            alphabet_size,
            MIN_ALPHABET_SIZE,
            MAX_ALPHABET_SIZE,
        ));
    }
    Ok(())
}
