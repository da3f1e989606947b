//! Error types for time-series sketching
//!
//! Provides a unified error type for all tsketch crates.

use thiserror::Error;

/// Core error type for sketching operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for an empty series
    pub fn empty_input(operation: &str) -> Self {
        Self::InvalidParameter(format!("{operation} requires a non-empty series"))
    }

    /// Create an error for a PAA segment count outside `[1, n]`
    pub fn invalid_segments(segments: usize, length: usize) -> Self {
        Self::InvalidParameter(format!(
            "Segment count {segments} must be in [1, {length}]"
        ))
    }

    /// Create an error for an alphabet size outside `[min, max]`
    pub fn invalid_alphabet(size: usize, min: usize, max: usize) -> Self {
        Self::InvalidParameter(format!(
            "Alphabet size {size} must be in [{min}, {max}]"
        ))
    }

    /// Create an error for a pruning tolerance outside `(0, 1]`
    pub fn invalid_tolerance(tolerance: f64) -> Self {
        Self::InvalidParameter(format!("Tolerance {tolerance} must be in (0, 1]"))
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::Computation(format!("{context} contains NaN or infinite values"))
    }

    /// Whether this error was caused by a caller-supplied parameter
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter(_))
    }
}
