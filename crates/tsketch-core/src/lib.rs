//! Core error type and numeric helpers for time-series sketches
//!
//! This crate holds the pieces shared by the symbolic (`tsketch-sax`) and
//! spectral (`tsketch-dft`) pipelines:
//!
//! - [`Error`] / [`Result`]: the single error type every pipeline returns
//! - [`numeric`]: mean, population variance, finiteness checks, RMSE
//! - [`batch`]: order-preserving fan-out of one pipeline call per series
//!
//! # Example
//!
//! ```rust
//! use tsketch_core::numeric::{mean, population_std_dev};
//!
//! let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! assert_eq!(mean(&data), 5.0);
//! assert_eq!(population_std_dev(&data), 2.0);
//! ```

pub mod batch;
pub mod error;
pub mod numeric;

// Re-export core types
pub use batch::{map_series, ExecutionStrategy};
pub use error::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::batch::{map_series, ExecutionStrategy};
    pub use crate::error::Error;
    pub use crate::numeric::{ensure_finite, ensure_non_empty, mean, population_std_dev};
    pub use crate::Result;
}
