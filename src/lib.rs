//! Symbolic and spectral sketches of scalar time series
//!
//! This crate re-exports the workspace members behind one dependency:
//!
//! - [`sax`]: z-normalization, PAA, Gaussian breakpoints and SAX words
//! - [`dft`]: DFT compression by relative magnitude pruning and its
//!   reconstruction
//! - [`base`]: the shared error type and numeric helpers
//!
//! The four entry points most callers need are re-exported at the root.
//!
//! # Example
//!
//! ```rust
//! use tsketch::{compress, reconstruct, sax_pipeline, symbol_frequencies};
//!
//! let series: Vec<f64> = (0..64).map(|i| (i as f64 / 8.0).sin() * 10.0 + 20.0).collect();
//!
//! let word = sax_pipeline(&series, 8, 4)?;
//! let counts = symbol_frequencies(&word);
//! assert_eq!(counts.values().sum::<usize>(), 8);
//!
//! let domain = compress(&series, 0.05)?;
//! let approx = reconstruct(domain.bins(), domain.original_length())?;
//! assert_eq!(approx.len(), series.len());
//! # Ok::<(), tsketch::Error>(())
//! ```

pub use tsketch_core as base;
pub use tsketch_dft as dft;
pub use tsketch_sax as sax;

pub use tsketch_core::{Error, ExecutionStrategy, Result};
pub use tsketch_dft::{compress, reconstruct, reconstruction_error, DftCompressor, FrequencyDomain};
pub use tsketch_sax::{
    sax_pipeline, symbol_frequencies, SaxConfig, SaxRepresentation, SaxTransform, SaxWord,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        compress, reconstruct, sax_pipeline, symbol_frequencies, DftCompressor, Error,
        FrequencyDomain, Result, SaxConfig, SaxTransform, SaxWord,
    };
}
