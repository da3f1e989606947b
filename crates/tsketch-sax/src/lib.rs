//! Symbolic Aggregate approXimation (SAX) for scalar time series
//!
//! SAX turns a real-valued series into a short string over a small alphabet:
//!
//! 1. **Z-normalize** the series to zero mean and unit variance
//! 2. **PAA**: average the normalized series over `w` segments
//! 3. **Discretize** each segment mean against the standard-normal
//!    breakpoints for an alphabet of `a` symbols
//!
//! The result has exactly `w` symbols drawn from the first `a` letters.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```rust
//! use tsketch_sax::{sax_pipeline, symbol_frequencies};
//!
//! let series: Vec<f64> = (0..32).map(|i| (i as f64 * 0.3).sin()).collect();
//! let word = sax_pipeline(&series, 8, 4).unwrap();
//! assert_eq!(word.len(), 8);
//!
//! let counts = symbol_frequencies(&word);
//! assert_eq!(counts.values().sum::<usize>(), 8);
//! ```
//!
//! ## Keeping Intermediate Results
//!
//! ```rust
//! use tsketch_sax::{expand_paa, SaxConfig};
//!
//! let series = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
//! let transform = SaxConfig::builder().segments(4).alphabet_size(4).build().unwrap();
//! let rep = transform.represent(&series).unwrap();
//!
//! // Step overlay of the PAA on the normalized series
//! let overlay = expand_paa(&rep.paa, series.len()).unwrap();
//! assert_eq!(overlay.len(), series.len());
//! assert_eq!(rep.word.as_str(), "abcd");
//! ```

pub mod breakpoints;
pub mod frequency;
pub mod normalize;
pub mod paa;
pub mod pipeline;
pub mod symbols;

#[cfg(feature = "test-utils")]
pub mod test_data;

pub use breakpoints::{breakpoints, BreakpointTable, MAX_ALPHABET_SIZE, MIN_ALPHABET_SIZE};
pub use frequency::{symbol_frequencies, symbol_frequencies_str};
pub use normalize::{znormalize, znormalize_with_threshold, ZNormalized, ZNORM_EPSILON};
pub use paa::{expand_paa, paa};
pub use pipeline::{sax_batch, sax_pipeline, SaxConfig, SaxConfigBuilder, SaxRepresentation, SaxTransform};
pub use symbols::{index_for_symbol, map_to_symbols, symbol_for_index, SaxWord};
