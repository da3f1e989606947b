//! # DFT Compression Library
//!
//! Lossy compression of real-valued time series in the frequency domain,
//! built on RustFFT.
//!
//! A series is forward transformed, every bin whose magnitude falls below a
//! fraction of the strongest bin is dropped, and the survivors are kept as
//! `(index, coefficient)` pairs together with the original length. The
//! series is rebuilt by placing the survivors into a zero-filled spectrum and
//! inverse transforming.
//!
//! ## Mathematical Background
//!
//! For a series `x[0..N]` the forward DFT is
//!
//! ```text
//! X[k] = Σ_n x[n] · e^(-2πi·kn/N)
//! ```
//!
//! and the inverse used for reconstruction is
//!
//! ```text
//! x[n] = (1/N) · Σ_k X[k] · e^(+2πi·kn/N)
//! ```
//!
//! A real series has a conjugate-symmetric spectrum, `X[N-k] = conj(X[k])`,
//! so the two bins of a tone share a magnitude and are pruned together. When
//! ties are broken by rounding, the reconstruction can carry a small
//! imaginary part; it is discarded rather than treated as signal.
//!
//! ## Basic Usage
//!
//! ```rust
//! use tsketch_dft::{compress, reconstruct};
//!
//! let signal: Vec<f64> = (0..128)
//!     .map(|i| {
//!         let t = i as f64 / 128.0;
//!         (2.0 * std::f64::consts::PI * 2.0 * t).sin()
//!             + 0.05 * (2.0 * std::f64::consts::PI * 40.0 * t).sin()
//!     })
//!     .collect();
//!
//! // Keep bins with at least 20% of the peak magnitude
//! let domain = compress(&signal, 0.2).unwrap();
//! assert_eq!(domain.retained(), 2);
//! assert!(domain.compression_ratio() < 0.05);
//!
//! // The rebuilt series is the low tone alone
//! let rebuilt = reconstruct(domain.bins(), domain.original_length()).unwrap();
//! assert_eq!(rebuilt.len(), signal.len());
//! ```
//!
//! ## Fidelity Sweeps
//!
//! Raising the tolerance never keeps more bins. Reconstruction error tends
//! to grow with it, though not sample by sample, since pruning follows the
//! global ranking of magnitudes rather than smoothness.
//!
//! ```rust
//! use tsketch_dft::{compress, reconstruction_error};
//!
//! let signal: Vec<f64> = (0..64).map(|i| ((i * i) % 17) as f64).collect();
//! let mut last = usize::MAX;
//! for tolerance in [0.01, 0.1, 0.3, 0.6, 1.0] {
//!     let domain = compress(&signal, tolerance).unwrap();
//!     assert!(domain.retained() <= last);
//!     last = domain.retained();
//!
//!     let rebuilt = domain.reconstruct().unwrap();
//!     let rmse = reconstruction_error(&signal, &rebuilt).unwrap();
//!     assert!(rmse.is_finite());
//! }
//! ```

pub mod compressor;
pub mod spectrum;

pub use compressor::{compress, compress_batch, forward_spectrum, DftCompressor};
pub use num_complex::Complex;
pub use spectrum::{reconstruct, FrequencyDomain, SpectralBin};

use tsketch_core::Result;

/// Root-mean-square error between a series and its reconstruction
pub fn reconstruction_error(original: &[f64], reconstructed: &[f64]) -> Result<f64> {
    tsketch_core::numeric::rmse(original, reconstructed)
}
