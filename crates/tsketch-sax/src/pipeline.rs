//! The SAX pipeline: z-normalize, reduce with PAA, discretize
//!
//! Normalization always runs on the raw series before PAA. The breakpoints
//! assume standard-normal values, so discretizing un-normalized data would
//! misclassify both offset and amplitude.

use crate::breakpoints::{validate_alphabet_size, BreakpointTable};
use crate::normalize::{znormalize_with_threshold, ZNormalized, ZNORM_EPSILON};
use crate::paa::paa;
use crate::symbols::{map_to_symbols, SaxWord};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use tsketch_core::batch::{map_series, ExecutionStrategy};
use tsketch_core::{Error, Result};

/// Parameters of a SAX transform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SaxConfig {
    /// Number of PAA segments (word length)
    pub segments: usize,
    /// Number of symbols in the alphabet
    pub alphabet_size: usize,
    /// Standard deviation at or below which the input is treated as constant
    pub znorm_threshold: f64,
}

impl Default for SaxConfig {
    fn default() -> Self {
        Self {
            segments: 8,
            alphabet_size: 4,
            znorm_threshold: ZNORM_EPSILON,
        }
    }
}

impl SaxConfig {
    /// Start building a configuration from the defaults
    pub fn builder() -> SaxConfigBuilder {
        SaxConfigBuilder::default()
    }

    /// Check the series-independent parameters
    ///
    /// The upper bound of `segments` depends on the series length and is
    /// checked when the transform runs.
    pub fn validate(&self) -> Result<()> {
        if self.segments == 0 {
            return Err(Error::InvalidParameter(
                "Segment count must be at least 1".to_string(),
            ));
        }
        validate_alphabet_size(self.alphabet_size)?;
        if !(self.znorm_threshold >= 0.0 && self.znorm_threshold.is_finite()) {
            return Err(Error::InvalidParameter(format!(
                "Normalization threshold {} must be finite and non-negative",
                self.znorm_threshold
            )));
        }
        Ok(())
    }
}

/// Builder for [`SaxConfig`]
#[derive(Debug, Clone, Default)]
pub struct SaxConfigBuilder {
    config: SaxConfig,
}

impl SaxConfigBuilder {
    /// Sets the number of PAA segments
    pub fn segments(mut self, segments: usize) -> Self {
        self.config.segments = segments;
        self
    }

    /// Sets the alphabet size
    pub fn alphabet_size(mut self, alphabet_size: usize) -> Self {
        self.config.alphabet_size = alphabet_size;
        self
    }

    /// Sets the zero-variance threshold used by the normalizer
    pub fn znorm_threshold(mut self, threshold: f64) -> Self {
        self.config.znorm_threshold = threshold;
        self
    }

    /// Validate and build a ready-to-run transform
    pub fn build(self) -> Result<SaxTransform> {
        SaxTransform::new(self.config)
    }
}

/// Everything the pipeline produced for one series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaxRepresentation {
    /// The z-normalized series
    pub normalized: ZNormalized,
    /// PAA of the normalized series
    pub paa: Vec<f64>,
    /// The discretized word
    pub word: SaxWord,
}

/// A validated SAX transform that can be applied to any number of series
#[derive(Debug, Clone, PartialEq)]
pub struct SaxTransform {
    config: SaxConfig,
    table: BreakpointTable,
}

impl SaxTransform {
    /// Validate `config` and precompute its breakpoint table
    pub fn new(config: SaxConfig) -> Result<Self> {
        config.validate()?;
        let table = BreakpointTable::new(config.alphabet_size)?;
        Ok(Self { config, table })
    }

    /// The configuration this transform was built from
    pub fn config(&self) -> &SaxConfig {
        &self.config
    }

    /// The breakpoint table used for discretization
    pub fn breakpoints(&self) -> &BreakpointTable {
        &self.table
    }

    /// Run the pipeline and keep every intermediate result
    #[instrument(skip(self, series), fields(n = series.len(), w = self.config.segments, a = self.config.alphabet_size))]
    pub fn represent(&self, series: &[f64]) -> Result<SaxRepresentation> {
        if self.config.segments > series.len() {
            return Err(Error::invalid_segments(self.config.segments, series.len()));
        }

        let normalized = znormalize_with_threshold(series, self.config.znorm_threshold)?;
        let reduced = paa(normalized.values(), self.config.segments)?;
        let word = map_to_symbols(&reduced, &self.table);

        debug!("SAX word {} (degenerate={})", word, normalized.is_degenerate());

        Ok(SaxRepresentation {
            normalized,
            paa: reduced,
            word,
        })
    }

    /// Run the pipeline and return only the word
    pub fn transform(&self, series: &[f64]) -> Result<SaxWord> {
        Ok(self.represent(series)?.word)
    }

    /// Transform many series, one independent pipeline call each
    pub fn transform_batch<S>(&self, inputs: &[S], strategy: ExecutionStrategy) -> Vec<Result<SaxWord>>
    where
        S: AsRef<[f64]> + Sync,
    {
        map_series(inputs, strategy, |series| self.transform(series))
    }
}

/// Convert `series` to a SAX word of `segments` symbols over `alphabet_size`
/// letters
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] for an empty series, `segments`
/// outside `[1, series.len()]` or `alphabet_size` outside `[2, 26]`, and
/// [`Error::Computation`] for non-finite input.
///
/// # Examples
///
/// ```rust
/// use tsketch_sax::sax_pipeline;
///
/// let series = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
/// let word = sax_pipeline(&series, 4, 4).unwrap();
/// assert_eq!(word.as_str(), "abcd");
/// ```
pub fn sax_pipeline(series: &[f64], segments: usize, alphabet_size: usize) -> Result<SaxWord> {
    SaxConfig::builder()
        .segments(segments)
        .alphabet_size(alphabet_size)
        .build()?
        .transform(series)
}

/// Convert many series with the same parameters
///
/// Runs on the rayon pool when the `parallel` feature is enabled.
pub fn sax_batch<S>(inputs: &[S], segments: usize, alphabet_size: usize) -> Result<Vec<Result<SaxWord>>>
where
    S: AsRef<[f64]> + Sync,
{
    let transform = SaxConfig::builder()
        .segments(segments)
        .alphabet_size(alphabet_size)
        .build()?;
    Ok(transform.transform_batch(inputs, ExecutionStrategy::auto(inputs.len())))
}
