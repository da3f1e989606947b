//! Batch execution over many independent series
//!
//! Every sketch pipeline is a pure function of its input, so a batch is just
//! one call per series. With the `parallel` feature the calls fan out over
//! the rayon global pool; otherwise they run in order on the caller's thread.

/// Execution strategy for batch operations
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Process items sequentially
    #[default]
    Sequential,
    /// Process items in parallel (falls back to sequential without `parallel`)
    Parallel,
}

impl ExecutionStrategy {
    /// Strategy used when the caller has no preference
    pub fn auto(n_items: usize) -> Self {
        if cfg!(feature = "parallel") && n_items > 1 {
            Self::Parallel
        } else {
            Self::Sequential
        }
    }
}

/// Apply `op` to every series, preserving input order in the output
pub fn map_series<S, T, F>(inputs: &[S], strategy: ExecutionStrategy, op: F) -> Vec<T>
where
    S: AsRef<[f64]> + Sync,
    T: Send,
    F: Fn(&[f64]) -> T + Sync + Send,
{
    match strategy {
        #[cfg(feature = "parallel")]
        ExecutionStrategy::Parallel => {
            use rayon::prelude::*;
            inputs.par_iter().map(|s| op(s.as_ref())).collect()
        }
        _ => inputs.iter().map(|s| op(s.as_ref())).collect(),
    }
}
