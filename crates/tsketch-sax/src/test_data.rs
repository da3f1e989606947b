//! Seeded synthetic series for tests, benchmarks and demos
//!
//! Every generator takes an explicit seed so runs are reproducible.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

/// Standard synthetic signals
pub struct SyntheticSeries;

impl SyntheticSeries {
    /// Exponential growth with jittered time, `4 * exp(0.005 * (i + e))`
    /// with `e ~ N(0, 3)`
    ///
    /// This is the dashboard's default signal; lengths are typically a
    /// multiple of the SAX segment count.
    pub fn jittered_exponential(n: usize, seed: u64) -> Vec<f64> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let jitter = Normal::new(0.0, 3.0).unwrap();
        (0..n)
            .map(|i| 4.0 * (0.005 * (i as f64 + jitter.sample(&mut rng))).exp())
            .collect()
    }

    /// Straight line `slope * i + intercept`
    pub fn linear(n: usize, slope: f64, intercept: f64) -> Vec<f64> {
        (0..n).map(|i| slope * i as f64 + intercept).collect()
    }

    /// Sum of sinusoids at integer bin frequencies plus Gaussian noise
    ///
    /// Each `(bin, amplitude)` pair contributes `amplitude * cos(2πki/n)`.
    pub fn noisy_tones(n: usize, tones: &[(usize, f64)], noise_sd: f64, seed: u64) -> Vec<f64> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let noise = Normal::new(0.0, noise_sd.max(0.0)).unwrap();
        (0..n)
            .map(|i| {
                let t = i as f64 / n as f64;
                let signal: f64 = tones
                    .iter()
                    .map(|&(k, amp)| amp * (2.0 * std::f64::consts::PI * k as f64 * t).cos())
                    .sum();
                signal + noise.sample(&mut rng)
            })
            .collect()
    }

    /// Gaussian random walk starting at zero
    pub fn random_walk(n: usize, step_sd: f64, seed: u64) -> Vec<f64> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let step = Normal::new(0.0, step_sd.max(0.0)).unwrap();
        let mut level = 0.0;
        (0..n)
            .map(|_| {
                level += step.sample(&mut rng);
                level
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generators_are_reproducible() {
        assert_eq!(
            SyntheticSeries::jittered_exponential(160, 7),
            SyntheticSeries::jittered_exponential(160, 7)
        );
        assert_ne!(
            SyntheticSeries::random_walk(32, 1.0, 1),
            SyntheticSeries::random_walk(32, 1.0, 2)
        );
    }

    #[test]
    fn test_exponential_trend() {
        let series = SyntheticSeries::jittered_exponential(160, 42);
        assert_eq!(series.len(), 160);
        assert!(series.iter().all(|&x| x > 0.0));
        assert!(series[150..].iter().sum::<f64>() > series[..10].iter().sum::<f64>());
    }
}
