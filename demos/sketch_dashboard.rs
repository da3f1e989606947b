//! Console walk-through of the sketches a dashboard would plot
//!
//! Run with `RUST_LOG=debug` to see pruning and normalization decisions.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tsketch::sax::{expand_paa, test_data::SyntheticSeries};
use tsketch::{compress, reconstruction_error, symbol_frequencies, SaxConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Dataset sizes step by the segment count so PAA segments stay whole
    let segments = 8;
    for size in [32, 64, 160] {
        let series = SyntheticSeries::jittered_exponential(size, 42);
        println!("\n=== {size} samples ===");

        for alphabet_size in [2, 4, 6, 8] {
            let transform = SaxConfig::builder()
                .segments(segments)
                .alphabet_size(alphabet_size)
                .build()?;
            let rep = transform.represent(&series)?;
            let overlay = expand_paa(&rep.paa, series.len())?;

            println!(
                "a={alphabet_size}: word={} frequencies={:?} overlay[0..4]={:?}",
                rep.word,
                symbol_frequencies(&rep.word),
                &overlay[..4]
            );
        }

        for tolerance in [0.001, 0.01, 0.05, 0.2] {
            let domain = compress(&series, tolerance)?;
            let rebuilt = domain.reconstruct()?;
            let rmse = reconstruction_error(&series, &rebuilt)?;
            info!(
                tolerance,
                retained = domain.retained(),
                ratio = domain.compression_ratio(),
                rmse,
                "DFT sketch"
            );
        }
    }

    Ok(())
}
