use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tsketch_sax::test_data::SyntheticSeries;
use tsketch_sax::{paa, sax_pipeline, SaxConfig};

fn bench_paa(c: &mut Criterion) {
    let mut group = c.benchmark_group("paa");
    for &size in &[160, 1_000, 10_000] {
        let data = SyntheticSeries::random_walk(size, 1.0, 42);

        // Divisible fast path
        group.bench_with_input(BenchmarkId::new("divisible", size), &data, |b, data| {
            b.iter(|| paa(black_box(data), 8))
        });

        // Fractional binning
        group.bench_with_input(BenchmarkId::new("fractional", size), &data, |b, data| {
            b.iter(|| paa(black_box(data), 7))
        });
    }
    group.finish();
}

fn bench_sax(c: &mut Criterion) {
    let mut group = c.benchmark_group("sax");
    let data = SyntheticSeries::jittered_exponential(10_000, 42);

    for &a in &[4, 8, 16] {
        group.bench_with_input(BenchmarkId::new("one_shot", a), &a, |b, &a| {
            b.iter(|| sax_pipeline(black_box(&data), 64, a))
        });

        // Reusing the transform skips breakpoint construction
        let transform = SaxConfig::builder().segments(64).alphabet_size(a).build().unwrap();
        group.bench_with_input(BenchmarkId::new("reused", a), &data, |b, data| {
            b.iter(|| transform.transform(black_box(data)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_paa, bench_sax);
criterion_main!(benches);
