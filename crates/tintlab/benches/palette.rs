use criterion::{criterion_group, criterion_main, Criterion};
use tintlab::{background_palette, find_closest_palette, tonal_palette, Rgba, GOLDEN_PALETTES};

pub fn run_benchmarks(c: &mut Criterion) {
    let seed = Rgba::from_hex("#e91e63").expect("seed color is valid hex");
    let target = seed.to_lab();

    let mut group = c.benchmark_group("palette");

    group.bench_function("match", |b| {
        b.iter(|| find_closest_palette(&target, &GOLDEN_PALETTES))
    });

    group.bench_function("tonal", |b| b.iter(|| tonal_palette(&seed)));

    group.bench_function("background", |b| b.iter(|| background_palette(&seed)));

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
