use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};
use timegraph_core::curve::{catmull_rom, linear};
use timegraph_core::PlotPoint;

fn gen_points(n: usize) -> Vec<PlotPoint> {
    let mut v = Vec::with_capacity(n);
    for i in 0..n {
        // simple waveform with drift
        let x = i as f64;
        let y = (i as f64 * 0.01).sin() * 100.0 + (i as f64 * 0.0001);
        v.push(PlotPoint::new(x, y));
    }
    v
}

fn bench_curves(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve");
    for &n in &[1_000usize, 10_000usize, 50_000usize] {
        let data = gen_points(n);
        group.bench_with_input(BenchmarkId::new("linear", n), &data, |b, d| {
            b.iter(|| black_box(linear(d)));
        });
        group.bench_with_input(BenchmarkId::new("uniform", n), &data, |b, d| {
            b.iter(|| black_box(catmull_rom(d, 0.0)));
        });
        group.bench_with_input(BenchmarkId::new("centripetal", n), &data, |b, d| {
            b.iter(|| black_box(catmull_rom(d, 0.5)));
        });
        group.bench_with_input(BenchmarkId::new("chordal", n), &data, |b, d| {
            b.iter(|| black_box(catmull_rom(d, 1.0)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_curves);
criterion_main!(benches);
