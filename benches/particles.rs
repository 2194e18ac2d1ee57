//! Criterion benchmarks for the particle field.
//!
//! Run with:
//!   cargo bench
//!
//! Results are saved to target/criterion/

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use folio::prelude::*;

fn make_field(count: usize, seed: u64) -> (ParticleField, Bounds) {
    let bounds = Bounds::new(1280.0, 720.0).unwrap();
    let cfg = FieldConfig {
        count,
        ..FieldConfig::default()
    };
    (ParticleField::spawn(cfg, bounds, &mut Prng::new(seed)), bounds)
}

/// step() alone: linear in the particle count.
fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    for count in [25, 100, 400].iter() {
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            let (mut field, _) = make_field(count, 42);
            b.iter(|| {
                field.step();
                black_box(field.particles()[0].x)
            });
        });
    }

    group.finish();
}

/// step() + render(): dominated by the pairwise link scan.
fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");

    for count in [25, 100, 400].iter() {
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            let (mut field, bounds) = make_field(count, 42);
            let mut surface = RecordingSurface::new(bounds);
            b.iter(|| {
                field.step();
                black_box(field.render(&mut surface).links)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_step, bench_frame);
criterion_main!(benches);
