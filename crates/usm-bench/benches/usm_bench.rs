//! Benchmarks for usm-rs operations.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use usm_core::Plane;
use usm_ops::expand::Border;
use usm_ops::{correlate, expand, usm_enhance, FilterKind, Kernel};

/// Build a plane with a smooth diagonal gradient.
fn gradient(width: u32, height: u32) -> Plane {
    let data = (0..width as usize * height as usize)
        .map(|i| {
            let x = i % width as usize;
            let y = i / width as usize;
            (x + y) as f32 / (width + height) as f32
        })
        .collect();
    Plane::from_data(width, height, data).unwrap()
}

/// Benchmark kernel construction.
fn bench_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernel");

    for radius in [1u32, 3, 7].iter() {
        group.bench_with_input(BenchmarkId::new("box", radius), radius, |b, &r| {
            b.iter(|| Kernel::box_filter(black_box(r)).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("gaussian", radius), radius, |b, &r| {
            b.iter(|| Kernel::gaussian(black_box(r)).unwrap())
        });
    }

    group.bench_function("dog_1_3", |b| {
        b.iter(|| Kernel::dog_sharpen(black_box(1), black_box(3)).unwrap())
    });

    group.finish();
}

/// Benchmark border expansion policies.
fn bench_expand(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand");

    for size in [256u32, 512, 1024].iter() {
        let plane = gradient(*size, *size);

        group.throughput(Throughput::Elements(*size as u64 * *size as u64));

        group.bench_with_input(BenchmarkId::new("fill", size), &plane, |b, p| {
            b.iter(|| expand(black_box(p), 3, Border::Fill).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("circular", size), &plane, |b, p| {
            b.iter(|| expand(black_box(p), 3, Border::Circular).unwrap())
        });
    }

    group.finish();
}

/// Benchmark valid-mode correlation, serial against parallel.
fn bench_correlate(c: &mut Criterion) {
    let mut group = c.benchmark_group("correlate");

    let kernel = Kernel::gaussian(2).unwrap();

    for size in [128u32, 256, 512].iter() {
        let plane = gradient(*size, *size);

        group.throughput(Throughput::Elements(*size as u64 * *size as u64));

        group.bench_with_input(BenchmarkId::new("serial", size), &plane, |b, p| {
            b.iter(|| correlate(black_box(p), &kernel).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), &plane, |b, p| {
            b.iter(|| usm_ops::parallel::correlate(black_box(p), &kernel).unwrap())
        });
    }

    group.finish();
}

/// Benchmark the full unsharp masking pipeline.
fn bench_enhance(c: &mut Criterion) {
    let mut group = c.benchmark_group("enhance");

    for size in [256u32, 512].iter() {
        let plane = gradient(*size, *size);

        group.throughput(Throughput::Elements(*size as u64 * *size as u64));

        group.bench_with_input(BenchmarkId::new("box_r1", size), &plane, |b, p| {
            b.iter(|| usm_enhance(black_box(p), 1.0, 1, FilterKind::Box, Border::Fill).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("gaussian_r1", size), &plane, |b, p| {
            b.iter(|| {
                usm_enhance(black_box(p), 1.0, 1, FilterKind::Gaussian, Border::Fill).unwrap()
            })
        });

        group.bench_with_input(BenchmarkId::new("gaussian_r3_circular", size), &plane, |b, p| {
            b.iter(|| {
                usm_enhance(black_box(p), 1.0, 3, FilterKind::Gaussian, Border::Circular).unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_kernel,
    bench_expand,
    bench_correlate,
    bench_enhance,
);

criterion_main!(benches);
