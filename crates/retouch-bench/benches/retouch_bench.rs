//! Benchmarks for retouch pixel operations.
//!
//! Run with: `cargo bench -p retouch-bench`

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use retouch_bench::{noise, SIZES};
use retouch_ops::{filter, grayscale, parallel, transform, adjust, FlipAxis};
use std::hint::black_box;

/// Sequential vs parallel 3×3 box blur.
fn bench_blur(c: &mut Criterion) {
    let mut group = c.benchmark_group("box_blur");

    for side in SIZES {
        let src = noise(side);
        group.throughput(Throughput::Elements((side * side) as u64));

        group.bench_with_input(BenchmarkId::new("sequential", side), &src, |b, src| {
            b.iter_batched(
                || src.clone(),
                |mut buf| {
                    filter::box_blur(&mut buf);
                    black_box(buf)
                },
                BatchSize::LargeInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("parallel", side), &src, |b, src| {
            b.iter_batched(
                || src.clone(),
                |mut buf| {
                    parallel::box_blur(&mut buf);
                    black_box(buf)
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

/// Sequential vs parallel brightness/contrast remap.
fn bench_adjust(c: &mut Criterion) {
    let mut group = c.benchmark_group("brightness_contrast");

    for side in SIZES {
        let src = noise(side);
        group.throughput(Throughput::Elements((side * side * 3) as u64));

        group.bench_with_input(BenchmarkId::new("sequential", side), &src, |b, src| {
            b.iter_batched(
                || src.clone(),
                |mut buf| {
                    adjust::brightness_contrast(&mut buf, black_box(12), black_box(1.3));
                    black_box(buf)
                },
                BatchSize::LargeInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("parallel", side), &src, |b, src| {
            b.iter_batched(
                || src.clone(),
                |mut buf| {
                    parallel::brightness_contrast(&mut buf, black_box(12), black_box(1.3));
                    black_box(buf)
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

/// Grayscale and flips, sequential only for flips.
fn bench_misc(c: &mut Criterion) {
    let mut group = c.benchmark_group("misc");
    let side = 1024;
    let src = noise(side);
    group.throughput(Throughput::Elements((side * side) as u64));

    group.bench_function("grayscale", |b| {
        b.iter_batched(
            || src.clone(),
            |mut buf| {
                grayscale::grayscale(&mut buf);
                black_box(buf)
            },
            BatchSize::LargeInput,
        )
    });

    group.bench_function("grayscale_parallel", |b| {
        b.iter_batched(
            || src.clone(),
            |mut buf| {
                parallel::grayscale(&mut buf);
                black_box(buf)
            },
            BatchSize::LargeInput,
        )
    });

    for axis in [FlipAxis::LeftRight, FlipAxis::UpDown] {
        group.bench_function(format!("flip_{axis:?}"), |b| {
            b.iter_batched(
                || src.clone(),
                |mut buf| {
                    transform::flip(&mut buf, axis);
                    black_box(buf)
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_blur, bench_adjust, bench_misc);
criterion_main!(benches);
