//! Benchmarks for View append and reslice against Vec
//!
//! Run with: `cargo bench --bench append`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sliver_core::{Exact, View, ViewOptions};

fn bench_append_one(c: &mut Criterion) {
    let mut group = c.benchmark_group("append_one");

    for size in [8, 64, 512, 4096] {
        group.bench_with_input(BenchmarkId::new("View", size), &size, |b, &size| {
            b.iter(|| {
                let mut view = View::<u32>::new();
                for i in 0..size {
                    view = view.append([black_box(i)]).unwrap();
                }
                black_box(view);
            });
        });

        group.bench_with_input(BenchmarkId::new("View/exact", size), &size, |b, &size| {
            b.iter(|| {
                let mut view = View::<u32>::new();
                for i in 0..size {
                    view = view.append_by(&Exact, [black_box(i)]).unwrap();
                }
                black_box(view);
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &size| {
            b.iter(|| {
                let mut vec = Vec::<u32>::new();
                for i in 0..size {
                    vec.push(black_box(i));
                }
                black_box(vec);
            });
        });
    }

    group.finish();
}

fn bench_append_reserved(c: &mut Criterion) {
    let mut group = c.benchmark_group("append_reserved");

    for size in [64, 4096] {
        group.bench_with_input(BenchmarkId::new("View", size), &size, |b, &size| {
            b.iter(|| {
                let mut view = View::<u32>::make_in(0, size as usize, &ViewOptions::default()).unwrap();
                for i in 0..size {
                    view = view.append([black_box(i)]).unwrap();
                }
                black_box(view);
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &size| {
            b.iter(|| {
                let mut vec = Vec::<u32>::with_capacity(size as usize);
                for i in 0..size {
                    vec.push(black_box(i));
                }
                black_box(vec);
            });
        });
    }

    group.finish();
}

fn bench_reslice(c: &mut Criterion) {
    let view = View::<u32>::make(1024, 1024).unwrap();

    c.bench_function("reslice_window", |b| {
        b.iter(|| {
            let window = view.slice(black_box(16)..black_box(512)).unwrap();
            black_box(window.slice(..black_box(32)).unwrap());
        });
    });

    c.bench_function("get_through_slice", |b| {
        let window = view.slice(100..900).unwrap();
        b.iter(|| {
            let mut sum = 0u32;
            for i in 0..window.len() {
                sum = sum.wrapping_add(window.get(black_box(i)).unwrap());
            }
            black_box(sum);
        });
    });
}

criterion_group!(
    benches,
    bench_append_one,
    bench_append_reserved,
    bench_reslice
);
criterion_main!(benches);
