//! Benchmarks for wheel geometry.
//!
//! These run on every frame while the wheel is drawn.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

#[allow(dead_code)]
#[path = "../src/wheel/geometry.rs"]
mod geometry;

fn bench_segments(c: &mut Criterion) {
    c.bench_function("build_segments", |b| b.iter(geometry::segments));
}

fn bench_label_positions(c: &mut Criterion) {
    c.bench_function("label_positions_full_face", |b| {
        b.iter(|| {
            (0..geometry::SEGMENT_COUNT as u8)
                .map(|index| geometry::label_position(index, black_box(140.0), black_box(1234.5)))
                .fold(0.0, |acc, (x, y)| acc + x + y)
        })
    });
}

fn bench_settle_angle(c: &mut Criterion) {
    c.bench_function("settle_angle", |b| {
        b.iter(|| geometry::settle_angle(black_box(2041.2), black_box(2368.8), black_box(42)))
    });
}

fn bench_segment_at_pointer(c: &mut Criterion) {
    c.bench_function("segment_at_pointer", |b| {
        b.iter(|| geometry::segment_at_pointer(black_box(4410.0)))
    });
}

fn bench_label_stride(c: &mut Criterion) {
    c.bench_function("label_stride", |b| {
        b.iter(|| geometry::label_stride(black_box(18.0), black_box(3.0)))
    });
}

criterion_group!(
    benches,
    bench_segments,
    bench_label_positions,
    bench_settle_angle,
    bench_segment_at_pointer,
    bench_label_stride
);
criterion_main!(benches);
