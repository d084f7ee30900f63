use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scanfill::basics::Vertex;
use scanfill::engine::ScanlineEngine;

const SIZE: u32 = 1024;

/// Self-intersecting five-pointed star (pentagram order).
fn star() -> Vec<Vertex> {
    let (cx, cy, r) = (512.0f64, 512.0f64, 480.0f64);
    (0..5)
        .map(|i| {
            let a = -std::f64::consts::FRAC_PI_2 + i as f64 * 4.0 * std::f64::consts::PI / 5.0;
            Vertex::new((cx + r * a.cos()) as i32, (cy + r * a.sin()) as i32)
        })
        .collect()
}

/// Many-sided polygon approximating a circle.
fn circle(sides: usize) -> Vec<Vertex> {
    let (cx, cy, r) = (512.0f64, 512.0f64, 500.0f64);
    (0..sides)
        .map(|i| {
            let a = i as f64 * std::f64::consts::TAU / sides as f64;
            Vertex::new((cx + r * a.cos()) as i32, (cy + r * a.sin()) as i32)
        })
        .collect()
}

fn bench_fill(c: &mut Criterion) {
    let engine = ScanlineEngine::new(SIZE, SIZE);
    let star = star();
    let circle = circle(720);

    c.bench_function("fill_spans_star", |b| {
        b.iter(|| engine.fill_spans(black_box(&star)))
    });
    c.bench_function("fill_spans_circle_720", |b| {
        b.iter(|| engine.fill_spans(black_box(&circle)))
    });
}

fn bench_triangulate(c: &mut Criterion) {
    let engine = ScanlineEngine::new(SIZE, SIZE);
    let star = star();
    let circle = circle(720);

    c.bench_function("triangulate_star", |b| {
        b.iter(|| engine.triangulate(black_box(&star)))
    });
    c.bench_function("triangulate_circle_720", |b| {
        b.iter(|| engine.triangulate(black_box(&circle)))
    });
}

criterion_group!(benches, bench_fill, bench_triangulate);
criterion_main!(benches);
