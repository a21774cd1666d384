//! Benchmarks for the metrics fold.
//!
//! Compares the sequential and rayon folds over drawings of increasing size,
//! and measures spline flattening on its own.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dxf_cutting_metrics::entities::*;
use dxf_cutting_metrics::types::{Vector2, Vector3};
use dxf_cutting_metrics::{EntityGeometryResolver, MetricsAggregator};

fn sheet(n: usize) -> Vec<EntityType> {
    (0..n)
        .map(|i| -> EntityType {
            let x = (i % 100) as f64 * 15.0;
            let y = (i / 100) as f64 * 15.0;
            match i % 5 {
                0 => Circle::from_coords(x, y, 0.0, 4.0).into(),
                1 => Line::from_coords(x, y, 0.0, x + 10.0, y, 0.0).into(),
                2 => {
                    let mut poly = LwPolyline::from_points(vec![
                        Vector2::new(x, y),
                        Vector2::new(x + 10.0, y),
                        Vector2::new(x + 10.0, y + 5.0),
                    ]);
                    poly.vertices[1].bulge = 0.4;
                    poly.close();
                    poly.into()
                }
                3 => Spline::from_control_points(
                    3,
                    vec![
                        Vector3::new(x, y, 0.0),
                        Vector3::new(x + 3.0, y + 6.0, 0.0),
                        Vector3::new(x + 7.0, y - 6.0, 0.0),
                        Vector3::new(x + 10.0, y, 0.0),
                    ],
                )
                .into(),
                _ => Ellipse::from_center_axes(
                    Vector3::new(x, y, 0.0),
                    Vector3::new(6.0, 0.0, 0.0),
                    0.5,
                )
                .with_parameters(0.0, 3.0)
                .into(),
            }
        })
        .collect()
}

fn bench_fold(c: &mut Criterion) {
    let mut group = c.benchmark_group("fold");
    group.sample_size(20);

    for &n in &[1_000, 10_000, 50_000] {
        let entities = sheet(n);
        let aggregator = MetricsAggregator::default();

        group.bench_with_input(BenchmarkId::new("sequential", n), &entities, |b, e| {
            b.iter(|| black_box(aggregator.fold("bench.dxf", black_box(e))))
        });
        group.bench_with_input(BenchmarkId::new("parallel", n), &entities, |b, e| {
            b.iter(|| black_box(aggregator.fold_parallel("bench.dxf", black_box(e))))
        });
    }
    group.finish();
}

fn bench_spline_length(c: &mut Criterion) {
    let spline: EntityType = Spline::from_control_points(
        3,
        vec![
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(30.0, 60.0, 0.0),
            Vector3::new(70.0, -60.0, 0.0),
            Vector3::new(100.0, 0.0, 0.0),
            Vector3::new(130.0, 40.0, 0.0),
        ],
    )
    .into();
    let resolver = EntityGeometryResolver::default();
    c.bench_function("resolve_spline", |b| {
        b.iter(|| resolver.resolve(black_box(&spline)))
    });
}

criterion_group!(benches, bench_fold, bench_spline_length);
criterion_main!(benches);
