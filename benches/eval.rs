//! Benchmarks for field evaluation and meshing.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use isoforge::prelude::*;

fn csg_demo() -> Sdf {
    let base = Sdf::sphere(1.0).unwrap() & Sdf::cube(1.5).unwrap();
    let drill = Sdf::cylinder(0.5).unwrap();
    base - (drill.clone().orient(DVec3::X).unwrap()
        | drill.clone().orient(DVec3::Y).unwrap()
        | drill.orient(DVec3::Z).unwrap())
}

fn grid_points(resolution: usize) -> Vec<DVec3> {
    let mut points = Vec::with_capacity(resolution * resolution * resolution);
    let step = 3.0 / resolution as f64;
    for z in 0..resolution {
        for y in 0..resolution {
            for x in 0..resolution {
                points.push(DVec3::new(
                    -1.5 + (x as f64 + 0.5) * step,
                    -1.5 + (y as f64 + 0.5) * step,
                    -1.5 + (z as f64 + 0.5) * step,
                ));
            }
        }
    }
    points
}

fn bench_single_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance");
    let p = DVec3::new(0.5, 0.5, 0.5);

    let sphere = Sdf::sphere(1.0).unwrap();
    group.bench_function("sphere", |b| {
        b.iter(|| black_box(&sphere).distance(black_box(p)))
    });

    let demo = csg_demo();
    group.bench_function("csg_demo", |b| {
        b.iter(|| black_box(&demo).distance(black_box(p)))
    });

    let twisted = Sdf::torus(1.0, 0.25).unwrap().twist(0.8);
    group.bench_function("twisted_torus", |b| {
        b.iter(|| black_box(&twisted).distance(black_box(p)))
    });

    group.finish();
}

fn bench_batches(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let demo = csg_demo();
    let points = grid_points(32);
    group.throughput(Throughput::Elements(points.len() as u64));

    group.bench_function("sequential", |b| {
        b.iter(|| eval_batch(black_box(demo.node()), black_box(&points)))
    });
    group.bench_function("parallel", |b| {
        b.iter(|| eval_batch_parallel(black_box(demo.node()), black_box(&points)))
    });

    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    group.sample_size(10);

    let demo = csg_demo();
    let options = MeshOptions {
        samples: 250_000,
        ..MeshOptions::default()
    };
    group.bench_function("csg_demo_250k", |b| {
        b.iter(|| black_box(&demo).generate(black_box(&options)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_single_point, bench_batches, bench_generate);
criterion_main!(benches);
