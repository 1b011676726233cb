//! Benchmarks for quad geometry appends and sprite rasterization.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use aggvis::prelude::*;

fn bench_push_quads(c: &mut Criterion) {
    let particle = AggregateParticle {
        position: Vec3::new(1.0, 2.0, 0.0),
        color: Vec4::new(1.0, 0.5, 0.25, 1.0),
        size: 1.0,
    };

    c.bench_function("push_10k_quads", |b| {
        b.iter(|| {
            let mut mesh = MeshBuffers::new();
            for _ in 0..10_000 {
                mesh.push_quad(black_box(&particle));
            }
            black_box(mesh.quad_count())
        })
    });
}

fn bench_interleave_vertices(c: &mut Criterion) {
    let particle = AggregateParticle {
        position: Vec3::ZERO,
        color: Vec4::ONE,
        size: 1.0,
    };
    let mut mesh = MeshBuffers::new();
    for _ in 0..10_000 {
        mesh.push_quad(&particle);
    }

    c.bench_function("interleave_10k_quads", |b| {
        b.iter(|| black_box(mesh.vertices()))
    });
}

fn bench_rasterize_sprite(c: &mut Criterion) {
    let mut gradient = RadialGradient::new();
    for i in 0..256 {
        let t = i as f32 / 255.0;
        gradient.push_stop(Vec4::new(t, 1.0 - t, 0.5, 1.0), 0.0);
    }

    c.bench_function("rasterize_32px_256_stops", |b| {
        b.iter(|| black_box(rasterize(&gradient, DEFAULT_SPRITE_SIZE)))
    });
}

criterion_group!(
    benches,
    bench_push_quads,
    bench_interleave_vertices,
    bench_rasterize_sprite
);
criterion_main!(benches);
