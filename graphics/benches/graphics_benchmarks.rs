use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use shapeforge_core::math::{mat4_from_translation, Mat4, Vec3};
use shapeforge_graphics::{DummyBackend, RectangularPrismLayout, ShapeDescriptor, ShapeOptions};

// ---------------------------------------------------------------------------
// Upload
// ---------------------------------------------------------------------------

fn bench_upload_sphere(c: &mut Criterion) {
    let backend = Arc::new(DummyBackend::new());
    c.bench_function("upload_sphere_32x64", |b| {
        b.iter(|| {
            ShapeDescriptor::sphere(backend.clone(), 1.0, 32, 64, ShapeOptions::new())
                .map(black_box)
        });
    });
}

fn bench_upload_cube(c: &mut Criterion) {
    let backend = Arc::new(DummyBackend::new());
    c.bench_function("upload_cube", |b| {
        b.iter(|| {
            ShapeDescriptor::rectangular_prism(
                backend.clone(),
                1.0,
                1.0,
                1.0,
                RectangularPrismLayout::Full,
                ShapeOptions::new(),
            )
            .map(black_box)
        });
    });
}

// ---------------------------------------------------------------------------
// Instancing
// ---------------------------------------------------------------------------

fn bench_send_instanced_data(c: &mut Criterion) {
    let backend = Arc::new(DummyBackend::new());
    let mut cube = ShapeDescriptor::rectangular_prism(
        backend,
        1.0,
        1.0,
        1.0,
        RectangularPrismLayout::Limited,
        ShapeOptions::new(),
    )
    .expect("valid cube");
    cube.initialize_instancing(1024).expect("instance buffer");
    let transforms: Vec<Mat4> = (0..1024)
        .map(|i| mat4_from_translation(Vec3::new(i as f32, 0.0, 0.0)))
        .collect();

    c.bench_function("send_instanced_data_1024", |b| {
        b.iter(|| cube.send_instanced_data(black_box(&transforms)));
    });
}

criterion_group!(
    benches,
    bench_upload_sphere,
    bench_upload_cube,
    bench_send_instanced_data,
);
criterion_main!(benches);
