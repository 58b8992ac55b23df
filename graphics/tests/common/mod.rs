//! Common utilities for shape upload tests.

#![allow(dead_code)]

use std::sync::Arc;

use shapeforge_graphics::{
    BufferHandle, DummyBackend, RectangularPrismLayout, Shape, TriangleSpec,
};

/// Install a test logger once. Repeated calls are ignored.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Fresh in-memory backend.
pub fn backend() -> Arc<DummyBackend> {
    init_logging();
    Arc::new(DummyBackend::new())
}

/// Decode native-endian `f32`s from a buffer readback.
pub fn floats(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(4)
        .map(|c| f32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
        .collect()
}

/// Decode native-endian `u32`s from a buffer readback.
pub fn indices(bytes: &[u8]) -> Vec<u32> {
    bytes
        .chunks_exact(4)
        .map(|c| u32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
        .collect()
}

/// Read back a buffer as floats, panicking if it is gone.
pub fn read_floats(backend: &DummyBackend, buffer: BufferHandle) -> Vec<f32> {
    floats(&backend.buffer_data(buffer).expect("buffer is live"))
}

pub fn triangle() -> Shape {
    Shape::Triangle(TriangleSpec::SideSideSide {
        a: 3.0,
        b: 4.0,
        c: 5.0,
    })
}

pub fn cube(layout: RectangularPrismLayout) -> Shape {
    Shape::RectangularPrism {
        length: 1.0,
        width: 1.0,
        height: 1.0,
        layout,
    }
}

pub fn sphere() -> Shape {
    Shape::Sphere {
        radius: 1.0,
        layers: 3,
        points_per_layer: 8,
    }
}
