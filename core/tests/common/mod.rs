//! Shared helpers for the geometry property tests.

#![allow(dead_code)]

use shapeforge_core::math::{triangle_normal, Vec3};
use shapeforge_core::mesh::{RectangularPrismLayout, Shape, ShapeGeometry, TriangleSpec};

/// Install a test logger once. Repeated calls are ignored.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Corners of triangle `t` as vectors.
pub fn triangle_corners(geometry: &ShapeGeometry, t: &[u32]) -> [Vec3; 3] {
    let positions = geometry.positions();
    [t[0], t[1], t[2]].map(|i| Vec3::from(positions[i as usize]))
}

/// Mean of all vertex positions.
pub fn vertex_centroid(geometry: &ShapeGeometry) -> Vec3 {
    let sum: Vec3 = geometry.positions().iter().map(|&p| Vec3::from(p)).sum();
    sum / geometry.vertex_count() as f32
}

/// Triangles whose winding normal does not point away from the solid's
/// center, as `(triangle index, normal, direction to triangle)`.
pub fn inward_triangles(geometry: &ShapeGeometry) -> Vec<(usize, Vec3, Vec3)> {
    let center = vertex_centroid(geometry);
    geometry
        .primitives()
        .enumerate()
        .filter_map(|(i, t)| {
            let [a, b, c] = triangle_corners(geometry, t);
            let normal = triangle_normal(a, b, c);
            let outward = (a + b + c) / 3.0 - center;
            (normal.dot(&outward) <= 0.0).then_some((i, normal, outward))
        })
        .collect()
}

pub fn prism(length: f32, width: f32, height: f32, layout: RectangularPrismLayout) -> Shape {
    Shape::RectangularPrism {
        length,
        width,
        height,
        layout,
    }
}

/// One instance of every closed solid.
pub fn solids() -> Vec<Shape> {
    vec![
        prism(2.0, 3.0, 4.0, RectangularPrismLayout::Full),
        prism(2.0, 3.0, 4.0, RectangularPrismLayout::Limited),
        Shape::Sphere {
            radius: 1.5,
            layers: 6,
            points_per_layer: 10,
        },
        Shape::Cone {
            radius: 1.0,
            height: 2.0,
            segments: 12,
        },
        Shape::Bicone {
            radius: 1.0,
            height: 3.0,
            segments: 7,
        },
        Shape::Prism {
            radius: 2.0,
            height: 0.5,
            segments: 5,
        },
    ]
}

/// One instance of every planar shape.
pub fn planar_shapes() -> Vec<Shape> {
    vec![
        Shape::Triangle(TriangleSpec::SideSideSide {
            a: 3.0,
            b: 4.0,
            c: 5.0,
        }),
        Shape::Triangle(TriangleSpec::SideAngleSide {
            a: 1.0,
            angle: 1.2,
            b: 2.0,
        }),
        Shape::Triangle(TriangleSpec::AngleSideAngle {
            angle_a: 0.7,
            side: 1.0,
            angle_c: 0.9,
        }),
        Shape::Rectangle {
            length: 2.0,
            width: 1.0,
        },
        Shape::RegularPolygon {
            sides: 8,
            radius: 0.5,
        },
    ]
}
