//! Property tests over every shape the crate can build.
//!
//! These check the invariants every generated mesh must hold: index range
//! and grouping, attribute lengths, outward winding of closed solids and
//! topology that does not depend on the dimensions.

mod common;

use approx::assert_relative_eq;
use rstest::rstest;

use common::{init_logging, inward_triangles, planar_shapes, prism, solids, triangle_corners};
use shapeforge_core::math::{triangle_normal, Vec3};
use shapeforge_core::mesh::{
    attributes, pack_vertex_data, AttributeFlags, Decomposition, RectangularPrismLayout, Shape,
    ShapeOptions,
};
use shapeforge_core::GeometryError;

#[test]
fn test_every_shape_has_grouped_in_range_indices() {
    init_logging();
    for shape in solids().into_iter().chain(planar_shapes()) {
        for decomposition in [Decomposition::Triangles, Decomposition::Lines] {
            if !shape.supports(decomposition) {
                continue;
            }
            let geometry = shape
                .build(ShapeOptions::new().with_decomposition(decomposition))
                .unwrap();
            assert_eq!(geometry.vertices().len() % 3, 0);
            assert_eq!(
                geometry.index_count() % decomposition.indices_per_primitive(),
                0,
                "{} {:?}",
                shape.name(),
                decomposition
            );
            assert!(geometry
                .indices()
                .iter()
                .all(|&i| (i as usize) < geometry.vertex_count()));
            for attribute in [geometry.colors().len(), geometry.normals().len()] {
                assert!(attribute == 0 || attribute == geometry.vertices().len());
            }
            let uv = geometry.texcoords().len();
            assert!(uv == 0 || uv == 2 * geometry.vertex_count());
        }
    }
}

#[test]
fn test_solids_are_wound_outward() {
    init_logging();
    for shape in solids() {
        let geometry = shape.build(ShapeOptions::new()).unwrap();
        let inward = inward_triangles(&geometry);
        assert!(
            inward.is_empty(),
            "{} has inward triangles: {:?}",
            shape.name(),
            inward
        );
    }
}

#[test]
fn test_planar_shapes_face_positive_z() {
    for shape in planar_shapes() {
        let geometry = shape.build(ShapeOptions::new()).unwrap();
        for t in geometry.primitives() {
            let [a, b, c] = triangle_corners(&geometry, t);
            assert!(triangle_normal(a, b, c).z > 0.0, "{}", shape.name());
        }
    }
}

#[rstest]
#[case::unit(1.0, 1.0, 1.0)]
#[case::flat(10.0, 0.1, 3.0)]
#[case::tall(0.5, 0.5, 40.0)]
#[case::tiny(1e-3, 2e-3, 5e-4)]
fn test_full_prism_topology_ignores_dimensions(
    #[case] length: f32,
    #[case] width: f32,
    #[case] height: f32,
) {
    let geometry = prism(length, width, height, RectangularPrismLayout::Full)
        .build(ShapeOptions::new())
        .unwrap();
    assert_eq!(geometry.vertex_count(), 24);
    assert_eq!(geometry.index_count(), 36);
    assert!(inward_triangles(&geometry).is_empty());
}

#[test]
fn test_full_prism_faces_agree_with_normals() {
    let geometry = prism(2.0, 3.0, 4.0, RectangularPrismLayout::Full)
        .build(ShapeOptions::new())
        .unwrap();
    let normals = geometry.normals();
    for t in geometry.primitives() {
        let [a, b, c] = triangle_corners(&geometry, t);
        let face_normal = triangle_normal(a, b, c);
        let i = t[0] as usize * 3;
        let stored = Vec3::new(normals[i], normals[i + 1], normals[i + 2]);
        assert_relative_eq!(face_normal, stored, epsilon = 1e-6);
    }
}

#[rstest]
#[case::poles_only(0, 4, 2, 0)]
#[case::single_ring(1, 4, 6, 24)]
#[case::many_rings(5, 9, 47, 270)]
fn test_sphere_counts(
    #[case] layers: usize,
    #[case] points_per_layer: usize,
    #[case] vertices: usize,
    #[case] indices: usize,
) {
    let geometry = Shape::Sphere {
        radius: 1.0,
        layers,
        points_per_layer,
    }
    .build(ShapeOptions::new())
    .unwrap();
    assert_eq!(geometry.vertex_count(), vertices);
    assert_eq!(geometry.index_count(), indices);
    assert_eq!(indices, 6 * layers * points_per_layer);
}

#[test]
fn test_sphere_normals_are_radial() {
    let geometry = Shape::Sphere {
        radius: 2.0,
        layers: 3,
        points_per_layer: 6,
    }
    .build(ShapeOptions::new())
    .unwrap();
    for (p, n) in geometry
        .vertices()
        .chunks_exact(3)
        .zip(geometry.normals().chunks_exact(3))
    {
        let p = Vec3::new(p[0], p[1], p[2]);
        let n = Vec3::new(n[0], n[1], n[2]);
        assert_relative_eq!(p / 2.0, n, epsilon = 1e-5);
    }
}

#[rstest]
#[case::zero_length(Shape::Rectangle { length: 0.0, width: 1.0 })]
#[case::two_sides(Shape::RegularPolygon { sides: 2, radius: 1.0 })]
#[case::negative_radius(Shape::Sphere { radius: -1.0, layers: 2, points_per_layer: 4 })]
#[case::nan_height(Shape::Cone { radius: 1.0, height: f32::NAN, segments: 8 })]
#[case::impossible_triangle(Shape::Triangle(shapeforge_core::mesh::TriangleSpec::SideSideSide { a: 1.0, b: 1.0, c: 5.0 }))]
fn test_invalid_parameters_are_rejected(#[case] shape: Shape) {
    let err = shape.build(ShapeOptions::new()).unwrap_err();
    assert!(matches!(err, GeometryError::InvalidParameter(_)), "{err}");
    assert!(shape.validate().is_err());
    assert!(shape.vertices().is_err());
}

#[test]
fn test_colors_are_deterministic() {
    let shape = Shape::Sphere {
        radius: 1.0,
        layers: 4,
        points_per_layer: 8,
    };
    let first = shape.build(ShapeOptions::new()).unwrap();
    let second = shape.build(ShapeOptions::new()).unwrap();
    assert_eq!(first.colors(), second.colors());
    assert_eq!(
        shape.colors().unwrap(),
        attributes::rainbow_colors(first.vertex_count())
    );
}

#[test]
fn test_packing_skips_unrequested_attributes() {
    let geometry = Shape::Rectangle {
        length: 1.0,
        width: 1.0,
    }
    .build(ShapeOptions::new().with_attributes(AttributeFlags::COLOR | AttributeFlags::NORMAL))
    .unwrap();
    let packed = pack_vertex_data(&geometry);
    assert_eq!(packed.layout.attributes.len(), 3);
    // positions 48 bytes, colors 48 bytes, normals 48 bytes
    assert_eq!(packed.layout.attributes[2].offset, 96);
    assert_eq!(packed.size(), 144);
}
