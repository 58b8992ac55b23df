//! Primitive vertex generators.
//!
//! Every generator validates its parameters first and returns
//! [`GeometryError::InvalidParameter`] without producing any vertices when
//! they are out of range. Planar shapes lie in the XY plane, are centered on
//! the origin and are wound counter-clockwise when seen from `+z`. Solids are
//! centered on the origin.

use std::f32::consts::{PI, TAU};

use crate::error::{GeometryError, GeometryResult};
use crate::math::Vec2;

/// Number of vertices in the full rectangular prism layout.
pub const PRISM_FULL_VERTEX_COUNT: usize = 24;

/// Number of vertices in the limited (shared-corner) rectangular prism layout.
pub const PRISM_LIMITED_VERTEX_COUNT: usize = 8;

pub(crate) fn require_positive(name: &str, value: f32) -> GeometryResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::invalid(format!(
            "{} must be positive and finite, got {}",
            name, value
        )))
    }
}

pub(crate) fn require_sides(name: &str, count: usize) -> GeometryResult<()> {
    if count >= 3 {
        Ok(())
    } else {
        Err(GeometryError::invalid(format!(
            "{} must be at least 3, got {}",
            name, count
        )))
    }
}

fn require_angle(name: &str, angle: f32) -> GeometryResult<()> {
    if angle.is_finite() && angle > 0.0 && angle < PI {
        Ok(())
    } else {
        Err(GeometryError::invalid(format!(
            "{} must lie strictly between 0 and pi, got {}",
            name, angle
        )))
    }
}

/// Origin, base vertex on `+x`, apex above: translated onto the centroid.
fn centered_triangle(base: f32, apex: Vec2) -> Vec<[f32; 3]> {
    let centroid = Vec2::new((base + apex.x) / 3.0, apex.y / 3.0);
    [Vec2::zeros(), Vec2::new(base, 0.0), apex]
        .iter()
        .map(|p| {
            let p = p - centroid;
            [p.x, p.y, 0.0]
        })
        .collect()
}

pub(crate) fn validate_triangle_sss(a: f32, b: f32, c: f32) -> GeometryResult<()> {
    require_positive("side a", a)?;
    require_positive("side b", b)?;
    require_positive("side c", c)?;
    if a + b <= c || a + c <= b || b + c <= a {
        return Err(GeometryError::invalid(format!(
            "sides {}, {}, {} violate the triangle inequality",
            a, b, c
        )));
    }
    Ok(())
}

/// Triangle from three side lengths.
///
/// `a` is the distance from the origin vertex to the apex, `b` the distance
/// from the origin vertex to the base vertex and `c` the distance from the
/// base vertex to the apex. The apex follows from the law of cosines.
pub fn triangle_sss(a: f32, b: f32, c: f32) -> GeometryResult<Vec<[f32; 3]>> {
    validate_triangle_sss(a, b, c)?;

    let apex_x = (a * a + b * b - c * c) / (2.0 * b);
    let apex_y = (a * a - apex_x * apex_x).max(0.0).sqrt();
    Ok(centered_triangle(b, Vec2::new(apex_x, apex_y)))
}

pub(crate) fn validate_triangle_sas(a: f32, angle: f32, b: f32) -> GeometryResult<()> {
    require_positive("side a", a)?;
    require_angle("included angle", angle)?;
    require_positive("side b", b)
}

/// Triangle from two sides and the angle between them.
///
/// The angle sits at the origin vertex; `a` runs to the apex and `b` along
/// `+x` to the base vertex.
pub fn triangle_sas(a: f32, angle: f32, b: f32) -> GeometryResult<Vec<[f32; 3]>> {
    validate_triangle_sas(a, angle, b)?;

    let (sin, cos) = angle.sin_cos();
    Ok(centered_triangle(b, Vec2::new(a * cos, a * sin)))
}

pub(crate) fn validate_triangle_asa(angle_a: f32, side: f32, angle_c: f32) -> GeometryResult<()> {
    require_angle("angle a", angle_a)?;
    require_positive("side", side)?;
    require_angle("angle c", angle_c)?;
    if angle_a + angle_c >= PI {
        return Err(GeometryError::invalid(format!(
            "angles {} and {} leave no room for a third angle",
            angle_a, angle_c
        )));
    }
    Ok(())
}

/// Triangle from two angles and a side.
///
/// `angle_a` sits at the origin vertex, `side` runs from the origin vertex to
/// the apex and `angle_c` sits at the base vertex. The base length follows
/// from the law of sines.
pub fn triangle_asa(angle_a: f32, side: f32, angle_c: f32) -> GeometryResult<Vec<[f32; 3]>> {
    validate_triangle_asa(angle_a, side, angle_c)?;

    let (sin_a, cos_a) = angle_a.sin_cos();
    let angle_b = PI - angle_a - angle_c;
    let base = side * angle_b.sin() / angle_c.sin();
    Ok(centered_triangle(base, Vec2::new(side * cos_a, side * sin_a)))
}

/// Axis-aligned rectangle centered on the origin.
///
/// Corners are emitted bottom-left, bottom-right, top-right, top-left.
pub fn rectangle(length: f32, width: f32) -> GeometryResult<Vec<[f32; 3]>> {
    require_positive("length", length)?;
    require_positive("width", width)?;

    let (x, y) = (length / 2.0, width / 2.0);
    Ok(vec![[-x, -y, 0.0], [x, -y, 0.0], [x, y, 0.0], [-x, y, 0.0]])
}

/// `sides` points on a circle at height `z`, starting at `(0, radius)` and
/// turning counter-clockwise. Each angle is computed directly from its index.
fn ring(sides: usize, radius: f32, z: f32) -> Vec<[f32; 3]> {
    let step = TAU / sides as f32;
    (0..sides)
        .map(|i| {
            let (sin, cos) = (i as f32 * step).sin_cos();
            [-radius * sin, radius * cos, z]
        })
        .collect()
}

/// Regular polygon with the given circumradius.
///
/// Vertex 0 is `(0, radius, 0)`; each following vertex is the previous one
/// rotated counter-clockwise by the exterior angle `2π / sides`.
pub fn regular_polygon(sides: usize, radius: f32) -> GeometryResult<Vec<[f32; 3]>> {
    require_sides("sides", sides)?;
    require_positive("radius", radius)?;

    Ok(ring(sides, radius, 0.0))
}

/// Box with four private corners per face (24 vertices).
///
/// Faces are emitted in pairs along z, y and x: back, front, top, bottom,
/// right, left. Each face is a rectangle whose missing coordinate is moved to
/// the box extent, so every face can carry its own normals and texcoords.
pub fn rectangular_prism(length: f32, width: f32, height: f32) -> GeometryResult<Vec<[f32; 3]>> {
    let z_face = rectangle(length, width)?;
    let y_face = rectangle(length, height)?;
    let x_face = rectangle(height, width)?;
    let (hl, hw, hh) = (length / 2.0, width / 2.0, height / 2.0);

    let mut vertices = Vec::with_capacity(PRISM_FULL_VERTEX_COUNT);
    for z in [-hh, hh] {
        vertices.extend(z_face.iter().map(|&[x, y, _]| [x, y, z]));
    }
    for y in [hw, -hw] {
        vertices.extend(y_face.iter().map(|&[x, z, _]| [x, y, z]));
    }
    for x in [hl, -hl] {
        vertices.extend(x_face.iter().map(|&[z, y, _]| [x, y, z]));
    }
    Ok(vertices)
}

/// Box with eight shared corners.
///
/// Vertices 0-3 are the back rectangle (`z = -height/2`), 4-7 the front one,
/// both in rectangle corner order. Compact, but a corner shared by three
/// faces cannot carry a per-face normal or texcoord.
pub fn rectangular_prism_limited(
    length: f32,
    width: f32,
    height: f32,
) -> GeometryResult<Vec<[f32; 3]>> {
    require_positive("height", height)?;
    let face = rectangle(length, width)?;
    let hh = height / 2.0;

    let mut vertices = Vec::with_capacity(PRISM_LIMITED_VERTEX_COUNT);
    for z in [-hh, hh] {
        vertices.extend(face.iter().map(|&[x, y, _]| [x, y, z]));
    }
    Ok(vertices)
}

/// UV sphere: north pole, `layers` latitude rings, south pole.
///
/// Ring `i` (1-based) has radius `r·sin(π·i/(layers+1))` and sits at height
/// `r·cos(π·i/(layers+1))`. With `layers == 0` only the two poles remain.
pub fn sphere(
    radius: f32,
    layers: usize,
    points_per_layer: usize,
) -> GeometryResult<Vec<[f32; 3]>> {
    require_positive("radius", radius)?;
    require_sides("points per layer", points_per_layer)?;

    let mut vertices = Vec::with_capacity(layers * points_per_layer + 2);
    vertices.push([0.0, 0.0, radius]);
    for i in 1..=layers {
        let polar = PI * i as f32 / (layers + 1) as f32;
        let (sin, cos) = polar.sin_cos();
        vertices.extend(ring(points_per_layer, radius * sin, radius * cos));
    }
    vertices.push([0.0, 0.0, -radius]);
    Ok(vertices)
}

pub(crate) fn validate_extrusion(radius: f32, height: f32, segments: usize) -> GeometryResult<()> {
    require_positive("radius", radius)?;
    require_positive("height", height)?;
    require_sides("segments", segments)
}

/// Cone: base ring at `z = -height/2`, then the apex at `(0, 0, height/2)`.
pub fn cone(radius: f32, height: f32, segments: usize) -> GeometryResult<Vec<[f32; 3]>> {
    validate_extrusion(radius, height, segments)?;

    let mut vertices = ring(segments, radius, -height / 2.0);
    vertices.push([0.0, 0.0, height / 2.0]);
    Ok(vertices)
}

/// Double cone: equator ring at `z = 0`, then the top and bottom apexes.
pub fn bicone(radius: f32, height: f32, segments: usize) -> GeometryResult<Vec<[f32; 3]>> {
    validate_extrusion(radius, height, segments)?;

    let mut vertices = ring(segments, radius, 0.0);
    vertices.push([0.0, 0.0, height / 2.0]);
    vertices.push([0.0, 0.0, -height / 2.0]);
    Ok(vertices)
}

/// Right prism over a regular polygon: bottom ring, then the top ring.
pub fn prism(radius: f32, height: f32, segments: usize) -> GeometryResult<Vec<[f32; 3]>> {
    validate_extrusion(radius, height, segments)?;

    let mut vertices = ring(segments, radius, -height / 2.0);
    vertices.extend(ring(segments, radius, height / 2.0));
    Ok(vertices)
}
