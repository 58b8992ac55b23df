//! Per-vertex attribute synthesizers.
//!
//! Every function returns exactly one element per vertex and depends only
//! on the vertex count or the positions it is given, so repeated calls yield
//! identical arrays.

use crate::math::Vec3;

/// Outward normal of each face of the 24-vertex prism, in face order
/// (back, front, top, bottom, right, left).
const PRISM_FACE_NORMALS: [[f32; 3]; 6] = [
    [0.0, 0.0, -1.0],
    [0.0, 0.0, 1.0],
    [0.0, 1.0, 0.0],
    [0.0, -1.0, 0.0],
    [1.0, 0.0, 0.0],
    [-1.0, 0.0, 0.0],
];

/// Texcoords given to the four corners of every prism face.
const FACE_TEXCOORDS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

const PRISM_FACE_CORNERS: usize = 4;

/// Placeholder rainbow gradient over the vertex order.
///
/// With `t` running from 0 at the first vertex to 1 at the last, red is
/// `1 - t`, blue is `t` and green is a triangle wave `1 - |2t - 1|` that
/// peaks at the middle of the sequence. For an odd count the peak lands on
/// the middle vertex; for an even count the two middle vertices share it.
pub fn rainbow_colors(vertex_count: usize) -> Vec<[f32; 3]> {
    let last = vertex_count.saturating_sub(1).max(1) as f32;
    (0..vertex_count)
        .map(|k| {
            let t = k as f32 / last;
            [1.0 - t, 1.0 - (2.0 * t - 1.0).abs(), t]
        })
        .collect()
}

/// Planar projection into UV space: `(x + 0.5, y + 0.5)`.
///
/// Only covers `[0, 1]` when the shape spans `[-0.5, 0.5]` in x and y.
pub fn planar_texcoords(positions: &[[f32; 3]]) -> Vec<[f32; 2]> {
    positions.iter().map(|&[x, y, _]| [x + 0.5, y + 0.5]).collect()
}

/// The `(0,0) (1,0) (1,1) (0,1)` cycle repeated for all six prism faces.
pub fn prism_face_texcoords() -> Vec<[f32; 2]> {
    FACE_TEXCOORDS
        .iter()
        .cycle()
        .take(PRISM_FACE_NORMALS.len() * PRISM_FACE_CORNERS)
        .copied()
        .collect()
}

/// Constant `+z` normal for shapes in the XY plane.
pub fn planar_normals(vertex_count: usize) -> Vec<[f32; 3]> {
    vec![[0.0, 0.0, 1.0]; vertex_count]
}

/// Unit direction from the origin to each vertex.
///
/// Used for the sphere and the extrusions, which are all centered on the
/// origin. A vertex at the origin gets a zero normal.
pub fn radial_normals(positions: &[[f32; 3]]) -> Vec<[f32; 3]> {
    positions
        .iter()
        .map(|&p| {
            Vec3::from(p)
                .try_normalize(f32::EPSILON)
                .unwrap_or_else(Vec3::zeros)
                .into()
        })
        .collect()
}

/// One outward axis-aligned normal per prism face, repeated on its corners.
pub fn prism_face_normals() -> Vec<[f32; 3]> {
    PRISM_FACE_NORMALS
        .iter()
        .flat_map(|&normal| [normal; PRISM_FACE_CORNERS])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_rainbow_odd_peak() {
        let colors = rainbow_colors(5);
        assert_eq!(colors[0], [1.0, 0.0, 0.0]);
        assert_eq!(colors[2], [0.5, 1.0, 0.5]);
        assert_eq!(colors[4], [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_rainbow_even_shares_peak() {
        let colors = rainbow_colors(4);
        assert_abs_diff_eq!(colors[1][1], 2.0 / 3.0, epsilon = 1e-6);
        assert_abs_diff_eq!(colors[2][1], 2.0 / 3.0, epsilon = 1e-6);
        assert_eq!(colors[3], [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_rainbow_edge_counts() {
        assert!(rainbow_colors(0).is_empty());
        assert_eq!(rainbow_colors(1), vec![[1.0, 0.0, 0.0]]);
    }

    #[test]
    fn test_rainbow_is_deterministic() {
        assert_eq!(rainbow_colors(37), rainbow_colors(37));
    }

    #[test]
    fn test_planar_texcoords() {
        let uv = planar_texcoords(&[[-0.5, -0.5, 0.0], [0.25, 0.5, 0.0]]);
        assert_eq!(uv, vec![[0.0, 0.0], [0.75, 1.0]]);
    }

    #[test]
    fn test_prism_tables() {
        let uv = prism_face_texcoords();
        assert_eq!(uv.len(), 24);
        assert_eq!(uv[4], [0.0, 0.0]);
        assert_eq!(uv[23], [0.0, 1.0]);

        let normals = prism_face_normals();
        assert_eq!(normals.len(), 24);
        assert_eq!(normals[3], [0.0, 0.0, -1.0]);
        assert_eq!(normals[8], [0.0, 1.0, 0.0]);
        assert_eq!(normals[20], [-1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_radial_normals_are_unit() {
        let normals = radial_normals(&[[0.0, 0.0, 3.0], [1.0, 1.0, 0.0], [0.0; 3]]);
        assert_eq!(normals[0], [0.0, 0.0, 1.0]);
        assert_abs_diff_eq!(Vec3::from(normals[1]).norm(), 1.0, epsilon = 1e-6);
        assert_eq!(normals[2], [0.0; 3]);
    }
}
