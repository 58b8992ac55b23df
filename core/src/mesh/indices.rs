//! Triangulation and wireframe index generators.
//!
//! All triangles are wound counter-clockwise when seen from outside the
//! solid (or from `+z` for planar shapes), which is what back-face culling
//! expects. Index values refer to the vertex order of the matching generator
//! in [`primitives`](super::primitives).

/// Corner order of a face whose rectangle already faces outward.
const FACE_PATTERN: [u32; 6] = [0, 1, 2, 0, 2, 3];

/// Same corners with the last two of each triangle swapped.
const FACE_PATTERN_SWAPPED: [u32; 6] = [0, 2, 1, 0, 3, 2];

/// Corners of the limited prism's back (and, offset by 4, front) rectangle.
const PRISM_RING: u32 = 4;

/// Fan triangulation of a convex polygon around vertex 0.
///
/// Triangle `k` is `(0, k + 1, k + 2)`, giving `3 * (n - 2)` indices.
pub fn fan_triangulation(vertex_count: usize) -> Vec<u32> {
    let n = vertex_count as u32;
    (1..n.saturating_sub(1))
        .flat_map(|k| [0, k, k + 1])
        .collect()
}

/// Reverse-wound fan around `first`, used for caps that face `-z`.
fn reversed_fan(first: u32, count: u32) -> impl Iterator<Item = u32> {
    (1..count.saturating_sub(1)).flat_map(move |k| [first, first + k + 1, first + k])
}

/// One line segment per consecutive vertex pair, closing the loop.
///
/// `n` vertices give `n` pairs; the last pair is `(n - 1, 0)`.
pub fn wireframe_loop(vertex_count: usize) -> Vec<u32> {
    let n = vertex_count as u32;
    (0..n).flat_map(|k| [k, (k + 1) % n]).collect()
}

/// 36 indices for the 24-vertex prism.
///
/// Faces come in pairs along z, y and x (back/front, top/bottom,
/// right/left). The first face of each pair is generated facing inward, so
/// its two triangles have their last corners swapped.
pub fn prism_full_triangulation() -> Vec<u32> {
    (0..6u32)
        .flat_map(|face| {
            let pattern = if face % 2 == 0 {
                FACE_PATTERN_SWAPPED
            } else {
                FACE_PATTERN
            };
            pattern.map(|corner| face * 4 + corner)
        })
        .collect()
}

/// 36 indices for the 8-vertex prism.
///
/// The back cap (vertices 0-3) is reverse wound, the front cap (4-7) is not,
/// and each side quad joins corner `k` and its successor on both caps.
/// Cap-plus-quad order rather than a per-vertex parity mapping; every
/// triangle still faces outward.
pub fn prism_limited_triangulation() -> Vec<u32> {
    let mut indices = Vec::with_capacity(36);
    indices.extend(FACE_PATTERN_SWAPPED);
    indices.extend(FACE_PATTERN.map(|corner| corner + PRISM_RING));
    for k in 0..PRISM_RING {
        let next = (k + 1) % PRISM_RING;
        let (k_front, next_front) = (k + PRISM_RING, next + PRISM_RING);
        indices.extend([k, next, next_front, k, next_front, k_front]);
    }
    indices
}

/// The 12 edges of the 8-vertex prism as 24 line indices.
pub fn prism_limited_wireframe() -> Vec<u32> {
    let mut indices = Vec::with_capacity(24);
    for k in 0..PRISM_RING {
        indices.extend([k, (k + 1) % PRISM_RING]);
    }
    for k in 0..PRISM_RING {
        indices.extend([k, k + PRISM_RING]);
    }
    for k in 0..PRISM_RING {
        indices.extend([k + PRISM_RING, (k + 1) % PRISM_RING + PRISM_RING]);
    }
    indices
}

/// Index bands of a UV sphere: top cap, body quads, bottom cap.
///
/// Ring `j` starts at vertex `1 + j * points_per_layer`. The successor of a
/// ring vertex is taken modulo the ring size so the last vertex of a ring
/// closes back onto the first vertex of the same ring. The result always
/// holds `6 * layers * points_per_layer` indices; `layers == 0` yields none.
pub fn sphere_triangulation(layers: usize, points_per_layer: usize) -> Vec<u32> {
    if layers == 0 || points_per_layer == 0 {
        return Vec::new();
    }

    let n = points_per_layer as u32;
    let rings = layers as u32;
    let north = 0;
    let south = rings * n + 1;
    let ring_start = |ring: u32| 1 + ring * n;

    let mut indices = Vec::with_capacity(6 * layers * points_per_layer);

    let first = ring_start(0);
    for k in 0..n {
        indices.extend([north, first + k, first + (k + 1) % n]);
    }

    for ring in 0..rings - 1 {
        let upper = ring_start(ring);
        let lower = ring_start(ring + 1);
        for k in 0..n {
            let next = (k + 1) % n;
            indices.extend([upper + k, lower + k, lower + next]);
            indices.extend([upper + k, lower + next, upper + next]);
        }
    }

    let last = ring_start(rings - 1);
    for k in 0..n {
        indices.extend([last + k, south, last + (k + 1) % n]);
    }

    indices
}

/// Cone over `segments` ring vertices with the apex at index `segments`.
pub fn cone_triangulation(segments: usize) -> Vec<u32> {
    let n = segments as u32;
    let apex = n;
    reversed_fan(0, n)
        .chain((0..n).flat_map(|k| [k, (k + 1) % n, apex]))
        .collect()
}

/// Double cone: equator ring, then the top apex and the bottom apex.
pub fn bicone_triangulation(segments: usize) -> Vec<u32> {
    let n = segments as u32;
    let (top, bottom) = (n, n + 1);
    (0..n)
        .flat_map(|k| {
            let next = (k + 1) % n;
            [k, next, top, k, bottom, next]
        })
        .collect()
}

/// Prism over a regular polygon: bottom ring `0..n`, top ring `n..2n`.
pub fn prism_extrusion_triangulation(segments: usize) -> Vec<u32> {
    let n = segments as u32;
    let top_cap = (1..n.saturating_sub(1)).flat_map(move |k| [n, n + k, n + k + 1]);
    let sides = (0..n).flat_map(move |k| {
        let next = (k + 1) % n;
        [k, next, next + n, k, next + n, k + n]
    });
    reversed_fan(0, n).chain(top_cap).chain(sides).collect()
}
