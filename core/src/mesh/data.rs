//! CPU-side mesh data structures.
//!
//! This module provides:
//! - [`Decomposition`] - Whether the index buffer encodes triangles or lines
//! - [`ShapeGeometry`] - One generated mesh: positions, indices and attributes
//! - [`validate_indices`] - The index range check every generator output passes

/// How the index buffer of a mesh is assembled into primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Decomposition {
    /// Every three indices form a triangle.
    #[default]
    Triangles,
    /// Every two indices form a line segment.
    Lines,
}

impl Decomposition {
    /// Number of indices per primitive.
    pub fn indices_per_primitive(&self) -> usize {
        match self {
            Self::Triangles => 3,
            Self::Lines => 2,
        }
    }
}

/// Panic if any index does not reference one of `vertex_count` vertices.
///
/// An out-of-range index can only come from a broken generator. Uploading it
/// would corrupt the draw silently, so this fails loudly instead of
/// returning an error.
pub fn validate_indices(indices: &[u32], vertex_count: usize) {
    for (position, &index) in indices.iter().enumerate() {
        assert!(
            (index as usize) < vertex_count,
            "index {} at position {} is out of range for {} vertices",
            index,
            position,
            vertex_count
        );
    }
}

/// A generated mesh held on the CPU.
///
/// Positions are stored as `[f32; 3]` so the vertex array is always a whole
/// number of triples. Attribute arrays are either empty (attribute unused)
/// or hold exactly one element per vertex; both rules, and the index range,
/// are enforced when the arrays are attached.
///
/// Instances are produced by [`Shape::build`](super::Shape::build) and are
/// not modified afterwards.
#[derive(Clone, PartialEq)]
pub struct ShapeGeometry {
    label: &'static str,
    decomposition: Decomposition,
    positions: Vec<[f32; 3]>,
    indices: Vec<u32>,
    colors: Vec<[f32; 3]>,
    texcoords: Vec<[f32; 2]>,
    normals: Vec<[f32; 3]>,
}

impl ShapeGeometry {
    /// Create a mesh from positions and indices with no attributes.
    ///
    /// # Panics
    ///
    /// Panics if the index count is not a multiple of the decomposition's
    /// primitive size or if any index is out of range.
    pub fn new(
        label: &'static str,
        decomposition: Decomposition,
        positions: Vec<[f32; 3]>,
        indices: Vec<u32>,
    ) -> Self {
        assert_eq!(
            indices.len() % decomposition.indices_per_primitive(),
            0,
            "{} produced {} indices, not a whole number of {:?} primitives",
            label,
            indices.len(),
            decomposition
        );
        validate_indices(&indices, positions.len());

        Self {
            label,
            decomposition,
            positions,
            indices,
            colors: Vec::new(),
            texcoords: Vec::new(),
            normals: Vec::new(),
        }
    }

    /// Attach per-vertex colors (empty to leave unused).
    pub fn with_colors(mut self, colors: Vec<[f32; 3]>) -> Self {
        self.check_attribute_len("colors", colors.len());
        self.colors = colors;
        self
    }

    /// Attach per-vertex texture coordinates (empty to leave unused).
    pub fn with_texcoords(mut self, texcoords: Vec<[f32; 2]>) -> Self {
        self.check_attribute_len("texcoords", texcoords.len());
        self.texcoords = texcoords;
        self
    }

    /// Attach per-vertex normals (empty to leave unused).
    pub fn with_normals(mut self, normals: Vec<[f32; 3]>) -> Self {
        self.check_attribute_len("normals", normals.len());
        self.normals = normals;
        self
    }

    fn check_attribute_len(&self, name: &str, len: usize) {
        assert!(
            len == 0 || len == self.positions.len(),
            "{} {} has {} elements for {} vertices",
            self.label,
            name,
            len,
            self.positions.len()
        );
    }

    /// Get the debug label (the shape name).
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Get the decomposition mode.
    pub fn decomposition(&self) -> Decomposition {
        self.decomposition
    }

    /// Vertex positions as flattened `x, y, z` triples.
    pub fn vertices(&self) -> &[f32] {
        self.positions.as_flattened()
    }

    /// Vertex positions, one `[x, y, z]` per vertex.
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    /// Indices into the vertex array, grouped by the decomposition.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Flattened RGB colors, empty when unused.
    pub fn colors(&self) -> &[f32] {
        self.colors.as_flattened()
    }

    /// Flattened UV coordinates, empty when unused.
    pub fn texcoords(&self) -> &[f32] {
        self.texcoords.as_flattened()
    }

    /// Flattened normals, empty when unused.
    pub fn normals(&self) -> &[f32] {
        self.normals.as_flattened()
    }

    /// Get the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of indices.
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Get the number of triangles or line segments.
    pub fn primitive_count(&self) -> usize {
        self.indices.len() / self.decomposition.indices_per_primitive()
    }

    /// Iterate over primitives as slices of 2 or 3 indices.
    pub fn primitives(&self) -> std::slice::ChunksExact<'_, u32> {
        self.indices
            .chunks_exact(self.decomposition.indices_per_primitive())
    }
}

impl std::fmt::Debug for ShapeGeometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapeGeometry")
            .field("label", &self.label)
            .field("decomposition", &self.decomposition)
            .field("vertex_count", &self.positions.len())
            .field("index_count", &self.indices.len())
            .field("has_colors", &!self.colors.is_empty())
            .field("has_texcoords", &!self.texcoords.is_empty())
            .field("has_normals", &!self.normals.is_empty())
            .finish()
    }
}
