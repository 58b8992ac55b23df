//! Buffer layout packing.
//!
//! A shape's arrays are concatenated into one byte buffer in the fixed order
//! position → color → texcoord → normal. Absent attributes are skipped, so
//! offsets depend only on which arrays are present and on the vertex count.

use super::{ShapeGeometry, VertexAttribute, VertexLayout};
use crate::math::{mat4_to_cols_array_2d, Mat4};
use crate::profile_scope;

/// Number of `Float4` columns in one instance transform.
pub const INSTANCE_COLUMNS: u8 = 4;

/// Byte size of one per-instance 4x4 transform.
pub const INSTANCE_STRIDE: u64 = std::mem::size_of::<[[f32; 4]; 4]>() as u64;

/// A shape's vertex data ready for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct PackedVertexData {
    /// Raw buffer contents (native-endian `f32`).
    pub bytes: Vec<u8>,
    /// Where each attribute block starts and how far apart its elements are.
    pub layout: VertexLayout,
}

impl PackedVertexData {
    /// Buffer size in bytes.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

fn append_block(bytes: &mut Vec<u8>, data: &[f32]) -> u64 {
    let offset = bytes.len() as u64;
    bytes.extend_from_slice(bytemuck::cast_slice(data));
    offset
}

/// Concatenate the present arrays of `geometry` and describe their blocks.
pub fn pack_vertex_data(geometry: &ShapeGeometry) -> PackedVertexData {
    profile_scope!("pack_vertex_data");

    let total = geometry.vertices().len()
        + geometry.colors().len()
        + geometry.texcoords().len()
        + geometry.normals().len();
    let mut bytes = Vec::with_capacity(total * std::mem::size_of::<f32>());
    let mut layout = VertexLayout::new().with_label(geometry.label());

    let offset = append_block(&mut bytes, geometry.vertices());
    layout = layout.with_attribute(VertexAttribute::position(offset));

    if !geometry.colors().is_empty() {
        let offset = append_block(&mut bytes, geometry.colors());
        layout = layout.with_attribute(VertexAttribute::color(offset));
    }
    if !geometry.texcoords().is_empty() {
        let offset = append_block(&mut bytes, geometry.texcoords());
        layout = layout.with_attribute(VertexAttribute::texcoord0(offset));
    }
    if !geometry.normals().is_empty() {
        let offset = append_block(&mut bytes, geometry.normals());
        layout = layout.with_attribute(VertexAttribute::normal(offset));
    }

    log::trace!(
        "Packed {} ({} bytes, {} attributes)",
        geometry.label(),
        bytes.len(),
        layout.attributes.len()
    );

    PackedVertexData { bytes, layout }
}

/// Layout of the per-instance transform buffer.
///
/// Four `Float4` columns at shader locations 4-7, offsets 0/16/32/48,
/// sharing a 64-byte stride and advancing once per instance.
pub fn instance_layout() -> VertexLayout {
    (0..INSTANCE_COLUMNS).fold(
        VertexLayout::new()
            .with_instance_step()
            .with_label("instance transforms"),
        |layout, column| layout.with_attribute(VertexAttribute::instance_column(column)),
    )
}

/// Column-major bytes of the given transforms, one 64-byte matrix each.
pub fn pack_instance_transforms(transforms: &[Mat4]) -> Vec<u8> {
    profile_scope!("pack_instance_transforms");

    let columns: Vec<[[f32; 4]; 4]> = transforms.iter().map(mat4_to_cols_array_2d).collect();
    bytemuck::cast_slice(&columns).to_vec()
}
