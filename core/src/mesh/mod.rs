//! CPU-side shape generation.
//!
//! - [`primitives`] - vertex generators
//! - [`indices`] - triangulation and wireframe index generators
//! - [`attributes`] - color, texcoord and normal synthesis
//! - [`packer`] - single-buffer packing and the instance transform layout
//! - [`Shape`] - the closed shape set running the steps above in order
//! - [`ShapeGeometry`] - the resulting CPU mesh
//!
//! These types are re-exported by `shapeforge-graphics` for convenience.

pub mod attributes;
mod data;
pub mod indices;
mod layout;
pub mod packer;
pub mod primitives;
mod shape;

pub use data::{validate_indices, Decomposition, ShapeGeometry};
pub use layout::{
    VertexAttribute, VertexAttributeFormat, VertexAttributeSemantic, VertexLayout, VertexStepMode,
};
pub use packer::{
    instance_layout, pack_instance_transforms, pack_vertex_data, PackedVertexData,
    INSTANCE_STRIDE,
};
pub use shape::{AttributeFlags, RectangularPrismLayout, Shape, ShapeOptions, TriangleSpec};
