//! Shapes on the GPU.
//!
//! - [`ShapeDescriptor`] - one generated mesh plus the buffers it owns
//!
//! The CPU-side types from `shapeforge-core` are re-exported for
//! convenience.

mod descriptor;

pub use descriptor::ShapeDescriptor;
pub use shapeforge_core::mesh::{
    AttributeFlags, Decomposition, RectangularPrismLayout, Shape, ShapeGeometry, ShapeOptions,
    TriangleSpec, VertexAttribute, VertexAttributeFormat, VertexAttributeSemantic, VertexLayout,
    VertexStepMode,
};
