//! GPU buffer owner abstraction.
//!
//! Shapes never talk to a graphics API directly. They hand finished bytes
//! and layouts to a [`GpuBufferOwner`], which allocates the buffers, binds
//! the attribute streams and turns [`DrawRequest`]s into API calls.
//!
//! # Available Backends
//!
//! - [`DummyBackend`]: in-memory owner for tests and headless use

pub mod dummy;

use shapeforge_core::mesh::VertexLayout;

use crate::error::GraphicsError;
use crate::types::{BufferDescriptor, BufferHandle, DrawRequest};

pub use dummy::DummyBackend;

/// The capability a shape needs to get its data onto the GPU.
///
/// All methods take `&self`; implementations synchronise internally so one
/// owner can be shared between shapes (and threads) through an `Arc`.
pub trait GpuBufferOwner: Send + Sync {
    /// Human-readable backend name.
    fn name(&self) -> &'static str;

    /// Allocate a buffer.
    fn create_buffer(&self, descriptor: &BufferDescriptor) -> Result<BufferHandle, GraphicsError>;

    /// Copy `data` into the buffer starting at `offset` bytes.
    fn write_buffer(
        &self,
        buffer: BufferHandle,
        offset: u64,
        data: &[u8],
    ) -> Result<(), GraphicsError>;

    /// Describe how the attribute streams are read from the buffer.
    fn bind_vertex_layout(
        &self,
        buffer: BufferHandle,
        layout: &VertexLayout,
    ) -> Result<(), GraphicsError>;

    /// Release a buffer. The handle is invalid afterwards.
    fn destroy_buffer(&self, buffer: BufferHandle) -> Result<(), GraphicsError>;

    /// Issue an indexed draw.
    fn draw(&self, request: &DrawRequest) -> Result<(), GraphicsError>;
}
