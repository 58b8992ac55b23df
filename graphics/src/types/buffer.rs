//! Buffer types, descriptors and draw requests.

use bitflags::bitflags;
use shapeforge_core::mesh::Decomposition;

bitflags! {
    /// Usage flags for buffers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BufferUsage: u32 {
        /// Per-vertex attribute data.
        const VERTEX = 1 << 0;
        /// Index data.
        const INDEX = 1 << 1;
        /// Per-instance attribute data.
        const INSTANCE = 1 << 2;
        /// Buffer can be written from the CPU.
        const COPY_DST = 1 << 3;
    }
}

impl Default for BufferUsage {
    fn default() -> Self {
        Self::empty()
    }
}

/// Descriptor for creating a buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BufferDescriptor {
    /// Debug label for the buffer.
    pub label: Option<String>,
    /// Size in bytes.
    pub size: u64,
    /// Usage flags.
    pub usage: BufferUsage,
}

impl BufferDescriptor {
    /// Create a new buffer descriptor.
    pub fn new(size: u64, usage: BufferUsage) -> Self {
        Self {
            label: None,
            size,
            usage,
        }
    }

    /// Set the debug label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Opaque id of a buffer allocated by a [`GpuBufferOwner`](crate::backend::GpuBufferOwner).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferHandle(u64);

impl BufferHandle {
    /// Wrap a raw id.
    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// The raw id.
    pub fn id(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for BufferHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Everything a buffer owner needs to issue one indexed draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawRequest {
    /// Buffer holding the packed vertex attributes.
    pub vertex_buffer: BufferHandle,
    /// Buffer holding `u32` indices.
    pub index_buffer: BufferHandle,
    /// Per-instance transforms, for instanced draws only.
    pub instance_buffer: Option<BufferHandle>,
    /// Triangles or lines.
    pub decomposition: Decomposition,
    /// Number of indices to draw.
    pub index_count: u32,
    /// Number of instances; 1 for a plain draw.
    pub instance_count: u32,
}

impl DrawRequest {
    /// Whether this request reads a per-instance buffer.
    pub fn is_instanced(&self) -> bool {
        self.instance_buffer.is_some()
    }
}
