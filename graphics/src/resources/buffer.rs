//! Owned GPU buffer resource.

use std::sync::Arc;

use shapeforge_core::mesh::VertexLayout;

use crate::backend::GpuBufferOwner;
use crate::error::GraphicsError;
use crate::types::{BufferDescriptor, BufferHandle};

/// A buffer allocated by a [`GpuBufferOwner`] and released when dropped.
///
/// Each `OwnedBuffer` holds the only copy of its handle, so the buffer is
/// destroyed exactly once on every exit path, including early returns
/// during a failed shape upload.
///
/// # Example
///
/// ```ignore
/// let buffer = OwnedBuffer::new(owner, BufferDescriptor::new(64, BufferUsage::INSTANCE))?;
/// buffer.write(0, &bytes)?;
/// ```
pub struct OwnedBuffer {
    owner: Arc<dyn GpuBufferOwner>,
    handle: BufferHandle,
    descriptor: BufferDescriptor,
}

impl OwnedBuffer {
    /// Allocate a buffer through `owner`.
    pub fn new(
        owner: Arc<dyn GpuBufferOwner>,
        descriptor: BufferDescriptor,
    ) -> Result<Self, GraphicsError> {
        let handle = owner.create_buffer(&descriptor)?;
        Ok(Self {
            owner,
            handle,
            descriptor,
        })
    }

    /// Allocate a buffer sized for `data` and upload it.
    pub fn with_data(
        owner: Arc<dyn GpuBufferOwner>,
        descriptor: BufferDescriptor,
        data: &[u8],
    ) -> Result<Self, GraphicsError> {
        let buffer = Self::new(
            owner,
            BufferDescriptor {
                size: data.len() as u64,
                ..descriptor
            },
        )?;
        buffer.write(0, data)?;
        Ok(buffer)
    }

    /// Copy `data` into the buffer at `offset`. Empty writes are skipped.
    pub fn write(&self, offset: u64, data: &[u8]) -> Result<(), GraphicsError> {
        if data.is_empty() {
            return Ok(());
        }
        self.owner.write_buffer(self.handle, offset, data)
    }

    /// Bind the attribute layout the buffer is read with.
    pub fn bind(&self, layout: &VertexLayout) -> Result<(), GraphicsError> {
        self.owner.bind_vertex_layout(self.handle, layout)
    }

    /// Get the handle.
    pub fn handle(&self) -> BufferHandle {
        self.handle
    }

    /// Get the buffer descriptor.
    pub fn descriptor(&self) -> &BufferDescriptor {
        &self.descriptor
    }

    /// Get the buffer size in bytes.
    pub fn size(&self) -> u64 {
        self.descriptor.size
    }

    /// Get the buffer label, if set.
    pub fn label(&self) -> Option<&str> {
        self.descriptor.label.as_deref()
    }
}

impl Drop for OwnedBuffer {
    fn drop(&mut self) {
        if let Err(err) = self.owner.destroy_buffer(self.handle) {
            log::warn!("Failed to destroy buffer {:?}: {}", self.label(), err);
        }
    }
}

impl std::fmt::Debug for OwnedBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OwnedBuffer")
            .field("handle", &self.handle)
            .field("size", &self.descriptor.size)
            .field("usage", &self.descriptor.usage)
            .field("label", &self.descriptor.label)
            .finish()
    }
}

// Ensure OwnedBuffer is Send + Sync
static_assertions::assert_impl_all!(OwnedBuffer: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::DummyBackend;
    use crate::types::BufferUsage;

    #[test]
    fn test_drop_destroys() {
        let backend = Arc::new(DummyBackend::new());
        {
            let buffer = OwnedBuffer::with_data(
                backend.clone(),
                BufferDescriptor::new(0, BufferUsage::VERTEX | BufferUsage::COPY_DST),
                &[1, 2, 3, 4],
            )
            .unwrap();
            assert_eq!(buffer.size(), 4);
            assert_eq!(backend.buffer_data(buffer.handle()).unwrap(), vec![1, 2, 3, 4]);
            assert_eq!(backend.live_buffer_count(), 1);
        }
        assert_eq!(backend.live_buffer_count(), 0);
    }

    #[test]
    fn test_failed_upload_releases() {
        let backend = Arc::new(DummyBackend::new());
        // no COPY_DST, so the write after creation fails
        let result = OwnedBuffer::with_data(
            backend.clone(),
            BufferDescriptor::new(0, BufferUsage::INDEX),
            &[0; 4],
        );
        assert!(result.is_err());
        assert_eq!(backend.live_buffer_count(), 0);
    }

    #[test]
    fn test_buffer_debug() {
        let backend = Arc::new(DummyBackend::new());
        let buffer = OwnedBuffer::new(
            backend,
            BufferDescriptor::new(1024, BufferUsage::INDEX).with_label("indices"),
        )
        .unwrap();
        let debug = format!("{:?}", buffer);
        assert!(debug.contains("OwnedBuffer"));
        assert!(debug.contains("1024"));
        assert_eq!(buffer.label(), Some("indices"));
    }
}
