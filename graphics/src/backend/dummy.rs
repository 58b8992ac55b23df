//! Dummy GPU backend for testing and development.
//!
//! This backend doesn't talk to a GPU. It keeps every buffer's bytes and
//! bound layout in memory, checks handles and ranges the way a real driver
//! would, and records each draw request so tests can inspect what a shape
//! asked for.

use std::collections::HashMap;

use parking_lot::Mutex;
use shapeforge_core::mesh::{VertexLayout, VertexStepMode};

use crate::error::GraphicsError;
use crate::types::{BufferDescriptor, BufferHandle, BufferUsage, DrawRequest};

use super::GpuBufferOwner;

#[derive(Debug)]
struct DummyBuffer {
    descriptor: BufferDescriptor,
    data: Vec<u8>,
    layout: Option<VertexLayout>,
}

#[derive(Debug, Default)]
struct DummyState {
    next_id: u64,
    buffers: HashMap<u64, DummyBuffer>,
    draws: Vec<DrawRequest>,
    calls: usize,
}

impl DummyState {
    fn buffer(&self, handle: BufferHandle) -> Result<&DummyBuffer, GraphicsError> {
        self.buffers
            .get(&handle.id())
            .ok_or(GraphicsError::UnknownBuffer(handle.id()))
    }

    fn buffer_mut(&mut self, handle: BufferHandle) -> Result<&mut DummyBuffer, GraphicsError> {
        self.buffers
            .get_mut(&handle.id())
            .ok_or(GraphicsError::UnknownBuffer(handle.id()))
    }
}

/// Dummy GPU backend.
#[derive(Debug, Default)]
pub struct DummyBackend {
    state: Mutex<DummyState>,
    max_buffer_size: Option<u64>,
}

impl DummyBackend {
    /// Create a new dummy backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse to create buffers larger than `size` bytes.
    pub fn with_max_buffer_size(mut self, size: u64) -> Self {
        self.max_buffer_size = Some(size);
        self
    }

    /// Contents of a live buffer.
    pub fn buffer_data(&self, buffer: BufferHandle) -> Option<Vec<u8>> {
        let state = self.state.lock();
        state.buffer(buffer).ok().map(|b| b.data.clone())
    }

    /// Descriptor a live buffer was created with.
    pub fn buffer_descriptor(&self, buffer: BufferHandle) -> Option<BufferDescriptor> {
        let state = self.state.lock();
        state.buffer(buffer).ok().map(|b| b.descriptor.clone())
    }

    /// Layout bound to a live buffer, if any.
    pub fn bound_layout(&self, buffer: BufferHandle) -> Option<VertexLayout> {
        let state = self.state.lock();
        state.buffer(buffer).ok().and_then(|b| b.layout.clone())
    }

    /// Number of buffers created and not yet destroyed.
    pub fn live_buffer_count(&self) -> usize {
        self.state.lock().buffers.len()
    }

    /// Every draw request received so far, in order.
    pub fn draws(&self) -> Vec<DrawRequest> {
        self.state.lock().draws.clone()
    }

    /// Total number of trait calls received, including failed ones.
    pub fn call_count(&self) -> usize {
        self.state.lock().calls
    }
}

impl GpuBufferOwner for DummyBackend {
    fn name(&self) -> &'static str {
        "Dummy Backend"
    }

    fn create_buffer(&self, descriptor: &BufferDescriptor) -> Result<BufferHandle, GraphicsError> {
        let mut state = self.state.lock();
        state.calls += 1;
        log::trace!(
            "DummyBackend: creating buffer {:?} (size: {}, usage: {:?})",
            descriptor.label,
            descriptor.size,
            descriptor.usage
        );

        if descriptor.usage.is_empty() {
            return Err(GraphicsError::InvalidParameter(format!(
                "buffer {:?} has no usage",
                descriptor.label
            )));
        }
        if let Some(max) = self.max_buffer_size {
            if descriptor.size > max {
                return Err(GraphicsError::ResourceCreationFailed(format!(
                    "buffer {:?} of {} bytes exceeds the {} byte limit",
                    descriptor.label, descriptor.size, max
                )));
            }
        }

        state.next_id += 1;
        let id = state.next_id;
        state.buffers.insert(
            id,
            DummyBuffer {
                descriptor: descriptor.clone(),
                data: vec![0; descriptor.size as usize],
                layout: None,
            },
        );
        Ok(BufferHandle::from_raw(id))
    }

    fn write_buffer(
        &self,
        buffer: BufferHandle,
        offset: u64,
        data: &[u8],
    ) -> Result<(), GraphicsError> {
        let mut state = self.state.lock();
        state.calls += 1;
        log::trace!(
            "DummyBackend: writing {} bytes to buffer {} at offset {}",
            data.len(),
            buffer,
            offset
        );

        let target = state.buffer_mut(buffer)?;
        if !target.descriptor.usage.contains(BufferUsage::COPY_DST) {
            return Err(GraphicsError::InvalidParameter(format!(
                "buffer {} was not created with COPY_DST",
                buffer
            )));
        }
        let capacity = target.data.len() as u64;
        let len = data.len() as u64;
        if offset.checked_add(len).map_or(true, |end| end > capacity) {
            return Err(GraphicsError::OutOfBounds {
                buffer: buffer.id(),
                offset,
                len,
                capacity,
            });
        }
        let start = offset as usize;
        target.data[start..start + data.len()].copy_from_slice(data);
        Ok(())
    }

    fn bind_vertex_layout(
        &self,
        buffer: BufferHandle,
        layout: &VertexLayout,
    ) -> Result<(), GraphicsError> {
        let mut state = self.state.lock();
        state.calls += 1;
        log::trace!(
            "DummyBackend: binding {:?} ({} attributes, {:?}) to buffer {}",
            layout.label,
            layout.attributes.len(),
            layout.step_mode,
            buffer
        );

        layout.validate().map_err(GraphicsError::InvalidParameter)?;
        let target = state.buffer_mut(buffer)?;
        let required = match layout.step_mode {
            VertexStepMode::Vertex => BufferUsage::VERTEX,
            VertexStepMode::Instance => BufferUsage::INSTANCE,
        };
        if !target.descriptor.usage.contains(required) {
            return Err(GraphicsError::InvalidParameter(format!(
                "buffer {} lacks {:?} usage for a {:?} layout",
                buffer, required, layout.step_mode
            )));
        }
        target.layout = Some(layout.clone());
        Ok(())
    }

    fn destroy_buffer(&self, buffer: BufferHandle) -> Result<(), GraphicsError> {
        let mut state = self.state.lock();
        state.calls += 1;
        log::trace!("DummyBackend: destroying buffer {}", buffer);

        state
            .buffers
            .remove(&buffer.id())
            .map(|_| ())
            .ok_or(GraphicsError::UnknownBuffer(buffer.id()))
    }

    fn draw(&self, request: &DrawRequest) -> Result<(), GraphicsError> {
        let mut state = self.state.lock();
        state.calls += 1;
        log::trace!(
            "DummyBackend: draw {} indices as {:?} x{} instances",
            request.index_count,
            request.decomposition,
            request.instance_count
        );

        if state.buffer(request.vertex_buffer)?.layout.is_none() {
            return Err(GraphicsError::InvalidParameter(format!(
                "vertex buffer {} has no bound layout",
                request.vertex_buffer
            )));
        }

        let indices = state.buffer(request.index_buffer)?;
        let len = request.index_count as u64 * std::mem::size_of::<u32>() as u64;
        let capacity = indices.data.len() as u64;
        if len > capacity {
            return Err(GraphicsError::OutOfBounds {
                buffer: request.index_buffer.id(),
                offset: 0,
                len,
                capacity,
            });
        }

        if let Some(instances) = request.instance_buffer {
            let bound = state.buffer(instances)?.layout.as_ref();
            if bound.map(|l| l.step_mode) != Some(VertexStepMode::Instance) {
                return Err(GraphicsError::InvalidParameter(format!(
                    "instance buffer {} has no per-instance layout",
                    instances
                )));
            }
        }

        state.draws.push(*request);
        Ok(())
    }
}

// Ensure DummyBackend is Send + Sync
static_assertions::assert_impl_all!(DummyBackend: Send, Sync);
