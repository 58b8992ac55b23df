//! A generated shape uploaded to a GPU buffer owner.

use std::sync::Arc;

use shapeforge_core::math::Mat4;
use shapeforge_core::mesh::{
    instance_layout, pack_instance_transforms, pack_vertex_data, Decomposition,
    RectangularPrismLayout, Shape, ShapeGeometry, ShapeOptions, TriangleSpec, VertexLayout,
    INSTANCE_STRIDE,
};
use shapeforge_core::profile_scope;

use crate::backend::GpuBufferOwner;
use crate::error::GraphicsError;
use crate::resources::OwnedBuffer;
use crate::types::{BufferDescriptor, BufferUsage, DrawRequest};

/// Per-instance transform buffer and how much of it holds data.
#[derive(Debug)]
struct InstanceBuffer {
    buffer: OwnedBuffer,
    capacity: u32,
    count: u32,
}

/// One generated mesh together with the GPU buffers it owns.
///
/// Construction builds the geometry, packs it and uploads it: the vertex
/// buffer holds the attribute blocks described by [`vertex_layout`](Self::vertex_layout),
/// the index buffer holds `u32` indices. Geometry is immutable afterwards;
/// only the optional instance buffer changes, and only through `&mut self`.
///
/// All buffers are released when the descriptor is dropped.
///
/// # Example
///
/// ```ignore
/// let owner: Arc<dyn GpuBufferOwner> = Arc::new(DummyBackend::new());
/// let mut sphere = ShapeDescriptor::sphere(owner, 1.0, 8, 16, ShapeOptions::new())?;
/// sphere.initialize_instancing(100)?;
/// sphere.send_instanced_data(&transforms)?;
/// sphere.draw_instanced(100)?;
/// ```
pub struct ShapeDescriptor {
    owner: Arc<dyn GpuBufferOwner>,
    shape: Shape,
    geometry: ShapeGeometry,
    vertex_layout: VertexLayout,
    vertex_buffer: OwnedBuffer,
    index_buffer: OwnedBuffer,
    instancing: Option<InstanceBuffer>,
}

impl ShapeDescriptor {
    /// Build `shape` and upload it through `owner`.
    ///
    /// Invalid parameters and unsupported decompositions are reported before
    /// the owner is called at all. If an upload step fails, every buffer
    /// created so far is released again.
    pub fn new(
        owner: Arc<dyn GpuBufferOwner>,
        shape: Shape,
        options: ShapeOptions,
    ) -> Result<Self, GraphicsError> {
        profile_scope!("ShapeDescriptor::new");

        let geometry = shape.build(options)?;
        let packed = pack_vertex_data(&geometry);
        let label = shape.name();

        let vertex_buffer = OwnedBuffer::with_data(
            owner.clone(),
            BufferDescriptor::new(packed.size(), BufferUsage::VERTEX | BufferUsage::COPY_DST)
                .with_label(format!("{label} vertices")),
            &packed.bytes,
        )?;
        vertex_buffer.bind(&packed.layout)?;

        let index_buffer = OwnedBuffer::with_data(
            owner.clone(),
            BufferDescriptor::new(0, BufferUsage::INDEX | BufferUsage::COPY_DST)
                .with_label(format!("{label} indices")),
            bytemuck::cast_slice(geometry.indices()),
        )?;

        log::debug!(
            "Uploaded {} to {} ({} vertex bytes, {} indices)",
            label,
            owner.name(),
            packed.size(),
            geometry.index_count()
        );

        Ok(Self {
            owner,
            shape,
            geometry,
            vertex_layout: packed.layout,
            vertex_buffer,
            index_buffer,
            instancing: None,
        })
    }

    /// Triangle solved from `spec`.
    pub fn triangle(
        owner: Arc<dyn GpuBufferOwner>,
        spec: TriangleSpec,
        options: ShapeOptions,
    ) -> Result<Self, GraphicsError> {
        Self::new(owner, Shape::Triangle(spec), options)
    }

    /// Axis-aligned rectangle.
    pub fn rectangle(
        owner: Arc<dyn GpuBufferOwner>,
        length: f32,
        width: f32,
        options: ShapeOptions,
    ) -> Result<Self, GraphicsError> {
        Self::new(owner, Shape::Rectangle { length, width }, options)
    }

    /// Regular polygon with `sides` vertices.
    pub fn regular_polygon(
        owner: Arc<dyn GpuBufferOwner>,
        sides: usize,
        radius: f32,
        options: ShapeOptions,
    ) -> Result<Self, GraphicsError> {
        Self::new(owner, Shape::RegularPolygon { sides, radius }, options)
    }

    /// Box in either vertex layout.
    pub fn rectangular_prism(
        owner: Arc<dyn GpuBufferOwner>,
        length: f32,
        width: f32,
        height: f32,
        layout: RectangularPrismLayout,
        options: ShapeOptions,
    ) -> Result<Self, GraphicsError> {
        let shape = Shape::RectangularPrism {
            length,
            width,
            height,
            layout,
        };
        Self::new(owner, shape, options)
    }

    /// UV sphere.
    pub fn sphere(
        owner: Arc<dyn GpuBufferOwner>,
        radius: f32,
        layers: usize,
        points_per_layer: usize,
        options: ShapeOptions,
    ) -> Result<Self, GraphicsError> {
        let shape = Shape::Sphere {
            radius,
            layers,
            points_per_layer,
        };
        Self::new(owner, shape, options)
    }

    /// Cone with its apex on `+z`.
    pub fn cone(
        owner: Arc<dyn GpuBufferOwner>,
        radius: f32,
        height: f32,
        segments: usize,
        options: ShapeOptions,
    ) -> Result<Self, GraphicsError> {
        let shape = Shape::Cone {
            radius,
            height,
            segments,
        };
        Self::new(owner, shape, options)
    }

    /// Double cone.
    pub fn bicone(
        owner: Arc<dyn GpuBufferOwner>,
        radius: f32,
        height: f32,
        segments: usize,
        options: ShapeOptions,
    ) -> Result<Self, GraphicsError> {
        let shape = Shape::Bicone {
            radius,
            height,
            segments,
        };
        Self::new(owner, shape, options)
    }

    /// Right prism over a regular polygon.
    pub fn prism(
        owner: Arc<dyn GpuBufferOwner>,
        radius: f32,
        height: f32,
        segments: usize,
        options: ShapeOptions,
    ) -> Result<Self, GraphicsError> {
        let shape = Shape::Prism {
            radius,
            height,
            segments,
        };
        Self::new(owner, shape, options)
    }

    /// Get the shape this mesh was built from.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Get the CPU-side geometry.
    pub fn geometry(&self) -> &ShapeGeometry {
        &self.geometry
    }

    /// Flattened vertex positions.
    pub fn vertices(&self) -> &[f32] {
        self.geometry.vertices()
    }

    /// Vertex indices.
    pub fn indices(&self) -> &[u32] {
        self.geometry.indices()
    }

    /// Flattened colors, empty when unused.
    pub fn colors(&self) -> &[f32] {
        self.geometry.colors()
    }

    /// Flattened texcoords, empty when unused.
    pub fn texcoords(&self) -> &[f32] {
        self.geometry.texcoords()
    }

    /// Flattened normals, empty when unused.
    pub fn normals(&self) -> &[f32] {
        self.geometry.normals()
    }

    /// Get the decomposition mode.
    pub fn decomposition(&self) -> Decomposition {
        self.geometry.decomposition()
    }

    /// Layout of the vertex buffer.
    pub fn vertex_layout(&self) -> &VertexLayout {
        &self.vertex_layout
    }

    /// Get the vertex buffer.
    pub fn vertex_buffer(&self) -> &OwnedBuffer {
        &self.vertex_buffer
    }

    /// Get the index buffer.
    pub fn index_buffer(&self) -> &OwnedBuffer {
        &self.index_buffer
    }

    /// Get the instance buffer, if instancing was initialized.
    pub fn instance_buffer(&self) -> Option<&OwnedBuffer> {
        self.instancing.as_ref().map(|i| &i.buffer)
    }

    /// Number of transforms the instance buffer can hold.
    pub fn instance_capacity(&self) -> u32 {
        self.instancing.as_ref().map_or(0, |i| i.capacity)
    }

    /// Number of transforms uploaded by the last [`send_instanced_data`](Self::send_instanced_data).
    pub fn instance_count(&self) -> u32 {
        self.instancing.as_ref().map_or(0, |i| i.count)
    }

    fn create_instance_buffer(&self, capacity: u32) -> Result<OwnedBuffer, GraphicsError> {
        let buffer = OwnedBuffer::new(
            self.owner.clone(),
            BufferDescriptor::new(
                capacity as u64 * INSTANCE_STRIDE,
                BufferUsage::INSTANCE | BufferUsage::COPY_DST,
            )
            .with_label(format!("{} instances", self.shape.name())),
        )?;
        buffer.bind(&instance_layout())?;
        Ok(buffer)
    }

    /// Allocate room for `count` per-instance transforms.
    ///
    /// Replaces (and releases) any previous instance buffer.
    pub fn initialize_instancing(&mut self, count: u32) -> Result<(), GraphicsError> {
        if count == 0 {
            return Err(GraphicsError::InvalidParameter(
                "instance count must be at least 1".into(),
            ));
        }

        let buffer = self.create_instance_buffer(count)?;
        log::debug!(
            "{}: instance buffer for {} transforms",
            self.shape.name(),
            count
        );
        self.instancing = Some(InstanceBuffer {
            buffer,
            capacity: count,
            count: 0,
        });
        Ok(())
    }

    /// Replace the whole instance buffer with `transforms`.
    ///
    /// The buffer always ends up holding exactly `transforms.len()` matrices.
    /// A different count re-creates it at the new size; the old buffer is only
    /// released once the new one holds the data.
    pub fn send_instanced_data(&mut self, transforms: &[Mat4]) -> Result<(), GraphicsError> {
        profile_scope!("send_instanced_data");

        let capacity = match &self.instancing {
            Some(instancing) => instancing.capacity,
            None => return Err(GraphicsError::InstancingNotInitialized),
        };
        if transforms.is_empty() {
            return Err(GraphicsError::InvalidParameter(
                "no instance transforms given".into(),
            ));
        }
        let count = u32::try_from(transforms.len()).map_err(|_| {
            GraphicsError::InvalidParameter(format!("{} transforms", transforms.len()))
        })?;
        let bytes = pack_instance_transforms(transforms);

        if count != capacity {
            log::debug!(
                "{}: resizing instance buffer from {} to {} transforms",
                self.shape.name(),
                capacity,
                count
            );
            let buffer = self.create_instance_buffer(count)?;
            buffer.write(0, &bytes)?;
            self.instancing = Some(InstanceBuffer {
                buffer,
                capacity: count,
                count,
            });
            return Ok(());
        }

        let Some(instancing) = self.instancing.as_mut() else {
            return Err(GraphicsError::InstancingNotInitialized);
        };
        instancing.buffer.write(0, &bytes)?;
        instancing.count = count;
        Ok(())
    }

    fn index_count(&self) -> Result<u32, GraphicsError> {
        u32::try_from(self.geometry.index_count()).map_err(|_| {
            GraphicsError::InvalidParameter(format!(
                "{} indices do not fit a draw call",
                self.geometry.index_count()
            ))
        })
    }

    /// Draw the mesh once.
    pub fn draw(&self) -> Result<(), GraphicsError> {
        self.owner.draw(&DrawRequest {
            vertex_buffer: self.vertex_buffer.handle(),
            index_buffer: self.index_buffer.handle(),
            instance_buffer: None,
            decomposition: self.decomposition(),
            index_count: self.index_count()?,
            instance_count: 1,
        })
    }

    /// Draw `count` instances, each placed by its uploaded transform.
    pub fn draw_instanced(&self, count: u32) -> Result<(), GraphicsError> {
        if count == 0 {
            return Err(GraphicsError::InvalidParameter(
                "instanced draw needs at least 1 instance".into(),
            ));
        }
        let instancing = self
            .instancing
            .as_ref()
            .ok_or(GraphicsError::InstancingNotInitialized)?;
        if count > instancing.count {
            return Err(GraphicsError::InvalidParameter(format!(
                "{}: drawing {} instances but only {} transforms were uploaded",
                self.shape.name(),
                count,
                instancing.count
            )));
        }

        self.owner.draw(&DrawRequest {
            vertex_buffer: self.vertex_buffer.handle(),
            index_buffer: self.index_buffer.handle(),
            instance_buffer: Some(instancing.buffer.handle()),
            decomposition: self.decomposition(),
            index_count: self.index_count()?,
            instance_count: count,
        })
    }
}

impl std::fmt::Debug for ShapeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapeDescriptor")
            .field("shape", &self.shape.name())
            .field("geometry", &self.geometry)
            .field("vertex_buffer", &self.vertex_buffer.handle())
            .field("index_buffer", &self.index_buffer.handle())
            .field("instance_capacity", &self.instance_capacity())
            .finish()
    }
}

// Ensure ShapeDescriptor is Send + Sync
static_assertions::assert_impl_all!(ShapeDescriptor: Send, Sync);
