//! Vertex layout definitions for packed shape buffers.
//!
//! A shape's vertex buffer is not interleaved per vertex. It holds each
//! attribute array as one contiguous block, in the fixed order
//! position → color → texcoord → normal, so every attribute is described by
//! the byte offset of its block and the stride between its elements.
//!
//! The per-instance transform buffer is the opposite case: one 4x4 matrix per
//! instance, read as four `Float4` columns that share a 64-byte stride and
//! advance once per instance.
//!
//! # Example
//!
//! ```ignore
//! // 4 vertices with positions and normals:
//! // [ 4 x float3 positions | 4 x float3 normals ]
//! let layout = VertexLayout::new()
//!     .with_attribute(VertexAttribute::position(0))
//!     .with_attribute(VertexAttribute::normal(48))
//!     .with_label("quad");
//! ```

/// Semantic meaning of a vertex attribute.
///
/// The semantic fixes the shader input location the attribute binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeSemantic {
    /// Vertex position (float3).
    Position,
    /// Vertex color (float3, RGB).
    Color,
    /// Texture coordinates set 0 (float2).
    TexCoord0,
    /// Vertex normal (float3).
    Normal,
    /// One column (0-3) of the per-instance model matrix (float4).
    InstanceTransform(u8),
}

impl VertexAttributeSemantic {
    /// Shader input location for this semantic.
    pub fn location(&self) -> u32 {
        match self {
            Self::Position => 0,
            Self::Color => 1,
            Self::TexCoord0 => 2,
            Self::Normal => 3,
            Self::InstanceTransform(column) => 4 + *column as u32,
        }
    }
}

/// Format of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeFormat {
    /// Two 32-bit floats.
    Float2,
    /// Three 32-bit floats.
    Float3,
    /// Four 32-bit floats.
    Float4,
}

impl VertexAttributeFormat {
    /// Get the number of components.
    pub fn components(&self) -> u32 {
        match self {
            Self::Float2 => 2,
            Self::Float3 => 3,
            Self::Float4 => 4,
        }
    }

    /// Get the size in bytes of this format.
    pub fn size(&self) -> u32 {
        self.components() * std::mem::size_of::<f32>() as u32
    }
}

/// How the buffer advances: per-vertex or per-instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VertexStepMode {
    /// Buffer advances once per vertex (default).
    #[default]
    Vertex,
    /// Buffer advances once per drawn instance.
    Instance,
}

/// A single vertex attribute stream inside a buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VertexAttribute {
    /// Semantic meaning of this attribute.
    pub semantic: VertexAttributeSemantic,
    /// Data format of this attribute.
    pub format: VertexAttributeFormat,
    /// Byte offset of the first element within the buffer.
    pub offset: u64,
    /// Byte distance between consecutive elements.
    pub stride: u32,
}

impl VertexAttribute {
    /// Create a new vertex attribute.
    pub fn new(
        semantic: VertexAttributeSemantic,
        format: VertexAttributeFormat,
        offset: u64,
        stride: u32,
    ) -> Self {
        Self {
            semantic,
            format,
            offset,
            stride,
        }
    }

    /// Tightly packed attribute block starting at `offset`.
    fn packed(semantic: VertexAttributeSemantic, format: VertexAttributeFormat, offset: u64) -> Self {
        Self::new(semantic, format, offset, format.size())
    }

    /// Create a position attribute (float3) block.
    pub fn position(offset: u64) -> Self {
        Self::packed(
            VertexAttributeSemantic::Position,
            VertexAttributeFormat::Float3,
            offset,
        )
    }

    /// Create a color attribute (float3) block.
    pub fn color(offset: u64) -> Self {
        Self::packed(
            VertexAttributeSemantic::Color,
            VertexAttributeFormat::Float3,
            offset,
        )
    }

    /// Create a texcoord0 attribute (float2) block.
    pub fn texcoord0(offset: u64) -> Self {
        Self::packed(
            VertexAttributeSemantic::TexCoord0,
            VertexAttributeFormat::Float2,
            offset,
        )
    }

    /// Create a normal attribute (float3) block.
    pub fn normal(offset: u64) -> Self {
        Self::packed(
            VertexAttributeSemantic::Normal,
            VertexAttributeFormat::Float3,
            offset,
        )
    }

    /// Create one column of an instance transform (float4, 64-byte stride).
    pub fn instance_column(column: u8) -> Self {
        let format = VertexAttributeFormat::Float4;
        Self::new(
            VertexAttributeSemantic::InstanceTransform(column),
            format,
            column as u64 * format.size() as u64,
            4 * format.size(),
        )
    }

    /// Shader input location.
    pub fn location(&self) -> u32 {
        self.semantic.location()
    }

    /// Bytes spanned by `count` elements of this attribute.
    pub fn span(&self, count: u32) -> u64 {
        if count == 0 {
            return 0;
        }
        (count as u64 - 1) * self.stride as u64 + self.format.size() as u64
    }
}

/// Describes every attribute stream read from one buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct VertexLayout {
    /// How the buffer advances.
    pub step_mode: VertexStepMode,
    /// The attribute streams, in binding order.
    pub attributes: Vec<VertexAttribute>,
    /// Optional label for debugging.
    pub label: Option<String>,
}

impl VertexLayout {
    /// Create a new empty per-vertex layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex attribute.
    pub fn with_attribute(mut self, attribute: VertexAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Set the step mode to per-instance.
    pub fn with_instance_step(mut self) -> Self {
        self.step_mode = VertexStepMode::Instance;
        self
    }

    /// Set a debug label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Check if this layout has a specific semantic.
    pub fn has_semantic(&self, semantic: VertexAttributeSemantic) -> bool {
        self.attributes.iter().any(|attr| attr.semantic == semantic)
    }

    /// Get an attribute by semantic.
    pub fn get_attribute(&self, semantic: VertexAttributeSemantic) -> Option<&VertexAttribute> {
        self.attributes
            .iter()
            .find(|attr| attr.semantic == semantic)
    }

    /// Smallest buffer size that holds `count` elements of every attribute.
    ///
    /// Zero elements need no buffer, whatever the block offsets.
    pub fn required_size(&self, count: u32) -> u64 {
        if count == 0 {
            return 0;
        }
        self.attributes
            .iter()
            .map(|attr| attr.offset + attr.span(count))
            .max()
            .unwrap_or(0)
    }

    /// Validate the layout (non-empty, strides cover formats, unique locations).
    pub fn validate(&self) -> Result<(), String> {
        if self.attributes.is_empty() {
            return Err(format!("Layout {:?} has no attributes", self.label));
        }
        for (i, attr) in self.attributes.iter().enumerate() {
            if attr.stride < attr.format.size() {
                return Err(format!(
                    "Attribute {:?} has stride {} smaller than its {}-byte format",
                    attr.semantic,
                    attr.stride,
                    attr.format.size()
                ));
            }
            if self.attributes[..i]
                .iter()
                .any(|other| other.location() == attr.location())
            {
                return Err(format!(
                    "Attribute {:?} reuses location {}",
                    attr.semantic,
                    attr.location()
                ));
            }
        }
        Ok(())
    }
}
