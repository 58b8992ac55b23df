//! Graphics error types.

use shapeforge_core::GeometryError;
use thiserror::Error;

/// Errors that can occur while uploading or drawing a shape.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphicsError {
    /// Shape generation failed before any buffer was touched.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    /// An invalid parameter was provided.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// The buffer owner refused to create a buffer.
    #[error("resource creation failed: {0}")]
    ResourceCreationFailed(String),
    /// The handle does not name a live buffer.
    #[error("unknown buffer {0}")]
    UnknownBuffer(u64),
    /// A write or draw reaches past the end of a buffer.
    #[error("{len} bytes at offset {offset} exceed buffer {buffer} of {capacity} bytes")]
    OutOfBounds {
        /// Buffer id.
        buffer: u64,
        /// Start of the access in bytes.
        offset: u64,
        /// Length of the access in bytes.
        len: u64,
        /// Buffer size in bytes.
        capacity: u64,
    },
    /// Instanced operation on a shape without an instance buffer.
    #[error("instancing has not been initialized")]
    InstancingNotInitialized,
}
