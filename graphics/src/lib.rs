//! # ShapeForge Graphics
//!
//! Uploads ShapeForge meshes to a GPU buffer owner and issues draw requests.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`GpuBufferOwner`] - Trait for whatever allocates buffers and draws
//! - [`DummyBackend`] - In-memory owner for testing
//! - [`OwnedBuffer`] - Buffer handle released on drop
//! - [`ShapeDescriptor`] - A generated mesh with its vertex, index and
//!   instance buffers
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use shapeforge_graphics::{DummyBackend, RectangularPrismLayout, ShapeDescriptor, ShapeOptions};
//!
//! let owner = Arc::new(DummyBackend::new());
//! let cube = ShapeDescriptor::rectangular_prism(
//!     owner,
//!     1.0,
//!     1.0,
//!     1.0,
//!     RectangularPrismLayout::Full,
//!     ShapeOptions::new(),
//! )?;
//! cube.draw()?;
//! ```

pub mod backend;
pub mod error;
pub mod mesh;
pub mod resources;
pub mod types;

// Re-export main types for convenience
pub use backend::{DummyBackend, GpuBufferOwner};
pub use error::GraphicsError;
pub use mesh::{
    AttributeFlags, Decomposition, RectangularPrismLayout, Shape, ShapeDescriptor, ShapeOptions,
    TriangleSpec,
};
pub use resources::OwnedBuffer;
pub use types::{BufferDescriptor, BufferHandle, BufferUsage, DrawRequest};

/// Graphics library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the crate version. Purely informational.
pub fn init() {
    log::info!("ShapeForge Graphics v{} initialized", VERSION);
}
