//! # ShapeForge Core
//!
//! CPU-side procedural geometry for ShapeForge.
//!
//! This crate turns geometric parameters (side lengths, angles, radii,
//! layer counts) into complete meshes:
//!
//! - [`mesh::primitives`] - vertex generators for every supported shape
//! - [`mesh::indices`] - triangulation and wireframe index generators
//! - [`mesh::attributes`] - per-vertex color, texcoord and normal synthesis
//! - [`mesh::packer`] - single-buffer packing with attribute offsets/strides
//! - [`mesh::Shape`] - the closed set of shapes tying the above together
//!
//! Nothing in this crate talks to a GPU. The packed output is handed to a
//! buffer owner by `shapeforge-graphics`.

pub mod error;
pub mod math;
pub mod mesh;
pub mod profiling;

pub use error::{GeometryError, GeometryResult};

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the crate version. Purely informational.
pub fn init() {
    log::info!("ShapeForge Core v{} initialized", VERSION);
}
