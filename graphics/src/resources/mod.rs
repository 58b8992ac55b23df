//! GPU resources owned by shapes.

mod buffer;

pub use buffer::OwnedBuffer;
