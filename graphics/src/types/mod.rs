//! Buffer descriptors, handles and draw requests.

mod buffer;

pub use buffer::{BufferDescriptor, BufferHandle, BufferUsage, DrawRequest};
