pub mod camera;
pub mod errors;
pub mod upload;

pub(crate) mod utils;

// Re-export some types from the glam crate
pub use glam::{Mat4, Vec3};

pub use camera::{Camera, Movement};
pub use errors::{RenderingError, Result};
pub use upload::{upload_buffers, upload_mesh, validate_buffers, MeshUploader};

#[cfg(feature = "pipeline")]
pub use upload::{vertex_buffer_layout, GpuMesh};
