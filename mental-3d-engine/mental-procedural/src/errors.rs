use strum::Display;
use thiserror::Error;

/// The buffers a generator allocates.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum BufferKind {
    Vertex,
    Index,
    Height,
    Pixel,
}

#[derive(Debug, Error)]
pub enum ProceduralError {
    #[error("Required argument `{0}` was not provided")]
    NullArgument(&'static str),
    #[error("Invalid grid resolution {0}, it must be at least 1")]
    InvalidResolution(u32),
    #[error("Invalid extent {0}, it must be finite and positive")]
    InvalidExtent(f32),
    #[error("Invalid radius {0}, it must be finite and positive")]
    InvalidRadius(f32),
    #[error("Unable to allocate the {buffer} buffer ({requested} elements)")]
    AllocationFailed { buffer: BufferKind, requested: usize },
    #[error("Mesh would need {0} vertices, which does not fit 32-bit indices")]
    IndexOverflow(usize),
    #[error("Invalid mesh buffers: {0}")]
    InvalidBuffers(&'static str),
    #[error("Unable to encode image: {0}")]
    Image(#[from] image::ImageError),
    #[error("Unable to write file: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ProceduralError>;
