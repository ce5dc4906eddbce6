use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderingError {
    #[error("Refusing to upload an empty mesh")]
    EmptyMesh,
    #[error("Vertex buffer holds {0} floats, which is not a whole number of vertices")]
    VertexLayout(usize),
    #[error("Index buffer holds {0} indices, which is not a whole number of triangles")]
    IndexLayout(usize),
    #[error("Index {index} is out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },
    #[error("Unable to upload mesh: {0}")]
    Upload(String),
}

pub type Result<T> = std::result::Result<T, RenderingError>;
