use bytemuck::{Pod, Zeroable};
use mental_math::Vector3f;

use crate::errors::{BufferKind, ProceduralError, Result};

/// Number of floats making up one vertex in [`Mesh::vertices`].
pub const FLOATS_PER_VERTEX: usize = 3;

/// A vertex as laid out in the flat vertex buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Vertex {
    /// The world position of the vertex
    pub position: [f32; 3],
}

/// Triangulated geometry as a pair of flat buffers: three floats per vertex and
/// three indices per triangle.
///
/// Both buffers live and die together. Procedural generators and file loaders
/// produce the same value, so consumers never need to tell them apart.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serializable", derive(serde::Serialize, serde::Deserialize))]
pub struct Mesh {
    vertices: Vec<f32>,
    indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves room for exactly `vertex_count` vertices and `index_count` indices.
    ///
    /// If either reservation fails nothing is kept.
    pub fn with_capacity(vertex_count: usize, index_count: usize) -> Result<Self> {
        let mut mesh = Mesh::new();

        reserve(&mut mesh.vertices, vertex_count, FLOATS_PER_VERTEX, BufferKind::Vertex)?;
        reserve(&mut mesh.indices, index_count, 1, BufferKind::Index)?;

        Ok(mesh)
    }

    /// Wraps buffers produced elsewhere (e.g. a model file), checking they describe
    /// whole vertices and triangles whose indices stay in range.
    pub fn from_buffers(vertices: Vec<f32>, indices: Vec<u32>) -> Result<Self> {
        if vertices.len() % FLOATS_PER_VERTEX != 0 {
            return Err(ProceduralError::InvalidBuffers(
                "vertex buffer length is not a multiple of 3",
            ));
        }

        if indices.len() % 3 != 0 {
            return Err(ProceduralError::InvalidBuffers(
                "index buffer length is not a multiple of 3",
            ));
        }

        let vertex_count = vertices.len() / FLOATS_PER_VERTEX;
        if indices.iter().any(|&index| index as usize >= vertex_count) {
            return Err(ProceduralError::InvalidBuffers(
                "index buffer references a missing vertex",
            ));
        }

        Ok(Mesh { vertices, indices })
    }

    pub(crate) fn push_vertex(&mut self, position: [f32; 3]) {
        self.vertices.extend_from_slice(&position);
    }

    pub(crate) fn push_triangle(&mut self, triangle: [u32; 3]) {
        self.indices.extend_from_slice(&triangle);
    }

    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / FLOATS_PER_VERTEX
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.indices.is_empty()
    }

    pub fn position(&self, index: usize) -> Option<Vector3f> {
        let start = index.checked_mul(FLOATS_PER_VERTEX)?;
        let end = start.checked_add(FLOATS_PER_VERTEX)?;
        let [x, y, z] = self.vertices.get(start..end)? else {
            return None;
        };

        Some(Vector3f::new(*x, *y, *z))
    }

    pub fn positions(&self) -> impl Iterator<Item = Vector3f> + '_ {
        self.as_vertices()
            .iter()
            .map(|vertex| Vector3f::from(vertex.position))
    }

    /// The index buffer grouped by triangle.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|triangle| [triangle[0], triangle[1], triangle[2]])
    }

    pub fn as_vertices(&self) -> &[Vertex] {
        bytemuck::try_cast_slice(&self.vertices).unwrap_or_default()
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Appends `other`, shifting its indices past the vertices already present.
    pub fn append(&mut self, other: &Mesh) -> Result<()> {
        let combined = self.vertex_count() + other.vertex_count();
        if combined > u32::MAX as usize {
            return Err(ProceduralError::IndexOverflow(combined));
        }

        reserve(&mut self.vertices, other.vertex_count(), FLOATS_PER_VERTEX, BufferKind::Vertex)?;
        reserve(&mut self.indices, other.index_count(), 1, BufferKind::Index)?;

        let offset = self.vertex_count() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.indices
            .extend(other.indices.iter().map(|index| index + offset));

        Ok(())
    }

    /// Hands both buffers over to the caller.
    pub fn into_parts(self) -> (Vec<f32>, Vec<u32>) {
        (self.vertices, self.indices)
    }

    /// Frees both buffers, leaving an empty mesh behind.
    pub fn release(&mut self) {
        self.vertices = Vec::new();
        self.indices = Vec::new();
    }
}

fn reserve<T>(buffer: &mut Vec<T>, count: usize, stride: usize, kind: BufferKind) -> Result<()> {
    let failed = || ProceduralError::AllocationFailed {
        buffer: kind,
        requested: count,
    };

    let elements = count.checked_mul(stride).ok_or_else(failed)?;
    buffer.try_reserve_exact(elements).map_err(|_| failed())
}
