use mental_procedural::mesh::{Mesh, FLOATS_PER_VERTEX};
use tracing::{instrument, trace, warn};

use crate::errors::{RenderingError, Result};

/// Something that takes geometry off the CPU, such as a GPU device.
///
/// Implementations receive buffers that already passed [`validate_buffers`] and
/// may copy them as-is.
pub trait MeshUploader {
    type Handle;

    fn upload(
        &self,
        vertices: &[f32],
        vertex_count: usize,
        indices: &[u32],
        index_count: usize,
    ) -> Result<Self::Handle>;
}

/// Checks that the buffers describe at least one triangle over existing vertices.
pub fn validate_buffers(vertices: &[f32], indices: &[u32]) -> Result<()> {
    if vertices.is_empty() || indices.is_empty() {
        return Err(RenderingError::EmptyMesh);
    }

    if vertices.len() % FLOATS_PER_VERTEX != 0 {
        return Err(RenderingError::VertexLayout(vertices.len()));
    }

    if indices.len() % 3 != 0 {
        return Err(RenderingError::IndexLayout(indices.len()));
    }

    let vertex_count = vertices.len() / FLOATS_PER_VERTEX;
    match indices.iter().find(|&&index| index as usize >= vertex_count) {
        Some(&index) => Err(RenderingError::IndexOutOfRange {
            index,
            vertex_count,
        }),
        None => Ok(()),
    }
}

/// Validates raw buffers and hands them to `uploader`.
#[instrument(level = "trace", skip_all, fields(floats = vertices.len(), indices = indices.len()))]
pub fn upload_buffers<U: MeshUploader + ?Sized>(
    uploader: &U,
    vertices: &[f32],
    indices: &[u32],
) -> Result<U::Handle> {
    if let Err(error) = validate_buffers(vertices, indices) {
        warn!(%error, "Rejected mesh before upload");
        return Err(error);
    }

    trace!("Uploading mesh");
    uploader.upload(
        vertices,
        vertices.len() / FLOATS_PER_VERTEX,
        indices,
        indices.len(),
    )
}

pub fn upload_mesh<U: MeshUploader + ?Sized>(uploader: &U, mesh: &Mesh) -> Result<U::Handle> {
    upload_buffers(uploader, mesh.vertices(), mesh.indices())
}

#[cfg(feature = "pipeline")]
mod gpu {
    use std::mem;

    use mental_procedural::mesh::Vertex;
    use tracing::trace;
    use wgpu::{
        util::{BufferInitDescriptor, DeviceExt},
        vertex_attr_array, Buffer, BufferAddress, BufferUsages, VertexAttribute, VertexBufferLayout,
    };

    use super::MeshUploader;
    use crate::errors::{RenderingError, Result};

    const VERTEX_ATTRIBUTES: [VertexAttribute; 1] = vertex_attr_array![0 => Float32x3];

    /// Layout matching the flat position buffer of a [`Mesh`](mental_procedural::Mesh).
    pub fn vertex_buffer_layout() -> VertexBufferLayout<'static> {
        VertexBufferLayout {
            array_stride: mem::size_of::<Vertex>() as BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &VERTEX_ATTRIBUTES,
        }
    }

    /// A mesh living in GPU memory.
    #[derive(Debug)]
    pub struct GpuMesh {
        pub vertex_buffer: Buffer,
        pub index_buffer: Buffer,
        pub index_count: u32,
    }

    impl MeshUploader for wgpu::Device {
        type Handle = GpuMesh;

        fn upload(
            &self,
            vertices: &[f32],
            vertex_count: usize,
            indices: &[u32],
            index_count: usize,
        ) -> Result<GpuMesh> {
            let index_count = u32::try_from(index_count)
                .map_err(|_| RenderingError::Upload(format!("{index_count} indices do not fit a draw call")))?;

            trace!(vertex_count, index_count, "Creating mesh buffers");

            let vertex_buffer = self.create_buffer_init(&BufferInitDescriptor {
                label: Some("Mesh Vertex Buffer"),
                contents: bytemuck::cast_slice(vertices),
                usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
            });

            let index_buffer = self.create_buffer_init(&BufferInitDescriptor {
                label: Some("Mesh Index Buffer"),
                contents: bytemuck::cast_slice(indices),
                usage: BufferUsages::INDEX | BufferUsages::COPY_DST,
            });

            Ok(GpuMesh {
                vertex_buffer,
                index_buffer,
                index_count,
            })
        }
    }
}

#[cfg(feature = "pipeline")]
pub use gpu::{vertex_buffer_layout, GpuMesh};

#[cfg(test)]
mod test {
    use std::cell::RefCell;

    use mental_procedural::{primitives, Mesh};

    use super::*;

    #[derive(Default)]
    struct RecordingUploader {
        uploads: RefCell<Vec<(usize, usize)>>,
    }

    impl MeshUploader for RecordingUploader {
        type Handle = usize;

        fn upload(&self, _: &[f32], vertex_count: usize, _: &[u32], index_count: usize) -> Result<usize> {
            let mut uploads = self.uploads.borrow_mut();
            uploads.push((vertex_count, index_count));

            Ok(uploads.len())
        }
    }

    #[test]
    fn valid_meshes_reach_the_uploader() {
        let uploader = RecordingUploader::default();

        assert_eq!(upload_mesh(&uploader, &primitives::rectangle()), Ok(1));
        assert_eq!(upload_mesh(&uploader, &primitives::triangle()), Ok(2));
        assert_eq!(*uploader.uploads.borrow(), vec![(4, 6), (3, 3)]);
    }

    #[test]
    fn invalid_buffers_never_reach_the_uploader() {
        let uploader = RecordingUploader::default();

        assert_eq!(upload_mesh(&uploader, &Mesh::new()), Err(RenderingError::EmptyMesh));
        assert_eq!(
            upload_buffers(&uploader, &[0.0; 4], &[0, 0, 0]),
            Err(RenderingError::VertexLayout(4))
        );
        assert_eq!(
            upload_buffers(&uploader, &[0.0; 6], &[0, 1]),
            Err(RenderingError::IndexLayout(2))
        );
        assert_eq!(
            upload_buffers(&uploader, &[0.0; 6], &[0, 1, 2]),
            Err(RenderingError::IndexOutOfRange {
                index: 2,
                vertex_count: 2
            })
        );
        assert!(uploader.uploads.borrow().is_empty());
    }
}
