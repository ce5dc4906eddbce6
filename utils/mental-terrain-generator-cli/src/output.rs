use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use mental_math::Vector3f;
use mental_rendering::{Camera, MeshUploader, RenderingError};
use serde::Serialize;

use crate::config::CameraConfiguration;

#[derive(Serialize)]
struct MeshDump<'a> {
    vertex_count: usize,
    index_count: usize,
    vertices: &'a [f32],
    indices: &'a [u32],
}

/// Stands in for a GPU: "uploads" meshes by writing them to a JSON file.
pub struct JsonMeshWriter {
    path: PathBuf,
}

impl JsonMeshWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonMeshWriter { path: path.into() }
    }
}

impl MeshUploader for JsonMeshWriter {
    type Handle = PathBuf;

    fn upload(
        &self,
        vertices: &[f32],
        vertex_count: usize,
        indices: &[u32],
        index_count: usize,
    ) -> mental_rendering::Result<PathBuf> {
        let dump = MeshDump {
            vertex_count,
            index_count,
            vertices,
            indices,
        };

        write_json(&self.path, &dump).map_err(|e| RenderingError::Upload(e.to_string()))?;

        Ok(self.path.clone())
    }
}

#[derive(Serialize)]
struct CameraDump {
    position: [f32; 3],
    front: [f32; 3],
    up: [f32; 3],
    zoom: f32,
    aspect_ratio: f32,
    /// Column major
    view: [f32; 16],
    /// Column major
    projection: [f32; 16],
}

pub fn camera_from_configuration(configuration: &CameraConfiguration) -> Camera {
    let mut camera = Camera::new(Vector3f::from(configuration.position));
    camera.set_yaw(configuration.yaw);
    camera.set_pitch(configuration.pitch);
    camera.set_zoom(configuration.zoom);

    camera
}

pub fn write_camera(path: &Path, camera: &Camera, aspect_ratio: f32) -> anyhow::Result<()> {
    let dump = CameraDump {
        position: camera.get_position().to_array(),
        front: camera.front().to_array(),
        up: camera.up().to_array(),
        zoom: camera.get_zoom(),
        aspect_ratio,
        view: camera.view_matrix().to_cols_array(),
        projection: camera.projection_matrix(aspect_ratio).to_cols_array(),
    };

    write_json(path, &dump)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, value)?;
    writer.flush()?;

    Ok(())
}
