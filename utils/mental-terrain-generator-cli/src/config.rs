use std::path::Path;

use mental_procedural::{CloudParameters, GroundTextureParameters, TerrainParameters};
use serde::{Deserialize, Serialize};
use twelf::{config, Layer};

/// Prefix of the environment variables overriding the configuration.
pub const ENV_PREFIX: &str = "MENTAL_";

#[config]
#[derive(Debug)]
pub struct GeneratorConfiguration {
    /// Seed used to shuffle the noise permutation.
    /// When unset, the reference permutation is used, which always gives the same terrain.
    pub seed: Option<u64>,

    /// The ground mesh.
    pub terrain: TerrainParameters,

    /// Every cloud to generate. They all end up in a single mesh.
    pub clouds: Vec<CloudParameters>,

    /// The ground texture written as a PPM image.
    pub ground_texture: GroundTextureParameters,

    /// The camera whose matrices are exported alongside the meshes.
    pub camera: CameraConfiguration,
}

impl Default for GeneratorConfiguration {
    fn default() -> Self {
        GeneratorConfiguration {
            seed: None,
            terrain: TerrainParameters::default(),
            clouds: vec![CloudParameters::default()],
            ground_texture: GroundTextureParameters::default(),
            camera: CameraConfiguration::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct CameraConfiguration {
    pub position: [f32; 3],
    /// Rotation around the vertical axis (in degrees)
    pub yaw: f32,
    /// Rotation above the horizon (in degrees)
    pub pitch: f32,
    /// Vertical field of view (in degrees)
    pub zoom: f32,
    pub viewport_width: u32,
    pub viewport_height: u32,
}

impl Default for CameraConfiguration {
    fn default() -> Self {
        CameraConfiguration {
            position: [0.0, 0.0, 3.0],
            yaw: -90.0,
            pitch: 0.0,
            zoom: 45.0,
            viewport_width: 800,
            viewport_height: 600,
        }
    }
}

impl CameraConfiguration {
    pub fn aspect_ratio(&self) -> f32 {
        self.viewport_width as f32 / self.viewport_height.max(1) as f32
    }
}

/// Loads the configuration: defaults first, then the optional JSON file, then the environment.
pub fn load_configuration(file: Option<&Path>) -> Result<GeneratorConfiguration, twelf::Error> {
    let mut layers = vec![Layer::DefaultTrait];

    if let Some(file) = file {
        layers.push(Layer::Json(file.to_path_buf()));
    }

    layers.push(Layer::Env(Some(ENV_PREFIX.to_string())));

    GeneratorConfiguration::with_layers(&layers)
}
