pub mod clouds;
pub mod errors;
pub mod grid;
pub mod mesh;
pub mod noise;
pub mod primitives;
pub mod terrain;
pub mod texture;

pub use clouds::{generate_cloud, generate_clouds, CloudParameters};
pub use errors::{ProceduralError, Result};
pub use mesh::{Mesh, Vertex};
pub use noise::{NoiseSource, PerlinNoise};
pub use terrain::{generate_terrain, HeightField, Octave, TerrainParameters};
pub use texture::{generate_ground_texture, save_ground_texture, GroundTextureParameters};
