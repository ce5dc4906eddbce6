use itertools::{Itertools, MinMaxResult};
use tracing::{debug, instrument, warn};

use crate::errors::{BufferKind, ProceduralError, Result};
use crate::grid::Grid;
use crate::mesh::Mesh;
use crate::noise::NoiseSource;

/// One layer of noise: sampled at `frequency` times the base scale and weighted by `amplitude`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serializable", derive(serde::Serialize, serde::Deserialize))]
pub struct Octave {
    pub frequency: f32,
    pub amplitude: f32,
}

impl Octave {
    pub const fn new(frequency: f32, amplitude: f32) -> Self {
        Octave {
            frequency,
            amplitude,
        }
    }
}

pub const DEFAULT_OCTAVES: [Octave; 3] = [
    Octave::new(1.0, 3.0),
    Octave::new(2.0, 1.5),
    Octave::new(4.0, 0.75),
];

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serializable", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct TerrainParameters {
    /// Number of cells along each side of the grid
    pub resolution: u32,
    /// Side length of the terrain in world units, centered on the origin
    pub extent: f32,
    /// Factor applied to world positions before sampling the noise
    pub noise_scale: f32,
    /// Height added to the summed octaves
    pub base_height: f32,
    pub octaves: [Octave; 3],
}

impl Default for TerrainParameters {
    fn default() -> Self {
        TerrainParameters {
            resolution: 50,
            extent: 20.0,
            noise_scale: 0.05,
            base_height: -1.0,
            octaves: DEFAULT_OCTAVES,
        }
    }
}

impl TerrainParameters {
    /// Checks the parameters, returning the grid they describe.
    pub fn grid(&self) -> Result<Grid> {
        if !self.extent.is_finite() || self.extent <= 0.0 {
            warn!(extent = self.extent, "Rejected terrain extent");
            return Err(ProceduralError::InvalidExtent(self.extent));
        }

        Grid::new(self.resolution)
    }

    /// Distance between two neighbouring grid points.
    pub fn step(&self) -> f32 {
        self.extent / self.resolution as f32
    }

    /// Height of the terrain above world position `(x, z)`.
    pub fn height_at<N: NoiseSource + ?Sized>(&self, noise: &N, x: f32, z: f32) -> f32 {
        let (nx, nz) = (x * self.noise_scale, z * self.noise_scale);

        self.base_height
            + self
                .octaves
                .iter()
                .map(|octave| {
                    noise.sample(nx * octave.frequency, 0.0, nz * octave.frequency)
                        * octave.amplitude
                })
                .sum::<f32>()
    }
}

/// Heights sampled on every point of a terrain grid.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightField {
    grid: Grid,
    step: f32,
    origin: f32,
    heights: Vec<f32>,
}

impl HeightField {
    #[instrument(level = "debug", skip(noise))]
    pub fn sample<N: NoiseSource + ?Sized>(noise: &N, parameters: &TerrainParameters) -> Result<Self> {
        let grid = parameters.grid()?;
        let step = parameters.step();
        let origin = -parameters.extent * 0.5;

        let mut heights = Vec::new();
        heights
            .try_reserve_exact(grid.vertex_count())
            .map_err(|_| ProceduralError::AllocationFailed {
                buffer: BufferKind::Height,
                requested: grid.vertex_count(),
            })?;

        heights.extend(grid.points().map(|(x, z)| {
            parameters.height_at(noise, x as f32 * step + origin, z as f32 * step + origin)
        }));

        Ok(HeightField {
            grid,
            step,
            origin,
            heights,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    pub fn get(&self, x: u32, z: u32) -> Option<f32> {
        if x > self.grid.resolution() || z > self.grid.resolution() {
            return None;
        }

        self.heights.get(self.grid.index(x, z) as usize).copied()
    }

    /// World position of grid point `(x, z)`, lifted to its height.
    pub fn world_position(&self, x: u32, z: u32) -> Option<[f32; 3]> {
        let y = self.get(x, z)?;

        Some([
            x as f32 * self.step + self.origin,
            y,
            z as f32 * self.step + self.origin,
        ])
    }

    pub fn min(&self) -> f32 {
        self.bounds().0
    }

    pub fn max(&self) -> f32 {
        self.bounds().1
    }

    fn bounds(&self) -> (f32, f32) {
        match self.heights.iter().minmax_by(|a, b| a.total_cmp(b)) {
            MinMaxResult::NoElements => (0.0, 0.0),
            MinMaxResult::OneElement(height) => (*height, *height),
            MinMaxResult::MinMax(min, max) => (*min, *max),
        }
    }

    /// Tessellates the field into a terrain mesh.
    pub fn to_mesh(&self) -> Result<Mesh> {
        let mut mesh = self.grid.allocate_mesh()?;

        for ((x, z), &y) in self.grid.points().zip(&self.heights) {
            mesh.push_vertex([
                x as f32 * self.step + self.origin,
                y,
                z as f32 * self.step + self.origin,
            ]);
        }
        self.grid.triangulate_into(&mut mesh);

        Ok(mesh)
    }
}

/// Samples `noise` over the grid described by `parameters` and triangulates the result.
#[instrument(skip(noise))]
pub fn generate_terrain<N: NoiseSource + ?Sized>(noise: &N, parameters: &TerrainParameters) -> Result<Mesh> {
    let mesh = HeightField::sample(noise, parameters)?.to_mesh()?;

    debug!(
        vertices = mesh.vertex_count(),
        indices = mesh.index_count(),
        "Generated terrain"
    );

    Ok(mesh)
}

/// Like [`generate_terrain`], for callers holding optional handles.
///
/// `out` is only replaced once generation succeeded.
pub fn generate_terrain_into<N: NoiseSource + ?Sized>(
    noise: Option<&N>,
    parameters: &TerrainParameters,
    out: Option<&mut Mesh>,
) -> Result<()> {
    let noise = noise.ok_or(ProceduralError::NullArgument("noise"))?;
    let out = out.ok_or(ProceduralError::NullArgument("out"))?;

    *out = generate_terrain(noise, parameters)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::noise::PerlinNoise;

    const EPSILON: f32 = 1e-4;

    fn small_terrain() -> TerrainParameters {
        TerrainParameters {
            resolution: 2,
            extent: 4.0,
            ..Default::default()
        }
    }

    #[test]
    fn octaves_are_weighted_and_offset() {
        let parameters = TerrainParameters::default();
        let constant = |_: f32, _: f32, _: f32| 1.0;

        assert!((parameters.height_at(&constant, 3.0, -7.0) - 4.25).abs() < EPSILON);
    }

    #[test]
    fn noise_is_sampled_at_scaled_frequencies() {
        let parameters = TerrainParameters::default();
        let calls = std::cell::RefCell::new(Vec::new());
        let recording = |x: f32, y: f32, z: f32| {
            calls.borrow_mut().push((x, y, z));
            0.0
        };

        parameters.height_at(&recording, 10.0, -20.0);

        let calls = calls.into_inner();
        assert_eq!(calls.len(), 3);
        for ((x, y, z), frequency) in calls.into_iter().zip([1.0, 2.0, 4.0]) {
            assert!((x - 0.5 * frequency).abs() < EPSILON);
            assert_eq!(y, 0.0, "terrain samples a flat slice of the noise");
            assert!((z + 1.0 * frequency).abs() < EPSILON);
        }
    }

    #[test]
    fn reference_noise_heights() {
        let field = HeightField::sample(&PerlinNoise::reference(), &small_terrain()).unwrap();

        assert_eq!(field.heights().len(), 9);
        assert!((field.get(0, 0).unwrap() - -2.770_764).abs() < EPSILON);
        assert!((field.get(1, 1).unwrap() - -1.0).abs() < EPSILON, "origin is a lattice point");
        assert!((field.get(2, 2).unwrap() - 0.134_841).abs() < EPSILON);
        assert_eq!(field.get(3, 0), None);

        assert_eq!(field.min(), field.get(0, 0).unwrap());
        assert_eq!(field.max(), field.get(2, 2).unwrap());
    }

    #[test]
    fn mesh_vertices_follow_the_grid() {
        let mesh = generate_terrain(&PerlinNoise::reference(), &small_terrain()).unwrap();

        assert_eq!(mesh.vertex_count(), 9);
        assert_eq!(mesh.index_count(), 24);
        assert_eq!(&mesh.indices()[..6], &[0, 3, 1, 1, 3, 4]);

        let first = mesh.position(0).unwrap();
        let last = mesh.position(8).unwrap();
        assert_eq!((first.x, first.z), (-2.0, -2.0));
        assert_eq!((last.x, last.z), (2.0, 2.0));

        let second = mesh.position(1).unwrap();
        assert_eq!((second.x, second.z), (0.0, -2.0), "x advances first");
    }

    #[test]
    fn every_height_becomes_a_vertex() {
        let field = HeightField::sample(&PerlinNoise::reference(), &small_terrain()).unwrap();
        let mesh = field.to_mesh().unwrap();

        assert_eq!(mesh.vertex_count(), field.grid().vertex_count());
        for (i, &height) in field.heights().iter().enumerate() {
            assert_eq!(mesh.position(i).unwrap().y, height);
        }

        assert_eq!(field.world_position(2, 2), Some(mesh.position(8).unwrap().to_array()));
        assert_eq!(field.world_position(3, 0), None);
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        let noise = PerlinNoise::reference();

        for extent in [0.0, -4.0, f32::NAN, f32::INFINITY] {
            let parameters = TerrainParameters {
                extent,
                ..small_terrain()
            };
            assert!(matches!(
                generate_terrain(&noise, &parameters),
                Err(ProceduralError::InvalidExtent(_))
            ));
        }

        let parameters = TerrainParameters {
            resolution: 0,
            ..small_terrain()
        };
        assert!(matches!(
            generate_terrain(&noise, &parameters),
            Err(ProceduralError::InvalidResolution(0))
        ));
    }

    #[test]
    fn missing_handles_leave_the_output_untouched() {
        let noise = PerlinNoise::reference();
        let mut out = Mesh::from_buffers(vec![1.0, 2.0, 3.0], vec![0, 0, 0]).unwrap();
        let before = out.clone();

        assert!(matches!(
            generate_terrain_into::<PerlinNoise>(None, &small_terrain(), Some(&mut out)),
            Err(ProceduralError::NullArgument("noise"))
        ));
        assert!(matches!(
            generate_terrain_into(Some(&noise), &small_terrain(), None),
            Err(ProceduralError::NullArgument("out"))
        ));
        assert!(matches!(
            generate_terrain_into(
                Some(&noise),
                &TerrainParameters {
                    resolution: 0,
                    ..small_terrain()
                },
                Some(&mut out)
            ),
            Err(ProceduralError::InvalidResolution(0))
        ));
        assert_eq!(out, before);

        generate_terrain_into(Some(&noise), &small_terrain(), Some(&mut out)).unwrap();
        assert_eq!(out.vertex_count(), 9);
    }
}
