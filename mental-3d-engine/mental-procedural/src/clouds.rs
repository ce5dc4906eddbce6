//! Cumulus-like clouds made from deformed UV spheres.
//!
//! Each vertex of a unit sphere is pushed around by three bands of sinusoidal
//! waves. Vertical displacement is then exaggerated on the upper half and damped
//! on the lower half, which gives puffy tops and flatter bottoms.

use std::f32::consts::PI;

use mental_math::Vector3f;
use tracing::{debug, instrument, warn};

use crate::errors::{ProceduralError, Result};
use crate::grid::Grid;
use crate::mesh::Mesh;

/// `amplitude * sin(first_frequency * a) * sin(second_frequency * b)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wave {
    pub amplitude: f32,
    pub first_frequency: f32,
    pub second_frequency: f32,
}

impl Wave {
    pub const fn new(amplitude: f32, first_frequency: f32, second_frequency: f32) -> Self {
        Wave {
            amplitude,
            first_frequency,
            second_frequency,
        }
    }

    pub fn evaluate(&self, a: f32, b: f32) -> f32 {
        self.amplitude * (self.first_frequency * a).sin() * (self.second_frequency * b).sin()
    }
}

/// Waves displacing each axis. The x wave reads `(x, y)`, the y wave `(y, z)`
/// and the z wave `(z, x)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeformationBand {
    pub x: Wave,
    pub y: Wave,
    pub z: Wave,
}

impl DeformationBand {
    pub fn offset(&self, point: Vector3f) -> Vector3f {
        Vector3f::new(
            self.x.evaluate(point.x, point.y),
            self.y.evaluate(point.y, point.z),
            self.z.evaluate(point.z, point.x),
        )
    }
}

/// Base, mid and fine detail, from broad and strong to tight and faint.
pub const DEFORMATION_BANDS: [DeformationBand; 3] = [
    DeformationBand {
        x: Wave::new(0.3, 2.0, 1.5),
        y: Wave::new(0.25, 2.5, 2.0),
        z: Wave::new(0.35, 1.8, 2.2),
    },
    DeformationBand {
        x: Wave::new(0.15, 5.0, 4.0),
        y: Wave::new(0.12, 6.0, 5.5),
        z: Wave::new(0.18, 4.5, 6.5),
    },
    DeformationBand {
        x: Wave::new(0.05, 12.0, 10.0),
        y: Wave::new(0.04, 15.0, 14.0),
        z: Wave::new(0.06, 13.0, 11.0),
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serializable", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct CloudParameters {
    /// Number of latitude and longitude subdivisions
    pub segments: u32,
    pub center: [f32; 3],
    pub radius: f32,
    /// Factor applied to the vertical displacement of the upper hemisphere
    pub upper_bias: f32,
    /// Factor applied to the vertical displacement of the lower hemisphere
    pub lower_bias: f32,
}

impl Default for CloudParameters {
    fn default() -> Self {
        CloudParameters {
            segments: 30,
            center: [0.0, 4.0, 0.0],
            radius: 4.0,
            upper_bias: 1.2,
            lower_bias: 0.8,
        }
    }
}

impl CloudParameters {
    pub fn grid(&self) -> Result<Grid> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            warn!(radius = self.radius, "Rejected cloud radius");
            return Err(ProceduralError::InvalidRadius(self.radius));
        }

        Grid::new(self.segments)
    }

    /// Displacement of a unit sphere point, with the hemisphere bias applied.
    ///
    /// Points on the equator count as lower hemisphere.
    pub fn offset(&self, point: Vector3f) -> Vector3f {
        let mut offset = raw_offset(point);
        offset.y *= if point.y > 0.0 {
            self.upper_bias
        } else {
            self.lower_bias
        };

        offset
    }

    /// Final position of the sphere vertex at (`latitude`, `longitude`).
    pub fn vertex(&self, latitude: u32, longitude: u32) -> Vector3f {
        let point = sphere_point(latitude, longitude, self.segments);

        Vector3f::from(self.center) + (point + self.offset(point)) * self.radius
    }
}

/// Summed displacement of all bands, without any bias.
pub fn raw_offset(point: Vector3f) -> Vector3f {
    DEFORMATION_BANDS
        .iter()
        .fold(Vector3f::zero(), |offset, band| offset + band.offset(point))
}

/// Unit sphere point for ring `latitude` (0 at the top pole) and meridian `longitude`.
pub fn sphere_point(latitude: u32, longitude: u32, segments: u32) -> Vector3f {
    let theta = latitude as f32 * PI / segments as f32;
    let phi = longitude as f32 * 2.0 * PI / segments as f32;

    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();

    Vector3f::new(cos_phi * sin_theta, cos_theta, sin_phi * sin_theta)
}

#[instrument]
pub fn generate_cloud(parameters: &CloudParameters) -> Result<Mesh> {
    let grid = parameters.grid()?;
    let mut mesh = grid.allocate_mesh()?;

    // Rings of latitude play the role of grid rows.
    for (longitude, latitude) in grid.points() {
        mesh.push_vertex(parameters.vertex(latitude, longitude).to_array());
    }
    grid.triangulate_into(&mut mesh);

    debug!(
        vertices = mesh.vertex_count(),
        indices = mesh.index_count(),
        "Generated cloud"
    );

    Ok(mesh)
}

/// Generates every cloud and merges them into a single mesh.
#[instrument(skip(clouds), fields(count = clouds.len()))]
pub fn generate_clouds(clouds: &[CloudParameters]) -> Result<Mesh> {
    let mut field = Mesh::new();

    for parameters in clouds {
        field.append(&generate_cloud(parameters)?)?;
    }

    Ok(field)
}

/// Like [`generate_cloud`], for callers holding optional handles.
///
/// `out` is only replaced once generation succeeded.
pub fn generate_cloud_into(parameters: Option<&CloudParameters>, out: Option<&mut Mesh>) -> Result<()> {
    let parameters = parameters.ok_or(ProceduralError::NullArgument("parameters"))?;
    let out = out.ok_or(ProceduralError::NullArgument("out"))?;

    *out = generate_cloud(parameters)?;
    Ok(())
}
