pub mod perlin;

pub use perlin::PerlinNoise;

/// A continuous scalar field sampled at arbitrary points.
///
/// Generators only ever read from their source, so any closure works as well:
///
/// ```
/// use mental_procedural::noise::NoiseSource;
///
/// let flat = |_x: f32, _y: f32, _z: f32| 0.5;
/// assert_eq!(flat.sample(1.0, 2.0, 3.0), 0.5);
/// ```
pub trait NoiseSource {
    fn sample(&self, x: f32, y: f32, z: f32) -> f32;
}

impl<F> NoiseSource for F
where
    F: Fn(f32, f32, f32) -> f32,
{
    fn sample(&self, x: f32, y: f32, z: f32) -> f32 {
        self(x, y, z)
    }
}
