use std::sync::OnceLock;

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use tracing::debug;

use super::NoiseSource;

#[rustfmt::skip]
const REFERENCE_PERMUTATION: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225,
    140, 36, 103, 30, 69, 142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148,
    247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219, 203, 117, 35, 11, 32,
    57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122,
    60, 211, 133, 230, 220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54,
    65, 25, 63, 161, 1, 216, 80, 73, 209, 76, 132, 187, 208, 89, 18, 169,
    200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173, 186, 3, 64,
    52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212,
    207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213,
    119, 248, 152, 2, 44, 154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9,
    129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232, 178, 185, 112, 104,
    218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162, 241,
    81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157,
    184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93,
    222, 114, 67, 29, 24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
];

/// Classic (improved) Perlin gradient noise.
///
/// The permutation table is built once when the value is created and never
/// changes afterwards, so a `PerlinNoise` can be shared freely between threads.
#[derive(Clone)]
pub struct PerlinNoise {
    // The 256 entry permutation, repeated so lookups never need to wrap.
    permutation: [u8; 512],
}

impl PerlinNoise {
    /// Builds a noise field from a permutation shuffled by `seed`.
    pub fn new(seed: u64) -> Self {
        let mut table: [u8; 256] = std::array::from_fn(|i| i as u8);
        table.shuffle(&mut StdRng::seed_from_u64(seed));

        debug!(seed, "Built seeded permutation table");

        Self::from_permutation(table)
    }

    /// Builds a noise field using Ken Perlin's reference permutation.
    pub fn reference() -> Self {
        Self::from_permutation(REFERENCE_PERMUTATION)
    }

    /// Builds a noise field from a caller supplied table.
    ///
    /// The table should hold every value in `0..=255` exactly once, otherwise
    /// some gradients are favoured over others.
    pub fn from_permutation(table: [u8; 256]) -> Self {
        PerlinNoise {
            permutation: std::array::from_fn(|i| table[i & 255]),
        }
    }

    /// A process-wide instance using the reference permutation, initialised on first use.
    pub fn shared() -> &'static PerlinNoise {
        static SHARED: OnceLock<PerlinNoise> = OnceLock::new();

        SHARED.get_or_init(PerlinNoise::reference)
    }

    /// Samples the field. The result lies roughly within `[-1, 1]` and is zero on
    /// every integer lattice point.
    pub fn noise(&self, x: f32, y: f32, z: f32) -> f32 {
        let p = |index: usize| self.permutation[index] as usize;

        let (cell_x, x) = split_lattice(x);
        let (cell_y, y) = split_lattice(y);
        let (cell_z, z) = split_lattice(z);

        let (u, v, w) = (fade(x), fade(y), fade(z));

        let a = p(cell_x) + cell_y;
        let aa = p(a) + cell_z;
        let ab = p(a + 1) + cell_z;
        let b = p(cell_x + 1) + cell_y;
        let ba = p(b) + cell_z;
        let bb = p(b + 1) + cell_z;

        lerp(
            w,
            lerp(
                v,
                lerp(u, grad(p(aa), x, y, z), grad(p(ba), x - 1.0, y, z)),
                lerp(u, grad(p(ab), x, y - 1.0, z), grad(p(bb), x - 1.0, y - 1.0, z)),
            ),
            lerp(
                v,
                lerp(
                    u,
                    grad(p(aa + 1), x, y, z - 1.0),
                    grad(p(ba + 1), x - 1.0, y, z - 1.0),
                ),
                lerp(
                    u,
                    grad(p(ab + 1), x, y - 1.0, z - 1.0),
                    grad(p(bb + 1), x - 1.0, y - 1.0, z - 1.0),
                ),
            ),
        )
    }
}

impl Default for PerlinNoise {
    fn default() -> Self {
        Self::reference()
    }
}

impl std::fmt::Debug for PerlinNoise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PerlinNoise")
            .field("permutation", &&self.permutation[..8])
            .finish_non_exhaustive()
    }
}

impl NoiseSource for PerlinNoise {
    fn sample(&self, x: f32, y: f32, z: f32) -> f32 {
        self.noise(x, y, z)
    }
}

/// Splits a coordinate into its wrapped lattice cell and the offset inside it.
fn split_lattice(value: f32) -> (usize, f32) {
    let floor = value.floor();

    ((floor as i32 & 255) as usize, value - floor)
}

/// `6t^5 - 15t^4 + 10t^3`, flat first and second derivatives at both ends.
fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn lerp(t: f32, a: f32, b: f32) -> f32 {
    a + t * (b - a)
}

/// Dot product of the offset with one of twelve cube edge gradients picked by `hash`.
fn grad(hash: usize, x: f32, y: f32, z: f32) -> f32 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = match h {
        0..=3 => y,
        12 | 14 => x,
        _ => z,
    };

    (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
}
