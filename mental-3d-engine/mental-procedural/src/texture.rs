use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ExtendedColorType, ImageEncoder, Rgb, RgbImage};
use itertools::Itertools;
use tracing::{debug, instrument, warn};

use crate::errors::{BufferKind, ProceduralError, Result};
use crate::noise::NoiseSource;
use crate::terrain::Octave;

const TEXTURE_OCTAVES: [Octave; 4] = [
    Octave::new(1.0, 1.0),
    Octave::new(2.0, 0.5),
    Octave::new(4.0, 0.25),
    Octave::new(8.0, 0.125),
];

/// Colour stops from wet soil up to dry grass, keyed by normalised noise value.
const GROUND_RAMP: [(f32, [u8; 3]); 5] = [
    (0.0, [58, 44, 30]),
    (0.35, [96, 74, 48]),
    (0.5, [112, 100, 60]),
    (0.65, [78, 112, 58]),
    (1.0, [132, 158, 92]),
];

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serializable", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct GroundTextureParameters {
    pub width: u32,
    pub height: u32,
    /// Number of noise cells spanned by the texture
    pub scale: f32,
}

impl Default for GroundTextureParameters {
    fn default() -> Self {
        GroundTextureParameters {
            width: 512,
            height: 512,
            scale: 8.0,
        }
    }
}

/// Paints a tileable-looking ground texture from fractal noise.
#[instrument(skip(noise))]
pub fn generate_ground_texture<N: NoiseSource + ?Sized>(
    noise: &N,
    parameters: &GroundTextureParameters,
) -> Result<RgbImage> {
    let GroundTextureParameters { width, height, scale } = *parameters;

    if width == 0 || height == 0 {
        warn!(width, height, "Rejected empty texture");
        return Err(ProceduralError::InvalidResolution(width.min(height)));
    }

    let requested = (width as usize)
        .checked_mul(height as usize)
        .and_then(|count| count.checked_mul(3))
        .ok_or_else(|| {
            warn!(width, height, "Rejected oversized texture");
            ProceduralError::AllocationFailed {
                buffer: BufferKind::Pixel,
                requested: usize::MAX,
            }
        })?;
    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(requested)
        .map_err(|_| ProceduralError::AllocationFailed {
            buffer: BufferKind::Pixel,
            requested,
        })?;

    let total_amplitude: f32 = TEXTURE_OCTAVES.iter().map(|octave| octave.amplitude).sum();

    for y in 0..height {
        for x in 0..width {
            let u = x as f32 / width as f32 * scale;
            let v = y as f32 / height as f32 * scale;

            let value = TEXTURE_OCTAVES
                .iter()
                .map(|octave| {
                    noise.sample(u * octave.frequency, v * octave.frequency, 0.0) * octave.amplitude
                })
                .sum::<f32>()
                / total_amplitude;

            pixels.extend_from_slice(&ground_color(value * 0.5 + 0.5).0);
        }
    }

    debug!(width, height, "Generated ground texture");

    RgbImage::from_raw(width, height, pixels).ok_or(ProceduralError::AllocationFailed {
        buffer: BufferKind::Pixel,
        requested,
    })
}

/// Maps a value in `[0, 1]` onto the ground colour ramp. Values outside are clamped.
pub fn ground_color(value: f32) -> Rgb<u8> {
    let value = value.clamp(0.0, 1.0);

    let color = GROUND_RAMP
        .iter()
        .tuple_windows()
        .find(|(_, (upper, _))| value <= *upper)
        .map(|((lower, from), (upper, to))| {
            let t = (value - lower) / (upper - lower);
            std::array::from_fn(|i| (from[i] as f32 + (to[i] as f32 - from[i] as f32) * t).round() as u8)
        })
        .unwrap_or(GROUND_RAMP[GROUND_RAMP.len() - 1].1);

    Rgb(color)
}

/// Encodes `image` as a binary PPM (`P6`).
pub fn write_ppm<W: Write>(image: &RgbImage, writer: W) -> Result<()> {
    PnmEncoder::new(writer)
        .with_subtype(PnmSubtype::Pixmap(SampleEncoding::Binary))
        .write_image(image.as_raw(), image.width(), image.height(), ExtendedColorType::Rgb8)?;

    Ok(())
}

/// Generates a ground texture and stores it at `path` as a binary PPM.
#[instrument(skip(noise, path), fields(path = %path.as_ref().display()))]
pub fn save_ground_texture<N: NoiseSource + ?Sized>(
    path: impl AsRef<Path>,
    noise: &N,
    parameters: &GroundTextureParameters,
) -> Result<()> {
    let image = generate_ground_texture(noise, parameters)?;

    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    write_ppm(&image, &mut writer)?;
    writer.flush()?;

    Ok(())
}
