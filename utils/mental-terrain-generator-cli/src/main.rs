mod config;
mod output;

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use mental_procedural::{generate_clouds, generate_terrain, save_ground_texture, PerlinNoise};
use mental_rendering::upload_mesh;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::load_configuration;
use crate::output::{camera_from_configuration, write_camera, JsonMeshWriter};

#[derive(Parser, Debug)]
#[clap(name = env!("CARGO_CRATE_NAME"), version)]
struct Args {
    /// JSON file layered over the default configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory receiving the generated files
    #[arg(short, long, default_value = "generated")]
    output: PathBuf,

    /// Noise seed, overriding the configured one
    #[arg(short, long)]
    seed: Option<u64>,

    /// What to generate
    #[arg(
        short,
        long,
        value_enum,
        num_args = 1..,
        default_values = ["terrain", "clouds", "ground-texture", "camera"]
    )]
    artifacts: Vec<Artifact>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Artifact {
    Terrain,
    Clouds,
    GroundTexture,
    Camera,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = Args::parse();
    args.artifacts.sort_unstable();
    args.artifacts.dedup();

    let mut configuration =
        load_configuration(args.config.as_deref()).context(anyhow!("Failed to load configuration"))?;
    if let Some(seed) = args.seed {
        configuration.seed = Some(seed);
    }

    fs::create_dir_all(&args.output).context(anyhow!("Failed to create output directory"))?;

    let noise = match configuration.seed {
        Some(seed) => PerlinNoise::new(seed),
        None => PerlinNoise::reference(),
    };

    for artifact in &args.artifacts {
        match artifact {
            Artifact::Terrain => {
                let mesh = generate_terrain(&noise, &configuration.terrain)
                    .context(anyhow!("Failed to generate terrain"))?;
                let path = upload_mesh(&JsonMeshWriter::new(args.output.join("terrain.json")), &mesh)
                    .context(anyhow!("Failed to write terrain mesh"))?;

                info!(path = %path.display(), vertices = mesh.vertex_count(), "Wrote terrain");
            }
            Artifact::Clouds => {
                let mesh = generate_clouds(&configuration.clouds)
                    .context(anyhow!("Failed to generate clouds"))?;
                let path = upload_mesh(&JsonMeshWriter::new(args.output.join("clouds.json")), &mesh)
                    .context(anyhow!("Failed to write cloud mesh"))?;

                info!(path = %path.display(), vertices = mesh.vertex_count(), "Wrote clouds");
            }
            Artifact::GroundTexture => {
                let path = args.output.join("ground.ppm");
                save_ground_texture(&path, &noise, &configuration.ground_texture)
                    .context(anyhow!("Failed to write ground texture"))?;

                info!(path = %path.display(), "Wrote ground texture");
            }
            Artifact::Camera => {
                let path = args.output.join("camera.json");
                let camera = camera_from_configuration(&configuration.camera);
                write_camera(&path, &camera, configuration.camera.aspect_ratio())
                    .context(anyhow!("Failed to write camera"))?;

                info!(path = %path.display(), "Wrote camera");
            }
        }
    }

    println!("Done!");

    Ok(())
}

#[cfg(test)]
mod test {
    use clap::Parser;

    use super::{Args, Artifact};

    #[test]
    fn every_artifact_by_default() {
        let args = Args::try_parse_from(["generator"]).unwrap();

        assert_eq!(
            args.artifacts,
            vec![Artifact::Terrain, Artifact::Clouds, Artifact::GroundTexture, Artifact::Camera]
        );
        assert_eq!(args.output, std::path::PathBuf::from("generated"));
        assert_eq!(args.seed, None);
    }

    #[test]
    fn artifacts_and_seed_from_flags() {
        let args =
            Args::try_parse_from(["generator", "--seed", "7", "-a", "ground-texture", "terrain"]).unwrap();

        assert_eq!(args.seed, Some(7));
        assert_eq!(args.artifacts, vec![Artifact::GroundTexture, Artifact::Terrain]);
    }
}
