//! Command-line planet generator.
//!
//! Loads `config.ron` (creating it on first run), applies CLI overrides,
//! generates the planet mesh once and prints its statistics.

mod platform;

use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use nebula_config::{CliArgs, Config, ConfigError};
use nebula_planet::{MeshError, Planet};
use nebula_terrain::SimplexNoise;
use platform::{PlatformDirs, PlatformError};
use tracing::info;

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Platform(#[from] PlatformError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("mesh generation failed: {0}")]
    Mesh(#[from] MeshError),
}

fn main() {
    let args = CliArgs::parse();
    if let Err(e) = run(&args) {
        eprintln!("nebula-planet: {e}");
        std::process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<(), AppError> {
    let dirs = PlatformDirs::resolve_with_override(args.config.as_deref())?;
    dirs.create_dirs()?;

    // Reported after the subscriber is installed.
    let config_path = Config::file_path(&dirs.config_dir);
    let existed = config_path.exists();
    let mut config = Config::load_or_create(&dirs.config_dir)?;
    config.apply_cli_overrides(args);
    config.validate()?;

    nebula_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));
    info!("{}", config_origin(&config_path, existed));

    let planet_config = &config.planet;
    let planet = Planet::new(
        planet_config.resolution,
        planet_config.shape.clone(),
        Arc::new(SimplexNoise::new(planet_config.seed)),
        planet_config.threads,
    )?;

    let mesh = planet.mesh();
    println!("Planet (seed {})", planet_config.seed);
    println!("  resolution:      {}", mesh.resolution());
    println!("  vertices:        {}", mesh.vertex_count());
    println!("  triangles:       {}", mesh.triangle_count());
    println!("  base radius:     {:.4}", planet_config.shape.radius);
    println!("  bounding radius: {:.4}", mesh.bounding_radius());
    if let Some(bounds) = mesh.bounds() {
        println!("  bounds:          {} .. {}", bounds.min, bounds.max);
        println!("  bounds center:   {}", bounds.center());
    }
    Ok(())
}

fn config_origin(path: &Path, existed: bool) -> String {
    if existed {
        format!("Loaded config from {}", path.display())
    } else {
        format!("Created default config at {}", path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_origin_reported_after_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = Config::file_path(dir.path());

        let existed = path.exists();
        Config::load_or_create(dir.path()).unwrap();
        let first = config_origin(&path, existed);
        assert!(first.starts_with("Created default config"));
        assert!(first.contains("config.ron"));

        let existed = path.exists();
        Config::load_or_create(dir.path()).unwrap();
        assert!(config_origin(&path, existed).starts_with("Loaded config from"));
    }
}
