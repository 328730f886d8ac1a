//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Planet generator command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "nebula-planet", about = "Procedural cubesphere planet generator")]
pub struct CliArgs {
    /// Vertices along each side of a cube face.
    #[arg(long)]
    pub resolution: Option<u32>,

    /// Base planet radius.
    #[arg(long)]
    pub radius: Option<f64>,

    /// Noise seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Displacement worker threads (0 = one per CPU).
    #[arg(long)]
    pub threads: Option<usize>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(resolution) = args.resolution {
            self.planet.resolution = resolution;
        }
        if let Some(radius) = args.radius {
            self.planet.shape.radius = radius;
        }
        if let Some(seed) = args.seed {
            self.planet.seed = seed;
        }
        if let Some(threads) = args.threads {
            self.planet.threads = threads;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            resolution: Some(128),
            seed: Some(7),
            log_level: Some("debug".to_string()),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.planet.resolution, 128);
        assert_eq!(config.planet.seed, 7);
        assert_eq!(config.debug.log_level, "debug");
        // Non-overridden fields retain defaults
        assert_eq!(config.planet.shape.radius, 1.5);
        assert_eq!(config.planet.threads, 0);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::try_parse_from([
            "nebula-planet",
            "--resolution",
            "32",
            "--radius",
            "2.5",
            "--config",
            "/tmp/planet",
        ])
        .unwrap();
        assert_eq!(args.resolution, Some(32));
        assert_eq!(args.radius, Some(2.5));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/planet")));
        assert_eq!(args.seed, None);
    }
}
