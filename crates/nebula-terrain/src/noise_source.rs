//! The coherent-noise primitive that noise layers sample.

use glam::DVec3;
use noise::{NoiseFn, Simplex};

/// A deterministic, continuous 3D noise function with output in \[-1, 1\].
///
/// Implementations must be shareable across generation worker threads.
pub trait NoiseSource: Send + Sync {
    /// Sample the noise at `point`.
    fn sample(&self, point: DVec3) -> f64;
}

/// Seeded 3D simplex noise.
pub struct SimplexNoise {
    noise: Simplex,
    seed: u64,
}

impl SimplexNoise {
    /// Create a simplex source for the given world seed.
    pub fn new(seed: u64) -> Self {
        // Fold both halves of the seed into the 32 bits the permutation table takes.
        let folded = (seed ^ (seed >> 32)) as u32;
        Self {
            noise: Simplex::new(folded),
            seed,
        }
    }

    /// The seed this source was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl NoiseSource for SimplexNoise {
    fn sample(&self, point: DVec3) -> f64 {
        self.noise.get([point.x, point.y, point.z]).clamp(-1.0, 1.0)
    }
}

impl std::fmt::Debug for SimplexNoise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimplexNoise")
            .field("seed", &self.seed)
            .finish()
    }
}

/// A noise source returning the same value everywhere.
///
/// Useful for flat test planets and for checking elevation arithmetic
/// against a known oracle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantNoise(pub f64);

impl NoiseSource for ConstantNoise {
    fn sample(&self, _point: DVec3) -> f64 {
        self.0.clamp(-1.0, 1.0)
    }
}
