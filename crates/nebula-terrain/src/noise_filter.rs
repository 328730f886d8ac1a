//! Single fractal noise layer.
//!
//! Sums several passes of the underlying noise, each pass at a higher
//! frequency and (usually) a lower amplitude than the last, then floors
//! the result so low-lying terrain flattens out into plains.

use std::sync::Arc;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::noise_source::NoiseSource;

/// Parameters for one fractal noise layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseSettings {
    /// Final scale applied to the floored sum.
    pub strength: f64,
    /// Frequency of the first pass.
    pub roughness: f64,
    /// Offset added to every sample point, after frequency scaling.
    pub center: DVec3,
    /// Number of passes. Zero contributes no elevation.
    pub num_passes: u32,
    /// Amplitude multiplier between successive passes.
    pub strength_factor: f64,
    /// Frequency multiplier between successive passes.
    pub roughness_factor: f64,
    /// Amount subtracted from the raw sum before flooring at zero.
    pub min_value: f64,
}

impl Default for NoiseSettings {
    fn default() -> Self {
        Self {
            strength: 0.5,
            roughness: 2.5,
            center: DVec3::ZERO,
            num_passes: 1,
            strength_factor: 0.5,
            roughness_factor: 2.0,
            min_value: 0.0,
        }
    }
}

/// Evaluates one noise layer at points on the unit sphere.
#[derive(Clone)]
pub struct NoiseFilter {
    settings: NoiseSettings,
    noise: Arc<dyn NoiseSource>,
}

impl NoiseFilter {
    /// Create a filter sampling `noise` with the given settings.
    pub fn new(settings: NoiseSettings, noise: Arc<dyn NoiseSource>) -> Self {
        Self { settings, noise }
    }

    /// Elevation contribution at `point`, always `>= 0` for non-negative
    /// strength.
    pub fn evaluate(&self, point: DVec3) -> f64 {
        let s = &self.settings;
        let mut value = 0.0;
        let mut frequency = s.roughness;
        let mut amplitude = 1.0;

        for _ in 0..s.num_passes {
            let sample = self.noise.sample(point * frequency + s.center);
            // Rescale from [-1, 1] to [0, 1]
            value += (sample + 1.0) * 0.5 * amplitude;
            frequency *= s.roughness_factor;
            amplitude *= s.strength_factor;
        }

        value = (value - s.min_value).max(0.0);
        value * s.strength
    }

    /// The settings this filter evaluates with.
    pub fn settings(&self) -> &NoiseSettings {
        &self.settings
    }
}

impl std::fmt::Debug for NoiseFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseFilter")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
