//! Planet shape: base radius plus a stack of noise layers.

use std::sync::Arc;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::noise_filter::{NoiseFilter, NoiseSettings};
use crate::noise_source::NoiseSource;

/// Number of noise layers in a default shape.
pub const DEFAULT_NUM_NOISE_LAYERS: usize = 2;

/// One entry in the shape's noise stack.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseLayer {
    /// Disabled layers contribute nothing and are never evaluated.
    pub enabled: bool,
    /// Parameters for this layer's filter.
    pub noise_settings: NoiseSettings,
}

impl Default for NoiseLayer {
    fn default() -> Self {
        Self {
            enabled: true,
            noise_settings: NoiseSettings::default(),
        }
    }
}

/// Base radius and noise stack for a planet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeSettings {
    /// Radius of the undisplaced sphere. Must be positive.
    pub radius: f64,
    /// Noise layers, summed in order.
    pub noise_layers: Vec<NoiseLayer>,
}

impl Default for ShapeSettings {
    fn default() -> Self {
        Self {
            radius: 1.5,
            noise_layers: vec![NoiseLayer::default(); DEFAULT_NUM_NOISE_LAYERS],
        }
    }
}

impl ShapeSettings {
    /// A sphere of `radius` with no noise layers.
    pub fn flat(radius: f64) -> Self {
        Self {
            radius,
            noise_layers: Vec::new(),
        }
    }

    /// Reject settings no planet can be built from.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(SettingsError::InvalidRadius(self.radius));
        }
        Ok(())
    }
}

/// Displaces unit-sphere points outward according to [`ShapeSettings`].
pub struct ShapeGenerator {
    radius: f64,
    /// Filters for enabled layers only.
    filters: Vec<NoiseFilter>,
}

impl ShapeGenerator {
    /// Build a generator whose filters all sample `noise`.
    pub fn new(
        settings: &ShapeSettings,
        noise: Arc<dyn NoiseSource>,
    ) -> Result<Self, SettingsError> {
        settings.validate()?;
        let filters = settings
            .noise_layers
            .iter()
            .filter(|layer| layer.enabled)
            .map(|layer| NoiseFilter::new(layer.noise_settings.clone(), Arc::clone(&noise)))
            .collect();
        Ok(Self {
            radius: settings.radius,
            filters,
        })
    }

    /// Summed elevation of all enabled layers at `point_on_unit_sphere`.
    pub fn elevation(&self, point_on_unit_sphere: DVec3) -> f64 {
        self.filters
            .iter()
            .map(|f| f.evaluate(point_on_unit_sphere))
            .sum()
    }

    /// Scale `point_on_unit_sphere` by `radius * (1 + elevation)`.
    ///
    /// Displacement is purely radial, so the direction from the origin is
    /// unchanged.
    pub fn calculate_point_on_planet(&self, point_on_unit_sphere: DVec3) -> DVec3 {
        let elevation = self.elevation(point_on_unit_sphere);
        point_on_unit_sphere * (self.radius * (1.0 + elevation))
    }

    /// Base radius of the planet.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Number of layers that will be evaluated per point.
    pub fn active_layer_count(&self) -> usize {
        self.filters.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise_source::{ConstantNoise, SimplexNoise};

    const EPSILON: f64 = 1e-12;

    fn sphere_points() -> Vec<DVec3> {
        (0..200)
            .map(|i| {
                let t = i as f64 * 0.173;
                DVec3::new(t.sin() * (t * 0.3).cos(), t.cos(), (t * 1.7).sin()).normalize()
            })
            .collect()
    }

    fn simplex() -> Arc<dyn NoiseSource> {
        Arc::new(SimplexNoise::new(1234))
    }

    #[test]
    fn test_default_settings_match_presets() {
        let s = ShapeSettings::default();
        assert_eq!(s.radius, 1.5);
        assert_eq!(s.noise_layers.len(), DEFAULT_NUM_NOISE_LAYERS);
        assert!(s.noise_layers.iter().all(|l| l.enabled));
    }

    #[test]
    fn test_invalid_radius_rejected() {
        for radius in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let settings = ShapeSettings::flat(radius);
            assert!(ShapeGenerator::new(&settings, simplex()).is_err(), "radius {radius}");
        }
    }

    #[test]
    fn test_no_layers_gives_base_sphere() {
        let shape = ShapeGenerator::new(&ShapeSettings::flat(2.0), simplex()).unwrap();
        for p in sphere_points() {
            let q = shape.calculate_point_on_planet(p);
            assert!((q - p * 2.0).length() < EPSILON);
        }
    }

    #[test]
    fn test_all_disabled_gives_base_sphere() {
        let mut settings = ShapeSettings::default();
        settings.radius = 3.0;
        for layer in &mut settings.noise_layers {
            layer.enabled = false;
        }
        let shape = ShapeGenerator::new(&settings, simplex()).unwrap();
        assert_eq!(shape.active_layer_count(), 0);
        for p in sphere_points() {
            assert_eq!(shape.elevation(p), 0.0);
            assert_eq!(shape.calculate_point_on_planet(p), p * 3.0);
        }
    }

    #[test]
    fn test_displacement_is_radial() {
        let shape = ShapeGenerator::new(&ShapeSettings::default(), simplex()).unwrap();
        for p in sphere_points() {
            let q = shape.calculate_point_on_planet(p);
            let scale = q.dot(p);
            assert!(scale > 0.0, "point moved to the far side");
            assert!(
                (q - p * scale).length() < 1e-9,
                "displacement not radial at {p:?}: {q:?}"
            );
            assert!(q.length() >= shape.radius() - 1e-9, "displaced inward at {p:?}");
        }
    }

    #[test]
    fn test_disabling_a_layer_never_raises_elevation() {
        let all_on = ShapeSettings::default();
        let mut one_off = all_on.clone();
        one_off.noise_layers[1].enabled = false;

        let a = ShapeGenerator::new(&all_on, simplex()).unwrap();
        let b = ShapeGenerator::new(&one_off, simplex()).unwrap();
        for p in sphere_points() {
            assert!(b.elevation(p) <= a.elevation(p) + EPSILON);
        }
    }

    #[test]
    fn test_layer_order_does_not_matter() {
        let mut forward = ShapeSettings::default();
        forward.noise_layers[1].noise_settings.roughness = 4.0;
        forward.noise_layers[1].noise_settings.num_passes = 3;
        let mut reversed = forward.clone();
        reversed.noise_layers.reverse();

        let a = ShapeGenerator::new(&forward, simplex()).unwrap();
        let b = ShapeGenerator::new(&reversed, simplex()).unwrap();
        for p in sphere_points() {
            assert!((a.elevation(p) - b.elevation(p)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_single_constant_layer() {
        let settings = ShapeSettings {
            radius: 2.0,
            noise_layers: vec![NoiseLayer {
                enabled: true,
                noise_settings: NoiseSettings {
                    strength: 0.5,
                    num_passes: 1,
                    min_value: 0.0,
                    ..Default::default()
                },
            }],
        };
        let shape = ShapeGenerator::new(&settings, Arc::new(ConstantNoise(0.0))).unwrap();
        for p in sphere_points() {
            let q = shape.calculate_point_on_planet(p);
            assert!((q.length() - 2.0 * 1.25).abs() < 1e-9);
        }
    }
}
