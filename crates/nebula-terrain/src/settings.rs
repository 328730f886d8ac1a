//! Advisory parameter ranges and partial settings updates.
//!
//! The ranges mirror what an editor exposes. Generation itself never
//! clamps; callers that want in-range values ask for a clamped copy.

use std::ops::RangeInclusive;

use glam::DVec3;

use crate::error::SettingsError;
use crate::noise_filter::NoiseSettings;
use crate::shape::{NoiseLayer, ShapeSettings};

/// Inclusive editor ranges for every tunable parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct SettingsLimits {
    /// Vertices per cube-face side.
    pub resolution: RangeInclusive<u32>,
    /// Base planet radius.
    pub radius: RangeInclusive<f64>,
    /// Layer strength.
    pub strength: RangeInclusive<f64>,
    /// First-pass frequency.
    pub roughness: RangeInclusive<f64>,
    /// Each axis of the sample offset.
    pub center: RangeInclusive<f64>,
    /// Fractal passes per layer.
    pub num_passes: RangeInclusive<u32>,
    /// Amplitude multiplier between passes.
    pub strength_factor: RangeInclusive<f64>,
    /// Frequency multiplier between passes.
    pub roughness_factor: RangeInclusive<f64>,
    /// Floor subtracted from the raw sum.
    pub min_value: RangeInclusive<f64>,
}

/// The limits used by the planet editor.
pub const SETTINGS_LIMITS: SettingsLimits = SettingsLimits {
    resolution: 2..=256,
    radius: 0.1..=10.0,
    strength: 0.0..=1.0,
    roughness: 0.0..=5.0,
    center: -2.0..=2.0,
    num_passes: 1..=8,
    strength_factor: 0.0..=1.0,
    roughness_factor: 0.0..=3.0,
    min_value: 0.0..=2.0,
};

fn clamp_to<T: PartialOrd + Copy>(value: T, range: &RangeInclusive<T>) -> T {
    if value < *range.start() {
        *range.start()
    } else if value > *range.end() {
        *range.end()
    } else {
        value
    }
}

impl SettingsLimits {
    /// Clamp a grid resolution into range.
    pub fn clamp_resolution(&self, resolution: u32) -> u32 {
        clamp_to(resolution, &self.resolution)
    }

    /// A copy of `settings` with every field clamped into range.
    pub fn clamp_noise(&self, settings: &NoiseSettings) -> NoiseSettings {
        let c = &self.center;
        NoiseSettings {
            strength: clamp_to(settings.strength, &self.strength),
            roughness: clamp_to(settings.roughness, &self.roughness),
            center: DVec3::new(
                clamp_to(settings.center.x, c),
                clamp_to(settings.center.y, c),
                clamp_to(settings.center.z, c),
            ),
            num_passes: clamp_to(settings.num_passes, &self.num_passes),
            strength_factor: clamp_to(settings.strength_factor, &self.strength_factor),
            roughness_factor: clamp_to(settings.roughness_factor, &self.roughness_factor),
            min_value: clamp_to(settings.min_value, &self.min_value),
        }
    }

    /// A copy of `settings` with the radius and every layer clamped.
    pub fn clamp_shape(&self, settings: &ShapeSettings) -> ShapeSettings {
        ShapeSettings {
            radius: clamp_to(settings.radius, &self.radius),
            noise_layers: settings
                .noise_layers
                .iter()
                .map(|layer| NoiseLayer {
                    enabled: layer.enabled,
                    noise_settings: self.clamp_noise(&layer.noise_settings),
                })
                .collect(),
        }
    }

    /// Whether every field of `settings` already lies in range.
    pub fn shape_in_range(&self, settings: &ShapeSettings) -> bool {
        &self.clamp_shape(settings) == settings
    }
}

/// Field-by-field replacement for one noise layer. `None` keeps the
/// current value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoiseLayerUpdate {
    /// Turn the layer on or off.
    pub enabled: Option<bool>,
    /// New `strength`.
    pub strength: Option<f64>,
    /// New `roughness`.
    pub roughness: Option<f64>,
    /// New `center`.
    pub center: Option<DVec3>,
    /// New `num_passes`.
    pub num_passes: Option<u32>,
    /// New `strength_factor`.
    pub strength_factor: Option<f64>,
    /// New `roughness_factor`.
    pub roughness_factor: Option<f64>,
    /// New `min_value`.
    pub min_value: Option<f64>,
}

impl NoiseLayerUpdate {
    fn apply(&self, layer: &mut NoiseLayer) {
        let s = &mut layer.noise_settings;
        if let Some(enabled) = self.enabled {
            layer.enabled = enabled;
        }
        if let Some(v) = self.strength {
            s.strength = v;
        }
        if let Some(v) = self.roughness {
            s.roughness = v;
        }
        if let Some(v) = self.center {
            s.center = v;
        }
        if let Some(v) = self.num_passes {
            s.num_passes = v;
        }
        if let Some(v) = self.strength_factor {
            s.strength_factor = v;
        }
        if let Some(v) = self.roughness_factor {
            s.roughness_factor = v;
        }
        if let Some(v) = self.min_value {
            s.min_value = v;
        }
    }
}

/// A partial change to [`ShapeSettings`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShapeSettingsUpdate {
    /// New base radius.
    pub radius: Option<f64>,
    /// `(layer index, update)` pairs, applied in order.
    pub layers: Vec<(usize, NoiseLayerUpdate)>,
}

impl ShapeSettingsUpdate {
    /// Update only the radius.
    pub fn radius(radius: f64) -> Self {
        Self {
            radius: Some(radius),
            ..Default::default()
        }
    }

    /// Add an update for layer `index`.
    pub fn with_layer(mut self, index: usize, update: NoiseLayerUpdate) -> Self {
        self.layers.push((index, update));
        self
    }
}

impl ShapeSettings {
    /// Merge `update` into a copy of these settings.
    ///
    /// The copy is validated before it is returned; `self` is left
    /// untouched either way.
    pub fn merged(&self, update: &ShapeSettingsUpdate) -> Result<ShapeSettings, SettingsError> {
        let mut next = self.clone();
        if let Some(radius) = update.radius {
            next.radius = radius;
        }
        let len = next.noise_layers.len();
        for (index, layer_update) in &update.layers {
            let layer = next
                .noise_layers
                .get_mut(*index)
                .ok_or(SettingsError::NoSuchLayer { index: *index, len })?;
            layer_update.apply(layer);
        }
        next.validate()?;
        Ok(next)
    }
}
