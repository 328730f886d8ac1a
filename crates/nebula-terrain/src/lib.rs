//! Procedural planet terrain: fractal noise layers and the shape generator
//! that turns them into radial displacement.

mod error;
mod noise_filter;
mod noise_source;
mod settings;
mod shape;

pub use error::SettingsError;
pub use noise_filter::{NoiseFilter, NoiseSettings};
pub use noise_source::{ConstantNoise, NoiseSource, SimplexNoise};
pub use settings::{NoiseLayerUpdate, SETTINGS_LIMITS, SettingsLimits, ShapeSettingsUpdate};
pub use shape::{DEFAULT_NUM_NOISE_LAYERS, NoiseLayer, ShapeGenerator, ShapeSettings};
