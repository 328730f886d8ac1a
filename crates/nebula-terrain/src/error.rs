//! Settings validation errors.

/// Errors raised when shape settings cannot produce a planet.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    /// The base radius is zero, negative or not finite.
    #[error("planet radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    /// An update addressed a noise layer that does not exist.
    #[error("noise layer {index} does not exist (shape has {len} layers)")]
    NoSuchLayer { index: usize, len: usize },
}
