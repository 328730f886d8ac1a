//! Mesh generation errors.

use nebula_cubesphere::{CubeFace, Edge};
use nebula_terrain::SettingsError;

/// Errors that prevent a planet mesh from being generated.
///
/// A failed generation produces no mesh; whatever mesh the caller already
/// holds stays valid.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshError {
    /// A face grid needs at least two vertices per side to form a triangle.
    #[error("resolution must be at least 2, got {0}")]
    InvalidResolution(u32),

    /// The mesh would need more vertex ids than a `u32` index buffer holds.
    #[error("resolution {0} produces more vertices than 32-bit indices can address")]
    ResolutionTooLarge(u32),

    /// A shared boundary handed to a face builder has the wrong length.
    #[error("{edge:?} edge for face {face} has {got} vertex ids, expected {expected}")]
    EdgeLength {
        face: CubeFace,
        edge: Edge,
        expected: usize,
        got: usize,
    },

    /// Appending a vertex would overflow the 32-bit id space.
    #[error("vertex buffer exceeds the 32-bit id space")]
    TooManyVertices,

    /// The shape settings were rejected.
    #[error(transparent)]
    Settings(#[from] SettingsError),
}
