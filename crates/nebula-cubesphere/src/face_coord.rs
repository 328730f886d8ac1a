//! 2D local coordinates on a cube face.

use crate::CubeFace;

/// A 2D coordinate on a cube face. `u` and `v` are in the range \[0, 1\].
///
/// `u` increases towards local east and `v` towards local north, so
/// `(u=0, v=0)` is the southwest corner of the face and `(u=1, v=1)` the
/// northeast corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceCoord {
    /// Which cube face this coordinate lies on.
    pub face: CubeFace,
    /// Eastward fraction of the face in \[0, 1\].
    pub u: f64,
    /// Northward fraction of the face in \[0, 1\].
    pub v: f64,
}

impl FaceCoord {
    /// Construct a `FaceCoord`, clamping `u` and `v` to \[0, 1\].
    #[must_use]
    pub fn new(face: CubeFace, u: f64, v: f64) -> Self {
        Self {
            face,
            u: u.clamp(0.0, 1.0),
            v: v.clamp(0.0, 1.0),
        }
    }

    /// The coordinate of grid cell `(x, y)` on a `resolution × resolution`
    /// vertex grid: `u = x / (resolution - 1)`, `v = y / (resolution - 1)`.
    ///
    /// Grid cells on the last row/column land exactly on `1.0`, so cells
    /// that two faces share map to bit-identical cube points.
    #[must_use]
    pub fn from_grid(face: CubeFace, x: usize, y: usize, resolution: usize) -> Self {
        debug_assert!(resolution >= 2, "resolution must be at least 2");
        let last = (resolution - 1) as f64;
        Self::new(face, x as f64 / last, y as f64 / last)
    }
}
