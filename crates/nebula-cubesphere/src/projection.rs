//! Cube-to-sphere projection.
//!
//! Uses the Everitt/Mathworld analytic warp rather than plain normalization,
//! which spreads vertex area more evenly near cube edges and corners.

use glam::DVec3;

use crate::FaceCoord;

/// Convert a [`FaceCoord`] to a point on the surface of the `[-1, 1]` cube.
///
/// `zenith + (2u - 1) * east + (2v - 1) * north`. The face center
/// `(u=0.5, v=0.5)` maps to the zenith.
#[inline]
#[must_use]
pub fn face_coord_to_cube_point(fc: &FaceCoord) -> DVec3 {
    // Remap u, v from [0, 1] to [-1, 1]
    let s = 2.0 * fc.u - 1.0;
    let t = 2.0 * fc.v - 1.0;

    fc.face.zenith() + s * fc.face.east() + t * fc.face.north()
}

/// Analytic cube-to-sphere using the Everitt/Mathworld mapping.
///
/// Given a point on the cube surface (one coordinate is `±1`), compute the
/// corresponding sphere point:
///
/// ```text
/// sx = x * sqrt(1 - y²/2 - z²/2 + y²z²/3)
/// sy = y * sqrt(1 - z²/2 - x²/2 + z²x²/3)
/// sz = z * sqrt(1 - x²/2 - y²/2 + x²y²/3)
/// ```
///
/// The result is not renormalized; callers must tolerate a length that
/// differs from 1 by floating-point error. Each radicand is clamped to
/// zero before the square root so extreme inputs never produce NaN.
#[inline]
#[must_use]
pub fn cube_to_sphere_everitt(cube_point: DVec3) -> DVec3 {
    let x2 = cube_point.x * cube_point.x;
    let y2 = cube_point.y * cube_point.y;
    let z2 = cube_point.z * cube_point.z;

    DVec3::new(
        cube_point.x * warp_factor(y2, z2),
        cube_point.y * warp_factor(z2, x2),
        cube_point.z * warp_factor(x2, y2),
    )
}

#[inline]
fn warp_factor(a2: f64, b2: f64) -> f64 {
    (1.0 - a2 / 2.0 - b2 / 2.0 + a2 * b2 / 3.0).max(0.0).sqrt()
}

/// Convenience: [`FaceCoord`] → sphere using the Everitt mapping.
#[inline]
#[must_use]
pub fn face_coord_to_sphere(fc: &FaceCoord) -> DVec3 {
    cube_to_sphere_everitt(face_coord_to_cube_point(fc))
}
