//! Triangulation of face grids and winding-order validation.
//!
//! Every face basis satisfies `east × north == zenith`, so one fixed
//! triangulation pattern yields counter-clockwise triangles seen from
//! outside the planet on all six faces. No per-face flip is needed.

use glam::DVec3;

use crate::face_grid::FaceGrid;

/// Check if a triangle has outward-facing winding order.
///
/// Returns `true` if the triangle's normal (via cross product) has a
/// positive dot product with the centroid direction from the planet center.
/// Vertices are planet-relative positions.
pub fn triangle_winds_outward(v0: DVec3, v1: DVec3, v2: DVec3) -> bool {
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    let face_normal = edge1.cross(edge2);

    let centroid = (v0 + v1 + v2) / 3.0;

    face_normal.dot(centroid) > 0.0
}

/// The two triangles covering grid cell `(x, y)`, `x, y < resolution - 1`.
///
/// `(v[x][y], v[x+1][y+1], v[x][y+1])` and `(v[x][y], v[x+1][y], v[x+1][y+1])`.
#[inline]
pub fn cell_triangles(grid: &FaceGrid, x: usize, y: usize) -> [[u32; 3]; 2] {
    let sw = grid.get(x, y);
    let se = grid.get(x + 1, y);
    let nw = grid.get(x, y + 1);
    let ne = grid.get(x + 1, y + 1);
    [[sw, ne, nw], [sw, se, ne]]
}

/// Append the triangles for every cell of `grid` to `indices`.
///
/// Cells are visited row by row from the south edge, west to east.
pub fn push_face_triangles(grid: &FaceGrid, indices: &mut Vec<u32>) {
    let cells = grid.resolution() - 1;
    indices.reserve(cells * cells * 6);
    for y in 0..cells {
        for x in 0..cells {
            for tri in cell_triangles(grid, x, y) {
                indices.extend_from_slice(&tri);
            }
        }
    }
}
