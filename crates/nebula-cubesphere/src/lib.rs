//! Cube-sphere geometry: face bases, cube-to-sphere projection, per-face
//! vertex-index grids with shared boundaries, and triangulation.

mod cube_face;
mod face_coord;
mod face_grid;
mod projection;
mod winding;

pub use cube_face::CubeFace;
pub use face_coord::FaceCoord;
pub use face_grid::{Edge, EdgeList, FaceGrid};
pub use projection::{cube_to_sphere_everitt, face_coord_to_cube_point, face_coord_to_sphere};
pub use winding::{cell_triangles, push_face_triangles, triangle_winds_outward};
