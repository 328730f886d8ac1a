//! Builds the vertex grid for one cube face.
//!
//! Cells on a boundary that an earlier face already produced reuse that
//! face's vertex ids; every other cell gets a fresh id and a displaced
//! surface position.

use nebula_cubesphere::{CubeFace, EdgeList, FaceCoord, FaceGrid, face_coord_to_sphere};
use nebula_terrain::ShapeGenerator;

use crate::error::MeshError;
use crate::mesh::expected_vertex_count;

/// A vertex this face creates itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FreshVertex {
    /// Id assigned in the shared vertex buffer.
    pub id: u32,
    /// Where on the face the vertex sits.
    pub coord: FaceCoord,
}

/// A face with every cell resolved to an id, before any positions are
/// computed.
#[derive(Clone, Debug)]
pub struct FacePlan {
    /// The finished id grid.
    pub grid: FaceGrid,
    /// Cells that need a new position, in ascending id order.
    pub fresh: Vec<FreshVertex>,
}

/// Resolves cube-face grids at a fixed resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CubeFaceBuilder {
    resolution: usize,
}

impl CubeFaceBuilder {
    /// Create a builder for `resolution × resolution` face grids.
    ///
    /// # Errors
    ///
    /// [`MeshError::InvalidResolution`] below 2, and
    /// [`MeshError::ResolutionTooLarge`] when the whole sphere would not fit
    /// in 32-bit vertex ids.
    pub fn new(resolution: u32) -> Result<Self, MeshError> {
        if resolution < 2 {
            return Err(MeshError::InvalidResolution(resolution));
        }
        if expected_vertex_count(resolution) > u64::from(u32::MAX) {
            return Err(MeshError::ResolutionTooLarge(resolution));
        }
        Ok(Self {
            resolution: resolution as usize,
        })
    }

    /// Vertices per face side.
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Resolve every cell of `face`, assigning fresh ids from `next_id`
    /// upward in row-major order (south row first, west to east).
    ///
    /// For each cell the first matching rule wins: north edge, south edge,
    /// east edge, west edge, otherwise a fresh vertex.
    pub fn plan(
        &self,
        face: CubeFace,
        edges: &EdgeList,
        next_id: &mut u32,
    ) -> Result<FacePlan, MeshError> {
        let r = self.resolution;
        for (edge, got) in edges.lengths() {
            if got != r {
                return Err(MeshError::EdgeLength {
                    face,
                    edge,
                    expected: r,
                    got,
                });
            }
        }

        let mut ids = vec![0u32; r * r];
        let mut fresh = Vec::new();

        for y in 0..r {
            for x in 0..r {
                let id = match edges.shared_id(x, y, r) {
                    Some(id) => id,
                    None => {
                        let id = *next_id;
                        *next_id = id.checked_add(1).ok_or(MeshError::TooManyVertices)?;
                        fresh.push(FreshVertex {
                            id,
                            coord: FaceCoord::from_grid(face, x, y, r),
                        });
                        id
                    }
                };
                ids[x * r + y] = id;
            }
        }

        Ok(FacePlan {
            grid: FaceGrid::from_columns(face, r, ids),
            fresh,
        })
    }

    /// Build `face` in one go, appending its fresh vertices to `vertices`.
    ///
    /// Ids continue from the current length of `vertices`.
    pub fn build(
        &self,
        face: CubeFace,
        edges: &EdgeList,
        shape: &ShapeGenerator,
        vertices: &mut Vec<[f32; 3]>,
    ) -> Result<FaceGrid, MeshError> {
        let mut next_id = u32::try_from(vertices.len()).map_err(|_| MeshError::TooManyVertices)?;
        let plan = self.plan(face, edges, &mut next_id)?;
        vertices.extend(plan.fresh.iter().map(|v| surface_vertex(shape, &v.coord)));
        Ok(plan.grid)
    }
}

/// Cube point → sphere → displaced planet surface, as an `f32` position.
#[inline]
pub fn surface_vertex(shape: &ShapeGenerator, coord: &FaceCoord) -> [f32; 3] {
    let on_sphere = face_coord_to_sphere(coord);
    shape
        .calculate_point_on_planet(on_sphere)
        .as_vec3()
        .to_array()
}
