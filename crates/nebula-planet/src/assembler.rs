//! Assembles six cube faces into one seamless planet mesh.
//!
//! Faces are built in three phases, each reusing boundaries from the
//! phases before it:
//!
//! 1. `+x` and `-x`, no neighbors yet.
//! 2. `+y` and `-y`, sharing edges with `+x` and `-x`.
//! 3. `+z` and `-z`, sharing all four edges with the faces above.
//!
//! Edge lists are reversed where needed so that shared ids line up with the
//! new face's own west→east / south→north traversal. Within a phase the
//! displacement work is split across worker threads; phases run strictly
//! one after another.

use std::time::Instant;

use nebula_cubesphere::{CubeFace, EdgeList, FaceCoord, FaceGrid, push_face_triangles};
use nebula_terrain::ShapeGenerator;
use tracing::debug;

use crate::error::MeshError;
use crate::face_builder::{CubeFaceBuilder, FacePlan, surface_vertex};
use crate::mesh::{PlanetMesh, expected_triangle_count, expected_vertex_count};

/// Below this many fresh vertices per worker, extra threads cost more than
/// they save.
const MIN_VERTICES_PER_WORKER: usize = 1024;

/// The six face grids and the shared position buffer they index.
#[derive(Clone, Debug)]
pub struct AssembledFaces {
    /// Grids in [`CubeFace::ALL`] order.
    pub grids: Vec<FaceGrid>,
    /// Displaced positions, indexed by vertex id.
    pub positions: Vec<[f32; 3]>,
}

impl AssembledFaces {
    /// The grid for `face`.
    pub fn grid(&self, face: CubeFace) -> &FaceGrid {
        &self.grids[face as usize]
    }
}

/// Builds a [`PlanetMesh`] for one resolution and shape.
pub struct CubeSphereMeshAssembler<'a> {
    builder: CubeFaceBuilder,
    shape: &'a ShapeGenerator,
    threads: usize,
}

impl<'a> CubeSphereMeshAssembler<'a> {
    /// Create an assembler. Fails if `resolution` is below 2 or too large
    /// for 32-bit indices.
    pub fn new(resolution: u32, shape: &'a ShapeGenerator) -> Result<Self, MeshError> {
        Ok(Self {
            builder: CubeFaceBuilder::new(resolution)?,
            shape,
            threads: 1,
        })
    }

    /// Number of displacement workers. `0` uses one per logical CPU.
    ///
    /// The generated mesh is identical for every worker count.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = if threads == 0 {
            num_cpus::get()
        } else {
            threads
        };
        self
    }

    /// Build and displace all six faces.
    pub fn build_faces(&self) -> Result<AssembledFaces, MeshError> {
        let mut positions = Vec::with_capacity(self.expected_vertices());
        let mut next_id = 0u32;

        let [px, nx] = self.run_phase(
            1,
            [
                (CubeFace::PosX, EdgeList::none()),
                (CubeFace::NegX, EdgeList::none()),
            ],
            &mut next_id,
            &mut positions,
        )?;

        let [py, ny] = self.run_phase(
            2,
            [
                (
                    CubeFace::PosY,
                    EdgeList::none()
                        .with_north(px.east(false))
                        .with_south(nx.east(true)),
                ),
                (
                    CubeFace::NegY,
                    EdgeList::none()
                        .with_north(nx.west(true))
                        .with_south(px.west(false)),
                ),
            ],
            &mut next_id,
            &mut positions,
        )?;

        let [pz, nz] = self.run_phase(
            3,
            [
                (
                    CubeFace::PosZ,
                    EdgeList::none()
                        .with_north(py.east(false))
                        .with_south(ny.east(true))
                        .with_east(px.north(false))
                        .with_west(nx.south(false)),
                ),
                (
                    CubeFace::NegZ,
                    EdgeList::none()
                        .with_north(ny.west(true))
                        .with_south(py.west(false))
                        .with_east(px.south(true))
                        .with_west(nx.north(true)),
                ),
            ],
            &mut next_id,
            &mut positions,
        )?;

        Ok(AssembledFaces {
            grids: vec![px, nx, py, ny, pz, nz],
            positions,
        })
    }

    /// Build the faces and triangulate them into a single mesh.
    pub fn assemble(&self) -> Result<PlanetMesh, MeshError> {
        let faces = self.build_faces()?;
        let mut indices = Vec::with_capacity(self.expected_triangles() * 3);
        for grid in &faces.grids {
            push_face_triangles(grid, &mut indices);
        }
        Ok(PlanetMesh::new(
            self.builder.resolution() as u32,
            faces.positions,
            indices,
        ))
    }

    fn run_phase(
        &self,
        phase: u32,
        faces: [(CubeFace, EdgeList); 2],
        next_id: &mut u32,
        positions: &mut Vec<[f32; 3]>,
    ) -> Result<[FaceGrid; 2], MeshError> {
        let start = Instant::now();
        let base = positions.len();

        let [(face_a, edges_a), (face_b, edges_b)] = faces;
        debug_assert_eq!(face_b, face_a.opposite(), "phases pair opposite faces");
        let plan_a = self.builder.plan(face_a, &edges_a, next_id)?;
        let plan_b = self.builder.plan(face_b, &edges_b, next_id)?;

        let jobs: Vec<FaceCoord> = [&plan_a, &plan_b]
            .into_iter()
            .flat_map(|plan: &FacePlan| plan.fresh.iter().map(|v| v.coord))
            .collect();
        debug_assert_eq!(base + jobs.len(), *next_id as usize);

        positions.resize(*next_id as usize, [0.0; 3]);
        displace(&jobs, self.shape, &mut positions[base..], self.threads);

        debug!(
            "Phase {phase} ({face_a}, {face_b}): {} new vertices in {:.2?}",
            jobs.len(),
            start.elapsed()
        );
        Ok([plan_a.grid, plan_b.grid])
    }

    fn expected_vertices(&self) -> usize {
        expected_vertex_count(self.builder.resolution() as u32) as usize
    }

    fn expected_triangles(&self) -> usize {
        expected_triangle_count(self.builder.resolution() as u32) as usize
    }
}

/// Write the surface position of `jobs[i]` into `out[i]`, splitting the
/// work into disjoint contiguous slices across up to `threads` workers.
fn displace(jobs: &[FaceCoord], shape: &ShapeGenerator, out: &mut [[f32; 3]], threads: usize) {
    debug_assert_eq!(jobs.len(), out.len());
    let workers = threads.min(jobs.len() / MIN_VERTICES_PER_WORKER).max(1);

    if workers == 1 {
        for (slot, coord) in out.iter_mut().zip(jobs) {
            *slot = surface_vertex(shape, coord);
        }
        return;
    }

    let chunk = jobs.len().div_ceil(workers);
    std::thread::scope(|scope| {
        for (job_chunk, out_chunk) in jobs.chunks(chunk).zip(out.chunks_mut(chunk)) {
            scope.spawn(move || {
                for (slot, coord) in out_chunk.iter_mut().zip(job_chunk) {
                    *slot = surface_vertex(shape, coord);
                }
            });
        }
    });
}
