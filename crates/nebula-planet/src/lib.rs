//! Planet mesh generation: builds a single watertight cubesphere mesh whose
//! vertices are displaced by layered noise, and keeps it in sync with the
//! planet's settings.

mod assembler;
mod error;
mod face_builder;
mod mesh;
mod planet;

pub use assembler::{AssembledFaces, CubeSphereMeshAssembler};
pub use error::MeshError;
pub use face_builder::{CubeFaceBuilder, FacePlan, FreshVertex, surface_vertex};
pub use mesh::{MeshBounds, PlanetMesh, expected_triangle_count, expected_vertex_count};
pub use planet::{Planet, generate_mesh};
