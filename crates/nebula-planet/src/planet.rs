//! Planet controller: owns the current settings and the mesh derived from them.
//!
//! Every settings change regenerates the mesh synchronously. A change that
//! fails validation or generation is rejected as a whole: settings and mesh
//! stay exactly as they were.

use std::sync::Arc;
use std::time::Instant;

use nebula_terrain::{NoiseSource, ShapeGenerator, ShapeSettings, ShapeSettingsUpdate};
use tracing::{info, warn};

use crate::assembler::CubeSphereMeshAssembler;
use crate::error::MeshError;
use crate::mesh::PlanetMesh;

/// Generate a planet mesh from scratch.
///
/// `threads` is the displacement worker count, `0` for one per CPU.
pub fn generate_mesh(
    resolution: u32,
    shape: &ShapeSettings,
    noise: Arc<dyn NoiseSource>,
    threads: usize,
) -> Result<PlanetMesh, MeshError> {
    let start = Instant::now();
    let generator = ShapeGenerator::new(shape, noise)?;
    let mesh = CubeSphereMeshAssembler::new(resolution, &generator)?
        .with_threads(threads)
        .assemble()?;
    info!(
        "Planet mesh generated: resolution {}, {} vertices, {} triangles, {} active noise layers in {:.2?}",
        resolution,
        mesh.vertex_count(),
        mesh.triangle_count(),
        generator.active_layer_count(),
        start.elapsed()
    );
    Ok(mesh)
}

/// A planet with its current settings and generated mesh.
pub struct Planet {
    resolution: u32,
    shape: ShapeSettings,
    noise: Arc<dyn NoiseSource>,
    threads: usize,
    mesh: PlanetMesh,
    generation: u64,
}

impl Planet {
    /// Create a planet and generate its first mesh.
    pub fn new(
        resolution: u32,
        shape: ShapeSettings,
        noise: Arc<dyn NoiseSource>,
        threads: usize,
    ) -> Result<Self, MeshError> {
        let mesh = generate_mesh(resolution, &shape, Arc::clone(&noise), threads)?;
        Ok(Self {
            resolution,
            shape,
            noise,
            threads,
            mesh,
            generation: 1,
        })
    }

    /// The current mesh.
    pub fn mesh(&self) -> &PlanetMesh {
        &self.mesh
    }

    /// Vertices per cube-face side of the current mesh.
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Shape settings the current mesh was generated from.
    pub fn shape_settings(&self) -> &ShapeSettings {
        &self.shape
    }

    /// Incremented every time a new mesh is installed. Renderers compare it
    /// against the generation they last uploaded.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Rebuild the mesh with the current settings.
    pub fn regenerate(&mut self) -> Result<(), MeshError> {
        self.rebuild(self.resolution, self.shape.clone())
    }

    /// Change the grid resolution and regenerate.
    pub fn set_resolution(&mut self, resolution: u32) -> Result<(), MeshError> {
        self.rebuild(resolution, self.shape.clone())
    }

    /// Merge a partial shape update and regenerate.
    pub fn update_shape(&mut self, update: &ShapeSettingsUpdate) -> Result<(), MeshError> {
        let next = self.shape.merged(update).inspect_err(|e| {
            warn!("Rejected shape update: {e}");
        })?;
        self.rebuild(self.resolution, next)
    }

    /// Replace the shape settings wholesale and regenerate.
    pub fn replace_shape(&mut self, shape: ShapeSettings) -> Result<(), MeshError> {
        self.rebuild(self.resolution, shape)
    }

    /// Swap the noise source (e.g. for a new seed) and regenerate.
    pub fn set_noise(&mut self, noise: Arc<dyn NoiseSource>) -> Result<(), MeshError> {
        let mesh = self.try_generate(self.resolution, &self.shape, Arc::clone(&noise))?;
        self.noise = noise;
        self.install(mesh);
        Ok(())
    }

    fn rebuild(&mut self, resolution: u32, shape: ShapeSettings) -> Result<(), MeshError> {
        let mesh = self.try_generate(resolution, &shape, Arc::clone(&self.noise))?;
        self.resolution = resolution;
        self.shape = shape;
        self.install(mesh);
        Ok(())
    }

    fn try_generate(
        &self,
        resolution: u32,
        shape: &ShapeSettings,
        noise: Arc<dyn NoiseSource>,
    ) -> Result<PlanetMesh, MeshError> {
        generate_mesh(resolution, shape, noise, self.threads).inspect_err(|e| {
            warn!("Planet regeneration failed, keeping generation {}: {e}", self.generation);
        })
    }

    fn install(&mut self, mesh: PlanetMesh) {
        // The previous buffers are dropped here, once the replacement exists.
        self.mesh = mesh;
        self.generation += 1;
    }
}
