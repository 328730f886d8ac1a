//! The generated planet mesh: flat position and index buffers.

use glam::{DVec3, Vec3};
use nebula_cubesphere::triangle_winds_outward;

/// Number of distinct vertices on a seamless cubesphere of `resolution`.
///
/// `6 (R-2)² + 12 (R-2) + 8`: face interiors, edge interiors, corners.
/// Saturates at `u64::MAX` for resolutions whose count does not fit.
pub fn expected_vertex_count(resolution: u32) -> u64 {
    if resolution < 2 {
        return 0;
    }
    let inner = u64::from(resolution) - 2;
    inner
        .saturating_mul(inner)
        .saturating_mul(6)
        .saturating_add(inner.saturating_mul(12))
        .saturating_add(8)
}

/// Number of triangles on a cubesphere of `resolution`: `12 (R-1)²`,
/// saturating at `u64::MAX`.
pub fn expected_triangle_count(resolution: u32) -> u64 {
    if resolution < 2 {
        return 0;
    }
    let cells = u64::from(resolution) - 1;
    cells.saturating_mul(cells).saturating_mul(12)
}

/// Axis-aligned bounds of a mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshBounds {
    /// Smallest coordinate on each axis.
    pub min: Vec3,
    /// Largest coordinate on each axis.
    pub max: Vec3,
}

impl MeshBounds {
    /// Center of the box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

/// One closed indexed triangle mesh for a whole planet.
///
/// Positions are shared between faces at seams: every cube edge and corner
/// appears exactly once. Triangles wind counter-clockwise when seen from
/// outside.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanetMesh {
    resolution: u32,
    positions: Vec<[f32; 3]>,
    indices: Vec<u32>,
}

impl PlanetMesh {
    pub(crate) fn new(resolution: u32, positions: Vec<[f32; 3]>, indices: Vec<u32>) -> Self {
        debug_assert_eq!(indices.len() % 3, 0);
        Self {
            resolution,
            positions,
            indices,
        }
    }

    /// Grid resolution the mesh was built at.
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Vertex positions, 3 floats each.
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    /// Triangle vertex ids, 3 per triangle.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of distinct vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate triangles as id triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Position buffer as raw bytes for GPU upload.
    pub fn positions_as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Index buffer as raw bytes for GPU upload.
    pub fn indices_as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Consume the mesh, returning `(positions, indices)`.
    pub fn into_buffers(self) -> (Vec<[f32; 3]>, Vec<u32>) {
        (self.positions, self.indices)
    }

    /// Axis-aligned bounding box, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<MeshBounds> {
        let first = Vec3::from(*self.positions.first()?);
        let (min, max) = self
            .positions
            .iter()
            .map(|&p| Vec3::from(p))
            .fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(MeshBounds { min, max })
    }

    /// Radius of the smallest origin-centered sphere containing every vertex.
    pub fn bounding_radius(&self) -> f32 {
        self.positions
            .iter()
            .map(|&p| Vec3::from(p).length())
            .fold(0.0, f32::max)
    }

    /// Smooth per-vertex normals, area-weighted over adjacent triangles.
    ///
    /// Vertices touched only by degenerate triangles get a zero normal.
    pub fn vertex_normals(&self) -> Vec<[f32; 3]> {
        let mut sums = vec![Vec3::ZERO; self.positions.len()];
        for [a, b, c] in self.triangles() {
            let pa = Vec3::from(self.positions[a as usize]);
            let pb = Vec3::from(self.positions[b as usize]);
            let pc = Vec3::from(self.positions[c as usize]);
            // Cross product length is twice the area, so larger triangles weigh more.
            let n = (pb - pa).cross(pc - pa);
            sums[a as usize] += n;
            sums[b as usize] += n;
            sums[c as usize] += n;
        }
        sums.into_iter()
            .map(|n| n.normalize_or_zero().to_array())
            .collect()
    }

    /// Number of triangles whose normal points towards the planet center.
    pub fn inward_triangle_count(&self) -> usize {
        self.triangles()
            .filter(|&[a, b, c]| {
                !triangle_winds_outward(
                    self.position_f64(a),
                    self.position_f64(b),
                    self.position_f64(c),
                )
            })
            .count()
    }

    fn position_f64(&self, id: u32) -> DVec3 {
        Vec3::from(self.positions[id as usize]).as_dvec3()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tetrahedron() -> PlanetMesh {
        let positions = vec![
            [1.0, 1.0, 1.0],
            [1.0, -1.0, -1.0],
            [-1.0, 1.0, -1.0],
            [-1.0, -1.0, 1.0],
        ];
        // Outward CCW ordering.
        let indices = vec![0, 1, 2, 0, 3, 1, 0, 2, 3, 1, 3, 2];
        PlanetMesh::new(2, positions, indices)
    }

    #[test]
    fn test_expected_counts() {
        assert_eq!(expected_vertex_count(2), 8);
        assert_eq!(expected_vertex_count(3), 26);
        assert_eq!(expected_vertex_count(10), 6 * 64 + 12 * 8 + 8);
        assert_eq!(expected_triangle_count(2), 12);
        assert_eq!(expected_triangle_count(4), 108);
        assert_eq!(expected_vertex_count(1), 0);
        assert_eq!(expected_triangle_count(0), 0);
    }

    #[test]
    fn test_expected_counts_saturate_instead_of_overflowing() {
        assert_eq!(expected_vertex_count(2_000_000_000), u64::MAX);
        assert_eq!(expected_vertex_count(u32::MAX), u64::MAX);
        assert_eq!(expected_triangle_count(u32::MAX), u64::MAX);
        // Largest counts that still fit are exact.
        assert_eq!(expected_vertex_count(65_536), 6 * 65_534u64 * 65_534 + 12 * 65_534 + 8);
        assert_eq!(expected_triangle_count(1_000_000_000), 12 * 999_999_999u64 * 999_999_999);
    }

    #[test]
    fn test_counts_and_bytes() {
        let mesh = tetrahedron();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 4);
        assert_eq!(mesh.positions_as_bytes().len(), 4 * 12);
        assert_eq!(mesh.indices_as_bytes().len(), 12 * 4);
        assert_eq!(mesh.triangles().next(), Some([0, 1, 2]));
    }

    #[test]
    fn test_bounds_and_radius() {
        let mesh = tetrahedron();
        let bounds = mesh.bounds().unwrap();
        assert_eq!(bounds.min, Vec3::splat(-1.0));
        assert_eq!(bounds.max, Vec3::splat(1.0));
        assert_eq!(bounds.center(), Vec3::ZERO);
        assert!((mesh.bounding_radius() - 3.0_f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_empty_mesh_has_no_bounds() {
        let mesh = PlanetMesh::new(2, Vec::new(), Vec::new());
        assert!(mesh.bounds().is_none());
        assert_eq!(mesh.bounding_radius(), 0.0);
    }

    #[test]
    fn test_normals_point_outward() {
        let mesh = tetrahedron();
        assert_eq!(mesh.inward_triangle_count(), 0);
        for (p, n) in mesh.positions().iter().zip(mesh.vertex_normals()) {
            let p = Vec3::from(*p);
            let n = Vec3::from(n);
            assert!((n.length() - 1.0).abs() < 1e-5);
            assert!(n.dot(p) > 0.0);
        }
    }

    #[test]
    fn test_flipped_triangle_detected() {
        let (positions, mut indices) = tetrahedron().into_buffers();
        indices.swap(1, 2);
        let mesh = PlanetMesh::new(2, positions, indices);
        assert_eq!(mesh.inward_triangle_count(), 1);
    }
}
