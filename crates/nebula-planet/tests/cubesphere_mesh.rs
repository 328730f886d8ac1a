//! Whole-sphere properties of the generated planet mesh.

use std::collections::HashSet;
use std::sync::Arc;

use glam::Vec3;
use nebula_cubesphere::{CubeFace, Edge, FaceCoord};
use nebula_planet::{
    CubeSphereMeshAssembler, PlanetMesh, expected_triangle_count, expected_vertex_count,
    generate_mesh, surface_vertex,
};
use nebula_terrain::{
    ConstantNoise, NoiseLayer, NoiseSettings, NoiseSource, ShapeGenerator, ShapeSettings,
    SimplexNoise,
};

fn simplex() -> Arc<dyn NoiseSource> {
    Arc::new(SimplexNoise::new(2024))
}

fn flat(radius: f64) -> ShapeGenerator {
    ShapeGenerator::new(&ShapeSettings::flat(radius), Arc::new(ConstantNoise(0.0))).unwrap()
}

fn norms(mesh: &PlanetMesh) -> Vec<f32> {
    mesh.positions()
        .iter()
        .map(|p| Vec3::from(*p).length())
        .collect()
}

/// Every cube edge, as `(face a, edge of a, face b, edge of b, reversed)`.
/// Walking edge `a` forward visits the same vertices as walking edge `b`
/// forward (or backward when `reversed`).
const SHARED_EDGES: [(CubeFace, Edge, CubeFace, Edge, bool); 12] = [
    (CubeFace::PosY, Edge::North, CubeFace::PosX, Edge::East, false),
    (CubeFace::PosY, Edge::South, CubeFace::NegX, Edge::East, true),
    (CubeFace::NegY, Edge::North, CubeFace::NegX, Edge::West, true),
    (CubeFace::NegY, Edge::South, CubeFace::PosX, Edge::West, false),
    (CubeFace::PosZ, Edge::North, CubeFace::PosY, Edge::East, false),
    (CubeFace::PosZ, Edge::South, CubeFace::NegY, Edge::East, true),
    (CubeFace::PosZ, Edge::East, CubeFace::PosX, Edge::North, false),
    (CubeFace::PosZ, Edge::West, CubeFace::NegX, Edge::South, false),
    (CubeFace::NegZ, Edge::North, CubeFace::NegY, Edge::West, true),
    (CubeFace::NegZ, Edge::South, CubeFace::PosY, Edge::West, false),
    (CubeFace::NegZ, Edge::East, CubeFace::PosX, Edge::South, true),
    (CubeFace::NegZ, Edge::West, CubeFace::NegX, Edge::North, true),
];

#[test]
fn test_vertex_and_triangle_counts() {
    let shape = flat(1.0);
    for resolution in [2, 3, 4, 5, 8, 17, 32] {
        let mesh = CubeSphereMeshAssembler::new(resolution, &shape)
            .unwrap()
            .assemble()
            .unwrap();
        assert_eq!(
            mesh.vertex_count() as u64,
            expected_vertex_count(resolution),
            "vertex count at resolution {resolution}"
        );
        assert_eq!(
            mesh.triangle_count() as u64,
            expected_triangle_count(resolution),
            "triangle count at resolution {resolution}"
        );
    }
}

#[test]
fn test_resolution_two_and_three() {
    let shape = flat(1.0);
    let r2 = CubeSphereMeshAssembler::new(2, &shape).unwrap().assemble().unwrap();
    assert_eq!(r2.vertex_count(), 8);
    assert_eq!(r2.indices().len(), 36);

    let r3 = CubeSphereMeshAssembler::new(3, &shape).unwrap().assemble().unwrap();
    assert_eq!(r3.vertex_count(), 26);
}

#[test]
fn test_every_vertex_referenced_and_in_range() {
    let mesh = generate_mesh(9, &ShapeSettings::default(), simplex(), 1).unwrap();
    let mut used = vec![false; mesh.vertex_count()];
    for &i in mesh.indices() {
        assert!((i as usize) < mesh.vertex_count(), "index {i} out of range");
        used[i as usize] = true;
    }
    assert!(used.iter().all(|u| *u), "orphan vertex in mesh");
}

#[test]
fn test_shared_edges_use_identical_ids() {
    let shape = flat(1.0);
    for resolution in [2, 3, 6] {
        let faces = CubeSphereMeshAssembler::new(resolution, &shape)
            .unwrap()
            .build_faces()
            .unwrap();
        for (fa, ea, fb, eb, reversed) in SHARED_EDGES {
            let a = faces.grid(fa).edge(ea, false);
            let b = faces.grid(fb).edge(eb, reversed);
            assert_eq!(
                a, b,
                "{fa} {ea:?} and {fb} {eb:?} disagree at resolution {resolution}"
            );
        }
    }
}

#[test]
fn test_every_cell_id_matches_its_own_position() {
    // A twisted seam keeps the counts right but maps a cell to a vertex
    // computed for a different point of the cube.
    let shape = ShapeGenerator::new(&ShapeSettings::default(), simplex()).unwrap();
    let resolution = 7;
    let faces = CubeSphereMeshAssembler::new(resolution, &shape)
        .unwrap()
        .build_faces()
        .unwrap();
    let r = resolution as usize;
    for grid in &faces.grids {
        for x in 0..r {
            for y in 0..r {
                let expected = Vec3::from(surface_vertex(
                    &shape,
                    &FaceCoord::from_grid(grid.face(), x, y, r),
                ));
                let actual = Vec3::from(faces.positions[grid.get(x, y) as usize]);
                assert!(
                    (expected - actual).length() < 1e-5,
                    "{} cell ({x}, {y}) points at {actual:?}, expected {expected:?}",
                    grid.face()
                );
            }
        }
    }
}

#[test]
fn test_no_duplicate_positions() {
    let mesh = generate_mesh(10, &ShapeSettings::flat(1.0), simplex(), 1).unwrap();
    let distinct: HashSet<[i64; 3]> = mesh
        .positions()
        .iter()
        .map(|p| p.map(|c| (c as f64 * 1e5).round() as i64))
        .collect();
    assert_eq!(distinct.len(), mesh.vertex_count());
}

#[test]
fn test_all_triangles_wind_outward() {
    for shape in [ShapeSettings::flat(1.0), ShapeSettings::default()] {
        let mesh = generate_mesh(12, &shape, simplex(), 1).unwrap();
        assert_eq!(mesh.inward_triangle_count(), 0);
    }
}

#[test]
fn test_each_edge_shared_by_exactly_two_triangles() {
    // Closed, consistently oriented surface: every directed edge appears
    // once and its reverse appears once.
    let mesh = generate_mesh(6, &ShapeSettings::default(), simplex(), 1).unwrap();
    let mut directed = HashSet::new();
    for [a, b, c] in mesh.triangles() {
        for edge in [(a, b), (b, c), (c, a)] {
            assert!(directed.insert(edge), "directed edge {edge:?} used twice");
        }
    }
    for &(a, b) in &directed {
        assert!(directed.contains(&(b, a)), "edge ({a}, {b}) is on an open boundary");
    }
}

#[test]
fn test_flat_sphere_scenario() {
    let mut settings = ShapeSettings::default();
    settings.radius = 2.0;
    for layer in &mut settings.noise_layers {
        layer.enabled = false;
    }
    let mesh = generate_mesh(4, &settings, simplex(), 1).unwrap();
    let eps = 1e-5;
    for n in norms(&mesh) {
        assert!(
            n >= 2.0 * (1.0 - eps) && n <= 2.0 * (1.0 + eps),
            "vertex norm {n} outside flat sphere band"
        );
    }
}

#[test]
fn test_single_constant_layer_scenario() {
    let settings = ShapeSettings {
        radius: 1.5,
        noise_layers: vec![NoiseLayer {
            enabled: true,
            noise_settings: NoiseSettings {
                strength: 0.5,
                num_passes: 1,
                min_value: 0.0,
                ..Default::default()
            },
        }],
    };
    let mesh = generate_mesh(5, &settings, Arc::new(ConstantNoise(0.0)), 1).unwrap();
    let expected = 1.5 * (1.0 + 0.5 * 0.5);
    for n in norms(&mesh) {
        assert!((n - expected).abs() < 1e-5, "expected {expected}, got {n}");
    }
}

#[test]
fn test_elevation_never_pushes_inward() {
    let settings = ShapeSettings::default();
    let mesh = generate_mesh(16, &settings, simplex(), 1).unwrap();
    let floor = settings.radius as f32 * (1.0 - 1e-5);
    assert!(norms(&mesh).into_iter().all(|n| n >= floor));
}

#[test]
fn test_disabling_layer_lowers_or_keeps_every_vertex() {
    let all_on = ShapeSettings::default();
    let mut one_off = all_on.clone();
    one_off.noise_layers[0].enabled = false;

    let high = generate_mesh(8, &all_on, simplex(), 1).unwrap();
    let low = generate_mesh(8, &one_off, simplex(), 1).unwrap();
    for (h, l) in norms(&high).into_iter().zip(norms(&low)) {
        assert!(l <= h + 1e-5, "disabled layer raised a vertex: {l} > {h}");
    }
}

#[test]
fn test_output_independent_of_thread_count() {
    let settings = ShapeSettings::default();
    let sequential = generate_mesh(64, &settings, simplex(), 1).unwrap();
    let parallel = generate_mesh(64, &settings, simplex(), 8).unwrap();
    let auto = generate_mesh(64, &settings, simplex(), 0).unwrap();
    assert_eq!(sequential, parallel);
    assert_eq!(sequential, auto);
}

#[test]
fn test_zero_passes_is_not_an_error() {
    let mut settings = ShapeSettings::default();
    for layer in &mut settings.noise_layers {
        layer.noise_settings.num_passes = 0;
    }
    let mesh = generate_mesh(4, &settings, simplex(), 1).unwrap();
    for n in norms(&mesh) {
        assert!((n - 1.5).abs() < 1e-5);
    }
}
