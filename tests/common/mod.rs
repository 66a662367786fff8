//! Shared helpers for the integration suites.

#![allow(dead_code)]

use std::collections::HashMap;

use isoforge::prelude::*;

// ============================================================================
// Standard test shapes
// ============================================================================

/// Unit sphere at the origin.
pub fn test_sphere() -> Sdf {
    Sdf::sphere(1.0).unwrap()
}

/// Cube with side 1 at the origin.
pub fn test_cube() -> Sdf {
    Sdf::cube(1.0).unwrap()
}

/// The classic CSG demo: sphere ∩ cube with three cylinders drilled out.
pub fn test_csg_demo() -> Sdf {
    let base = Sdf::sphere(1.0).unwrap() & Sdf::cube(1.5).unwrap();
    let drill = Sdf::cylinder(0.5).unwrap();
    base - (drill.clone().orient(DVec3::X).unwrap()
        | drill.clone().orient(DVec3::Y).unwrap()
        | drill.orient(DVec3::Z).unwrap())
}

/// A handful of probe points around the unit sphere.
pub fn test_points() -> Vec<DVec3> {
    vec![
        DVec3::ZERO,
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(0.0, 1.0, 0.0),
        DVec3::new(0.0, 0.0, 1.0),
        DVec3::new(0.577, 0.577, 0.577),
        DVec3::new(2.0, 0.0, 0.0),
        DVec3::new(0.0, -1.5, 0.0),
        DVec3::new(0.3, 0.3, 0.3),
        DVec3::new(-0.9, 0.1, -0.2),
    ]
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64, context: &str) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "{context}: got {actual}, expected {expected} (tolerance {tolerance})"
    );
}

// ============================================================================
// Mesh inspection
// ============================================================================

/// Axis-aligned bounding box of a triangle list.
pub fn mesh_aabb(triangles: &[DVec3]) -> (DVec3, DVec3) {
    let mut min = DVec3::splat(f64::INFINITY);
    let mut max = DVec3::splat(f64::NEG_INFINITY);
    for v in triangles {
        min = min.min(*v);
        max = max.max(*v);
    }
    (min, max)
}

type VertexKey = (u64, u64, u64);

fn vertex_key(v: DVec3) -> VertexKey {
    (v.x.to_bits(), v.y.to_bits(), v.z.to_bits())
}

/// Unify vertices by exact bit pattern and count V, E, F.
///
/// Returns `(vertices, edges, faces, boundary_edges)` where boundary edges
/// are those not shared by exactly two triangles.
pub fn mesh_topology(triangles: &[DVec3]) -> (usize, usize, usize, usize) {
    assert_eq!(triangles.len() % 3, 0);
    let mut vertex_ids: HashMap<VertexKey, usize> = HashMap::new();
    let mut edge_use: HashMap<(usize, usize), usize> = HashMap::new();
    let faces = triangles.len() / 3;

    for triangle in triangles.chunks_exact(3) {
        let ids: Vec<usize> = triangle
            .iter()
            .map(|&v| {
                let next = vertex_ids.len();
                *vertex_ids.entry(vertex_key(v)).or_insert(next)
            })
            .collect();
        for (a, b) in [(ids[0], ids[1]), (ids[1], ids[2]), (ids[2], ids[0])] {
            let edge = (a.min(b), a.max(b));
            *edge_use.entry(edge).or_insert(0) += 1;
        }
    }

    let boundary = edge_use.values().filter(|&&n| n != 2).count();
    (vertex_ids.len(), edge_use.len(), faces, boundary)
}

/// Euler characteristic `V - E + F` of a bit-unified mesh.
pub fn euler_characteristic(triangles: &[DVec3]) -> i64 {
    let (v, e, f, _) = mesh_topology(triangles);
    v as i64 - e as i64 + f as i64
}

/// Scratch directory for files written by the suites.
pub fn temp_dir() -> std::path::PathBuf {
    let dir = std::env::temp_dir().join("isoforge_tests");
    std::fs::create_dir_all(&dir).ok();
    dir
}
