//! Marching Cubes surface extraction on a uniform scalar grid.

use glam::DVec3;

use super::tables::{CORNER_OFFSETS, EDGE_CONNECTIONS, EDGE_TABLE, TRI_TABLE};

/// Values closer than this are treated as coincident during interpolation.
const INTERP_EPSILON: f64 = 1e-10;

/// Extract iso-surface triangles from a scalar volume.
///
/// `volume` is X-major (`x + y*nx + z*nx*ny`) with `dims` samples per axis.
/// Vertices come back in voxel coordinates (grid units); each three
/// consecutive points form one triangle wound consistently with negative
/// values inside.
pub fn extract_surface(volume: &[f64], dims: [usize; 3], level: f64) -> Vec<DVec3> {
    let [nx, ny, nz] = dims;
    debug_assert_eq!(volume.len(), nx * ny * nz);

    let mut triangles = Vec::new();
    let index_of = |x: usize, y: usize, z: usize| x + y * nx + z * nx * ny;

    for z in 0..nz.saturating_sub(1) {
        for y in 0..ny.saturating_sub(1) {
            for x in 0..nx.saturating_sub(1) {
                let mut corners = [DVec3::ZERO; 8];
                let mut values = [0.0f64; 8];
                for (i, offset) in CORNER_OFFSETS.iter().enumerate() {
                    let (gx, gy, gz) = (x + offset[0], y + offset[1], z + offset[2]);
                    corners[i] = DVec3::new(gx as f64, gy as f64, gz as f64);
                    values[i] = volume[index_of(gx, gy, gz)];
                }

                let mut cube_index = 0usize;
                for (i, &v) in values.iter().enumerate() {
                    if v < level {
                        cube_index |= 1 << i;
                    }
                }

                let edge_mask = EDGE_TABLE[cube_index];
                if edge_mask == 0 {
                    continue;
                }

                let mut edge_vertices = [DVec3::ZERO; 12];
                for (i, [e0, e1]) in EDGE_CONNECTIONS.iter().enumerate() {
                    if edge_mask & (1 << i) != 0 {
                        edge_vertices[i] = interpolate_vertex(
                            level,
                            corners[*e0],
                            corners[*e1],
                            values[*e0],
                            values[*e1],
                        );
                    }
                }

                let row = &TRI_TABLE[cube_index];
                let mut i = 0;
                while row[i] != -1 {
                    triangles.push(edge_vertices[row[i] as usize]);
                    triangles.push(edge_vertices[row[i + 1] as usize]);
                    triangles.push(edge_vertices[row[i + 2] as usize]);
                    i += 3;
                }
            }
        }
    }

    triangles
}

/// Locate the iso-crossing along one cube edge.
///
/// Guards keep degenerate divisions out: an endpoint already on the level
/// is returned as-is, and a flat edge falls back to its first endpoint.
///
/// Endpoints are put in a canonical order first. Neighboring cells (and
/// neighboring batches) traverse a shared edge in opposite directions, and
/// only a fixed evaluation order keeps the interpolated vertex bit-identical
/// everywhere the edge is visited.
#[inline(always)]
fn interpolate_vertex(level: f64, p1: DVec3, p2: DVec3, v1: f64, v2: f64) -> DVec3 {
    let (p1, p2, v1, v2) = if (p2.x, p2.y, p2.z) < (p1.x, p1.y, p1.z) {
        (p2, p1, v2, v1)
    } else {
        (p1, p2, v1, v2)
    };
    if (level - v1).abs() < INTERP_EPSILON {
        return p1;
    }
    if (level - v2).abs() < INTERP_EPSILON {
        return p2;
    }
    if (v1 - v2).abs() < INTERP_EPSILON {
        return p1;
    }
    let mu = (level - v1) / (v2 - v1);
    p1 + (p2 - p1) * mu
}
