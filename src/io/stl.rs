//! STL mesh writers.
//!
//! The input is a flat triangle list: every three consecutive points form
//! one triangle, as produced by [`crate::mesh::generate`].

use std::io::{BufWriter, Write};
use std::path::Path;

use glam::DVec3;

use crate::error::SdfError;

/// Write a triangle list as binary STL.
///
/// Layout: an 80-byte zero header, a little-endian `u32` triangle count,
/// then 50 bytes per triangle (normal, three vertices, zero attribute
/// count), all `f32`.
pub fn write_stl(path: impl AsRef<Path>, triangles: &[DVec3]) -> Result<(), SdfError> {
    let file = std::fs::File::create(path)?;
    let mut w = BufWriter::new(file);

    let header = [0u8; 80];
    w.write_all(&header)?;

    let count = (triangles.len() / 3) as u32;
    w.write_all(&count.to_le_bytes())?;

    for triangle in triangles.chunks_exact(3) {
        let normal = facet_normal(triangle[0], triangle[1], triangle[2]);
        for f in [normal.x, normal.y, normal.z] {
            w.write_all(&(f as f32).to_le_bytes())?;
        }
        for vertex in triangle {
            for f in [vertex.x, vertex.y, vertex.z] {
                w.write_all(&(f as f32).to_le_bytes())?;
            }
        }
        w.write_all(&0u16.to_le_bytes())?;
    }

    w.flush()?;
    Ok(())
}

/// Write a triangle list as ASCII STL.
pub fn write_stl_ascii(path: impl AsRef<Path>, triangles: &[DVec3]) -> Result<(), SdfError> {
    let file = std::fs::File::create(path)?;
    let mut w = BufWriter::new(file);

    writeln!(w, "solid isoforge")?;
    for triangle in triangles.chunks_exact(3) {
        let n = facet_normal(triangle[0], triangle[1], triangle[2]);
        writeln!(w, "  facet normal {} {} {}", n.x, n.y, n.z)?;
        writeln!(w, "    outer loop")?;
        for v in triangle {
            writeln!(w, "      vertex {} {} {}", v.x, v.y, v.z)?;
        }
        writeln!(w, "    endloop")?;
        writeln!(w, "  endfacet")?;
    }
    writeln!(w, "endsolid isoforge")?;

    w.flush()?;
    Ok(())
}

/// Unit facet normal, or zero for a degenerate triangle.
fn facet_normal(v1: DVec3, v2: DVec3, v3: DVec3) -> DVec3 {
    let n = (v2 - v1).cross(v3 - v1);
    if n.length() < 1e-10 {
        DVec3::ZERO
    } else {
        n.normalize()
    }
}
