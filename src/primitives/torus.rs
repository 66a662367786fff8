//! Torus distance function.

use glam::DVec3;

/// Signed distance to a torus around the Z axis.
///
/// The tube center circle has radius `major_radius` in the XY plane and the
/// tube itself radius `minor_radius`.
#[inline(always)]
pub fn sdf_torus(point: DVec3, major_radius: f64, minor_radius: f64) -> f64 {
    let q = (point.x * point.x + point.y * point.y).sqrt() - major_radius;
    (q * q + point.z * point.z).sqrt() - minor_radius
}
