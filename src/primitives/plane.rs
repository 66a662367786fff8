//! Plane distance function.

use glam::DVec3;

/// Signed distance to the plane through `point` with unit `normal`.
///
/// Positive on the normal side. `normal` must already be unit length.
#[inline(always)]
pub fn sdf_plane(p: DVec3, normal: DVec3, point: DVec3) -> f64 {
    (p - point).dot(normal)
}
