//! Box distance functions.

use glam::DVec3;

/// Signed distance to an axis-aligned box centered at the origin.
#[inline(always)]
pub fn sdf_box3d(point: DVec3, half_extents: DVec3) -> f64 {
    let q = point.abs() - half_extents;
    q.max(DVec3::ZERO).length() + q.x.max(q.y.max(q.z)).min(0.0)
}

/// Signed distance to a box at an arbitrary center.
#[inline(always)]
pub fn sdf_box3d_at(point: DVec3, center: DVec3, half_extents: DVec3) -> f64 {
    sdf_box3d(point - center, half_extents)
}

/// Signed distance to a box with edges rounded by `radius`.
///
/// `half_extents` is the inner sharp box; the surface sits `radius`
/// outside it.
#[inline(always)]
pub fn sdf_rounded_box3d(point: DVec3, half_extents: DVec3, radius: f64) -> f64 {
    sdf_box3d(point, half_extents) - radius
}
