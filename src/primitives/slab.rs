//! Axis-aligned slab distance function.

use glam::DVec3;

/// Signed distance to the axis-aligned slab between `min` and `max`.
///
/// Outside, the exact Euclidean distance to the box; inside, the negated
/// minimum distance to the six bounding planes. Sides placed at magnitudes
/// of `1e9` or more act as open.
#[inline(always)]
pub fn sdf_slab(p: DVec3, min: DVec3, max: DVec3) -> f64 {
    let dx = (min.x - p.x).max(p.x - max.x).max(0.0);
    let dy = (min.y - p.y).max(p.y - max.y).max(0.0);
    let dz = (min.z - p.z).max(p.z - max.z).max(0.0);
    let exterior = (dx * dx + dy * dy + dz * dz).sqrt();
    if exterior > 0.0 {
        return exterior;
    }
    let ix = (p.x - min.x).min(max.x - p.x);
    let iy = (p.y - min.y).min(max.y - p.y);
    let iz = (p.z - min.z).min(max.z - p.z);
    -ix.min(iy).min(iz)
}
