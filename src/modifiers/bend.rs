//! Bend deformation.

use glam::DVec3;

/// Rotate the XY plane by `strength * x` radians.
///
/// Note the driver is the point's own X coordinate, so the deformation
/// curls the shape along its X extent. Distances become approximate.
#[inline(always)]
pub fn modifier_bend(point: DVec3, strength: f64) -> DVec3 {
    let (s, c) = (strength * point.x).sin_cos();
    DVec3::new(
        c * point.x - s * point.y,
        s * point.x + c * point.y,
        point.z,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bend_identity_on_yz_plane() {
        let p = DVec3::new(0.0, 1.5, -2.0);
        assert!((modifier_bend(p, 2.0) - p).length() < 1e-12);
    }

    #[test]
    fn test_bend_zero_strength_is_identity() {
        let p = DVec3::new(1.0, 2.0, 3.0);
        assert!((modifier_bend(p, 0.0) - p).length() < 1e-12);
    }

    #[test]
    fn test_bend_preserves_z() {
        let q = modifier_bend(DVec3::new(1.0, 1.0, 4.0), 0.7);
        assert_eq!(q.z, 4.0);
    }
}
