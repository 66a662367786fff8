//! Twist deformation.

use glam::DVec3;

/// Rotate the XY plane by `strength * z` radians.
///
/// The returned point is handed to the child field, so the shape appears
/// twisted around the Z axis. Distances become approximate; keep
/// `strength` moderate relative to the shape's radius.
#[inline(always)]
pub fn modifier_twist(point: DVec3, strength: f64) -> DVec3 {
    let (s, c) = (strength * point.z).sin_cos();
    DVec3::new(
        c * point.x - s * point.y,
        s * point.x + c * point.y,
        point.z,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_twist_identity_in_base_plane() {
        let p = DVec3::new(1.0, 2.0, 0.0);
        assert!((modifier_twist(p, 3.0) - p).length() < 1e-12);
    }

    #[test]
    fn test_twist_quarter_turn_at_unit_height() {
        let q = modifier_twist(DVec3::new(1.0, 0.0, 1.0), FRAC_PI_2);
        assert!((q - DVec3::new(0.0, 1.0, 1.0)).length() < 1e-12);
    }

    #[test]
    fn test_twist_preserves_radius_and_z() {
        let p = DVec3::new(0.3, -0.7, 2.5);
        let q = modifier_twist(p, 1.3);
        let r_in = (p.x * p.x + p.y * p.y).sqrt();
        let r_out = (q.x * q.x + q.y * q.y).sqrt();
        assert!((r_in - r_out).abs() < 1e-12);
        assert_eq!(p.z, q.z);
    }
}
