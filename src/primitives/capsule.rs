//! Capsule distance function.

use glam::DVec3;

/// Signed distance to a capsule: the segment `a..b` inflated by `radius`.
#[inline(always)]
pub fn sdf_capsule(point: DVec3, a: DVec3, b: DVec3, radius: f64) -> f64 {
    let pa = point - a;
    let ba = b - a;
    let h = (pa.dot(ba) / ba.dot(ba)).clamp(0.0, 1.0);
    (pa - ba * h).length() - radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capsule_midpoint() {
        let a = DVec3::new(0.0, 0.0, -1.0);
        let b = DVec3::new(0.0, 0.0, 1.0);
        assert!((sdf_capsule(DVec3::ZERO, a, b, 0.5) + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_capsule_beyond_endpoint_is_spherical() {
        let a = DVec3::new(0.0, 0.0, -1.0);
        let b = DVec3::new(0.0, 0.0, 1.0);
        let d = sdf_capsule(DVec3::new(0.0, 0.0, 2.0), a, b, 0.5);
        assert!((d - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_capsule_radial_surface() {
        let a = DVec3::new(0.0, 0.0, -1.0);
        let b = DVec3::new(0.0, 0.0, 1.0);
        let d = sdf_capsule(DVec3::new(0.5, 0.0, 0.3), a, b, 0.5);
        assert!(d.abs() < 1e-12);
    }
}
