//! Sphere distance function.

use glam::DVec3;

/// Signed distance to a sphere centered at the origin.
#[inline(always)]
pub fn sdf_sphere(point: DVec3, radius: f64) -> f64 {
    point.length() - radius
}

/// Signed distance to a sphere at an arbitrary center.
#[inline(always)]
pub fn sdf_sphere_at(point: DVec3, center: DVec3, radius: f64) -> f64 {
    (point - center).length() - radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_center() {
        assert!((sdf_sphere(DVec3::ZERO, 1.0) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_sphere_surface_and_outside() {
        assert!(sdf_sphere(DVec3::new(1.0, 0.0, 0.0), 1.0).abs() < 1e-12);
        assert!((sdf_sphere(DVec3::new(2.0, 0.0, 0.0), 1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_sphere_at() {
        let c = DVec3::new(5.0, 0.0, 0.0);
        assert!((sdf_sphere_at(c, c, 2.0) + 2.0).abs() < 1e-12);
        assert!(sdf_sphere_at(DVec3::new(7.0, 0.0, 0.0), c, 2.0).abs() < 1e-12);
    }
}
