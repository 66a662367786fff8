//! Ellipsoid distance function.

use glam::DVec3;

/// Approximate signed distance to an ellipsoid with semi-axis `radii`.
///
/// First-order bound: exact on the axes, slightly conservative elsewhere,
/// and sign-correct everywhere except the exact center (where the gradient
/// vanishes).
#[inline(always)]
pub fn sdf_ellipsoid(point: DVec3, radii: DVec3) -> f64 {
    let k0 = (point / radii).length();
    let k1 = (point / (radii * radii)).length();
    k0 * (k0 - 1.0) / k1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ellipsoid_axis_points_are_exact() {
        let r = DVec3::new(2.0, 1.0, 0.5);
        assert!(sdf_ellipsoid(DVec3::new(2.0, 0.0, 0.0), r).abs() < 1e-12);
        assert!(sdf_ellipsoid(DVec3::new(0.0, 1.0, 0.0), r).abs() < 1e-12);
        assert!((sdf_ellipsoid(DVec3::new(3.0, 0.0, 0.0), r) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_ellipsoid_sign() {
        let r = DVec3::new(2.0, 1.0, 0.5);
        assert!(sdf_ellipsoid(DVec3::new(0.5, 0.2, 0.1), r) < 0.0);
        assert!(sdf_ellipsoid(DVec3::new(0.0, 0.0, 2.0), r) > 0.0);
    }
}
