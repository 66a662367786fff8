//! Cylinder distance functions.

use glam::DVec3;

/// Signed distance to an infinite cylinder along the Z axis.
#[inline(always)]
pub fn sdf_cylinder_infinite(point: DVec3, radius: f64) -> f64 {
    (point.x * point.x + point.y * point.y).sqrt() - radius
}

/// Signed distance to a cylinder with flat caps at `a` and `b`.
#[inline(always)]
pub fn sdf_cylinder_capped(point: DVec3, a: DVec3, b: DVec3, radius: f64) -> f64 {
    let ba = b - a;
    let pa = point - a;
    let baba = ba.dot(ba);
    let paba = pa.dot(ba);
    let x = (pa * baba - ba * paba).length() - radius * baba;
    let y = (paba - baba * 0.5).abs() - baba * 0.5;
    let x2 = x * x;
    let y2 = y * y * baba;
    let d = if x.max(y) < 0.0 {
        -x2.min(y2)
    } else {
        (if x > 0.0 { x2 } else { 0.0 }) + (if y > 0.0 { y2 } else { 0.0 })
    };
    (d.abs().sqrt() / baba).copysign(d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infinite_cylinder_is_radial() {
        assert!((sdf_cylinder_infinite(DVec3::ZERO, 0.5) + 0.5).abs() < 1e-12);
        assert!(sdf_cylinder_infinite(DVec3::new(0.5, 0.0, 7.0), 0.5).abs() < 1e-12);
        assert!((sdf_cylinder_infinite(DVec3::new(0.0, 1.5, -3.0), 0.5) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_capped_cylinder_side() {
        let a = DVec3::new(0.0, 0.0, -1.0);
        let b = DVec3::new(0.0, 0.0, 1.0);
        let d = sdf_cylinder_capped(DVec3::new(1.0, 0.0, 0.0), a, b, 0.5);
        assert!((d - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_capped_cylinder_cap() {
        let a = DVec3::new(0.0, 0.0, -1.0);
        let b = DVec3::new(0.0, 0.0, 1.0);
        let d = sdf_cylinder_capped(DVec3::new(0.0, 0.0, 1.5), a, b, 0.5);
        assert!((d - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_capped_cylinder_inside() {
        let a = DVec3::new(0.0, 0.0, -1.0);
        let b = DVec3::new(0.0, 0.0, 1.0);
        let d = sdf_cylinder_capped(DVec3::ZERO, a, b, 0.5);
        assert!((d + 0.5).abs() < 1e-9);
    }
}
