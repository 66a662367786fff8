//! Scaling helpers.

use glam::DVec3;

/// Map a query point into the local frame of a uniformly scaled shape.
///
/// The caller multiplies the resulting distance by `factor` to restore
/// exact world-space distances.
#[inline(always)]
pub fn transform_scale(point: DVec3, factor: f64) -> DVec3 {
    point / factor
}

/// Map a query point into the local frame of a per-axis scaled shape.
///
/// No distance correction exists for anisotropic scaling; the result is an
/// approximate field.
#[inline(always)]
pub fn transform_scale_nonuniform(point: DVec3, factors: DVec3) -> DVec3 {
    point / factors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_scale() {
        let p = transform_scale(DVec3::new(2.0, 4.0, -6.0), 2.0);
        assert_eq!(p, DVec3::new(1.0, 2.0, -3.0));
    }

    #[test]
    fn test_nonuniform_scale() {
        let p = transform_scale_nonuniform(DVec3::new(2.0, 3.0, 4.0), DVec3::new(2.0, 1.0, 4.0));
        assert_eq!(p, DVec3::new(1.0, 3.0, 1.0));
    }
}
