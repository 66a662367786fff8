//! Elongation deformation.

use glam::DVec3;

/// Collapse the elongated region onto the child shape.
///
/// Returns the point to evaluate the child at plus the exterior distance
/// correction to add to the child's result. Inside the stretched core the
/// query collapses to the origin-centered shape; outside, the correction
/// restores the Euclidean offset lost by the clamp.
#[inline(always)]
pub fn modifier_elongate(point: DVec3, amount: DVec3) -> (DVec3, f64) {
    let q = point.abs() - amount;
    let outside = q.max(DVec3::ZERO);
    let collapsed = DVec3::new(
        outside.x * point.x.signum(),
        outside.y * point.y.signum(),
        outside.z * point.z.signum(),
    );
    (collapsed, outside.length())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elongate_core_collapses_to_origin() {
        let (q, fix) = modifier_elongate(DVec3::new(0.5, -0.25, 0.0), DVec3::new(1.0, 1.0, 0.0));
        assert!(q.length() < 1e-12);
        assert!(fix.abs() < 1e-12);
    }

    #[test]
    fn test_elongate_outside_keeps_offset() {
        let (q, fix) = modifier_elongate(DVec3::new(3.0, 0.0, 0.0), DVec3::new(1.0, 0.0, 0.0));
        assert!((q - DVec3::new(2.0, 0.0, 0.0)).length() < 1e-12);
        assert!((fix - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_elongate_respects_sign() {
        let (q, _) = modifier_elongate(DVec3::new(-3.0, 0.0, 0.0), DVec3::new(1.0, 0.0, 0.0));
        assert!((q - DVec3::new(-2.0, 0.0, 0.0)).length() < 1e-12);
    }
}
