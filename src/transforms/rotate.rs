//! Rotation helpers.

use glam::{DQuat, DVec3};

/// Map a query point into the local frame of a rotated shape.
///
/// For a unit quaternion the inverse is the conjugate, so the point is
/// rotated backwards while the shape appears rotated forwards.
#[inline(always)]
pub fn transform_rotate(point: DVec3, rotation: DQuat) -> DVec3 {
    rotation.conjugate() * point
}

/// Rotation taking the +Z axis onto `target` (unit length).
///
/// Returns `None` when `target` already is +Z. An exactly opposite target
/// rotates 180 degrees around a perpendicular axis: X by default, Y when
/// the target leans too close to X for that to be stable.
pub fn rotation_to_axis(target: DVec3) -> Option<DQuat> {
    let src = DVec3::Z;

    if (src - target).length_squared() < 1e-10 {
        return None;
    }

    if (src + target).length_squared() < 1e-10 {
        let perp = if target.x.abs() < 0.9 { DVec3::X } else { DVec3::Y };
        return Some(DQuat::from_axis_angle(perp, std::f64::consts::PI));
    }

    let axis = src.cross(target).normalize();
    let angle = src.dot(target).clamp(-1.0, 1.0).acos();
    Some(DQuat::from_axis_angle(axis, angle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_rotate_moves_point_backwards() {
        let rotation = DQuat::from_axis_angle(DVec3::Z, FRAC_PI_2);
        let p = transform_rotate(DVec3::X, rotation);
        assert!((p - DVec3::new(0.0, -1.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_rotation_to_axis_x() {
        let q = rotation_to_axis(DVec3::X).unwrap();
        assert!((q * DVec3::Z - DVec3::X).length() < 1e-12);
    }

    #[test]
    fn test_rotation_to_axis_degenerate_cases() {
        assert!(rotation_to_axis(DVec3::Z).is_none());
        let q = rotation_to_axis(-DVec3::Z).unwrap();
        assert!((q * DVec3::Z + DVec3::Z).length() < 1e-12);
    }
}
