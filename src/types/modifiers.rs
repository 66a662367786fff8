//! Domain deformation and surface modifier builders.

use glam::DVec3;

use super::constructors::UNBOUNDED;
use super::{Sdf, SdfNode};
use crate::error::SdfError;

impl Sdf {
    /// Twist the shape around the Z axis by `strength` radians per unit Z.
    #[must_use]
    pub fn twist(self, strength: f64) -> Self {
        Self::from_node(SdfNode::Twist {
            child: self.node,
            strength,
        })
    }

    /// Bend the shape in the XY plane by `strength` radians per unit X.
    #[must_use]
    pub fn bend(self, strength: f64) -> Self {
        Self::from_node(SdfNode::Bend {
            child: self.node,
            strength,
        })
    }

    /// Stretch the shape by splitting it at the origin and separating the
    /// halves by `2 * amount` along each axis.
    #[must_use]
    pub fn elongate(self, amount: DVec3) -> Self {
        Self::from_node(SdfNode::Elongate {
            child: self.node,
            amount,
        })
    }

    /// Grow the surface outward by `radius` (negative shrinks).
    #[must_use]
    pub fn dilate(self, radius: f64) -> Self {
        Self::from_node(SdfNode::Dilate {
            child: self.node,
            radius,
        })
    }

    /// Shrink the surface inward by `radius`.
    #[must_use]
    pub fn erode(self, radius: f64) -> Self {
        self.dilate(-radius)
    }

    /// Hollow the shape into a shell `2 * thickness` thick around the
    /// original surface.
    #[must_use]
    pub fn shell(self, thickness: f64) -> Self {
        Self::from_node(SdfNode::Shell {
            child: self.node,
            thickness,
        })
    }

    /// Repeat the shape on a grid.
    ///
    /// Per axis, up to `count` copies appear on each side of the origin;
    /// counts of `1e8` or more repeat without bound. The shape should fit
    /// inside one spacing cell or copies will blend into each other.
    pub fn repeat(self, spacing: DVec3, count: DVec3) -> Result<Self, SdfError> {
        if !(spacing.cmpgt(DVec3::ZERO).all() && spacing.is_finite()) {
            return Err(SdfError::argument(format!(
                "repeat spacing must be positive on every axis, got {spacing}"
            )));
        }
        if count.cmplt(DVec3::ZERO).any() {
            return Err(SdfError::argument(format!(
                "repeat count must be non-negative, got {count}"
            )));
        }
        Ok(Self::from_node(SdfNode::Repeat {
            child: self.node,
            spacing,
            count,
        }))
    }

    /// Repeat the shape without bound on every axis.
    pub fn repeat_infinite(self, spacing: DVec3) -> Result<Self, SdfError> {
        self.repeat(spacing, DVec3::splat(UNBOUNDED))
    }

    /// Union of `count` copies rotated evenly around the Z axis.
    ///
    /// Each copy is pivoted around `(offset, 0)` in the XY plane before its
    /// rotation, so a shape modeled at the origin fans out on a ring.
    pub fn circular_array(self, count: u32, offset: f64) -> Result<Self, SdfError> {
        if count == 0 {
            return Err(SdfError::argument("circular array count must be at least 1"));
        }
        Ok(Self::from_node(SdfNode::CircularArray {
            child: self.node,
            count,
            offset,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_repeat() {
        let s = Sdf::sphere(0.4).unwrap();
        assert!(s.clone().repeat(DVec3::ZERO, DVec3::splat(2.0)).is_err());
        assert!(s
            .clone()
            .repeat(DVec3::splat(2.0), DVec3::new(-1.0, 0.0, 0.0))
            .is_err());
        assert!(s.repeat(DVec3::splat(2.0), DVec3::splat(2.0)).is_ok());
    }

    #[test]
    fn test_rejects_empty_circular_array() {
        let s = Sdf::sphere(0.4).unwrap();
        assert!(s.circular_array(0, 1.0).is_err());
    }

    #[test]
    fn test_erode_is_negative_dilate() {
        let s = Sdf::sphere(1.0).unwrap().erode(0.25);
        match s.node() {
            SdfNode::Dilate { radius, .. } => assert_eq!(*radius, -0.25),
            other => panic!("expected dilate node, got {other:?}"),
        }
    }
}
