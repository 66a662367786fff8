//! Affine transform builders.

use glam::DVec3;

use super::{Sdf, SdfNode};
use crate::error::SdfError;
use crate::transforms::rotation_to_axis;

impl Sdf {
    /// Move the shape by `offset`.
    #[must_use]
    pub fn translate(self, offset: DVec3) -> Self {
        Self::from_node(SdfNode::Translate {
            child: self.node,
            offset,
        })
    }

    /// Uniformly scale the shape by `factor`.
    ///
    /// Distances remain exact: the field is evaluated at `p / factor` and
    /// the result multiplied back by `factor`.
    pub fn scale(self, factor: f64) -> Result<Self, SdfError> {
        if !(factor > 0.0 && factor.is_finite()) {
            return Err(SdfError::argument(format!(
                "scale factor must be positive, got {factor}"
            )));
        }
        Ok(Self::from_node(SdfNode::Scale {
            child: self.node,
            factor,
        }))
    }

    /// Scale the shape per axis. The result is an approximate field.
    pub fn scale_xyz(self, factors: DVec3) -> Result<Self, SdfError> {
        if !(factors.cmpgt(DVec3::ZERO).all() && factors.is_finite()) {
            return Err(SdfError::argument(format!(
                "scale factors must be positive on every axis, got {factors}"
            )));
        }
        Ok(Self::from_node(SdfNode::ScaleNonUniform {
            child: self.node,
            factors,
        }))
    }

    /// Rotate the shape by `angle` radians around `axis`.
    ///
    /// The axis is normalized; a near-zero axis is rejected.
    pub fn rotate(self, angle: f64, axis: DVec3) -> Result<Self, SdfError> {
        if axis.length() < 1e-10 {
            return Err(SdfError::argument(format!(
                "rotation axis must be non-zero, got {axis}"
            )));
        }
        Ok(Self::from_node(SdfNode::Rotate {
            child: self.node,
            rotation: glam::DQuat::from_axis_angle(axis.normalize(), angle),
        }))
    }

    /// Rotate the shape so its local +Z axis points along `axis`.
    ///
    /// Shapes that are symmetric around Z (cylinders, cones, tori) treat
    /// +Z as "up"; `orient` re-aims that axis. Aiming at +Z itself returns
    /// the shape unchanged.
    pub fn orient(self, axis: DVec3) -> Result<Self, SdfError> {
        if axis.length() < 1e-10 {
            return Err(SdfError::argument(format!(
                "orientation axis must be non-zero, got {axis}"
            )));
        }
        match rotation_to_axis(axis.normalize()) {
            Some(rotation) => Ok(Self::from_node(SdfNode::Rotate {
                child: self.node,
                rotation,
            })),
            None => Ok(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_scale() {
        let s = Sdf::sphere(1.0).unwrap();
        assert!(s.clone().scale(0.0).is_err());
        assert!(s.clone().scale(-2.0).is_err());
        assert!(s.scale_xyz(DVec3::new(1.0, 0.0, 1.0)).is_err());
    }

    #[test]
    fn test_rejects_zero_axis() {
        let s = Sdf::sphere(1.0).unwrap();
        assert!(s.clone().rotate(1.0, DVec3::ZERO).is_err());
        assert!(s.orient(DVec3::splat(1e-12)).is_err());
    }

    #[test]
    fn test_orient_to_z_is_identity() {
        let s = Sdf::cylinder(0.5).unwrap().orient(DVec3::Z).unwrap();
        assert!(matches!(s.node(), SdfNode::Cylinder { .. }));
    }
}
