//! Primitive shape constructors.
//!
//! Every constructor validates its parameters up front and returns
//! [`SdfError::InvalidArgument`] before any evaluation work can happen.

use glam::DVec3;

use super::{Sdf, SdfNode};
use crate::error::SdfError;

/// Magnitude at or above which an extent counts as unbounded.
pub const UNBOUNDED: f64 = 1e9;

fn ensure_positive(value: f64, what: &str) -> Result<(), SdfError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(SdfError::argument(format!(
            "{what} must be positive, got {value}"
        )))
    }
}

fn ensure_positive_vec(v: DVec3, what: &str) -> Result<(), SdfError> {
    if v.cmpgt(DVec3::ZERO).all() && v.is_finite() {
        Ok(())
    } else {
        Err(SdfError::argument(format!(
            "{what} must be positive on every axis, got {v}"
        )))
    }
}

fn ensure_distinct(a: DVec3, b: DVec3, what: &str) -> Result<(), SdfError> {
    if (a - b).length_squared() > 0.0 {
        Ok(())
    } else {
        Err(SdfError::argument(format!(
            "{what} endpoints must be distinct, got {a} for both"
        )))
    }
}

impl Sdf {
    /// Sphere of the given radius centered at the origin.
    pub fn sphere(radius: f64) -> Result<Self, SdfError> {
        Self::sphere_at(radius, DVec3::ZERO)
    }

    /// Sphere of the given radius at an arbitrary center.
    pub fn sphere_at(radius: f64, center: DVec3) -> Result<Self, SdfError> {
        ensure_positive(radius, "sphere radius")?;
        Ok(Self::from_node(SdfNode::Sphere { radius, center }))
    }

    /// Cube with the given side length, centered at the origin.
    pub fn cube(size: f64) -> Result<Self, SdfError> {
        Self::box3d(DVec3::splat(size))
    }

    /// Axis-aligned box with the given side lengths, centered at the origin.
    pub fn box3d(size: DVec3) -> Result<Self, SdfError> {
        Self::box3d_at(size, DVec3::ZERO)
    }

    /// Axis-aligned box at an arbitrary center.
    pub fn box3d_at(size: DVec3, center: DVec3) -> Result<Self, SdfError> {
        ensure_positive_vec(size, "box size")?;
        Ok(Self::from_node(SdfNode::Box3d {
            half_extents: size * 0.5,
            center,
        }))
    }

    /// Box with edges rounded by `radius`; `size` is the outer extent.
    pub fn rounded_box(size: DVec3, radius: f64) -> Result<Self, SdfError> {
        ensure_positive_vec(size, "rounded box size")?;
        ensure_positive(radius, "rounding radius")?;
        let half = size * 0.5 - DVec3::splat(radius);
        if !half.cmpgt(DVec3::ZERO).all() {
            return Err(SdfError::argument(format!(
                "rounding radius {radius} exceeds half the box size {size}"
            )));
        }
        Ok(Self::from_node(SdfNode::RoundedBox {
            half_extents: half,
            radius,
        }))
    }

    /// Torus around the Z axis.
    ///
    /// `major_radius` is the distance from the center to the middle of the
    /// tube, `minor_radius` the tube radius.
    pub fn torus(major_radius: f64, minor_radius: f64) -> Result<Self, SdfError> {
        ensure_positive(major_radius, "torus major radius")?;
        ensure_positive(minor_radius, "torus minor radius")?;
        Ok(Self::from_node(SdfNode::Torus {
            major_radius,
            minor_radius,
        }))
    }

    /// Capsule (line segment with radius) between two points.
    pub fn capsule(a: DVec3, b: DVec3, radius: f64) -> Result<Self, SdfError> {
        ensure_positive(radius, "capsule radius")?;
        ensure_distinct(a, b, "capsule")?;
        Ok(Self::from_node(SdfNode::Capsule {
            point_a: a,
            point_b: b,
            radius,
        }))
    }

    /// Cylinder with flat caps between two points.
    pub fn capped_cylinder(a: DVec3, b: DVec3, radius: f64) -> Result<Self, SdfError> {
        ensure_positive(radius, "cylinder radius")?;
        ensure_distinct(a, b, "cylinder")?;
        Ok(Self::from_node(SdfNode::CappedCylinder {
            point_a: a,
            point_b: b,
            radius,
        }))
    }

    /// Infinite cylinder along the Z axis.
    pub fn cylinder(radius: f64) -> Result<Self, SdfError> {
        ensure_positive(radius, "cylinder radius")?;
        Ok(Self::from_node(SdfNode::Cylinder { radius }))
    }

    /// Ellipsoid with the given semi-axis radii (approximate distances).
    pub fn ellipsoid(radii: DVec3) -> Result<Self, SdfError> {
        ensure_positive_vec(radii, "ellipsoid radii")?;
        Ok(Self::from_node(SdfNode::Ellipsoid { radii }))
    }

    /// Half-space below the plane through `point` with the given normal.
    ///
    /// The normal does not need to be unit length but must not be
    /// degenerate.
    pub fn plane(normal: DVec3, point: DVec3) -> Result<Self, SdfError> {
        if normal.length() < 1e-10 {
            return Err(SdfError::argument(format!(
                "plane normal must be non-zero, got {normal}"
            )));
        }
        Ok(Self::from_node(SdfNode::Plane {
            normal: normal.normalize(),
            point,
        }))
    }

    /// Horizontal ground plane: everything below `z = 0` is inside.
    pub fn ground() -> Self {
        Self::from_node(SdfNode::Plane {
            normal: DVec3::Z,
            point: DVec3::ZERO,
        })
    }

    /// Axis-aligned slab between `min` and `max`.
    ///
    /// Pass component magnitudes of [`UNBOUNDED`] or more to leave a side
    /// open; intersecting a shape with a partly open slab clips it.
    pub fn slab(min: DVec3, max: DVec3) -> Result<Self, SdfError> {
        if !min.cmplt(max).all() {
            return Err(SdfError::argument(format!(
                "slab min {min} must be below max {max} on every axis"
            )));
        }
        Ok(Self::from_node(SdfNode::Slab { min, max }))
    }

    /// Unbounded cone with apex at the origin opening along +Z.
    pub fn cone(angle: f64) -> Result<Self, SdfError> {
        Self::capped_height_cone(angle, UNBOUNDED)
    }

    /// Cone with apex at the origin, cut off at the given height.
    pub fn capped_height_cone(angle: f64, height: f64) -> Result<Self, SdfError> {
        if !(angle > 0.0 && angle < std::f64::consts::FRAC_PI_2) {
            return Err(SdfError::argument(format!(
                "cone half-angle must lie in (0, pi/2), got {angle}"
            )));
        }
        ensure_positive(height, "cone height")?;
        Ok(Self::from_node(SdfNode::Cone { angle, height }))
    }

    /// Cone along +Z with spherically rounded ends.
    ///
    /// A sphere of radius `r1` sits at the origin, one of radius `r2` at
    /// `(0, 0, height)`, and the surface wraps their convex hull.
    pub fn rounded_cone(r1: f64, r2: f64, height: f64) -> Result<Self, SdfError> {
        ensure_positive(r1, "rounded cone base radius")?;
        ensure_positive(r2, "rounded cone top radius")?;
        ensure_positive(height, "rounded cone height")?;
        if (r1 - r2).abs() >= height {
            return Err(SdfError::argument(format!(
                "rounded cone needs |r1 - r2| < height, got radii {r1}/{r2} over height {height}"
            )));
        }
        Ok(Self::from_node(SdfNode::RoundedCone { r1, r2, height }))
    }

    /// Cone with flat caps of radius `radius_a` at `a` and `radius_b` at `b`.
    pub fn capped_cone(
        a: DVec3,
        b: DVec3,
        radius_a: f64,
        radius_b: f64,
    ) -> Result<Self, SdfError> {
        ensure_positive(radius_a, "capped cone radius")?;
        ensure_positive(radius_b, "capped cone radius")?;
        ensure_distinct(a, b, "capped cone")?;
        Ok(Self::from_node(SdfNode::CappedCone {
            point_a: a,
            point_b: b,
            radius_a,
            radius_b,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_nonpositive_radius() {
        assert!(Sdf::sphere(0.0).is_err());
        assert!(Sdf::sphere(-1.0).is_err());
        assert!(Sdf::sphere(f64::NAN).is_err());
        assert!(Sdf::cylinder(-0.5).is_err());
        assert!(Sdf::torus(1.0, 0.0).is_err());
    }

    #[test]
    fn test_rejects_degenerate_segment() {
        let p = DVec3::new(1.0, 2.0, 3.0);
        assert!(Sdf::capsule(p, p, 0.5).is_err());
        assert!(Sdf::capped_cylinder(p, p, 0.5).is_err());
    }

    #[test]
    fn test_rejects_zero_plane_normal() {
        assert!(Sdf::plane(DVec3::ZERO, DVec3::ZERO).is_err());
        assert!(Sdf::plane(DVec3::splat(1e-11), DVec3::ZERO).is_err());
    }

    #[test]
    fn test_rejects_oversized_rounding() {
        assert!(Sdf::rounded_box(DVec3::splat(1.0), 0.6).is_err());
        assert!(Sdf::rounded_box(DVec3::splat(1.0), 0.2).is_ok());
    }

    #[test]
    fn test_rejects_inverted_slab() {
        assert!(Sdf::slab(DVec3::splat(1.0), DVec3::splat(-1.0)).is_err());
    }
}
