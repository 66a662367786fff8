//! Core types: the [`Sdf`] handle and the [`SdfNode`] shape tree.

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

mod constructors;
mod containers;
mod modifiers;
mod operations;
mod transforms;

pub use containers::Aabb;

/// A composable signed distance field.
///
/// `Sdf` is a cheaply clonable handle to an immutable shape tree plus a
/// staged smoothing radius `k`. Cloning shares the tree through an [`Arc`],
/// so combinators can copy operands without duplicating geometry.
///
/// `k` is consumed when a boolean combinator builds a new shape: the
/// combinator takes `max(k_a, k_b)` and, when positive, blends the operands
/// smoothly over that radius. Every builder except [`Sdf::with_k`] returns a
/// handle with `k = 0`, so the tag never survives a transform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sdf {
    pub(crate) node: Arc<SdfNode>,
    pub(crate) k: f64,
}

impl Sdf {
    /// Wrap a freshly built node with no smoothing tag.
    pub(crate) fn from_node(node: SdfNode) -> Self {
        Sdf {
            node: Arc::new(node),
            k: 0.0,
        }
    }

    /// The root of the shape tree.
    #[inline]
    pub fn node(&self) -> &SdfNode {
        &self.node
    }

    /// The staged smoothing radius.
    #[inline]
    pub fn k(&self) -> f64 {
        self.k
    }

    /// Signed distances for a batch of points.
    ///
    /// The output has the same length as the input and `out[i]` corresponds
    /// to `points[i]`. Negative values are inside the shape.
    #[inline]
    pub fn evaluate(&self, points: &[DVec3]) -> Vec<f64> {
        crate::eval::eval_batch(&self.node, points)
    }

    /// Signed distance at a single point.
    #[inline]
    pub fn distance(&self, point: DVec3) -> f64 {
        crate::eval::eval(&self.node, point)
    }

    /// Generate a surface mesh as a flat triangle list.
    ///
    /// Each three consecutive points form one triangle.
    pub fn generate(
        &self,
        options: &crate::mesh::MeshOptions,
    ) -> Result<Vec<DVec3>, crate::SdfError> {
        crate::mesh::generate(self, options)
    }

    /// Mesh with default options and write binary STL to `path`.
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<(), crate::SdfError> {
        self.save_with(path, &crate::mesh::MeshOptions::default())
    }

    /// Mesh with the given options and write binary STL to `path`.
    pub fn save_with(
        &self,
        path: impl AsRef<std::path::Path>,
        options: &crate::mesh::MeshOptions,
    ) -> Result<(), crate::SdfError> {
        let triangles = self.generate(options)?;
        crate::io::write_stl(path, &triangles)
    }
}

/// One node of a shape tree.
///
/// Leaves are primitive shapes; interior nodes combine or deform their
/// children. Children are shared through [`Arc`], so a tree is a DAG with
/// no cycles. The enum is serde-serializable, which gives shape trees a
/// JSON persistence format for free (see [`crate::io`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SdfNode {
    // === Primitives ===
    /// Sphere.
    Sphere {
        /// Sphere radius.
        radius: f64,
        /// Sphere center.
        center: DVec3,
    },

    /// Axis-aligned box.
    Box3d {
        /// Half-extent along each axis.
        half_extents: DVec3,
        /// Box center.
        center: DVec3,
    },

    /// Box with rounded edges.
    RoundedBox {
        /// Half-extent of the inner (sharp) box.
        half_extents: DVec3,
        /// Edge rounding radius.
        radius: f64,
    },

    /// Torus in the XY plane around the Z axis.
    Torus {
        /// Distance from the center to the tube center.
        major_radius: f64,
        /// Tube radius.
        minor_radius: f64,
    },

    /// Capsule between two points.
    Capsule {
        /// First endpoint.
        point_a: DVec3,
        /// Second endpoint.
        point_b: DVec3,
        /// Capsule radius.
        radius: f64,
    },

    /// Cylinder with flat caps between two points.
    CappedCylinder {
        /// Center of the first cap.
        point_a: DVec3,
        /// Center of the second cap.
        point_b: DVec3,
        /// Cylinder radius.
        radius: f64,
    },

    /// Infinite cylinder along the Z axis.
    Cylinder {
        /// Cylinder radius.
        radius: f64,
    },

    /// Ellipsoid with per-axis semi-radii (distance is approximate).
    Ellipsoid {
        /// Semi-axis radii.
        radii: DVec3,
    },

    /// Half-space below an oriented plane.
    Plane {
        /// Unit plane normal; the positive side is outside.
        normal: DVec3,
        /// A point on the plane.
        point: DVec3,
    },

    /// Axis-aligned slab; use magnitudes of `1e9` or more for open sides.
    Slab {
        /// Lower corner.
        min: DVec3,
        /// Upper corner.
        max: DVec3,
    },

    /// Cone with apex at the origin opening along +Z.
    Cone {
        /// Half-angle at the apex, radians.
        angle: f64,
        /// Cone height; `1e9` or more means unbounded.
        height: f64,
    },

    /// Cone along +Z with spherically rounded ends.
    RoundedCone {
        /// Radius of the base sphere at the origin.
        r1: f64,
        /// Radius of the top sphere at height `h`.
        r2: f64,
        /// Distance between the sphere centers.
        height: f64,
    },

    /// Cone with flat caps between two points.
    CappedCone {
        /// Center of the first cap.
        point_a: DVec3,
        /// Center of the second cap.
        point_b: DVec3,
        /// Radius at the first cap.
        radius_a: f64,
        /// Radius at the second cap.
        radius_b: f64,
    },

    // === Boolean operations ===
    /// Union; smooth-blended over radius `k` when `k > 0`.
    Union {
        /// Left operand.
        a: Arc<SdfNode>,
        /// Right operand.
        b: Arc<SdfNode>,
        /// Smoothing radius.
        k: f64,
    },

    /// Intersection; smooth-blended over radius `k` when `k > 0`.
    Intersection {
        /// Left operand.
        a: Arc<SdfNode>,
        /// Right operand.
        b: Arc<SdfNode>,
        /// Smoothing radius.
        k: f64,
    },

    /// Difference `a - b`; smooth-blended over radius `k` when `k > 0`.
    Difference {
        /// Shape to carve from.
        a: Arc<SdfNode>,
        /// Shape to remove.
        b: Arc<SdfNode>,
        /// Smoothing radius.
        k: f64,
    },

    /// Pointwise linear interpolation between two shapes (morph, not CSG).
    Blend {
        /// Shape at `t = 0`.
        a: Arc<SdfNode>,
        /// Shape at `t = 1`.
        b: Arc<SdfNode>,
        /// Interpolation factor.
        t: f64,
    },

    // === Transforms ===
    /// Rigid translation.
    Translate {
        /// Child shape.
        child: Arc<SdfNode>,
        /// Offset applied to the shape.
        offset: DVec3,
    },

    /// Rotation; the query point is rotated by the inverse.
    Rotate {
        /// Child shape.
        child: Arc<SdfNode>,
        /// Unit rotation applied to the shape.
        rotation: DQuat,
    },

    /// Uniform scale; distances stay exact.
    Scale {
        /// Child shape.
        child: Arc<SdfNode>,
        /// Scale factor, `> 0`.
        factor: f64,
    },

    /// Per-axis scale; distances become approximate.
    ScaleNonUniform {
        /// Child shape.
        child: Arc<SdfNode>,
        /// Per-axis scale factors, each `> 0`.
        factors: DVec3,
    },

    // === Deformations ===
    /// Rotate the XY plane by `strength · z` (approximate distances).
    Twist {
        /// Child shape.
        child: Arc<SdfNode>,
        /// Twist rate, radians per unit Z.
        strength: f64,
    },

    /// Rotate the XY plane by `strength · x` (approximate distances).
    Bend {
        /// Child shape.
        child: Arc<SdfNode>,
        /// Bend rate, radians per unit X.
        strength: f64,
    },

    /// Stretch the shape along each axis by splitting it at the origin.
    Elongate {
        /// Child shape.
        child: Arc<SdfNode>,
        /// Per-axis elongation half-lengths.
        amount: DVec3,
    },

    // === Modifiers ===
    /// Offset the surface outward (positive) or inward (negative).
    Dilate {
        /// Child shape.
        child: Arc<SdfNode>,
        /// Offset radius.
        radius: f64,
    },

    /// Hollow the shape into a shell of the given thickness.
    Shell {
        /// Child shape.
        child: Arc<SdfNode>,
        /// Shell half-thickness.
        thickness: f64,
    },

    /// Repeat across a grid; counts of `1e8` or more repeat without bound.
    Repeat {
        /// Child shape.
        child: Arc<SdfNode>,
        /// Grid spacing per axis, each `> 0`.
        spacing: DVec3,
        /// Copies allowed on each side of the origin, per axis.
        count: DVec3,
    },

    /// `count` copies rotated evenly around the Z axis.
    CircularArray {
        /// Child shape.
        child: Arc<SdfNode>,
        /// Number of copies.
        count: u32,
        /// X offset of the rotation pivot for each copy.
        offset: f64,
    },
}
