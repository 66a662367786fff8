//! Boolean and blending combinators.

use std::ops::{BitAnd, BitOr, Sub};
use std::sync::Arc;

use super::{Sdf, SdfNode};

impl Sdf {
    /// Tag this shape with a smoothing radius.
    ///
    /// Evaluation is unchanged; the next boolean combinator that consumes
    /// this handle picks up `max` of both operands' tags and blends over
    /// that radius. Values at or below zero mean a hard combination.
    #[must_use]
    #[inline]
    pub fn with_k(&self, k: f64) -> Self {
        Sdf {
            node: Arc::clone(&self.node),
            k,
        }
    }

    /// Union with another shape; also available as `a | b`.
    #[must_use]
    pub fn union(self, other: Sdf) -> Self {
        let k = self.k.max(other.k);
        Self::from_node(SdfNode::Union {
            a: self.node,
            b: other.node,
            k,
        })
    }

    /// Intersection with another shape; also available as `a & b`.
    #[must_use]
    pub fn intersection(self, other: Sdf) -> Self {
        let k = self.k.max(other.k);
        Self::from_node(SdfNode::Intersection {
            a: self.node,
            b: other.node,
            k,
        })
    }

    /// Remove another shape from this one; also available as `a - b`.
    #[must_use]
    pub fn subtract(self, other: Sdf) -> Self {
        let k = self.k.max(other.k);
        Self::from_node(SdfNode::Difference {
            a: self.node,
            b: other.node,
            k,
        })
    }

    /// Smooth union blended over radius `k`.
    #[must_use]
    pub fn smooth_union(self, other: Sdf, k: f64) -> Self {
        self.with_k(k).union(other)
    }

    /// Smooth intersection blended over radius `k`.
    #[must_use]
    pub fn smooth_intersection(self, other: Sdf, k: f64) -> Self {
        self.with_k(k).intersection(other)
    }

    /// Smooth subtraction blended over radius `k`.
    #[must_use]
    pub fn smooth_subtract(self, other: Sdf, k: f64) -> Self {
        self.with_k(k).subtract(other)
    }

    /// Pointwise linear interpolation towards `other`.
    ///
    /// `t = 0` keeps this shape, `t = 1` becomes `other`. This is a morph,
    /// not a boolean operation; intermediate fields are approximate.
    #[must_use]
    pub fn blend(self, other: Sdf, t: f64) -> Self {
        Self::from_node(SdfNode::Blend {
            a: self.node,
            b: other.node,
            t,
        })
    }
}

impl BitOr for Sdf {
    type Output = Sdf;

    #[inline]
    fn bitor(self, rhs: Sdf) -> Sdf {
        self.union(rhs)
    }
}

impl BitAnd for Sdf {
    type Output = Sdf;

    #[inline]
    fn bitand(self, rhs: Sdf) -> Sdf {
        self.intersection(rhs)
    }
}

impl Sub for Sdf {
    type Output = Sdf;

    #[inline]
    fn sub(self, rhs: Sdf) -> Sdf {
        self.subtract(rhs)
    }
}
