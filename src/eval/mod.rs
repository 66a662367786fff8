//! Batch evaluation of shape trees.
//!
//! The primary contract is batch evaluation: one call walks the composed
//! tree once, carrying whole point buffers through transforms and combining
//! whole distance buffers at operations. Primitive leaves lift their point
//! functions over the slice. Single-point queries are a one-element batch.
//!
//! Evaluation is pure: no hidden state, identical outputs for identical
//! inputs, and safe to call concurrently from any number of threads.

use glam::DVec3;
use rayon::prelude::*;

use crate::modifiers::*;
use crate::operations::*;
use crate::primitives::*;
use crate::transforms::*;
use crate::types::SdfNode;

/// Distance placeholder the circular array folds its copies into.
const FAR: f64 = 1e9;

/// Evaluate a shape tree for a batch of points.
///
/// Returns one signed distance per input point, in input order.
pub fn eval_batch(node: &SdfNode, points: &[DVec3]) -> Vec<f64> {
    match node {
        // === Primitives ===
        SdfNode::Sphere { radius, center } => points
            .iter()
            .map(|&p| sdf_sphere_at(p, *center, *radius))
            .collect(),
        SdfNode::Box3d {
            half_extents,
            center,
        } => points
            .iter()
            .map(|&p| sdf_box3d_at(p, *center, *half_extents))
            .collect(),
        SdfNode::RoundedBox {
            half_extents,
            radius,
        } => points
            .iter()
            .map(|&p| sdf_rounded_box3d(p, *half_extents, *radius))
            .collect(),
        SdfNode::Torus {
            major_radius,
            minor_radius,
        } => points
            .iter()
            .map(|&p| sdf_torus(p, *major_radius, *minor_radius))
            .collect(),
        SdfNode::Capsule {
            point_a,
            point_b,
            radius,
        } => points
            .iter()
            .map(|&p| sdf_capsule(p, *point_a, *point_b, *radius))
            .collect(),
        SdfNode::CappedCylinder {
            point_a,
            point_b,
            radius,
        } => points
            .iter()
            .map(|&p| sdf_cylinder_capped(p, *point_a, *point_b, *radius))
            .collect(),
        SdfNode::Cylinder { radius } => points
            .iter()
            .map(|&p| sdf_cylinder_infinite(p, *radius))
            .collect(),
        SdfNode::Ellipsoid { radii } => {
            points.iter().map(|&p| sdf_ellipsoid(p, *radii)).collect()
        }
        SdfNode::Plane { normal, point } => points
            .iter()
            .map(|&p| sdf_plane(p, *normal, *point))
            .collect(),
        SdfNode::Slab { min, max } => {
            points.iter().map(|&p| sdf_slab(p, *min, *max)).collect()
        }
        SdfNode::Cone { angle, height } => points
            .iter()
            .map(|&p| sdf_cone(p, *angle, *height))
            .collect(),
        SdfNode::RoundedCone { r1, r2, height } => points
            .iter()
            .map(|&p| sdf_rounded_cone(p, *r1, *r2, *height))
            .collect(),
        SdfNode::CappedCone {
            point_a,
            point_b,
            radius_a,
            radius_b,
        } => points
            .iter()
            .map(|&p| sdf_capped_cone(p, *point_a, *point_b, *radius_a, *radius_b))
            .collect(),

        // === Boolean operations ===
        SdfNode::Union { a, b, k } => {
            combine(eval_batch(a, points), &eval_batch(b, points), *k, sdf_union, sdf_smooth_union)
        }
        SdfNode::Intersection { a, b, k } => combine(
            eval_batch(a, points),
            &eval_batch(b, points),
            *k,
            sdf_intersection,
            sdf_smooth_intersection,
        ),
        SdfNode::Difference { a, b, k } => combine(
            eval_batch(a, points),
            &eval_batch(b, points),
            *k,
            sdf_difference,
            sdf_smooth_difference,
        ),
        SdfNode::Blend { a, b, t } => {
            let mut da = eval_batch(a, points);
            let db = eval_batch(b, points);
            for (x, y) in da.iter_mut().zip(&db) {
                *x = sdf_blend(*x, *y, *t);
            }
            da
        }

        // === Transforms ===
        SdfNode::Translate { child, offset } => {
            let moved: Vec<DVec3> = points.iter().map(|&p| p - *offset).collect();
            eval_batch(child, &moved)
        }
        SdfNode::Rotate { child, rotation } => {
            let rotated: Vec<DVec3> =
                points.iter().map(|&p| transform_rotate(p, *rotation)).collect();
            eval_batch(child, &rotated)
        }
        SdfNode::Scale { child, factor } => {
            let scaled: Vec<DVec3> =
                points.iter().map(|&p| transform_scale(p, *factor)).collect();
            let mut distances = eval_batch(child, &scaled);
            for d in &mut distances {
                *d *= *factor;
            }
            distances
        }
        SdfNode::ScaleNonUniform { child, factors } => {
            let scaled: Vec<DVec3> = points
                .iter()
                .map(|&p| transform_scale_nonuniform(p, *factors))
                .collect();
            eval_batch(child, &scaled)
        }

        // === Deformations ===
        SdfNode::Twist { child, strength } => {
            let twisted: Vec<DVec3> =
                points.iter().map(|&p| modifier_twist(p, *strength)).collect();
            eval_batch(child, &twisted)
        }
        SdfNode::Bend { child, strength } => {
            let bent: Vec<DVec3> =
                points.iter().map(|&p| modifier_bend(p, *strength)).collect();
            eval_batch(child, &bent)
        }
        SdfNode::Elongate { child, amount } => {
            let mut corrections = Vec::with_capacity(points.len());
            let collapsed: Vec<DVec3> = points
                .iter()
                .map(|&p| {
                    let (q, fix) = modifier_elongate(p, *amount);
                    corrections.push(fix);
                    q
                })
                .collect();
            let mut distances = eval_batch(child, &collapsed);
            for (d, fix) in distances.iter_mut().zip(&corrections) {
                *d += fix;
            }
            distances
        }

        // === Modifiers ===
        SdfNode::Dilate { child, radius } => {
            let mut distances = eval_batch(child, points);
            for d in &mut distances {
                *d -= *radius;
            }
            distances
        }
        SdfNode::Shell { child, thickness } => {
            let mut distances = eval_batch(child, points);
            for d in &mut distances {
                *d = d.abs() - *thickness;
            }
            distances
        }
        SdfNode::Repeat {
            child,
            spacing,
            count,
        } => {
            let folded: Vec<DVec3> = points
                .iter()
                .map(|&p| modifier_repeat(p, *spacing, *count))
                .collect();
            eval_batch(child, &folded)
        }
        SdfNode::CircularArray {
            child,
            count,
            offset,
        } => {
            let mut result = vec![FAR; points.len()];
            for i in 0..*count {
                let angle = std::f64::consts::TAU * i as f64 / *count as f64;
                let (s, c) = angle.sin_cos();
                let turned: Vec<DVec3> = points
                    .iter()
                    .map(|&p| {
                        DVec3::new(
                            c * (p.x - offset) - s * p.y + offset,
                            s * (p.x - offset) + c * p.y,
                            p.z,
                        )
                    })
                    .collect();
                let distances = eval_batch(child, &turned);
                for (r, d) in result.iter_mut().zip(&distances) {
                    *r = r.min(*d);
                }
            }
            result
        }
    }
}

/// Evaluate a shape tree at a single point.
#[inline]
pub fn eval(node: &SdfNode, point: DVec3) -> f64 {
    eval_batch(node, std::slice::from_ref(&point))[0]
}

/// Evaluate a large batch across the rayon thread pool.
///
/// Splits the input into chunks so each worker still traverses the tree
/// once per chunk. Results are identical to [`eval_batch`].
pub fn eval_batch_parallel(node: &SdfNode, points: &[DVec3]) -> Vec<f64> {
    const CHUNK: usize = 4096;
    if points.len() <= CHUNK {
        return eval_batch(node, points);
    }
    points
        .par_chunks(CHUNK)
        .flat_map_iter(|chunk| eval_batch(node, chunk))
        .collect()
}

fn combine(
    mut a: Vec<f64>,
    b: &[f64],
    k: f64,
    hard: impl Fn(f64, f64) -> f64,
    smooth: impl Fn(f64, f64, f64) -> f64,
) -> Vec<f64> {
    if k > 0.0 {
        for (x, y) in a.iter_mut().zip(b) {
            *x = smooth(*x, *y, k);
        }
    } else {
        for (x, y) in a.iter_mut().zip(b) {
            *x = hard(*x, *y);
        }
    }
    a
}
