//! Automatic bounds discovery by adaptive grid sampling.

use glam::DVec3;

use crate::eval::eval_batch_parallel;
use crate::types::{Aabb, SdfNode};

/// Samples per axis of the probe grid.
const GRID: usize = 16;
/// Upper bound on shrink/expand rounds.
const MAX_ITERATIONS: usize = 32;
/// Half-size of the initial search cube.
const INITIAL_HALF_SIZE: f64 = 10.0;

/// Estimate a box that contains the zero level set of `node`.
///
/// Starting from `[-10, 10]^3`, the field is probed on a 16^3 grid. Samples
/// whose magnitude is below half the grid diagonal are treated as near the
/// surface; their bounding box, padded by half a grid step per axis,
/// becomes the next iterate. When no sample qualifies the box doubles
/// around its center instead. Iteration stops once the near-surface
/// threshold no longer changes.
///
/// A shape that truly extends past the final box shows up as a mesh
/// clipped at that box; pass explicit bounds to
/// [`MeshOptions`](crate::mesh::MeshOptions) to bypass the search.
pub fn estimate_bounds(node: &SdfNode) -> Aabb {
    let mut bounds_min = DVec3::splat(-INITIAL_HALF_SIZE);
    let mut bounds_max = DVec3::splat(INITIAL_HALF_SIZE);

    let mut prev_threshold = -1.0;

    for _ in 0..MAX_ITERATIONS {
        let step = (bounds_max - bounds_min) / (GRID as f64 - 1.0);
        let threshold = step.length() / 2.0;

        if (threshold - prev_threshold).abs() < 1e-10 {
            break;
        }
        prev_threshold = threshold;

        let mut points = Vec::with_capacity(GRID * GRID * GRID);
        for z in 0..GRID {
            for y in 0..GRID {
                for x in 0..GRID {
                    points.push(DVec3::new(
                        bounds_min.x + x as f64 * step.x,
                        bounds_min.y + y as f64 * step.y,
                        bounds_min.z + z as f64 * step.z,
                    ));
                }
            }
        }

        let values = eval_batch_parallel(node, &points);

        let mut near_min = bounds_max;
        let mut near_max = bounds_min;
        let mut found_any = false;
        for (point, value) in points.iter().zip(&values) {
            if value.abs() <= threshold {
                near_min = near_min.min(*point);
                near_max = near_max.max(*point);
                found_any = true;
            }
        }

        if found_any {
            let margin = step * 0.5;
            bounds_min = near_min - margin;
            bounds_max = near_max + margin;
        } else {
            let center = (bounds_min + bounds_max) * 0.5;
            let size = bounds_max - bounds_min;
            bounds_min = center - size;
            bounds_max = center + size;
        }
    }

    Aabb::new(bounds_min, bounds_max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sdf;

    #[test]
    fn test_sphere_bounds_are_tight() {
        let shape = Sdf::sphere(1.0).unwrap();
        let bounds = estimate_bounds(shape.node());
        for axis in 0..3 {
            assert!(bounds.min[axis] < -1.0 && bounds.min[axis] > -1.8, "{bounds:?}");
            assert!(bounds.max[axis] > 1.0 && bounds.max[axis] < 1.8, "{bounds:?}");
        }
    }

    #[test]
    fn test_translated_shape_is_found() {
        let shape = Sdf::sphere(1.0)
            .unwrap()
            .translate(DVec3::new(5.0, 0.0, 0.0));
        let bounds = estimate_bounds(shape.node());
        assert!(bounds.min.x < 4.0 && bounds.max.x > 6.0, "{bounds:?}");
        assert!(bounds.contains(DVec3::new(5.0, 0.0, 0.0)), "{bounds:?}");
    }

    #[test]
    fn test_small_far_shape_triggers_expansion() {
        // Outside the initial cube entirely; the search must grow to find it.
        let shape = Sdf::sphere(1.0)
            .unwrap()
            .translate(DVec3::new(14.0, 0.0, 0.0));
        let bounds = estimate_bounds(shape.node());
        assert!(bounds.contains(DVec3::new(14.0, 0.0, 0.0)), "{bounds:?}");
    }
}
