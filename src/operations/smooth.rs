//! Smooth boolean combinations.
//!
//! The polynomial blend mixes the operands over a band of width `k` around
//! their crossover. Results are approximate fields inside the band but keep
//! the correct sign at the surface. Callers guarantee `k > 0`.

/// Smooth union blended over radius `k`.
#[inline(always)]
pub fn sdf_smooth_union(a: f64, b: f64, k: f64) -> f64 {
    let h = (0.5 + 0.5 * (b - a) / k).clamp(0.0, 1.0);
    b * (1.0 - h) + a * h - k * h * (1.0 - h)
}

/// Smooth intersection blended over radius `k`.
#[inline(always)]
pub fn sdf_smooth_intersection(a: f64, b: f64, k: f64) -> f64 {
    let h = (0.5 - 0.5 * (b - a) / k).clamp(0.0, 1.0);
    b * (1.0 - h) + a * h + k * h * (1.0 - h)
}

/// Smooth difference blended over radius `k`.
#[inline(always)]
pub fn sdf_smooth_difference(a: f64, b: f64, k: f64) -> f64 {
    let h = (0.5 - 0.5 * (a + b) / k).clamp(0.0, 1.0);
    a * (1.0 - h) + (-b) * h + k * h * (1.0 - h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::{sdf_difference, sdf_intersection, sdf_union};

    #[test]
    fn test_smooth_union_lower_bounds_hard_union() {
        for &(a, b) in &[(1.0, 2.0), (-0.5, 0.3), (0.1, 0.1), (-2.0, -1.0)] {
            let smooth = sdf_smooth_union(a, b, 0.5);
            assert!(
                smooth <= sdf_union(a, b) + 1e-12,
                "smooth union {smooth} above hard union for ({a}, {b})"
            );
        }
    }

    #[test]
    fn test_smooth_matches_hard_outside_band() {
        // Operands far apart relative to k: the blend saturates.
        let k = 0.1;
        assert!((sdf_smooth_union(-3.0, 5.0, k) - sdf_union(-3.0, 5.0)).abs() < 1e-12);
        assert!(
            (sdf_smooth_intersection(-3.0, 5.0, k) - sdf_intersection(-3.0, 5.0)).abs() < 1e-12
        );
        assert!((sdf_smooth_difference(-3.0, 5.0, k) - sdf_difference(-3.0, 5.0)).abs() < 1e-12);
    }

    #[test]
    fn test_smooth_union_symmetric() {
        let d1 = sdf_smooth_union(0.2, -0.1, 0.4);
        let d2 = sdf_smooth_union(-0.1, 0.2, 0.4);
        assert!((d1 - d2).abs() < 1e-12);
    }
}
