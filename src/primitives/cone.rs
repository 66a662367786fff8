//! Cone distance functions.

use glam::{DVec2, DVec3};

/// Signed distance to a cone with its apex at the origin opening along +Z.
///
/// `angle` is the half-angle between the axis and the surface; the cone is
/// cut at `height` along the axis direction. Distances beyond the apex
/// underestimate slightly but keep the correct sign.
#[inline(always)]
pub fn sdf_cone(point: DVec3, angle: f64, height: f64) -> f64 {
    let (sin_a, cos_a) = angle.sin_cos();
    let q = DVec2::new(sin_a, cos_a);
    let lxy = (point.x * point.x + point.y * point.y).sqrt();
    let w = DVec2::new(lxy, point.z);

    let along = q.dot(w);
    let a = w - q * along.clamp(0.0, height);
    let b = w - DVec2::new(q.x * lxy.clamp(0.0, height), 0.0);
    let flip = if along < 0.0 { -1.0 } else { 1.0 };
    let d = a.dot(a).min(b.dot(b));
    let side = (flip * (w.x * q.y - w.y * q.x)).max(flip * (w.y - height));
    d.sqrt().copysign(side)
}

/// Signed distance to a cone along +Z with spherically rounded ends.
///
/// A sphere of radius `r1` at the origin and one of radius `r2` at height
/// `h`, wrapped by their common tangent surface. Requires `|r1 - r2| < h`.
#[inline(always)]
pub fn sdf_rounded_cone(point: DVec3, r1: f64, r2: f64, h: f64) -> f64 {
    let q = DVec2::new(
        (point.x * point.x + point.y * point.y).sqrt(),
        point.z,
    );

    let b = (r1 - r2) / h;
    let a = (1.0 - b * b).sqrt();
    let k = q.dot(DVec2::new(-b, a));

    if k < 0.0 {
        return q.length() - r1;
    }
    if k > a * h {
        return (q - DVec2::new(0.0, h)).length() - r2;
    }
    q.dot(DVec2::new(a, b)) - r1
}

/// Signed distance to a cone with flat caps of radius `ra` at `a` and `rb`
/// at `b`.
#[inline(always)]
pub fn sdf_capped_cone(point: DVec3, a: DVec3, b: DVec3, ra: f64, rb: f64) -> f64 {
    let rba = rb - ra;
    let baba = (b - a).dot(b - a);
    let papa = (point - a).dot(point - a);
    let paba = (point - a).dot(b - a) / baba;

    // Radial offset from the axis; the subtraction can dip a hair below
    // zero for points exactly on the axis.
    let x = (papa - paba * paba * baba).max(0.0).sqrt();

    let cax = (x - if paba < 0.5 { ra } else { rb }).max(0.0);
    let cay = (paba - 0.5).abs() - 0.5;

    let k = rba * rba + baba;
    let f = ((rba * (x - ra) + paba * baba) / k).clamp(0.0, 1.0);

    let cbx = x - ra - f * rba;
    let cby = paba - f;

    let sign = if cbx < 0.0 && cay < 0.0 { -1.0 } else { 1.0 };
    sign * (cax * cax + cay * cay * baba)
        .min(cbx * cbx + cby * cby * baba)
        .sqrt()
}
