//! Grid repetition.

use glam::DVec3;

/// Per-axis count at or above which repetition is unbounded.
pub const REPEAT_UNBOUNDED: f64 = 1e8;

/// Fold a point into the repetition cell nearest the origin copy.
///
/// Per axis: the point snaps to the closest of the `2 * count + 1` copies
/// spaced `spacing` apart; counts at or above [`REPEAT_UNBOUNDED`] use a
/// plain modulo, repeating forever.
#[inline(always)]
pub fn modifier_repeat(point: DVec3, spacing: DVec3, count: DVec3) -> DVec3 {
    DVec3::new(
        repeat_axis(point.x, spacing.x, count.x),
        repeat_axis(point.y, spacing.y, count.y),
        repeat_axis(point.z, spacing.z, count.z),
    )
}

#[inline(always)]
fn repeat_axis(p: f64, spacing: f64, count: f64) -> f64 {
    let cell = (p / spacing).round();
    if count < REPEAT_UNBOUNDED {
        p - cell.clamp(-count, count) * spacing
    } else {
        p - cell * spacing
    }
}
