//! Point-space helpers for the affine transform nodes.

mod rotate;
mod scale;

pub use rotate::{rotation_to_axis, transform_rotate};
pub use scale::{transform_scale, transform_scale_nonuniform};
