//! Point-space helpers for the deformation and repetition nodes.

mod bend;
mod elongate;
mod repeat;
mod twist;

pub use bend::modifier_bend;
pub use elongate::modifier_elongate;
pub use repeat::modifier_repeat;
pub use twist::modifier_twist;
