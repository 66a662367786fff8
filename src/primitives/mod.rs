//! Closed-form distance functions for the primitive shapes.
//!
//! Each function is a pure point evaluator; the batch evaluator in
//! [`crate::eval`] lifts them over point slices. Unless noted otherwise the
//! returned value is the exact signed Euclidean distance, negative inside.

mod box3d;
mod capsule;
mod cone;
mod cylinder;
mod ellipsoid;
mod plane;
mod slab;
mod sphere;
mod torus;

pub use box3d::{sdf_box3d, sdf_box3d_at, sdf_rounded_box3d};
pub use capsule::sdf_capsule;
pub use cone::{sdf_capped_cone, sdf_cone, sdf_rounded_cone};
pub use cylinder::{sdf_cylinder_capped, sdf_cylinder_infinite};
pub use ellipsoid::sdf_ellipsoid;
pub use plane::sdf_plane;
pub use slab::sdf_slab;
pub use sphere::{sdf_sphere, sdf_sphere_at};
pub use torus::sdf_torus;
