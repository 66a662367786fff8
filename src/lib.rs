//! # isoforge
//!
//! Compose 3D geometry as signed distance fields and extract watertight
//! triangle meshes from the zero iso-surface.
//!
//! A shape is built symbolically from primitives (sphere, box, torus,
//! cylinder, cone, plane, …) and combinators (boolean CSG with optional
//! smoothing, affine transforms, domain deformations, repetition,
//! shell/dilate/erode). Meshing runs a batched pipeline: automatic bounds
//! discovery, spatial batching with sparse pruning of far-from-surface
//! regions, batch evaluation of the composed distance function, per-cell
//! Marching Cubes, and concurrent scheduling across worker threads. The
//! result is written as binary STL.
//!
//! ## Example
//!
//! ```
//! use isoforge::prelude::*;
//!
//! # fn main() -> Result<(), SdfError> {
//! // The classic CSG demo: intersect a sphere with a cube, then drill
//! // three orthogonal cylinders through it.
//! let base = Sdf::sphere(1.0)? & Sdf::cube(1.5)?;
//! let drill = Sdf::cylinder(0.5)?;
//! let shape = base
//!     - (drill.clone().orient(DVec3::X)?
//!         | drill.clone().orient(DVec3::Y)?
//!         | drill.orient(DVec3::Z)?);
//!
//! assert!(shape.distance(DVec3::new(0.65, 0.65, 0.0)) < 0.0);
//! # Ok(())
//! # }
//! ```
//!
//! Meshing to a file:
//!
//! ```no_run
//! use isoforge::prelude::*;
//!
//! # fn main() -> Result<(), SdfError> {
//! let knot = Sdf::torus(1.0, 0.25)?.twist(0.8);
//! knot.save("knot.stl")?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod eval;
pub mod io;
pub mod mesh;
pub mod modifiers;
pub mod operations;
pub mod primitives;
pub mod transforms;
pub mod types;

pub use error::SdfError;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Commonly used types and functions.
pub mod prelude {
    pub use crate::error::SdfError;
    pub use crate::eval::{eval, eval_batch, eval_batch_parallel};
    pub use crate::io::{load_json, save_json, write_stl, write_stl_ascii};
    pub use crate::mesh::{estimate_bounds, generate, MeshOptions};
    pub use crate::types::{Aabb, Sdf, SdfNode};
    pub use glam::{DQuat, DVec3};
}
