//! The mesh generation pipeline.
//!
//! `generate` drives the full chain: bounds discovery (unless the caller
//! supplies a box), voxel step selection, tiling into cubic batches, a
//! sparse skip test that prunes batches provably free of the surface,
//! batch evaluation of the composed field, per-cell Marching Cubes, and
//! assembly of world-space triangles across worker threads.

mod bounds;
mod generator;
mod marching_cubes;
mod tables;

pub use bounds::estimate_bounds;
pub use generator::{generate, MeshOptions};
pub use marching_cubes::extract_surface;
