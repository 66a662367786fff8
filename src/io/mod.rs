//! File output: STL meshes and JSON shape trees.

mod json;
mod stl;

pub use json::{load_json, save_json};
pub use stl::{write_stl, write_stl_ascii};
