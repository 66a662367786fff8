//! JSON persistence for shape trees.
//!
//! A composed [`Sdf`] serializes to a self-contained JSON document and
//! loads back into an identical evaluator, which makes shapes easy to
//! store, diff, and ship between tools.

use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::error::SdfError;
use crate::types::Sdf;

/// Save a shape tree as pretty-printed JSON.
pub fn save_json(sdf: &Sdf, path: impl AsRef<Path>) -> Result<(), SdfError> {
    let file = std::fs::File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, sdf)?;
    Ok(())
}

/// Load a shape tree saved by [`save_json`].
pub fn load_json(path: impl AsRef<Path>) -> Result<Sdf, SdfError> {
    let file = std::fs::File::open(path)?;
    let reader = BufReader::new(file);
    let sdf = serde_json::from_reader(reader)?;
    Ok(sdf)
}
