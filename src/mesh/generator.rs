//! Batch scheduling and mesh assembly.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Instant;

use glam::DVec3;

use super::bounds::estimate_bounds;
use super::marching_cubes::extract_surface;
use crate::error::SdfError;
use crate::eval::{eval, eval_batch};
use crate::types::{Aabb, Sdf, SdfNode};
use serde::{Deserialize, Serialize};

/// Mesh generation options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshOptions {
    /// World-space voxel side length; `0` derives it from [`samples`].
    ///
    /// [`samples`]: MeshOptions::samples
    pub step: f64,
    /// Explicit bounding box; `None` runs the automatic estimator.
    pub bounds: Option<Aabb>,
    /// Target voxel count used when `step` is `0`.
    pub samples: usize,
    /// Worker threads; `0` uses the available hardware parallelism.
    pub workers: usize,
    /// Cells per batch along each axis.
    pub batch_size: usize,
    /// Print progress to stdout.
    pub verbose: bool,
    /// Skip batches that provably contain no surface.
    pub sparse: bool,
}

impl Default for MeshOptions {
    fn default() -> Self {
        MeshOptions {
            step: 0.0,
            bounds: None,
            samples: 1 << 22,
            workers: 0,
            batch_size: 32,
            verbose: false,
            sparse: true,
        }
    }
}

impl MeshOptions {
    fn validate(&self) -> Result<(), SdfError> {
        if !(self.step >= 0.0 && self.step.is_finite()) {
            return Err(SdfError::argument(format!(
                "step must be zero or positive, got {}",
                self.step
            )));
        }
        if self.samples == 0 {
            return Err(SdfError::argument("samples must be at least 1"));
        }
        if self.batch_size == 0 {
            return Err(SdfError::argument("batch size must be at least 1"));
        }
        if let Some(bounds) = &self.bounds {
            if !bounds.min.cmplt(bounds.max).all() {
                return Err(SdfError::argument(format!(
                    "bounds min {} must be below max {} on every axis",
                    bounds.min, bounds.max
                )));
            }
        }
        Ok(())
    }
}

/// Cell index ranges of one batch, inclusive of the shared boundary column.
#[derive(Debug, Clone, Copy)]
struct Batch {
    x0: usize,
    x1: usize,
    y0: usize,
    y1: usize,
    z0: usize,
    z1: usize,
}

/// Generate the zero iso-surface of `sdf` as a flat triangle list.
///
/// Each three consecutive points form one CCW triangle. The triangle *set*
/// is deterministic for a fixed shape, options, and worker count; the order
/// in which batches append their output is not.
pub fn generate(sdf: &Sdf, options: &MeshOptions) -> Result<Vec<DVec3>, SdfError> {
    options.validate()?;
    let node = sdf.node();
    let start_time = Instant::now();

    let bounds = match options.bounds {
        Some(bounds) => bounds,
        None => estimate_bounds(node),
    };
    let bounds_min = bounds.min;
    let mut bounds_max = bounds.max;

    if options.verbose {
        println!("Bounds: {} to {}", bounds_min, bounds_max);
    }

    let mut step = options.step;
    if step == 0.0 {
        step = (bounds.volume() / options.samples as f64).cbrt();
    }
    if step == 0.0 {
        step = 0.1;
    }

    let size = bounds_max - bounds_min;
    let nx = (size.x / step).ceil() as usize + 1;
    let ny = (size.y / step).ceil() as usize + 1;
    let nz = (size.z / step).ceil() as usize + 1;

    if options.verbose {
        println!("Grid dimensions: {} x {} x {}", nx, ny, nz);
        println!("Step size: {}", step);
    }

    // Snap the upper corner so cells are exact multiples of the step.
    bounds_max = bounds_min
        + DVec3::new(
            (nx - 1) as f64 * step,
            (ny - 1) as f64 * step,
            (nz - 1) as f64 * step,
        );

    let batch_size = options.batch_size;
    let mut batches = Vec::new();
    for z0 in (0..nz - 1).step_by(batch_size) {
        for y0 in (0..ny - 1).step_by(batch_size) {
            for x0 in (0..nx - 1).step_by(batch_size) {
                batches.push(Batch {
                    x0,
                    x1: (x0 + batch_size).min(nx - 1),
                    y0,
                    y1: (y0 + batch_size).min(ny - 1),
                    z0,
                    z1: (z0 + batch_size).min(nz - 1),
                });
            }
        }
    }

    if options.verbose {
        println!("Processing {} batches...", batches.len());
    }

    let workers = if options.workers > 0 {
        options.workers
    } else {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4)
    };

    let mesh = Mutex::new(Vec::new());
    let batches_processed = AtomicUsize::new(0);
    let batches_skipped = AtomicUsize::new(0);

    let batches_per_worker = batches.len().div_ceil(workers);

    std::thread::scope(|scope| {
        for worker in 0..workers {
            let start = worker * batches_per_worker;
            let end = (start + batches_per_worker).min(batches.len());
            if start >= end {
                continue;
            }
            let assigned = &batches[start..end];
            let mesh = &mesh;
            let batches_processed = &batches_processed;
            let batches_skipped = &batches_skipped;
            scope.spawn(move || {
                let mut local = Vec::new();
                for batch in assigned {
                    process_batch(
                        node,
                        batch,
                        bounds_min,
                        step,
                        options.sparse,
                        &mut local,
                        batches_processed,
                        batches_skipped,
                    );
                }
                mesh.lock().unwrap().extend(local);
            });
        }
    });

    let triangles = mesh.into_inner().unwrap();

    if options.verbose {
        println!("Generated {} triangles", triangles.len() / 3);
        println!(
            "Processed {} batches (skipped {})",
            batches_processed.load(Ordering::Relaxed),
            batches_skipped.load(Ordering::Relaxed)
        );
        println!("Time: {:.3} seconds", start_time.elapsed().as_secs_f64());
    }

    Ok(triangles)
}

/// Run one batch: sparse test, grid evaluation, extraction, world mapping.
#[allow(clippy::too_many_arguments)]
fn process_batch(
    node: &SdfNode,
    batch: &Batch,
    bounds_min: DVec3,
    step: f64,
    sparse: bool,
    local: &mut Vec<DVec3>,
    batches_processed: &AtomicUsize,
    batches_skipped: &AtomicUsize,
) {
    let batch_min = bounds_min
        + DVec3::new(
            batch.x0 as f64 * step,
            batch.y0 as f64 * step,
            batch.z0 as f64 * step,
        );
    let batch_max = bounds_min
        + DVec3::new(
            batch.x1 as f64 * step,
            batch.y1 as f64 * step,
            batch.z1 as f64 * step,
        );

    if sparse && can_skip_batch(node, batch_min, batch_max) {
        batches_skipped.fetch_add(1, Ordering::Relaxed);
        batches_processed.fetch_add(1, Ordering::Relaxed);
        return;
    }

    let dims = [
        batch.x1 - batch.x0 + 1,
        batch.y1 - batch.y0 + 1,
        batch.z1 - batch.z0 + 1,
    ];

    // Sample positions come from the global grid index so the shared
    // boundary columns of neighboring batches evaluate to identical points.
    let mut grid_points = Vec::with_capacity(dims[0] * dims[1] * dims[2]);
    for bz in 0..dims[2] {
        for by in 0..dims[1] {
            for bx in 0..dims[0] {
                grid_points.push(DVec3::new(
                    bounds_min.x + (batch.x0 + bx) as f64 * step,
                    bounds_min.y + (batch.y0 + by) as f64 * step,
                    bounds_min.z + (batch.z0 + bz) as f64 * step,
                ));
            }
        }
    }

    let values = eval_batch(node, &grid_points);
    let batch_triangles = extract_surface(&values, dims, 0.0);

    // Same rule for the emitted vertices: voxel coordinate plus the global
    // batch origin, then one scale and offset. Seam vertices land on
    // bit-identical doubles in every batch that touches them.
    let origin = DVec3::new(batch.x0 as f64, batch.y0 as f64, batch.z0 as f64);
    local.extend(
        batch_triangles
            .into_iter()
            .map(|v| (v + origin) * step + bounds_min),
    );

    batches_processed.fetch_add(1, Ordering::Relaxed);
}

/// Whether a batch provably contains no part of the surface.
///
/// Requires both checks to pass: the center distance exceeds the batch's
/// half-diagonal (sufficient for 1-Lipschitz fields), and all eight corner
/// distances are strictly of one sign (a robust fallback for the
/// approximate fields the deformations produce). A zero corner never skips.
fn can_skip_batch(node: &SdfNode, batch_min: DVec3, batch_max: DVec3) -> bool {
    let center = (batch_min + batch_max) * 0.5;
    let radius = (batch_max - batch_min).length() / 2.0;

    let center_distance = eval(node, center);
    if center_distance.abs() <= radius {
        return false;
    }

    let corners = [
        DVec3::new(batch_min.x, batch_min.y, batch_min.z),
        DVec3::new(batch_max.x, batch_min.y, batch_min.z),
        DVec3::new(batch_min.x, batch_max.y, batch_min.z),
        DVec3::new(batch_max.x, batch_max.y, batch_min.z),
        DVec3::new(batch_min.x, batch_min.y, batch_max.z),
        DVec3::new(batch_max.x, batch_min.y, batch_max.z),
        DVec3::new(batch_min.x, batch_max.y, batch_max.z),
        DVec3::new(batch_max.x, batch_max.y, batch_max.z),
    ];
    let values = eval_batch(node, &corners);

    values.iter().all(|&v| v > 0.0) || values.iter().all(|&v| v < 0.0)
}
