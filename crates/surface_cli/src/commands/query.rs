//! Query command implementation
//!
//! Evaluates the surface at a single point and reports the evaluation path.

use std::io::Write;
use surface_core::surface::SurfaceEvaluator;
use tracing::info;

use crate::Result;

/// Run the query command
pub fn run<W: Write>(surface: &SurfaceEvaluator<f64>, a: f64, m: f64, out: &mut W) -> Result<()> {
    info!(a, m, "querying surface");
    let (value, path) = surface.query_with_path(a, m)?;
    writeln!(out, "f({}, {}) = {} [{}]", a, m, value, path)?;
    Ok(())
}
