//! Check command implementation
//!
//! Draws random points inside the table span and verifies each value lies
//! between the smallest and largest corner of its enclosing table cell.
//! Least-squares column fits may overshoot the cell, so failures are
//! reported rather than treated as errors.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::io::Write;
use surface_core::surface::SurfaceEvaluator;
use tracing::{info, warn};

use crate::{CliError, Result};

/// Result for one random point
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CheckSample {
    /// Axis A coordinate
    pub a: f64,
    /// Axis M coordinate
    pub m: f64,
    /// Surface value
    pub value: f64,
    /// Smallest corner of the enclosing cell
    pub lower: f64,
    /// Largest corner of the enclosing cell
    pub upper: f64,
}

impl CheckSample {
    /// Whether the value lies within the cell's corner range.
    pub fn within(&self) -> bool {
        self.lower <= self.value && self.value <= self.upper
    }
}

/// Outcome of a self-check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    /// Seed used for the draw
    pub seed: u64,
    /// Per-point results
    pub samples: Vec<CheckSample>,
}

impl CheckReport {
    /// Number of samples inside their cell range.
    pub fn passed(&self) -> usize {
        self.samples.iter().filter(|s| s.within()).count()
    }

    /// Number of samples outside their cell range.
    pub fn failed(&self) -> usize {
        self.samples.len() - self.passed()
    }
}

/// Evaluate `count` random points drawn with `seed`.
///
/// Axis A is drawn from `[a_first, a_last)` and axis M from
/// `[m_first, m_last)`, so every point has an enclosing cell and a
/// spline-evaluable M coordinate.
pub fn check_samples(surface: &SurfaceEvaluator<f64>, count: usize, seed: u64) -> Result<CheckReport> {
    if count == 0 {
        return Err(CliError::InvalidArgument(
            "samples must be greater than 0".to_string(),
        ));
    }

    let table = surface.table();
    let (axis_a, axis_m) = (table.axis_a(), table.axis_m());
    let mut rng = StdRng::seed_from_u64(seed);

    let mut samples = Vec::with_capacity(count);
    for _ in 0..count {
        let a = rng.gen_range(axis_a[0]..axis_a[axis_a.len() - 1]);
        let m = rng.gen_range(axis_m[0]..axis_m[axis_m.len() - 1]);
        let value = surface.query(a, m)?;
        let (lower, upper) = table.cell_bounds(a, m).ok_or_else(|| {
            CliError::InvalidArgument(format!("({}, {}) has no enclosing cell", a, m))
        })?;

        let sample = CheckSample {
            a,
            m,
            value,
            lower,
            upper,
        };
        if !sample.within() {
            warn!(a, m, value, lower, upper, "value outside neighbouring cells");
        }
        samples.push(sample);
    }

    Ok(CheckReport { seed, samples })
}

/// Run the check command
pub fn run<W: Write>(
    surface: &SurfaceEvaluator<f64>,
    count: usize,
    seed: u64,
    out: &mut W,
) -> Result<CheckReport> {
    info!(count, seed, "checking surface");
    let report = check_samples(surface, count, seed)?;

    writeln!(
        out,
        "{:>10} {:>10} {:>12} {:>12} {:>12}  result",
        "a", "m", "value", "lower", "upper"
    )?;
    for s in &report.samples {
        writeln!(
            out,
            "{:>10.4} {:>10.4} {:>12.6} {:>12.6} {:>12.6}  {}",
            s.a,
            s.m,
            s.value,
            s.lower,
            s.upper,
            if s.within() { "ok" } else { "OUTSIDE" }
        )?;
    }
    writeln!(
        out,
        "{} of {} samples within neighbouring cells (seed {})",
        report.passed(),
        report.samples.len(),
        report.seed
    )?;

    info!(passed = report.passed(), failed = report.failed(), "check complete");
    Ok(report)
}
