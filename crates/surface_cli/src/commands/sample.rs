//! Sample command implementation
//!
//! Evaluates the surface on an evenly spaced grid strictly inside the table
//! span. Outer M coordinates are excluded because row splines reject them.

use serde::Serialize;
use std::io::Write;
use std::time::Instant;
use surface_core::surface::SurfaceEvaluator;
use tracing::info;

use super::OutputFormat;
use crate::{CliError, Result};

/// One evaluated point
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    /// Axis A coordinate
    pub a: f64,
    /// Axis M coordinate
    pub m: f64,
    /// Surface value
    pub value: f64,
}

/// `n` evenly spaced points strictly between `lo` and `hi`.
pub fn interior_points(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    let step = (hi - lo) / (n + 1) as f64;
    (1..=n).map(|k| lo + step * k as f64).collect()
}

/// Evaluate `points × points` samples across the interior of the table.
pub fn sample_grid(surface: &SurfaceEvaluator<f64>, points: usize) -> Result<Vec<Sample>> {
    if points == 0 {
        return Err(CliError::InvalidArgument(
            "points must be greater than 0".to_string(),
        ));
    }

    let table = surface.table();
    let (a_lo, a_hi) = span(table.axis_a());
    let (m_lo, m_hi) = span(table.axis_m());
    let axis_a = interior_points(a_lo, a_hi, points);
    let axis_m = interior_points(m_lo, m_hi, points);

    let report_every = (points / 10).max(1);
    let mut samples = Vec::with_capacity(points * points);
    for (row, &a) in axis_a.iter().enumerate() {
        for &m in &axis_m {
            samples.push(Sample {
                a,
                m,
                value: surface.query(a, m)?,
            });
        }
        if (row + 1) % report_every == 0 {
            info!(rows_done = row + 1, rows = points, "sampling");
        }
    }
    Ok(samples)
}

/// Write samples in the requested format.
pub fn write_samples<W: Write>(samples: &[Sample], format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Table => {
            let Some(first) = samples.first() else {
                writeln!(out, "no samples")?;
                return Ok(());
            };
            let (lowest, highest, sum) = samples.iter().fold(
                (*first, *first, 0.0),
                |(lo, hi, sum), s| {
                    (
                        if s.value < lo.value { *s } else { lo },
                        if s.value > hi.value { *s } else { hi },
                        sum + s.value,
                    )
                },
            );
            writeln!(out, "samples: {}", samples.len())?;
            writeln!(
                out,
                "min:     {} at ({}, {})",
                lowest.value, lowest.a, lowest.m
            )?;
            writeln!(
                out,
                "max:     {} at ({}, {})",
                highest.value, highest.a, highest.m
            )?;
            writeln!(out, "mean:    {}", sum / samples.len() as f64)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            for sample in samples {
                writer.serialize(sample)?;
            }
            writer.flush()?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, samples)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Run the sample command
pub fn run<W: Write>(
    surface: &SurfaceEvaluator<f64>,
    points: usize,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    info!(points, ?format, "sampling surface");
    let started = Instant::now();
    let samples = sample_grid(surface, points)?;
    info!(
        samples = samples.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "sampling complete"
    );
    write_samples(&samples, format, out)
}

fn span(axis: &[f64]) -> (f64, f64) {
    (axis[0], axis[axis.len() - 1])
}
