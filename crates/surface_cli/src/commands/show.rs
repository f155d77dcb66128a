//! Show command implementation
//!
//! Describes the loaded table, the solver settings and the precomputed
//! column fits.

use std::io::Write;
use surface_core::surface::SurfaceEvaluator;

use crate::table::NamedTable;
use crate::Result;

/// Run the show command
pub fn run<W: Write>(table: &NamedTable, surface: &SurfaceEvaluator<f64>, out: &mut W) -> Result<()> {
    let grid = surface.table();
    let (rows, columns) = grid.shape();
    let solver = surface.config().spline_solver;

    writeln!(out, "table:            {}", table.name)?;
    writeln!(out, "shape:            {} x {}", rows, columns)?;
    writeln!(out, "axis A:           {:?}", grid.axis_a())?;
    writeln!(out, "axis M:           {:?}", grid.axis_m())?;
    writeln!(out, "spline precision: {:e}", solver.precision)?;
    match solver.max_iterations {
        Some(limit) => writeln!(out, "spline ceiling:   {} sweeps", limit)?,
        None => writeln!(out, "spline ceiling:   unbounded")?,
    }
    writeln!(out, "spline offset:    {:?}", surface.config().spline_offset)?;
    writeln!(out, "spline form:      {:?}", surface.config().spline_form)?;

    writeln!(out)?;
    writeln!(out, "{:>8} {:>12} {:>12}", "m", "slope", "intercept")?;
    for (j, &m) in grid.axis_m().iter().enumerate() {
        if let Some(fit) = surface.column_fit(j) {
            writeln!(out, "{:>8} {:>12.6} {:>12.6}", m, fit.slope(), fit.intercept())?;
        }
    }
    Ok(())
}
