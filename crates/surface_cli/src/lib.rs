//! # surface_cli: Command-Line Driver for Sparse-Grid Surfaces
//!
//! Loads a table, builds a [`SurfaceEvaluator`] and runs one of the
//! commands:
//!
//! - `query`: evaluate a single point
//! - `sample`: evaluate an evenly spaced interior grid
//! - `check`: random self-check against neighbouring table cells
//! - `show`: describe the table and solver settings

pub mod commands;
pub mod config;
pub mod error;
pub mod table;

pub use error::{CliError, Result};

use std::time::Instant;
use surface_core::surface::SurfaceEvaluator;
use tracing::info;

use crate::config::CliConfig;
use crate::table::NamedTable;

/// Build the evaluator for `table`, constructing row splines in parallel.
pub fn build_surface(table: &NamedTable, config: &CliConfig) -> Result<SurfaceEvaluator<f64>> {
    let started = Instant::now();
    let surface =
        SurfaceEvaluator::with_config_parallel(table.grid.clone(), config.surface_config())?;
    info!(
        name = %table.name,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "surface built"
    );
    Ok(surface)
}
