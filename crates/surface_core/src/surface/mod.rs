//! Two-dimensional surfaces over sparse grids.
//!
//! This module provides:
//! - [`GridTable`]: validated rectangular sample table
//! - [`SurfaceConfig`]: row-spline settings
//! - [`SurfaceEvaluator`]: query engine choosing between exact lookup,
//!   column fits, row splines and the nested combination of both

mod config;
mod evaluator;
mod grid;

pub use config::SurfaceConfig;
pub use evaluator::{QueryPath, SurfaceEvaluator};
pub use grid::GridTable;
