//! # surface_core: Sparse-Grid Surface Interpolation
//!
//! Evaluates a two-variable function known only on a coarse rectangular
//! table, e.g. an aerodynamic coefficient tabulated against angle of attack
//! and Mach number.
//!
//! ## Layout
//!
//! - Linear systems and the Gauss-Seidel solver (`math::solvers`)
//! - Natural cubic spline and least-squares line (`math::interpolators`)
//! - Grid table and the two-dimensional evaluator (`surface`)
//! - Error types: `SolverError`, `InterpolationError`, `SurfaceError` (`types::error`)
//!
//! ## Usage Examples
//!
//! ```rust
//! use surface_core::surface::{GridTable, QueryPath, SurfaceEvaluator};
//!
//! let axis_a = [-2.0, 0.0, 2.0];
//! let axis_m = [0.7, 0.9, 1.1, 1.4];
//! let values = [
//!     &[0.0, 0.0, 0.0, 0.0][..],
//!     &[0.0437, 0.0452, 0.0531, 0.0683][..],
//!     &[0.0874, 0.0904, 0.1062, 0.1366][..],
//! ];
//!
//! let table = GridTable::new(&axis_a, &axis_m, &values).unwrap();
//! let surface = SurfaceEvaluator::new(table).unwrap();
//!
//! // Grid points come straight from the table
//! assert_eq!(surface.query(0.0, 0.9).unwrap(), 0.0452);
//!
//! // Off-grid points are interpolated
//! let (value, path) = surface.query_with_path(1.0, 1.0).unwrap();
//! assert_eq!(path, QueryPath::Nested);
//! # assert!(value > 0.0452 && value < 0.1062);
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel`: Build row splines on the rayon thread pool
//! - `serde`: Enable serialisation for configuration, table and error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod surface;
pub mod types;
