//! Dense linear-system solving.
//!
//! ## Available Solvers
//!
//! - [`GaussSeidelSolver`]: Gauss-Seidel iteration on the normal equations
//!   `CᵗC·x = Cᵗr`, convergent for any full-rank square `C`
//!
//! ## Helpers
//!
//! - [`LinearSystem`]: Dimension-validated `(C, r)` pair
//! - [`transpose`], [`normalize`]: Matrix helpers used by the solver
//!
//! ## Configuration
//!
//! [`SolverConfig`] carries:
//! - `precision`: Stop when the update norm drops below it (default: 0.1)
//! - `max_iterations`: Optional sweep ceiling (default: none)
//!
//! ## Example
//!
//! ```
//! use surface_core::math::solvers::{GaussSeidelSolver, SolverConfig};
//!
//! // x* = [1, 2, 3]
//! let c: Vec<Vec<f64>> = vec![
//!     vec![4.0, 1.0, 0.0],
//!     vec![1.0, 3.0, 1.0],
//!     vec![0.0, 1.0, 2.0],
//! ];
//! let r = [6.0, 10.0, 8.0];
//!
//! let solver = GaussSeidelSolver::new(SolverConfig::new(1e-10));
//! let x = solver.solve(&c, &r).unwrap();
//! assert!((x[2] - 3.0).abs() < 1e-8);
//! ```

mod config;
mod gauss_seidel;
mod linear_system;

// Re-export public types at module level
pub use config::SolverConfig;
pub use gauss_seidel::{GaussSeidelSolver, SolveResult};
pub use linear_system::{normalize, transpose, validate_dimensions, LinearSystem};
