//! Numerical building blocks.
//!
//! - `solvers`: Iterative dense linear-system solver
//! - `interpolators`: One-dimensional interpolation models

pub mod interpolators;
pub mod solvers;
