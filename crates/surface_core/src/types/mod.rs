//! Core error types.
//!
//! This module provides:
//! - `error`: Structured error types for solver, interpolation, and surface operations
//!
//! # Re-exports
//!
//! [`SolverError`], [`InterpolationError`] and [`SurfaceError`] are re-exported
//! at this module level for convenience.

pub mod error;

// Re-export commonly used types at module level
pub use error::{InterpolationError, SolverError, SurfaceError};
