//! Error types for structured error handling.
//!
//! This module provides:
//! - `SolverError`: Errors from the iterative linear-system solver
//! - `InterpolationError`: Errors from 1D interpolator construction and lookup
//! - `SurfaceError`: Errors from grid validation and 2D surface queries

use thiserror::Error;

/// Linear-system solver errors.
///
/// # Variants
/// - `DimensionMismatch`: Row count and right-hand side length disagree
/// - `RaggedRow`: A matrix row is not of length `n`
/// - `MaxIterationsExceeded`: Iteration ceiling reached before convergence
/// - `NumericalInstability`: An iterate became non-finite
///
/// # Examples
/// ```
/// use surface_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Number of matrix rows differs from the right-hand side length.
    #[error("Dimension mismatch: {rows} matrix rows for a right-hand side of length {rhs}")]
    DimensionMismatch {
        /// Number of rows in the coefficient matrix
        rows: usize,
        /// Length of the right-hand side
        rhs: usize,
    },

    /// A matrix row does not have one coefficient per unknown.
    #[error("Dimension mismatch: row {row} has length {got}, expected {expected}")]
    RaggedRow {
        /// Offending row index
        row: usize,
        /// Actual row length
        got: usize,
        /// Expected row length
        expected: usize,
    },

    /// Solver failed to converge within the configured iteration ceiling.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of sweeps performed
        iterations: usize,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

/// Interpolation-related errors.
///
/// # Variants
/// - `OutOfBounds`: Query point outside valid interpolation domain
/// - `InsufficientData`: Not enough data points for interpolation
/// - `NonMonotonicData`: Breakpoints are not strictly increasing
/// - `DegenerateInput`: Least-squares denominator is zero
/// - `InvalidInput`: General invalid input error
/// - `Solver`: The underlying linear solve failed
///
/// # Examples
/// ```
/// use surface_core::types::InterpolationError;
///
/// let err = InterpolationError::OutOfBounds { x: 5.0, min: 0.0, max: 3.0 };
/// assert!(format!("{}", err).contains("outside valid domain"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Query point outside valid interpolation domain.
    #[error("Query point {x} outside valid domain ({min}, {max})")]
    OutOfBounds {
        /// The query point that was out of bounds
        x: f64,
        /// Lower domain edge (exclusive for splines)
        min: f64,
        /// Upper domain edge (exclusive for splines)
        max: f64,
    },

    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Breakpoints are not strictly increasing.
    #[error("Breakpoints are not strictly increasing at index {index}")]
    NonMonotonicData {
        /// Index where the violation was detected
        index: usize,
    },

    /// Input admits no unique fit (e.g. all arguments identical).
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Linear solve failed while building the model.
    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),
}

/// Surface construction and query errors.
///
/// Spline range errors raised during a query are carried unmodified inside
/// `Interpolation`.
///
/// # Examples
/// ```
/// use surface_core::types::{InterpolationError, SurfaceError};
///
/// let inner = InterpolationError::OutOfBounds { x: 7.0, min: 0.7, max: 6.0 };
/// let err = SurfaceError::from(inner.clone());
/// assert_eq!(err, SurfaceError::Interpolation(inner));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SurfaceError {
    /// Grid shape or axis contents are invalid.
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    /// Not enough points along an axis.
    #[error("Insufficient data: got {got}, need {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Error raised by a row or column interpolator.
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
}

impl From<SolverError> for SurfaceError {
    fn from(err: SolverError) -> Self {
        SurfaceError::Interpolation(InterpolationError::Solver(err))
    }
}
