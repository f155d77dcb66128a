//! Gauss-Seidel iteration on the normal equations.

use super::{LinearSystem, SolverConfig};
use crate::types::SolverError;
use num_traits::Float;
use tracing::debug;

/// Outcome of a converged solve.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult<T: Float> {
    /// Solution of the normalised system.
    pub solution: Vec<T>,
    /// Number of sweeps performed.
    pub iterations: usize,
    /// Euclidean norm of the last sweep's update.
    pub update_norm: T,
}

/// Iterative dense linear solver.
///
/// Before iterating, `C·x = r` is replaced by its normal equations
/// `CᵗC·x = Cᵗr`. The normalised matrix is symmetric positive definite
/// whenever `C` has full column rank, which is sufficient for Gauss-Seidel
/// to converge even when `C` itself is not diagonally dominant.
///
/// The returned vector solves the normalised system, i.e. it is the
/// least-squares solution of the original one.
///
/// # Algorithm
///
/// - Start from `x₀ = Cᵗr`.
/// - Sweep `i = 0..n`, replacing `x[i]` in place, so each row sees the
///   updated earlier components and the previous iterate's later ones.
/// - Stop when `‖x_next − x_prev‖₂ < precision`.
///
/// # Termination
///
/// With `max_iterations: None` there is no ceiling. A system that stays
/// singular after normalisation may never converge, so callers must supply
/// well-posed systems or set a ceiling.
///
/// # Example
///
/// ```
/// use surface_core::math::solvers::{GaussSeidelSolver, SolverConfig};
///
/// let solver = GaussSeidelSolver::new(SolverConfig::new(1e-12));
/// let c: Vec<Vec<f64>> = vec![vec![4.0, 1.0], vec![1.0, 3.0]];
/// let x = solver.solve(&c, &[1.0, 2.0]).unwrap();
///
/// assert!((x[0] - 1.0 / 11.0).abs() < 1e-9);
/// assert!((x[1] - 7.0 / 11.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct GaussSeidelSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
}

impl<T: Float> GaussSeidelSolver<T> {
    /// Create a solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with [`SolverConfig::default`] (precision 0.1, unbounded).
    pub fn with_defaults() -> Self {
        Self::new(SolverConfig::default())
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    /// Solve `C·x = r`.
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - Solution of the normalised system
    /// * `Err(SolverError::DimensionMismatch | RaggedRow)` - Inconsistent sizes,
    ///   reported before any computation
    /// * `Err(SolverError::MaxIterationsExceeded)` - Ceiling reached
    /// * `Err(SolverError::NumericalInstability)` - Non-finite iterate
    pub fn solve(&self, matrix: &[Vec<T>], rhs: &[T]) -> Result<Vec<T>, SolverError> {
        let system = LinearSystem::new(matrix.to_vec(), rhs.to_vec())?;
        self.solve_system(&system).map(|result| result.solution)
    }

    /// Solve a validated system, reporting iteration statistics.
    pub fn solve_system(&self, system: &LinearSystem<T>) -> Result<SolveResult<T>, SolverError> {
        let normal = system.normalize();
        let a = normal.matrix();
        let b = normal.rhs();
        let n = normal.dim();

        let mut x = b.to_vec();
        let mut iterations = 0;

        loop {
            if let Some(max_iterations) = self.config.max_iterations {
                if iterations >= max_iterations {
                    return Err(SolverError::MaxIterationsExceeded { iterations });
                }
            }
            iterations += 1;

            let mut update_sq = T::zero();
            for i in 0..n {
                let row = &a[i];
                let lower = dot(&row[..i], &x[..i]);
                let upper = dot(&row[i + 1..], &x[i + 1..]);
                let next = (b[i] - lower - upper) / row[i];
                let delta = next - x[i];
                update_sq = update_sq + delta * delta;
                x[i] = next;
            }

            let update_norm = update_sq.sqrt();
            if !update_norm.is_finite() {
                return Err(SolverError::NumericalInstability(format!(
                    "Gauss-Seidel sweep {} produced a non-finite iterate",
                    iterations
                )));
            }

            if update_norm < self.config.precision {
                debug!(
                    dim = n,
                    iterations,
                    update_norm = update_norm.to_f64().unwrap_or(f64::NAN),
                    "gauss-seidel converged"
                );
                return Ok(SolveResult {
                    solution: x,
                    iterations,
                    update_norm,
                });
            }
        }
    }
}

impl<T: Float> Default for GaussSeidelSolver<T> {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[inline]
fn dot<T: Float>(a: &[T], b: &[T]) -> T {
    a.iter().zip(b).fold(T::zero(), |acc, (&p, &q)| acc + p * q)
}
