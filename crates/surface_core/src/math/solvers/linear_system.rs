//! Dense linear systems and the matrix helpers used to normalise them.

use crate::types::SolverError;
use num_traits::Float;

/// A dense square system `C·x = r`.
///
/// Construction validates that `C` has one row per entry of `r` and that
/// every row has one coefficient per unknown, so a `LinearSystem` is always
/// dimension-consistent.
///
/// # Example
///
/// ```
/// use surface_core::math::solvers::LinearSystem;
///
/// let system = LinearSystem::new(vec![vec![2.0, 0.0], vec![0.0, 4.0]], vec![2.0, 8.0]).unwrap();
/// assert_eq!(system.dim(), 2);
///
/// // Rows must match the right-hand side
/// assert!(LinearSystem::new(vec![vec![1.0, 0.0]], vec![1.0, 2.0]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem<T: Float> {
    /// Coefficient matrix, row-major
    matrix: Vec<Vec<T>>,
    /// Right-hand side
    rhs: Vec<T>,
}

impl<T: Float> LinearSystem<T> {
    /// Construct a system, validating its dimensions.
    ///
    /// # Returns
    ///
    /// * `Err(SolverError::DimensionMismatch)` - Row count differs from `rhs.len()`
    /// * `Err(SolverError::RaggedRow)` - Some row is not of length `rhs.len()`
    pub fn new(matrix: Vec<Vec<T>>, rhs: Vec<T>) -> Result<Self, SolverError> {
        validate_dimensions(&matrix, &rhs)?;
        Ok(Self { matrix, rhs })
    }

    /// Number of unknowns.
    #[inline]
    pub fn dim(&self) -> usize {
        self.rhs.len()
    }

    /// Coefficient matrix rows.
    #[inline]
    pub fn matrix(&self) -> &[Vec<T>] {
        &self.matrix
    }

    /// Right-hand side.
    #[inline]
    pub fn rhs(&self) -> &[T] {
        &self.rhs
    }

    /// Replace `(C, r)` with the normal equations `(CᵗC, Cᵗr)`.
    ///
    /// The result is symmetric positive semidefinite, and positive definite
    /// when `C` has full column rank.
    pub fn normalize(&self) -> Self {
        let (matrix, rhs) = normal_equations(&self.matrix, &self.rhs);
        Self { matrix, rhs }
    }

    /// Consume the system, returning `(matrix, rhs)`.
    pub fn into_parts(self) -> (Vec<Vec<T>>, Vec<T>) {
        (self.matrix, self.rhs)
    }
}

/// Check that `matrix` is `n×n` with `n = rhs.len()`.
pub fn validate_dimensions<T>(matrix: &[Vec<T>], rhs: &[T]) -> Result<(), SolverError> {
    let n = rhs.len();
    if matrix.len() != n {
        return Err(SolverError::DimensionMismatch {
            rows: matrix.len(),
            rhs: n,
        });
    }
    for (row, coefficients) in matrix.iter().enumerate() {
        if coefficients.len() != n {
            return Err(SolverError::RaggedRow {
                row,
                got: coefficients.len(),
                expected: n,
            });
        }
    }
    Ok(())
}

/// Transpose a rectangular matrix.
///
/// An empty matrix transposes to an empty matrix.
///
/// # Example
///
/// ```
/// use surface_core::math::solvers::transpose;
///
/// let m = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
/// let t = transpose(&m);
/// assert_eq!(t, vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]);
/// ```
pub fn transpose<T: Float>(matrix: &[Vec<T>]) -> Vec<Vec<T>> {
    let cols = matrix.first().map_or(0, Vec::len);
    (0..cols)
        .map(|j| matrix.iter().map(|row| row[j]).collect())
        .collect()
}

/// Normal equations of a validated square system: `(CᵗC, Cᵗr)`.
///
/// # Example
///
/// ```
/// use surface_core::math::solvers::normalize;
///
/// let c = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
/// let (ctc, ctr) = normalize(&c, &[1.0, 1.0]).unwrap();
/// assert_eq!(ctc, vec![vec![10.0, 14.0], vec![14.0, 20.0]]);
/// assert_eq!(ctr, vec![4.0, 6.0]);
/// ```
pub fn normalize<T: Float>(
    matrix: &[Vec<T>],
    rhs: &[T],
) -> Result<(Vec<Vec<T>>, Vec<T>), SolverError> {
    validate_dimensions(matrix, rhs)?;
    Ok(normal_equations(matrix, rhs))
}

fn normal_equations<T: Float>(matrix: &[Vec<T>], rhs: &[T]) -> (Vec<Vec<T>>, Vec<T>) {
    let n = rhs.len();
    let transposed = transpose(matrix);

    // (CᵗC)[i][j] = Σ_k C[k][i]·C[k][j]
    let mut normal = vec![vec![T::zero(); n]; n];
    for i in 0..n {
        for j in i..n {
            let value = transposed[i]
                .iter()
                .zip(&transposed[j])
                .fold(T::zero(), |acc, (&a, &b)| acc + a * b);
            normal[i][j] = value;
            normal[j][i] = value;
        }
    }

    let normal_rhs = transposed
        .iter()
        .map(|column| {
            column
                .iter()
                .zip(rhs)
                .fold(T::zero(), |acc, (&c, &r)| acc + c * r)
        })
        .collect();

    (normal, normal_rhs)
}
