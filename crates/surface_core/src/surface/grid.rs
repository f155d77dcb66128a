//! Rectangular sample tables over two axes.

use crate::types::SurfaceError;
use num_traits::Float;

/// Sample values at the intersections of two strictly increasing axes.
///
/// # Grid Layout
///
/// `values[i][j] = f(axis_a[i], axis_m[j])`:
/// - rows follow axis A
/// - columns follow axis M
///
/// # Example
///
/// ```
/// use surface_core::surface::GridTable;
///
/// let axis_a = [0.0, 2.0];
/// let axis_m = [0.7, 0.9, 1.1];
/// let values = [&[0.0, 0.0, 0.0][..], &[0.0874, 0.0904, 0.1062][..]];
///
/// let table = GridTable::new(&axis_a, &axis_m, &values).unwrap();
/// assert_eq!(table.shape(), (2, 3));
/// assert_eq!(table.value(1, 2), 0.1062);
/// assert_eq!(table.index_m(0.9), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridTable<T: Float> {
    /// Axis A coordinates (rows)
    axis_a: Vec<T>,
    /// Axis M coordinates (columns)
    axis_m: Vec<T>,
    /// Grid values: values[i][j] = f(axis_a[i], axis_m[j])
    values: Vec<Vec<T>>,
}

impl<T: Float> GridTable<T> {
    /// Minimum number of points on either axis.
    pub const MIN_AXIS_LEN: usize = 2;

    /// Construct a table from borrowed rows.
    ///
    /// # Returns
    ///
    /// * `Err(SurfaceError::InsufficientData)` - Fewer than 2 points on an axis
    /// * `Err(SurfaceError::InvalidGrid)` - Shape mismatch, non-finite data, or
    ///   an axis that is not strictly increasing
    pub fn new(axis_a: &[T], axis_m: &[T], values: &[&[T]]) -> Result<Self, SurfaceError> {
        Self::from_rows(
            axis_a.to_vec(),
            axis_m.to_vec(),
            values.iter().map(|row| row.to_vec()).collect(),
        )
    }

    /// Construct a table taking ownership of its data.
    pub fn from_rows(
        axis_a: Vec<T>,
        axis_m: Vec<T>,
        values: Vec<Vec<T>>,
    ) -> Result<Self, SurfaceError> {
        validate_axis("axis A", &axis_a)?;
        validate_axis("axis M", &axis_m)?;

        if values.len() != axis_a.len() {
            return Err(SurfaceError::InvalidGrid(format!(
                "Grid rows ({}) must match axis A length ({})",
                values.len(),
                axis_a.len()
            )));
        }

        for (i, row) in values.iter().enumerate() {
            if row.len() != axis_m.len() {
                return Err(SurfaceError::InvalidGrid(format!(
                    "Grid row {} length ({}) must match axis M length ({})",
                    i,
                    row.len(),
                    axis_m.len()
                )));
            }
            if let Some(j) = row.iter().position(|v| !v.is_finite()) {
                return Err(SurfaceError::InvalidGrid(format!(
                    "Grid value at ({}, {}) is not finite",
                    i, j
                )));
            }
        }

        Ok(Self {
            axis_a,
            axis_m,
            values,
        })
    }

    /// Axis A coordinates.
    #[inline]
    pub fn axis_a(&self) -> &[T] {
        &self.axis_a
    }

    /// Axis M coordinates.
    #[inline]
    pub fn axis_m(&self) -> &[T] {
        &self.axis_m
    }

    /// All rows of the grid.
    #[inline]
    pub fn values(&self) -> &[Vec<T>] {
        &self.values
    }

    /// `(rows, columns)`, i.e. `(axis_a.len(), axis_m.len())`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.axis_a.len(), self.axis_m.len())
    }

    /// Value at row `i`, column `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn value(&self, i: usize, j: usize) -> T {
        self.values[i][j]
    }

    /// Row `i`: samples along axis M at `axis_a[i]`.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        &self.values[i]
    }

    /// Column `j`: samples along axis A at `axis_m[j]`.
    pub fn column(&self, j: usize) -> Vec<T> {
        self.values.iter().map(|row| row[j]).collect()
    }

    /// Index of `a` on axis A, if it is exactly a grid coordinate.
    #[inline]
    pub fn index_a(&self, a: T) -> Option<usize> {
        self.axis_a.iter().position(|&x| x == a)
    }

    /// Index of `m` on axis M, if it is exactly a grid coordinate.
    #[inline]
    pub fn index_m(&self, m: T) -> Option<usize> {
        self.axis_m.iter().position(|&x| x == m)
    }

    /// Smallest and largest value among the corners of the cell containing
    /// `(a, m)`.
    ///
    /// Returns `None` when the point lies outside the closed grid span.
    ///
    /// # Example
    ///
    /// ```
    /// use surface_core::surface::GridTable;
    ///
    /// let table = GridTable::new(
    ///     &[0.0, 1.0],
    ///     &[0.0, 1.0, 2.0],
    ///     &[&[1.0, 2.0, 3.0][..], &[4.0, 5.0, 6.0][..]],
    /// )
    /// .unwrap();
    /// assert_eq!(table.cell_bounds(0.5, 1.5), Some((2.0, 6.0)));
    /// assert_eq!(table.cell_bounds(2.0, 1.5), None);
    /// ```
    pub fn cell_bounds(&self, a: T, m: T) -> Option<(T, T)> {
        let i = cell_index(&self.axis_a, a)?;
        let j = cell_index(&self.axis_m, m)?;
        let corners = [
            self.values[i][j],
            self.values[i + 1][j],
            self.values[i][j + 1],
            self.values[i + 1][j + 1],
        ];
        let lo = corners.iter().fold(T::infinity(), |acc, &v| acc.min(v));
        let hi = corners.iter().fold(T::neg_infinity(), |acc, &v| acc.max(v));
        Some((lo, hi))
    }
}

/// Index `i` of the cell `[axis[i], axis[i+1]]` containing `x`.
fn cell_index<T: Float>(axis: &[T], x: T) -> Option<usize> {
    let last = axis.len() - 1;
    if !(x >= axis[0] && x <= axis[last]) {
        return None;
    }
    let pos = axis.partition_point(|&v| v <= x);
    Some(pos.saturating_sub(1).min(last - 1))
}

fn validate_axis<T: Float>(name: &str, axis: &[T]) -> Result<(), SurfaceError> {
    if axis.len() < GridTable::<T>::MIN_AXIS_LEN {
        return Err(SurfaceError::InsufficientData {
            got: axis.len(),
            need: GridTable::<T>::MIN_AXIS_LEN,
        });
    }
    if axis.iter().any(|v| !v.is_finite()) {
        return Err(SurfaceError::InvalidGrid(format!(
            "{} contains a non-finite coordinate",
            name
        )));
    }
    if let Some(i) = axis.windows(2).position(|w| w[1] <= w[0]) {
        return Err(SurfaceError::InvalidGrid(format!(
            "{} is not strictly increasing at index {}",
            name,
            i + 1
        )));
    }
    Ok(())
}
