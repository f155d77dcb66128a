//! Two-dimensional evaluation over a sparse grid.

use super::{GridTable, SurfaceConfig};
use crate::math::interpolators::{CubicSplineInterpolator, Interpolator, LeastSquaresLine};
use crate::types::{InterpolationError, SurfaceError};
use num_traits::Float;
use std::fmt;
use tracing::{debug, trace};

/// Which model answered a surface query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum QueryPath {
    /// Both coordinates on the grid: direct table lookup.
    Exact,
    /// `m` on the grid: the column's least-squares line evaluated at `a`.
    AlongA,
    /// `a` on the grid: the row's cubic spline evaluated at `m`.
    AlongM,
    /// Neither on the grid: every row spline evaluated at `m`, then a fresh
    /// least-squares line over axis A evaluated at `a`.
    Nested,
}

impl fmt::Display for QueryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QueryPath::Exact => "exact",
            QueryPath::AlongA => "along-a",
            QueryPath::AlongM => "along-m",
            QueryPath::Nested => "nested",
        };
        f.write_str(name)
    }
}

/// Evaluates `f(a, m)` anywhere on a sparse [`GridTable`].
///
/// Along axis A (rows) the data is modelled by a least-squares line per
/// column; along axis M (columns) by a natural cubic spline per row. Both
/// families are built once at construction and never change.
///
/// # Domain
///
/// Column fits extrapolate freely. Row splines reject `m` at or beyond the
/// outer M coordinates, so queries off the M grid must satisfy
/// `axis_m[0] < m < axis_m[last]`.
///
/// # Example
///
/// ```
/// use surface_core::surface::{GridTable, QueryPath, SurfaceEvaluator};
///
/// let table: GridTable<f64> = GridTable::new(
///     &[0.0, 1.0],
///     &[0.0, 1.0, 2.0],
///     &[&[0.0, 1.0, 2.0][..], &[1.0, 2.0, 3.0][..]],
/// )
/// .unwrap();
/// let surface = SurfaceEvaluator::new(table).unwrap();
///
/// assert_eq!(surface.query_with_path(1.0, 2.0).unwrap(), (3.0, QueryPath::Exact));
///
/// let (value, path) = surface.query_with_path(0.5, 1.0).unwrap();
/// assert_eq!(path, QueryPath::AlongA);
/// assert!((value - 1.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct SurfaceEvaluator<T: Float> {
    table: GridTable<T>,
    config: SurfaceConfig<T>,
    /// One spline per row, over axis M
    row_splines: Vec<CubicSplineInterpolator<T>>,
    /// One line per column, over axis A
    column_fits: Vec<LeastSquaresLine<T>>,
}

impl<T: Float> SurfaceEvaluator<T> {
    /// Build an evaluator with [`SurfaceConfig::default`].
    pub fn new(table: GridTable<T>) -> Result<Self, SurfaceError> {
        Self::with_config(table, SurfaceConfig::default())
    }

    /// Build an evaluator with explicit spline settings.
    ///
    /// # Returns
    ///
    /// * `Err(SurfaceError::Interpolation)` - A row spline or column fit
    ///   could not be built (solver failure, degenerate axis)
    pub fn with_config(table: GridTable<T>, config: SurfaceConfig<T>) -> Result<Self, SurfaceError> {
        let row_splines = (0..table.shape().0)
            .map(|i| build_row_spline(&table, &config, i))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_row_splines(table, config, row_splines)
    }

    fn from_row_splines(
        table: GridTable<T>,
        config: SurfaceConfig<T>,
        row_splines: Vec<CubicSplineInterpolator<T>>,
    ) -> Result<Self, SurfaceError> {
        let column_fits = (0..table.shape().1)
            .map(|j| LeastSquaresLine::new(table.axis_a(), &table.column(j)))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            rows = row_splines.len(),
            columns = column_fits.len(),
            "surface evaluator built"
        );

        Ok(Self {
            table,
            config,
            row_splines,
            column_fits,
        })
    }

    /// Evaluate the surface at `(a, m)`.
    #[inline]
    pub fn query(&self, a: T, m: T) -> Result<T, SurfaceError> {
        self.query_with_path(a, m).map(|(value, _)| value)
    }

    /// Evaluate the surface at `(a, m)` and report which model answered.
    ///
    /// Grid membership is decided by exact equality with an axis
    /// coordinate.
    ///
    /// # Returns
    ///
    /// * `Err(SurfaceError::Interpolation(InvalidInput))` - `a` or `m` is not finite
    /// * `Err(SurfaceError::Interpolation(OutOfBounds))` - A row spline was
    ///   evaluated outside its open domain
    pub fn query_with_path(&self, a: T, m: T) -> Result<(T, QueryPath), SurfaceError> {
        if !a.is_finite() || !m.is_finite() {
            return Err(InterpolationError::InvalidInput(format!(
                "query coordinates must be finite, got ({}, {})",
                a.to_f64().unwrap_or(f64::NAN),
                m.to_f64().unwrap_or(f64::NAN)
            ))
            .into());
        }

        let result = match (self.table.index_a(a), self.table.index_m(m)) {
            (Some(i), Some(j)) => (self.table.value(i, j), QueryPath::Exact),
            (None, Some(j)) => (self.column_fits[j].evaluate(a), QueryPath::AlongA),
            (Some(i), None) => (self.row_splines[i].interpolate(m)?, QueryPath::AlongM),
            (None, None) => (self.nested(a, m)?, QueryPath::Nested),
        };

        trace!(
            a = a.to_f64().unwrap_or(f64::NAN),
            m = m.to_f64().unwrap_or(f64::NAN),
            path = %result.1,
            "surface query"
        );
        Ok(result)
    }

    fn nested(&self, a: T, m: T) -> Result<T, SurfaceError> {
        let series = self
            .row_splines
            .iter()
            .map(|spline| spline.interpolate(m))
            .collect::<Result<Vec<_>, _>>()?;
        let line = LeastSquaresLine::new(self.table.axis_a(), &series)?;
        Ok(line.evaluate(a))
    }

    /// The underlying table.
    #[inline]
    pub fn table(&self) -> &GridTable<T> {
        &self.table
    }

    /// Settings the row splines were built with.
    #[inline]
    pub fn config(&self) -> &SurfaceConfig<T> {
        &self.config
    }

    /// Spline over axis M for row `i`, if it exists.
    #[inline]
    pub fn row_spline(&self, i: usize) -> Option<&CubicSplineInterpolator<T>> {
        self.row_splines.get(i)
    }

    /// Least-squares line over axis A for column `j`, if it exists.
    #[inline]
    pub fn column_fit(&self, j: usize) -> Option<&LeastSquaresLine<T>> {
        self.column_fits.get(j)
    }
}

#[cfg(feature = "parallel")]
impl<T: Float + Send + Sync> SurfaceEvaluator<T> {
    /// Same as [`with_config`](Self::with_config), building the row splines
    /// on the rayon thread pool.
    pub fn with_config_parallel(
        table: GridTable<T>,
        config: SurfaceConfig<T>,
    ) -> Result<Self, SurfaceError> {
        use rayon::prelude::*;

        let row_splines = (0..table.shape().0)
            .into_par_iter()
            .map(|i| build_row_spline(&table, &config, i))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_row_splines(table, config, row_splines)
    }
}

fn build_row_spline<T: Float>(
    table: &GridTable<T>,
    config: &SurfaceConfig<T>,
    i: usize,
) -> Result<CubicSplineInterpolator<T>, InterpolationError> {
    CubicSplineInterpolator::with_form(
        table.axis_m(),
        table.row(i),
        config.spline_solver,
        config.spline_offset,
        config.spline_form,
    )
}
