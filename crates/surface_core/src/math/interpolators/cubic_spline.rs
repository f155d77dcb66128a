//! Natural cubic spline built by solving its constraint system directly.

use super::Interpolator;
use crate::math::solvers::{GaussSeidelSolver, LinearSystem, SolverConfig};
use crate::types::InterpolationError;
use num_traits::Float;
use tracing::debug;

/// Polynomial coefficients for a cubic spline segment.
///
/// Represents `y = a + b*u + c*u² + d*u³`, where `u` is the evaluation
/// offset selected by [`SegmentOffset`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplineCoeffs<T: Float> {
    /// Constant term (y value at segment start)
    pub a: T,
    /// Linear coefficient
    pub b: T,
    /// Quadratic coefficient
    pub c: T,
    /// Cubic coefficient
    pub d: T,
}

impl<T: Float> SplineCoeffs<T> {
    #[inline]
    fn value(&self, u: T) -> T {
        self.a + u * (self.b + u * (self.c + u * self.d))
    }

    #[inline]
    fn first_derivative(&self, u: T) -> T {
        let two = T::from(2.0).unwrap();
        let three = T::from(3.0).unwrap();
        self.b + u * (two * self.c + three * self.d * u)
    }

    #[inline]
    fn second_derivative(&self, u: T) -> T {
        let two = T::from(2.0).unwrap();
        let six = T::from(6.0).unwrap();
        two * self.c + six * self.d * u
    }
}

/// Offset used when evaluating a segment's polynomial.
///
/// The constraint system always measures `u` from each segment's own left
/// breakpoint. `FirstBreakpoint` evaluates with `u = x - xs[0]` instead,
/// which agrees with `SegmentStart` on the first segment only.
///
/// The two conventions also resolve an exact interior knot differently.
/// `SegmentStart` evaluates `x == xs[i]` on the right-hand segment `i`,
/// where continuity makes the choice invisible. `FirstBreakpoint` evaluates
/// it on the left-hand segment `i - 1`, which yields a different value.
/// Together with [`ConstraintForm::Additive`] and a `1e-3` solve this
/// reproduces tables from the legacy generator, knots included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum SegmentOffset {
    /// `u = x - xs[i]` for the segment `xs[i] <= x < xs[i+1]`
    #[default]
    SegmentStart,
    /// `u = x - xs[0]` for the segment `xs[i] < x <= xs[i+1]`
    FirstBreakpoint,
}

/// Layout of the smoothness rows in the spline constraint system.
///
/// Both forms share the interpolation rows. They differ in the `2n`
/// rows tying neighbouring segments together and closing the ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ConstraintForm {
    /// `f_i'(w_i) - f_{i+1}'(0) = 0`, `f_i''(w_i) - f_{i+1}''(0) = 0` and
    /// zero second derivative at both ends
    #[default]
    Continuity,
    /// Rows of the legacy table generator: `f_i'(w_i) + f_{i+1}'(0) = 0`,
    /// `(f_i''(w_i) + f_{i+1}''(0)) / 2 = 0` and halved boundary rows.
    ///
    /// The solution is not C¹ at interior knots. Use it only to reproduce
    /// tables built that way.
    Additive,
}

/// Natural cubic spline interpolator with C² continuity.
///
/// For `n + 1` breakpoints the `4n` segment coefficients are the solution of
/// a square system assembled from:
///
/// 1. interpolation at both ends of every segment (`2n` rows),
/// 2. first-derivative continuity at interior breakpoints (`n - 1` rows),
/// 3. second-derivative continuity at interior breakpoints (`n - 1` rows),
/// 4. zero second derivative at the outer breakpoints (2 rows),
///
/// solved with [`GaussSeidelSolver`]. Items 2 to 4 describe the default
/// [`ConstraintForm::Continuity`].
///
/// Queries are accepted strictly inside `(xs[0], xs[n])`; the outer
/// breakpoints themselves are rejected.
///
/// # Example
///
/// ```
/// use surface_core::math::interpolators::{CubicSplineInterpolator, Interpolator};
///
/// let xs: [f64; 5] = [0.0, 1.0, 2.0, 3.0, 4.0];
/// let ys: [f64; 5] = [0.0, 1.0, 4.0, 9.0, 16.0];
///
/// let spline = CubicSplineInterpolator::new(&xs, &ys).unwrap();
/// let y = spline.interpolate(2.0).unwrap();
/// assert!((y - 4.0).abs() < 1e-4);
///
/// // Outer breakpoints are outside the open domain
/// assert!(spline.interpolate(0.0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct CubicSplineInterpolator<T: Float> {
    /// Strictly increasing breakpoints
    xs: Vec<T>,
    /// Polynomial coefficients for each segment
    coeffs: Vec<SplineCoeffs<T>>,
    /// Evaluation offset convention
    offset: SegmentOffset,
    /// Smoothness rows the coefficients were solved under
    form: ConstraintForm,
}

impl<T: Float> CubicSplineInterpolator<T> {
    /// Construct a natural cubic spline with [`SolverConfig::spline`] and
    /// [`SegmentOffset::SegmentStart`].
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::InvalidInput)` - Mismatched lengths or non-finite data
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 breakpoints
    /// * `Err(InterpolationError::NonMonotonicData)` - Breakpoints not strictly increasing
    /// * `Err(InterpolationError::Solver)` - The constraint solve failed
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        Self::with_config(xs, ys, SolverConfig::spline(), SegmentOffset::default())
    }

    /// Construct a natural cubic spline with an explicit solver
    /// configuration and evaluation convention.
    ///
    /// # Example
    ///
    /// ```
    /// use surface_core::math::interpolators::{CubicSplineInterpolator, SegmentOffset};
    /// use surface_core::math::solvers::SolverConfig;
    ///
    /// let spline = CubicSplineInterpolator::with_config(
    ///     &[0.7, 0.9, 1.1, 1.4],
    ///     &[0.0437, 0.0452, 0.0531, 0.0683],
    ///     SolverConfig::reference(),
    ///     SegmentOffset::FirstBreakpoint,
    /// )
    /// .unwrap();
    /// assert_eq!(spline.offset(), SegmentOffset::FirstBreakpoint);
    /// ```
    pub fn with_config(
        xs: &[T],
        ys: &[T],
        config: SolverConfig<T>,
        offset: SegmentOffset,
    ) -> Result<Self, InterpolationError> {
        Self::with_form(xs, ys, config, offset, ConstraintForm::default())
    }

    /// Construct a cubic spline whose smoothness rows follow `form`.
    ///
    /// # Example
    ///
    /// ```
    /// use surface_core::math::interpolators::{
    ///     ConstraintForm, CubicSplineInterpolator, Interpolator, SegmentOffset,
    /// };
    /// use surface_core::math::solvers::SolverConfig;
    ///
    /// let legacy: CubicSplineInterpolator<f64> = CubicSplineInterpolator::with_form(
    ///     &[0.7, 0.9, 1.1, 1.4, 2.0],
    ///     &[0.1311, 0.1356, 0.1593, 0.2044, 0.1858],
    ///     SolverConfig::reference(),
    ///     SegmentOffset::FirstBreakpoint,
    ///     ConstraintForm::Additive,
    /// )
    /// .unwrap();
    /// assert_eq!(legacy.form(), ConstraintForm::Additive);
    /// assert!(legacy.interpolate(1.0).unwrap().is_finite());
    /// ```
    pub fn with_form(
        xs: &[T],
        ys: &[T],
        config: SolverConfig<T>,
        offset: SegmentOffset,
        form: ConstraintForm,
    ) -> Result<Self, InterpolationError> {
        validate_breakpoints(xs, ys)?;

        let system = Self::build_system(xs, ys, form)?;
        let result = GaussSeidelSolver::new(config).solve_system(&system)?;

        debug!(
            breakpoints = xs.len(),
            ?form,
            iterations = result.iterations,
            "cubic spline coefficients solved"
        );

        let coeffs = result
            .solution
            .chunks_exact(4)
            .map(|c| SplineCoeffs {
                a: c[0],
                b: c[1],
                c: c[2],
                d: c[3],
            })
            .collect();

        Ok(Self {
            xs: xs.to_vec(),
            coeffs,
            offset,
            form,
        })
    }

    /// Assemble the `4n × 4n` constraint system for `n + 1` breakpoints.
    ///
    /// Unknowns are ordered `(a₀, b₀, c₀, d₀, a₁, …)`.
    fn build_system(
        xs: &[T],
        ys: &[T],
        form: ConstraintForm,
    ) -> Result<LinearSystem<T>, InterpolationError> {
        let zero = T::zero();
        let one = T::one();
        let two = T::from(2.0).unwrap();
        let three = T::from(3.0).unwrap();

        // Neighbour sign and second-derivative row scale
        let (sign, scale) = match form {
            ConstraintForm::Continuity => (-one, two),
            ConstraintForm::Additive => (one, one),
        };

        let segments = xs.len() - 1;
        let size = 4 * segments;
        let widths: Vec<T> = xs.windows(2).map(|w| w[1] - w[0]).collect();

        let mut matrix = Vec::with_capacity(size);
        let mut rhs = Vec::with_capacity(size);
        let mut push_row = |segment: usize, coefficients: &[T], value: T| {
            let mut row = vec![zero; size];
            let start = 4 * segment;
            row[start..start + coefficients.len()].copy_from_slice(coefficients);
            matrix.push(row);
            rhs.push(value);
        };

        // Segment i passes through (xs[i], ys[i]) and (xs[i+1], ys[i+1])
        for (i, &w) in widths.iter().enumerate() {
            push_row(i, &[one, zero, zero, zero], ys[i]);
            push_row(i, &[one, w, w * w, w * w * w], ys[i + 1]);
        }

        // f_i'(w_i) ± f_{i+1}'(0) = 0
        for (i, &w) in widths[..segments - 1].iter().enumerate() {
            push_row(
                i,
                &[zero, one, two * w, three * w * w, zero, sign, zero, zero],
                zero,
            );
        }

        // f_i''(w_i) ± f_{i+1}''(0) = 0, halved in the additive form
        for (i, &w) in widths[..segments - 1].iter().enumerate() {
            push_row(
                i,
                &[
                    zero,
                    zero,
                    scale,
                    three * scale * w,
                    zero,
                    zero,
                    sign * scale,
                    zero,
                ],
                zero,
            );
        }

        // Natural boundaries
        push_row(0, &[zero, zero, scale, zero], zero);
        let last = widths[segments - 1];
        push_row(segments - 1, &[zero, zero, scale, three * scale * last], zero);

        Ok(LinearSystem::new(matrix, rhs)?)
    }

    /// Find the segment index for interpolation using binary search.
    ///
    /// Returns `i` with `xs[i] <= x < xs[i+1]`, or `xs[i] < x <= xs[i+1]`
    /// under [`SegmentOffset::FirstBreakpoint`]. Callers guarantee
    /// `xs[0] < x < xs[n]`.
    #[inline]
    fn find_segment(&self, x: T) -> usize {
        match self.offset {
            SegmentOffset::SegmentStart => self.xs.partition_point(|&xi| xi <= x) - 1,
            SegmentOffset::FirstBreakpoint => self.xs.partition_point(|&xi| xi < x) - 1,
        }
    }

    /// Locate `x` and return its segment and evaluation offset.
    fn locate(&self, x: T) -> Result<(usize, T), InterpolationError> {
        let x_min = self.xs[0];
        let x_max = self.xs[self.xs.len() - 1];

        // Written so that NaN is rejected too
        if !(x > x_min && x < x_max) {
            return Err(InterpolationError::OutOfBounds {
                x: x.to_f64().unwrap_or(f64::NAN),
                min: x_min.to_f64().unwrap_or(f64::NAN),
                max: x_max.to_f64().unwrap_or(f64::NAN),
            });
        }

        let i = self.find_segment(x);
        let u = match self.offset {
            SegmentOffset::SegmentStart => x - self.xs[i],
            SegmentOffset::FirstBreakpoint => x - x_min,
        };
        Ok((i, u))
    }

    /// First derivative at `x`, under the same domain and offset rules as
    /// [`Interpolator::interpolate`].
    pub fn derivative(&self, x: T) -> Result<T, InterpolationError> {
        let (i, u) = self.locate(x)?;
        Ok(self.coeffs[i].first_derivative(u))
    }

    /// Second derivative at `x`, under the same domain and offset rules as
    /// [`Interpolator::interpolate`].
    pub fn second_derivative(&self, x: T) -> Result<T, InterpolationError> {
        let (i, u) = self.locate(x)?;
        Ok(self.coeffs[i].second_derivative(u))
    }

    /// Returns a reference to the breakpoints.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns the per-segment coefficients, one entry per segment.
    #[inline]
    pub fn coefficients(&self) -> &[SplineCoeffs<T>] {
        &self.coeffs
    }

    /// Returns the evaluation offset convention.
    #[inline]
    pub fn offset(&self) -> SegmentOffset {
        self.offset
    }

    /// Returns the smoothness rows the coefficients were solved under.
    #[inline]
    pub fn form(&self) -> ConstraintForm {
        self.form
    }

    /// Returns the number of breakpoints.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if the interpolator has no breakpoints.
    /// Note: This should never be true for a valid interpolator.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

impl<T: Float> Interpolator<T> for CubicSplineInterpolator<T> {
    /// Interpolate value at point `x` using the cubic segment containing it.
    ///
    /// # Returns
    ///
    /// * `Ok(y)` - The interpolated value
    /// * `Err(InterpolationError::OutOfBounds)` - Unless `xs[0] < x < xs[n]`
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        let (i, u) = self.locate(x)?;
        Ok(self.coeffs[i].value(u))
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}

fn validate_breakpoints<T: Float>(xs: &[T], ys: &[T]) -> Result<(), InterpolationError> {
    if xs.len() != ys.len() {
        return Err(InterpolationError::InvalidInput(format!(
            "xs and ys must have same length: got {} and {}",
            xs.len(),
            ys.len()
        )));
    }

    if xs.len() < 2 {
        return Err(InterpolationError::InsufficientData {
            got: xs.len(),
            need: 2,
        });
    }

    if let Some(i) = xs.iter().chain(ys).position(|v| !v.is_finite()) {
        return Err(InterpolationError::InvalidInput(format!(
            "non-finite sample at position {}",
            i % xs.len()
        )));
    }

    if let Some(i) = xs.windows(2).position(|w| w[1] <= w[0]) {
        return Err(InterpolationError::NonMonotonicData { index: i + 1 });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SolverError;
    use approx::assert_abs_diff_eq;

    /// Tight configuration so coefficient checks are not dominated by solve error.
    fn tight() -> SolverConfig<f64> {
        SolverConfig::new(1e-11)
    }

    fn quadratic_spline() -> CubicSplineInterpolator<f64> {
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
        let ys = [0.0, 1.0, 4.0, 9.0, 16.0];
        CubicSplineInterpolator::with_config(&xs, &ys, tight(), SegmentOffset::SegmentStart)
            .unwrap()
    }

    // ========================================
    // Construction
    // ========================================

    #[test]
    fn test_new_with_two_points() {
        let interp = CubicSplineInterpolator::new(&[0.0, 2.0], &[1.0, 5.0]).unwrap();
        assert_eq!(interp.len(), 2);
        assert_eq!(interp.coefficients().len(), 1);
        // A natural spline through two points is the chord
        assert_abs_diff_eq!(interp.interpolate(1.0).unwrap(), 3.0, epsilon = 1e-6);
    }

    #[test]
    fn test_new_with_multiple_points() {
        let interp = quadratic_spline();
        assert_eq!(interp.len(), 5);
        assert_eq!(interp.coefficients().len(), 4);
        assert_eq!(interp.xs(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_new_insufficient_data() {
        let result = CubicSplineInterpolator::new(&[1.0], &[2.0]);
        match result.unwrap_err() {
            InterpolationError::InsufficientData { got, need } => {
                assert_eq!(got, 1);
                assert_eq!(need, 2);
            }
            other => panic!("Expected InsufficientData error, got {:?}", other),
        }
    }

    #[test]
    fn test_new_mismatched_lengths() {
        let result = CubicSplineInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 1.0]);
        match result.unwrap_err() {
            InterpolationError::InvalidInput(msg) => assert!(msg.contains("same length")),
            other => panic!("Expected InvalidInput error, got {:?}", other),
        }
    }

    #[test]
    fn test_new_rejects_unsorted_breakpoints() {
        let result = CubicSplineInterpolator::new(&[0.0, 2.0, 1.0, 3.0], &[0.0, 4.0, 1.0, 9.0]);
        assert_eq!(
            result.unwrap_err(),
            InterpolationError::NonMonotonicData { index: 2 }
        );
    }

    #[test]
    fn test_new_rejects_duplicate_breakpoints() {
        let result = CubicSplineInterpolator::new(&[0.0, 1.0, 1.0], &[0.0, 1.0, 2.0]);
        assert_eq!(
            result.unwrap_err(),
            InterpolationError::NonMonotonicData { index: 2 }
        );
    }

    #[test]
    fn test_new_rejects_non_finite_values() {
        let result = CubicSplineInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, f64::NAN, 2.0]);
        assert!(matches!(result, Err(InterpolationError::InvalidInput(_))));
    }

    #[test]
    fn test_solver_failure_propagates() {
        let config = SolverConfig::new(1e-12).with_max_iterations(1);
        let result = CubicSplineInterpolator::with_config(
            &[0.0, 1.0, 2.0, 3.0],
            &[0.0, 1.0, 4.0, 9.0],
            config,
            SegmentOffset::SegmentStart,
        );
        assert_eq!(
            result.unwrap_err(),
            InterpolationError::Solver(SolverError::MaxIterationsExceeded { iterations: 1 })
        );
    }

    // ========================================
    // Interpolation
    // ========================================

    #[test]
    fn test_domain() {
        let interp = quadratic_spline();
        assert_eq!(interp.domain(), (0.0, 4.0));
    }

    #[test]
    fn test_interpolate_at_interior_knots() {
        let interp = quadratic_spline();
        for (x, y) in [(1.0, 1.0), (2.0, 4.0), (3.0, 9.0)] {
            let result = interp.interpolate(x).unwrap();
            assert!(
                (result - y).abs() < 1e-6,
                "At x={}, expected y={}, got {}",
                x,
                y,
                result
            );
        }
    }

    #[test]
    fn test_interpolate_matches_natural_spline_closed_form() {
        // Second derivatives of the natural spline of x² on 0..4 are
        // (0, 18/7, 12/7, 18/7, 0), which gives f(0.5) = 19/56.
        let interp = quadratic_spline();
        assert_abs_diff_eq!(interp.interpolate(0.5).unwrap(), 19.0 / 56.0, epsilon = 1e-6);
        assert_abs_diff_eq!(
            interp.second_derivative(1.0).unwrap(),
            18.0 / 7.0,
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_interpolate_linear_data_is_linear() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [1.0, 3.0, 5.0, 7.0];
        let interp =
            CubicSplineInterpolator::with_config(&xs, &ys, tight(), SegmentOffset::SegmentStart)
                .unwrap();

        for x in [0.5, 1.5, 2.5] {
            assert_abs_diff_eq!(interp.interpolate(x).unwrap(), 2.0 * x + 1.0, epsilon = 1e-6);
            assert_abs_diff_eq!(interp.derivative(x).unwrap(), 2.0, epsilon = 1e-6);
            assert_abs_diff_eq!(interp.second_derivative(x).unwrap(), 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_interpolate_rejects_outer_breakpoints() {
        let interp = quadratic_spline();
        for x in [0.0, 4.0] {
            match interp.interpolate(x).unwrap_err() {
                InterpolationError::OutOfBounds { x: qx, min, max } => {
                    assert_eq!(qx, x);
                    assert_eq!(min, 0.0);
                    assert_eq!(max, 4.0);
                }
                other => panic!("Expected OutOfBounds error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_interpolate_out_of_bounds() {
        let interp = quadratic_spline();
        assert!(interp.interpolate(-0.1).is_err());
        assert!(interp.interpolate(4.1).is_err());
        assert!(interp.interpolate(f64::NAN).is_err());
        assert!(interp.derivative(5.0).is_err());
        assert!(interp.second_derivative(-1.0).is_err());
    }

    #[test]
    fn test_interpolate_just_inside_boundaries() {
        let interp = quadratic_spline();
        assert!(interp.interpolate(1e-9).is_ok());
        assert!(interp.interpolate(4.0 - 1e-9).is_ok());
    }

    // ========================================
    // Continuity and boundary conditions
    // ========================================

    #[test]
    fn test_c2_continuity_at_interior_knots() {
        let xs = [0.7, 0.9, 1.1, 1.4, 2.0, 3.0];
        let ys = [0.0437, 0.0452, 0.0531, 0.0683, 0.0620, 0.0127];
        let interp =
            CubicSplineInterpolator::with_config(&xs, &ys, tight(), SegmentOffset::SegmentStart)
                .unwrap();
        let coeffs = interp.coefficients();

        for i in 1..xs.len() - 1 {
            let left = &coeffs[i - 1];
            let right = &coeffs[i];
            let w = xs[i] - xs[i - 1];

            assert_abs_diff_eq!(left.value(w), right.value(0.0), epsilon = 1e-6);
            assert_abs_diff_eq!(
                left.first_derivative(w),
                right.first_derivative(0.0),
                epsilon = 1e-5
            );
            assert_abs_diff_eq!(
                left.second_derivative(w),
                right.second_derivative(0.0),
                epsilon = 1e-4
            );
        }
    }

    #[test]
    fn test_natural_boundary_conditions() {
        let interp = quadratic_spline();
        let coeffs = interp.coefficients();
        let first = coeffs[0];
        let last = coeffs[coeffs.len() - 1];

        assert_abs_diff_eq!(first.second_derivative(0.0), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(last.second_derivative(1.0), 0.0, epsilon = 1e-6);
    }

    // ========================================
    // Offset convention
    // ========================================

    #[test]
    fn test_first_breakpoint_offset_agrees_on_first_segment() {
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
        let ys = [0.0, 1.0, 4.0, 9.0, 16.0];
        let local = quadratic_spline();
        let global =
            CubicSplineInterpolator::with_config(&xs, &ys, tight(), SegmentOffset::FirstBreakpoint)
                .unwrap();

        assert_eq!(local.coefficients(), global.coefficients());
        for x in [0.1, 0.5, 0.9] {
            assert_eq!(local.interpolate(x).unwrap(), global.interpolate(x).unwrap());
        }
    }

    #[test]
    fn test_first_breakpoint_offset_differs_on_later_segments() {
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
        let ys = [0.0, 1.0, 4.0, 9.0, 16.0];
        let global =
            CubicSplineInterpolator::with_config(&xs, &ys, tight(), SegmentOffset::FirstBreakpoint)
                .unwrap();

        // Segment 1 evaluated with u = 1.5 instead of u = 0.5
        let c = global.coefficients()[1];
        let expected = c.a + c.b * 1.5 + c.c * 1.5 * 1.5 + c.d * 1.5 * 1.5 * 1.5;
        assert_abs_diff_eq!(global.interpolate(1.5).unwrap(), expected, epsilon = 1e-12);
        let local = quadratic_spline().interpolate(1.5).unwrap();
        assert!((global.interpolate(1.5).unwrap() - local).abs() > 1e-3);
    }

    #[test]
    fn test_first_breakpoint_takes_left_segment_at_interior_knot() {
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
        let ys = [0.0, 1.0, 4.0, 9.0, 16.0];
        let global =
            CubicSplineInterpolator::with_config(&xs, &ys, tight(), SegmentOffset::FirstBreakpoint)
                .unwrap();
        let local = quadratic_spline();

        // x = 2 is the end of segment 1 under FirstBreakpoint
        let left = global.coefficients()[1];
        assert_eq!(global.interpolate(2.0).unwrap(), left.value(2.0));
        assert_eq!(global.derivative(2.0).unwrap(), left.first_derivative(2.0));

        // and the start of segment 2 under SegmentStart
        let right = local.coefficients()[2];
        assert_eq!(local.interpolate(2.0).unwrap(), right.value(0.0));

        // Just past the knot both conventions move to segment 2
        let c = global.coefficients()[2];
        assert_eq!(global.interpolate(2.5).unwrap(), c.value(2.5));
    }

    // ========================================
    // Constraint forms
    // ========================================

    #[test]
    fn test_default_form_is_continuity() {
        assert_eq!(ConstraintForm::default(), ConstraintForm::Continuity);
        assert_eq!(quadratic_spline().form(), ConstraintForm::Continuity);
    }

    #[test]
    fn test_additive_form_rows() {
        let xs = [0.0, 1.0, 3.0];
        let ys = [1.0, 2.0, 5.0];
        let continuity =
            CubicSplineInterpolator::build_system(&xs, &ys, ConstraintForm::Continuity).unwrap();
        let additive =
            CubicSplineInterpolator::build_system(&xs, &ys, ConstraintForm::Additive).unwrap();

        // Interpolation rows are shared
        assert_eq!(continuity.matrix()[..4], additive.matrix()[..4]);
        assert_eq!(continuity.rhs(), additive.rhs());

        let m = additive.matrix();
        assert_eq!(m[4], vec![0.0, 1.0, 2.0, 3.0, 0.0, 1.0, 0.0, 0.0]);
        assert_eq!(m[5], vec![0.0, 0.0, 1.0, 3.0, 0.0, 0.0, 1.0, 0.0]);
        assert_eq!(m[6], vec![0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(m[7], vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 6.0]);

        let m = continuity.matrix();
        assert_eq!(m[4], vec![0.0, 1.0, 2.0, 3.0, 0.0, -1.0, 0.0, 0.0]);
        assert_eq!(m[5], vec![0.0, 0.0, 2.0, 6.0, 0.0, 0.0, -2.0, 0.0]);
        assert_eq!(m[7], vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0, 12.0]);
    }

    #[test]
    fn test_additive_form_reproduces_legacy_coefficients() {
        // Row alpha = 0 of the lift table, solved to 1e-3
        let xs = [0.7, 0.9, 1.1, 1.4, 2.0, 3.0, 4.0, 6.0];
        let ys = [0.0437, 0.0452, 0.0531, 0.0683, 0.0620, 0.0127, -0.006, -0.002];
        let legacy = CubicSplineInterpolator::with_form(
            &xs,
            &ys,
            SolverConfig::reference(),
            SegmentOffset::FirstBreakpoint,
            ConstraintForm::Additive,
        )
        .unwrap();

        let first = legacy.coefficients()[0];
        assert_abs_diff_eq!(first.a, 0.04324611740125706, epsilon = 1e-12);
        assert_abs_diff_eq!(first.b, 0.01216972981392091, epsilon = 1e-12);
        assert_abs_diff_eq!(first.c, 0.00010426274882028861, epsilon = 1e-12);
        assert_abs_diff_eq!(first.d, 0.001429449472121698, epsilon = 1e-12);
    }

    #[test]
    fn test_additive_form_breaks_first_derivative_continuity() {
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
        let ys = [0.0, 1.0, 4.0, 9.0, 16.0];
        let additive = CubicSplineInterpolator::with_form(
            &xs,
            &ys,
            tight(),
            SegmentOffset::SegmentStart,
            ConstraintForm::Additive,
        )
        .unwrap();
        let coeffs = additive.coefficients();

        // f_0'(1) = -f_1'(0) rather than f_1'(0)
        assert_abs_diff_eq!(
            coeffs[0].first_derivative(1.0),
            -coeffs[1].first_derivative(0.0),
            epsilon = 1e-5
        );
        assert!(coeffs[1].first_derivative(0.0).abs() > 1e-3);
    }

    // ========================================
    // Misc
    // ========================================

    #[test]
    fn test_default_offset_is_segment_start() {
        assert_eq!(SegmentOffset::default(), SegmentOffset::SegmentStart);
        assert_eq!(quadratic_spline().offset(), SegmentOffset::SegmentStart);
    }

    #[test]
    fn test_clone() {
        let interp = quadratic_spline();
        let cloned = interp.clone();
        assert_eq!(interp.xs(), cloned.xs());
        assert_eq!(interp.coefficients(), cloned.coefficients());
    }

    #[test]
    fn test_debug() {
        let interp = CubicSplineInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
        let debug_str = format!("{:?}", interp);
        assert!(debug_str.contains("CubicSplineInterpolator"));
    }

    #[test]
    fn test_with_f32() {
        let xs: [f32; 4] = [0.0, 1.0, 2.0, 3.0];
        let ys: [f32; 4] = [0.0, 1.0, 4.0, 9.0];
        let interp = CubicSplineInterpolator::with_config(
            &xs,
            &ys,
            SolverConfig::new(1e-4_f32).with_max_iterations(100_000),
            SegmentOffset::SegmentStart,
        )
        .unwrap();
        let y = interp.interpolate(1.5_f32).unwrap();
        assert!(y.is_finite());
    }
}
