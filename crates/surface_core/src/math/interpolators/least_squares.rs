//! Ordinary least-squares straight line.

use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Least-squares line `y = slope * x + intercept`.
///
/// Fitted in closed form over all samples:
///
/// ```text
/// slope     = (n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)
/// intercept = (Σy − slope·Σx) / n
/// ```
///
/// Samples may be given in any order. Evaluation extrapolates linearly and
/// never fails.
///
/// # Example
///
/// ```
/// use surface_core::math::interpolators::{Interpolator, LeastSquaresLine};
///
/// let line: LeastSquaresLine<f64> = LeastSquaresLine::new(&[0.0, 1.0, 2.0, 3.0], &[1.0, 3.0, 2.0, 5.0]).unwrap();
/// assert!((line.slope() - 1.1).abs() < 1e-12);
/// assert!((line.intercept() - 1.1).abs() < 1e-12);
///
/// // Defined everywhere
/// assert!((line.interpolate(10.0).unwrap() - 12.1).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LeastSquaresLine<T: Float> {
    slope: T,
    intercept: T,
    /// Smallest and largest sample argument
    span: (T, T),
    /// Number of samples fitted
    len: usize,
}

impl<T: Float> LeastSquaresLine<T> {
    /// Fit a line through `(xs[i], ys[i])`.
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::InvalidInput)` - Mismatched lengths or non-finite data
    /// * `Err(InterpolationError::InsufficientData)` - No samples
    /// * `Err(InterpolationError::DegenerateInput)` - All arguments identical
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "xs and ys must have same length: got {} and {}",
                xs.len(),
                ys.len()
            )));
        }

        if xs.is_empty() {
            return Err(InterpolationError::InsufficientData { got: 0, need: 1 });
        }

        if xs.iter().chain(ys).any(|v| !v.is_finite()) {
            return Err(InterpolationError::InvalidInput(
                "samples must be finite".to_string(),
            ));
        }

        let n = T::from(xs.len()).unwrap();
        let (sum_x, sum_y, sum_xy, sum_x2) = xs.iter().zip(ys).fold(
            (T::zero(), T::zero(), T::zero(), T::zero()),
            |(sx, sy, sxy, sx2), (&x, &y)| (sx + x, sy + y, sxy + x * y, sx2 + x * x),
        );

        // Non-negative in exact arithmetic; rounding can push it to zero or
        // just below when the arguments coincide.
        let denominator = n * sum_x2 - sum_x * sum_x;
        let first = xs[0];
        if xs.iter().all(|&x| x == first) || denominator <= T::zero() {
            return Err(InterpolationError::DegenerateInput(format!(
                "all {} arguments equal {}",
                xs.len(),
                first.to_f64().unwrap_or(f64::NAN)
            )));
        }

        let slope = (n * sum_xy - sum_x * sum_y) / denominator;
        let intercept = (sum_y - slope * sum_x) / n;

        let span = xs.iter().fold((first, first), |(lo, hi), &x| (lo.min(x), hi.max(x)));

        Ok(Self {
            slope,
            intercept,
            span,
            len: xs.len(),
        })
    }

    /// Fitted slope.
    #[inline]
    pub fn slope(&self) -> T {
        self.slope
    }

    /// Fitted intercept.
    #[inline]
    pub fn intercept(&self) -> T {
        self.intercept
    }

    /// Number of samples the line was fitted on.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false for a fitted line.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Evaluate `slope * x + intercept`.
    #[inline]
    pub fn evaluate(&self, x: T) -> T {
        self.slope * x + self.intercept
    }
}

impl<T: Float> Interpolator<T> for LeastSquaresLine<T> {
    #[inline]
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        Ok(self.evaluate(x))
    }

    /// Span of the fitted arguments. Informational only.
    #[inline]
    fn domain(&self) -> (T, T) {
        self.span
    }
}
