//! Solver configuration types.

use num_traits::Float;

/// Configuration for the iterative linear-system solver.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for the precision threshold (e.g., `f64`)
///
/// # Example
///
/// ```
/// use surface_core::math::solvers::SolverConfig;
///
/// // General-purpose default: loose precision, no iteration ceiling
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert_eq!(config.precision, 0.1);
/// assert_eq!(config.max_iterations, None);
///
/// // Bounded configuration
/// let bounded = SolverConfig::new(1e-8).with_max_iterations(10_000);
/// assert_eq!(bounded.max_iterations, Some(10_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig<T: Float> {
    /// Convergence threshold.
    ///
    /// Iteration stops once the Euclidean norm of the update between two
    /// consecutive sweeps drops below this value.
    pub precision: T,

    /// Optional ceiling on the number of sweeps.
    ///
    /// `None` iterates until convergence, which never happens for a system
    /// that is rank-deficient in a way Gauss-Seidel cannot settle. With
    /// `Some(k)` the solver returns `SolverError::MaxIterationsExceeded`
    /// after `k` sweeps.
    pub max_iterations: Option<usize>,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Default values:
    /// - `precision`: 0.1
    /// - `max_iterations`: `None`
    fn default() -> Self {
        Self {
            precision: T::from(0.1).unwrap(),
            max_iterations: None,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create an unbounded configuration with the given precision.
    ///
    /// # Panics
    ///
    /// Panics if `precision <= 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use surface_core::math::solvers::SolverConfig;
    ///
    /// let config = SolverConfig::new(1e-6);
    /// assert_eq!(config.precision, 1e-6);
    /// ```
    pub fn new(precision: T) -> Self {
        assert!(precision > T::zero(), "precision must be positive");
        Self {
            precision,
            max_iterations: None,
        }
    }

    /// Set an iteration ceiling.
    ///
    /// # Panics
    ///
    /// Panics if `max_iterations == 0`.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        assert!(max_iterations > 0, "max_iterations must be > 0");
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Configuration used when building cubic splines.
    ///
    /// Spline coefficients are sensitive to solve error: with the normalised
    /// system, a precision of `1e-3` leaves knot residuals around `1e-2` and
    /// `1e-6` around `1e-4` on tables with mixed segment widths. Uses
    /// precision `1e-8`, unbounded. Each row then takes on the order of
    /// `10⁵` sweeps, so unoptimised builds are slow to construct surfaces.
    pub fn spline() -> Self {
        Self {
            precision: T::from(1e-8).unwrap(),
            max_iterations: None,
        }
    }

    /// Spline configuration with the historical precision of `1e-3`.
    ///
    /// Converges within a few hundred sweeps at the cost of visibly inexact
    /// knots. Part of [`SurfaceConfig::reference`](crate::surface::SurfaceConfig::reference).
    pub fn reference() -> Self {
        Self {
            precision: T::from(1e-3).unwrap(),
            max_iterations: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config: SolverConfig<f64> = SolverConfig::default();
        assert!((config.precision - 0.1).abs() < 1e-15);
        assert_eq!(config.max_iterations, None);
    }

    #[test]
    fn test_new_config() {
        let config: SolverConfig<f64> = SolverConfig::new(1e-12);
        assert!((config.precision - 1e-12).abs() < 1e-17);
        assert_eq!(config.max_iterations, None);
    }

    #[test]
    #[should_panic(expected = "precision must be positive")]
    fn test_new_config_zero_precision_panics() {
        let _: SolverConfig<f64> = SolverConfig::new(0.0);
    }

    #[test]
    #[should_panic(expected = "precision must be positive")]
    fn test_new_config_negative_precision_panics() {
        let _: SolverConfig<f64> = SolverConfig::new(-1e-10);
    }

    #[test]
    #[should_panic(expected = "max_iterations must be > 0")]
    fn test_zero_iteration_ceiling_panics() {
        let _: SolverConfig<f64> = SolverConfig::new(1e-10).with_max_iterations(0);
    }

    #[test]
    fn test_spline_config_is_tighter_than_default() {
        let spline: SolverConfig<f64> = SolverConfig::spline();
        let reference: SolverConfig<f64> = SolverConfig::reference();
        assert!(spline.precision < reference.precision);
        assert!(reference.precision < SolverConfig::<f64>::default().precision);
    }

    #[test]
    fn test_config_copy() {
        let config1: SolverConfig<f64> = SolverConfig::new(1e-8).with_max_iterations(150);
        let config2 = config1;
        assert_eq!(config1, config2);
    }

    #[test]
    fn test_config_debug() {
        let config: SolverConfig<f64> = SolverConfig::default();
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("SolverConfig"));
        assert!(debug_str.contains("precision"));
        assert!(debug_str.contains("max_iterations"));
    }

    #[test]
    fn test_config_with_f32() {
        let config: SolverConfig<f32> = SolverConfig::spline();
        assert!(config.precision > 0.0);
    }
}
