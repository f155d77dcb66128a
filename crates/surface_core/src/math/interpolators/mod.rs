//! One-dimensional interpolation models.
//!
//! ## Available Interpolators
//!
//! - [`CubicSplineInterpolator`]: Natural cubic spline whose coefficients are
//!   solved with the Gauss-Seidel solver; used along the finely sampled axis
//! - [`LeastSquaresLine`]: Closed-form least-squares straight line; used along
//!   the coarsely sampled axis
//!
//! ## Core Trait
//!
//! Both implement [`Interpolator`]:
//! - `interpolate(x: T) -> Result<T, InterpolationError>`
//! - `domain() -> (T, T)`
//!
//! ## Example
//!
//! ```
//! use surface_core::math::interpolators::{Interpolator, LeastSquaresLine};
//!
//! let xs: [f64; 4] = [-2.0, 0.0, 2.0, 4.0];
//! let ys: [f64; 4] = [-4.0, 0.0, 4.0, 8.0];
//!
//! let line = LeastSquaresLine::new(&xs, &ys).unwrap();
//! let y = line.interpolate(1.0).unwrap();
//! assert!((y - 2.0).abs() < 1e-12);
//! ```

mod cubic_spline;
mod least_squares;
mod traits;

// Re-export public types at module level
pub use cubic_spline::{ConstraintForm, CubicSplineInterpolator, SegmentOffset, SplineCoeffs};
pub use least_squares::LeastSquaresLine;
pub use traits::Interpolator;
