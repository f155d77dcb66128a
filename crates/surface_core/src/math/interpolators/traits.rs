//! Common interface of the one-dimensional interpolators.

use crate::types::InterpolationError;
use num_traits::Float;

/// A one-dimensional function reconstructed from samples.
///
/// Implementors are immutable after construction and may be queried from
/// several threads at once.
pub trait Interpolator<T: Float> {
    /// Evaluate the model at `x`.
    ///
    /// # Errors
    ///
    /// Returns `InterpolationError::OutOfBounds` when `x` lies outside the
    /// region the model accepts. Models that extrapolate never fail.
    fn interpolate(&self, x: T) -> Result<T, InterpolationError>;

    /// Span of the sample arguments the model was built from.
    fn domain(&self) -> (T, T);
}
