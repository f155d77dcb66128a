//! Surface evaluator configuration.

use crate::math::interpolators::{ConstraintForm, SegmentOffset};
use crate::math::solvers::SolverConfig;
use num_traits::Float;

/// How the row splines of a [`SurfaceEvaluator`](super::SurfaceEvaluator)
/// are built and evaluated.
///
/// # Example
///
/// ```
/// use surface_core::math::interpolators::{ConstraintForm, SegmentOffset};
/// use surface_core::surface::SurfaceConfig;
///
/// let config: SurfaceConfig<f64> = SurfaceConfig::default();
/// assert_eq!(config.spline_offset, SegmentOffset::SegmentStart);
/// assert_eq!(config.spline_form, ConstraintForm::Continuity);
///
/// let legacy: SurfaceConfig<f64> = SurfaceConfig::reference();
/// assert_eq!(legacy.spline_solver.precision, 1e-3);
/// assert_eq!(legacy.spline_offset, SegmentOffset::FirstBreakpoint);
/// assert_eq!(legacy.spline_form, ConstraintForm::Additive);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceConfig<T: Float> {
    /// Solver settings for every row spline.
    pub spline_solver: SolverConfig<T>,
    /// Offset convention for evaluating row splines.
    pub spline_offset: SegmentOffset,
    /// Smoothness rows of every row spline.
    #[cfg_attr(feature = "serde", serde(default))]
    pub spline_form: ConstraintForm,
}

impl<T: Float> Default for SurfaceConfig<T> {
    fn default() -> Self {
        Self {
            spline_solver: SolverConfig::spline(),
            spline_offset: SegmentOffset::SegmentStart,
            spline_form: ConstraintForm::Continuity,
        }
    }
}

impl<T: Float> SurfaceConfig<T> {
    /// Settings of the legacy table generator.
    ///
    /// Additive smoothness rows solved to `1e-3`, evaluated from the first
    /// breakpoint with knots resolved to the left-hand segment. Queries
    /// reproduce that generator's values. The row splines are neither
    /// smooth nor close to their knots; prefer [`Default`] for new tables.
    pub fn reference() -> Self {
        Self {
            spline_solver: SolverConfig::reference(),
            spline_offset: SegmentOffset::FirstBreakpoint,
            spline_form: ConstraintForm::Additive,
        }
    }

    /// Replace the spline solver settings.
    pub fn with_spline_solver(mut self, solver: SolverConfig<T>) -> Self {
        self.spline_solver = solver;
        self
    }

    /// Replace the spline offset convention.
    pub fn with_spline_offset(mut self, offset: SegmentOffset) -> Self {
        self.spline_offset = offset;
        self
    }

    /// Replace the smoothness rows used for row splines.
    pub fn with_spline_form(mut self, form: ConstraintForm) -> Self {
        self.spline_form = form;
        self
    }
}
