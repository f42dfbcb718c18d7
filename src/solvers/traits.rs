//! Core traits for curve fitters.

use crate::core::{FitResult, ModelKind, OptionsError};
use faer::Col;
use thiserror::Error;

/// Errors that can occur during fitting or summarising a series.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitError {
    #[error("insufficient data: need at least {needed} samples, got {got}")]
    InsufficientData { needed: usize, got: usize },

    #[error("dimension mismatch: x has {x_len} elements but y has {y_len}")]
    DimensionMismatch { x_len: usize, y_len: usize },

    #[error("linear system is singular or nearly singular (pivot column {column})")]
    SingularSystem { column: usize },

    #[error("{model} fit produced non-finite parameters")]
    NonFiniteResult { model: ModelKind },

    #[error("non-finite input value at index {index}")]
    NonFiniteInput { index: usize },

    #[error("polynomial degree must be at least 1, got {0}")]
    InvalidDegree(usize),

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] OptionsError),
}

/// A curve fitter that can be fit to an (x, y) series.
pub trait CurveFitter {
    /// The model family this fitter produces.
    fn model(&self) -> ModelKind;

    /// Fit the model to the series.
    ///
    /// # Arguments
    /// * `x` - Sample positions
    /// * `y` - Observed values, paired with `x` by index
    ///
    /// # Returns
    /// A fit result holding the parameters and the residuals against `y`.
    fn fit(&self, x: &Col<f64>, y: &Col<f64>) -> Result<FitResult, FitError>;

    /// Fit and score in one call, returning the result and its R².
    fn fit_and_score(&self, x: &Col<f64>, y: &Col<f64>) -> Result<(FitResult, f64), FitError> {
        let result = self.fit(x, y)?;
        let r_squared = result.goodness_of_fit(y);
        Ok((result, r_squared))
    }
}
