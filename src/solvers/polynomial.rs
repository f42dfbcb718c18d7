//! Polynomial least-squares regression.

use crate::core::{FitOptions, FitResult, ModelKind};
use crate::solvers::traits::{CurveFitter, FitError};
use crate::utils::{
    design_matrix, ensure_finite, ensure_same_length, normal_equations, solve_linear_system,
};
use faer::{Col, Mat};

/// Polynomial regression estimator.
///
/// Builds the design matrix `A[i][j] = x[i]^j`, forms the normal equations
/// `AᵗA·c = Aᵗy` and solves them by Gaussian elimination with partial
/// pivoting. Coefficients are ordered from the constant term upward.
///
/// # Example
///
/// ```rust,ignore
/// use plotfit::solvers::{CurveFitter, PolynomialFitter};
/// use faer::Col;
///
/// let x = Col::from_fn(5, |i| i as f64);
/// let y = Col::from_fn(5, |i| 3.0 + 2.0 * i as f64);
///
/// let fit = PolynomialFitter::linear().fit(&x, &y)?;
/// println!("{fit}"); // y = 3.000 + 2.000*x
/// ```
#[derive(Debug, Clone)]
pub struct PolynomialFitter {
    degree: usize,
    options: FitOptions,
}

impl PolynomialFitter {
    /// Create a polynomial fitter of the given degree.
    ///
    /// Degrees other than 1 and 2 are accepted here and produce coefficient
    /// vectors of length `degree + 1`, but only degrees 1 and 2 map onto a
    /// [`ModelKind`] and can be wrapped in a [`FitResult`]. Use
    /// [`PolynomialFitter::coefficients`] for other degrees.
    pub fn new(degree: usize) -> Self {
        Self {
            degree,
            options: FitOptions::default(),
        }
    }

    /// Degree-1 fitter.
    pub fn linear() -> Self {
        Self::new(1)
    }

    /// Degree-2 fitter.
    pub fn quadratic() -> Self {
        Self::new(2)
    }

    /// Replace the options (only `pivot_tolerance` is used).
    pub fn with_options(mut self, options: FitOptions) -> Self {
        self.options = options;
        self
    }

    /// Polynomial degree.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// The model kind this fitter produces, or `None` for degrees other
    /// than 1 and 2.
    pub fn model_kind(&self) -> Option<ModelKind> {
        ModelKind::from_polynomial_degree(self.degree)
    }

    /// Solve for the least-squares coefficients without building a
    /// [`FitResult`].
    pub fn coefficients(&self, x: &Col<f64>, y: &Col<f64>) -> Result<Col<f64>, FitError> {
        if self.degree == 0 {
            return Err(FitError::InvalidDegree(0));
        }
        ensure_same_length(x, y)?;

        let n = x.nrows();
        if n <= self.degree {
            return Err(FitError::InsufficientData {
                needed: self.degree + 1,
                got: n,
            });
        }
        ensure_finite(x)?;
        ensure_finite(y)?;

        let a: Mat<f64> = design_matrix(x, self.degree);
        let (ata, aty) = normal_equations(&a, y);
        solve_linear_system(&ata, &aty, self.options.pivot_tolerance)
    }
}

impl CurveFitter for PolynomialFitter {
    /// Only meaningful for degrees 1 and 2; any other degree reports
    /// `Linear` and fails in [`CurveFitter::fit`]. Use
    /// [`PolynomialFitter::model_kind`] to tell the cases apart.
    fn model(&self) -> ModelKind {
        self.model_kind().unwrap_or(ModelKind::Linear)
    }

    fn fit(&self, x: &Col<f64>, y: &Col<f64>) -> Result<FitResult, FitError> {
        let model = self
            .model_kind()
            .ok_or(FitError::InvalidDegree(self.degree))?;
        let coefficients = self.coefficients(x, y)?;
        log::debug!(
            "{} solved for {} coefficients over {} samples",
            model.label(),
            coefficients.nrows(),
            x.nrows()
        );
        Ok(FitResult::from_parameters(model, coefficients, x, y, 0, true))
    }
}
