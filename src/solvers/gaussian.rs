//! Gaussian peak regression by batch gradient descent.

use crate::core::model::gaussian;
use crate::core::{FitOptions, FitResult, ModelKind};
use crate::solvers::descent::{batch_gradient_descent, DescentModel};
use crate::solvers::traits::{CurveFitter, FitError};
use crate::utils::{ensure_finite, ensure_same_length};
use faer::Col;

/// Fits `y = A·exp(−((x − B)/C)²)`.
///
/// The peak sample gives the starting amplitude and center. The starting
/// width is the widest offset from the center among samples lying within
/// `0.1·A` of half maximum, and never less than 1. After every descent
/// step, an amplitude or width that is no longer positive is reset to
/// `options.parameter_floor`.
#[derive(Debug, Clone, Default)]
pub struct GaussianFitter {
    options: FitOptions,
}

struct Gaussian {
    floor: f64,
}

impl DescentModel for Gaussian {
    fn n_parameters(&self) -> usize {
        3
    }

    fn value(&self, p: &[f64], x: f64) -> f64 {
        gaussian(p[0], p[1], p[2], x)
    }

    fn partials(&self, p: &[f64], x: f64, out: &mut [f64]) {
        let u = (x - p[1]) / p[2];
        let e = (-u * u).exp();
        out[0] = e;
        out[1] = p[0] * e * 2.0 * u / p[2];
        out[2] = p[0] * e * 2.0 * u * u / p[2];
    }

    fn project(&self, p: &mut [f64]) {
        if p[0] <= 0.0 {
            p[0] = self.floor;
        }
        if p[2] <= 0.0 {
            p[2] = self.floor;
        }
    }
}

impl GaussianFitter {
    /// Create a fitter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the descent options.
    pub fn with_options(mut self, options: FitOptions) -> Self {
        self.options = options;
        self
    }

    /// Starting parameters `[A, B, C]` for the descent.
    pub fn initial_guess(x: &Col<f64>, y: &Col<f64>) -> [f64; 3] {
        let mut peak = 0;
        for i in 1..y.nrows() {
            if y[i] > y[peak] {
                peak = i;
            }
        }

        let amplitude = y[peak];
        let center = x[peak];
        let half_max = amplitude / 2.0;

        let mut width = 1.0f64;
        for i in 0..y.nrows() {
            if (y[i] - half_max).abs() < amplitude * 0.1 {
                width = width.max((x[i] - center).abs());
            }
        }

        [amplitude, center, width]
    }
}

impl CurveFitter for GaussianFitter {
    fn model(&self) -> ModelKind {
        ModelKind::Gaussian
    }

    fn fit(&self, x: &Col<f64>, y: &Col<f64>) -> Result<FitResult, FitError> {
        ensure_same_length(x, y)?;
        let needed = ModelKind::Gaussian.min_observations();
        if x.nrows() < needed {
            return Err(FitError::InsufficientData {
                needed,
                got: x.nrows(),
            });
        }
        ensure_finite(x)?;
        ensure_finite(y)?;

        let model = Gaussian {
            floor: self.options.parameter_floor,
        };
        let initial = Self::initial_guess(x, y);

        let outcome = batch_gradient_descent(&model, x, y, &initial, &self.options);
        if !outcome.is_finite() {
            log::warn!(
                "gaussian fit diverged after {} iterations",
                outcome.iterations
            );
            return Err(FitError::NonFiniteResult {
                model: ModelKind::Gaussian,
            });
        }

        Ok(FitResult::from_parameters(
            ModelKind::Gaussian,
            outcome.parameters,
            x,
            y,
            outcome.iterations,
            outcome.converged,
        ))
    }
}
