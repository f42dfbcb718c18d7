//! Sinusoidal regression by batch gradient descent.

use crate::core::model::sinusoid;
use crate::core::{FitOptions, FitResult, ModelKind};
use crate::solvers::descent::{batch_gradient_descent, DescentModel};
use crate::solvers::traits::{CurveFitter, FitError};
use crate::utils::{ensure_finite, ensure_same_length};
use faer::Col;
use statrs::statistics::Statistics;
use std::f64::consts::PI;

/// Fits `y = A·sin(B·x + C) + D`.
///
/// The starting point assumes roughly two visible cycles across the x
/// range: `A₀ = (max(y) − min(y)) / 2`, `B₀ = 2π / (range(x) / 2)`,
/// `C₀ = 0`, `D₀ = mean(y)`. The parameters are then refined by
/// [`batch_gradient_descent`] with the options' learning-rate schedule.
///
/// # Example
///
/// ```rust,ignore
/// use plotfit::solvers::{CurveFitter, SinusoidalFitter};
///
/// let fit = SinusoidalFitter::new().fit(&x, &y)?;
/// let amplitude = fit.parameter_by_name("amplitude");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SinusoidalFitter {
    options: FitOptions,
}

struct Sinusoid;

impl DescentModel for Sinusoid {
    fn n_parameters(&self) -> usize {
        4
    }

    fn value(&self, p: &[f64], x: f64) -> f64 {
        sinusoid(p[0], p[1], p[2], p[3], x)
    }

    fn partials(&self, p: &[f64], x: f64, out: &mut [f64]) {
        let (sin, cos) = (p[1] * x + p[2]).sin_cos();
        out[0] = sin;
        out[1] = p[0] * x * cos;
        out[2] = p[0] * cos;
        out[3] = 1.0;
    }
}

impl SinusoidalFitter {
    /// Create a fitter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the descent options.
    pub fn with_options(mut self, options: FitOptions) -> Self {
        self.options = options;
        self
    }

    /// Starting parameters `[A, B, C, D]` for the descent.
    ///
    /// The frequency guess is infinite when all x values coincide.
    pub fn initial_guess(x: &Col<f64>, y: &Col<f64>) -> [f64; 4] {
        let offset = y.iter().sum::<f64>() / y.nrows() as f64;
        let amplitude = (Statistics::max(y.iter()) - Statistics::min(y.iter())) / 2.0;
        let x_range = Statistics::max(x.iter()) - Statistics::min(x.iter());
        let frequency = 2.0 * PI / (x_range / 2.0);
        [amplitude, frequency, 0.0, offset]
    }
}

impl CurveFitter for SinusoidalFitter {
    fn model(&self) -> ModelKind {
        ModelKind::Sinusoidal
    }

    fn fit(&self, x: &Col<f64>, y: &Col<f64>) -> Result<FitResult, FitError> {
        ensure_same_length(x, y)?;
        let needed = ModelKind::Sinusoidal.min_observations();
        if x.nrows() < needed {
            return Err(FitError::InsufficientData {
                needed,
                got: x.nrows(),
            });
        }
        ensure_finite(x)?;
        ensure_finite(y)?;

        let initial = Self::initial_guess(x, y);
        if initial.iter().any(|p| !p.is_finite()) {
            log::warn!("sinusoidal fit rejected: degenerate x range");
            return Err(FitError::NonFiniteResult {
                model: ModelKind::Sinusoidal,
            });
        }

        let outcome = batch_gradient_descent(&Sinusoid, x, y, &initial, &self.options);
        if !outcome.is_finite() {
            log::warn!(
                "sinusoidal fit diverged after {} iterations",
                outcome.iterations
            );
            return Err(FitError::NonFiniteResult {
                model: ModelKind::Sinusoidal,
            });
        }

        Ok(FitResult::from_parameters(
            ModelKind::Sinusoidal,
            outcome.parameters,
            x,
            y,
            outcome.iterations,
            outcome.converged,
        ))
    }
}
