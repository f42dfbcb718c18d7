//! Fit result structures.

use super::model::ModelKind;
use crate::diagnostics;
use faer::Col;
use std::fmt;

/// Complete result from one curve fit.
///
/// Holds the fitted parameters together with the residuals and fitted
/// values of the series the fit was computed against. A `FitResult` is
/// only ever produced by a successful fit; its parameter count always
/// matches its [`ModelKind`].
#[derive(Debug, Clone)]
pub struct FitResult {
    model: ModelKind,
    parameters: Col<f64>,
    residuals: Col<f64>,
    fitted_values: Col<f64>,
    iterations: usize,
    converged: bool,
}

impl FitResult {
    /// Assemble a result from fitted parameters, computing fitted values and
    /// residuals against the training series.
    pub(crate) fn from_parameters(
        model: ModelKind,
        parameters: Col<f64>,
        x: &Col<f64>,
        y: &Col<f64>,
        iterations: usize,
        converged: bool,
    ) -> Self {
        debug_assert_eq!(parameters.nrows(), model.n_parameters());
        debug_assert_eq!(x.nrows(), y.nrows());

        let n = x.nrows();
        let fitted_values = Col::from_fn(n, |i| model.evaluate(&parameters, x[i]));
        let residuals = Col::from_fn(n, |i| y[i] - fitted_values[i]);

        Self {
            model,
            parameters,
            residuals,
            fitted_values,
            iterations,
            converged,
        }
    }

    /// The model family of this fit.
    pub fn model(&self) -> ModelKind {
        self.model
    }

    /// Human-readable model label.
    pub fn label(&self) -> &'static str {
        self.model.label()
    }

    /// Fitted parameters, in the order documented on [`ModelKind`].
    pub fn parameters(&self) -> &Col<f64> {
        &self.parameters
    }

    /// Get a parameter by position.
    pub fn parameter(&self, index: usize) -> Option<f64> {
        (index < self.parameters.nrows()).then(|| self.parameters[index])
    }

    /// Get a parameter by name (see [`ModelKind::parameter_names`]).
    pub fn parameter_by_name(&self, name: &str) -> Option<f64> {
        self.model
            .parameter_names()
            .iter()
            .position(|&n| n == name)
            .map(|i| self.parameters[i])
    }

    /// Residuals (y - fitted_values).
    pub fn residuals(&self) -> &Col<f64> {
        &self.residuals
    }

    /// Fitted values on the training data.
    pub fn fitted_values(&self) -> &Col<f64> {
        &self.fitted_values
    }

    /// Number of observations the fit was computed against.
    pub fn n_observations(&self) -> usize {
        self.residuals.nrows()
    }

    /// Descent iterations performed (0 for closed-form fits).
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Whether the optimizer met its tolerance before the iteration cap.
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Predict y at a single x.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.model.evaluate(&self.parameters, x)
    }

    /// Predict y for every element of `x`.
    pub fn predict(&self, x: &Col<f64>) -> Col<f64> {
        Col::from_fn(x.nrows(), |i| self.evaluate(x[i]))
    }

    /// Coefficient of determination against the observed `y` of the
    /// training series.
    ///
    /// Returns 0 when `y` has zero total variance.
    pub fn goodness_of_fit(&self, y: &Col<f64>) -> f64 {
        diagnostics::r_squared(y, &self.residuals)
    }

    /// Residual sum of squares.
    pub fn rss(&self) -> f64 {
        self.residuals.iter().map(|&r| r * r).sum()
    }

    /// Sample the fitted curve at `n_segments + 1` evenly spaced points
    /// over `[x_min, x_max]`.
    pub fn curve(&self, x_min: f64, x_max: f64, n_segments: usize) -> Vec<(f64, f64)> {
        let segments = n_segments.max(1);
        let step = (x_max - x_min) / segments as f64;
        (0..=segments)
            .map(|i| {
                let x = if i == segments {
                    x_max
                } else {
                    x_min + step * i as f64
                };
                (x, self.evaluate(x))
            })
            .collect()
    }

    /// Sample the fitted curve over the data range of `x` padded by 5% on
    /// each side, as drawn over a chart.
    ///
    /// Returns an empty vector when `x` is empty.
    pub fn overlay_curve(&self, x: &Col<f64>, n_segments: usize) -> Vec<(f64, f64)> {
        if x.nrows() == 0 {
            return Vec::new();
        }
        let (lo, hi) = x
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        let mut range = hi - lo;
        if range == 0.0 {
            range = 1.0;
        }
        self.curve(lo - range * 0.05, hi + range * 0.05, n_segments)
    }

    /// Multi-line report: label, named parameters and R².
    pub fn report(&self, y: &Col<f64>) -> String {
        let mut out = format!("{} parameters:\n", self.label());
        for (i, name) in self.model.parameter_names().iter().enumerate() {
            out.push_str(&format!("  {}: {:.4}\n", name, self.parameters[i]));
        }
        out.push_str(&format!("  formula: {}\n", self));
        out.push_str(&format!("  R²: {:.4}", self.goodness_of_fit(y)));
        out
    }
}

impl fmt::Display for FitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.parameters;
        match self.model {
            ModelKind::Linear | ModelKind::Quadratic => {
                write!(f, "y = {:.3}", p[0])?;
                for k in 1..p.nrows() {
                    let (sign, value) = if p[k] < 0.0 { ("-", -p[k]) } else { ("+", p[k]) };
                    if k == 1 {
                        write!(f, " {} {:.3}*x", sign, value)?;
                    } else {
                        write!(f, " {} {:.3}*x^{}", sign, value, k)?;
                    }
                }
                Ok(())
            }
            ModelKind::Sinusoidal => write!(
                f,
                "y = {:.3}*sin({:.3}*x + {:.3}) + {:.3}",
                p[0], p[1], p[2], p[3]
            ),
            ModelKind::Gaussian => {
                write!(f, "y = {:.3}*exp(-((x - {:.3})/{:.3})^2)", p[0], p[1], p[2])
            }
        }
    }
}
