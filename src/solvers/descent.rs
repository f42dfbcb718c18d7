//! Batch gradient descent for nonlinear least squares.

use crate::core::FitOptions;
use faer::Col;

/// A model whose parameters can be refined by [`batch_gradient_descent`].
///
/// Implementors supply the prediction formula and its analytic partial
/// derivatives with respect to each parameter; the descent loop is shared.
pub trait DescentModel {
    /// Number of parameters.
    fn n_parameters(&self) -> usize;

    /// Model value at `x`.
    fn value(&self, params: &[f64], x: f64) -> f64;

    /// Write `∂f/∂θ_j` at `x` into `out[j]`.
    fn partials(&self, params: &[f64], x: f64, out: &mut [f64]);

    /// Restrict parameters to their valid domain after each update.
    fn project(&self, _params: &mut [f64]) {}
}

/// Outcome of a descent run.
#[derive(Debug, Clone)]
pub struct DescentOutcome {
    /// Parameters after the last update.
    pub parameters: Col<f64>,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Whether every parameter update fell below the tolerance.
    pub converged: bool,
}

impl DescentOutcome {
    /// True if every parameter is finite.
    pub fn is_finite(&self) -> bool {
        self.parameters.iter().all(|p| p.is_finite())
    }
}

/// Minimise the mean squared error of `model` over `(x, y)` by batch
/// gradient descent starting from `initial`.
///
/// Each iteration averages `-2·(y - f)·∂f/∂θ` over all samples and steps
/// every parameter by `-rate·gradient`. The rate is multiplied by
/// `options.decay_factor` after every iteration whose index is a multiple
/// of `options.decay_interval`. The run stops once every step is smaller
/// than `options.tolerance`, or after `options.max_iterations`.
///
/// A run whose parameters become non-finite stops early without
/// converging; callers must check [`DescentOutcome::is_finite`].
///
/// # Panics
///
/// If `initial` does not hold `model.n_parameters()` values or `x` and `y`
/// differ in length.
pub fn batch_gradient_descent<M: DescentModel>(
    model: &M,
    x: &Col<f64>,
    y: &Col<f64>,
    initial: &[f64],
    options: &FitOptions,
) -> DescentOutcome {
    let n_params = model.n_parameters();
    assert_eq!(
        initial.len(),
        n_params,
        "initial guess must hold one value per parameter"
    );
    assert_eq!(x.nrows(), y.nrows(), "x and y must have the same length");
    let n = x.nrows();

    let mut params = initial.to_vec();
    let mut gradient = vec![0.0; n_params];
    let mut partials = vec![0.0; n_params];
    let mut rate = options.learning_rate;
    let mut iterations = 0;
    let mut converged = false;

    for iter in 0..options.max_iterations {
        gradient.iter_mut().for_each(|g| *g = 0.0);

        for i in 0..n {
            let error = y[i] - model.value(&params, x[i]);
            model.partials(&params, x[i], &mut partials);
            for j in 0..n_params {
                gradient[j] += -2.0 * error * partials[j];
            }
        }

        let mut all_small = true;
        for j in 0..n_params {
            let update = rate * gradient[j] / n as f64;
            if !(update.abs() <= options.tolerance) {
                all_small = false;
            }
            params[j] -= update;
        }
        model.project(&mut params);
        iterations = iter + 1;

        if params.iter().any(|p| !p.is_finite()) {
            log::warn!("gradient descent diverged at iteration {}", iter);
            break;
        }

        if all_small {
            converged = true;
            break;
        }

        if iter % options.decay_interval == 0 {
            rate *= options.decay_factor;
            log::trace!("iteration {}: learning rate decayed to {:e}", iter, rate);
        }
    }

    if converged {
        log::debug!("gradient descent converged after {} iterations", iterations);
    } else if iterations == options.max_iterations {
        log::debug!(
            "gradient descent stopped at the iteration cap ({})",
            options.max_iterations
        );
    }

    DescentOutcome {
        parameters: Col::from_fn(n_params, |j| params[j]),
        iterations,
        converged,
    }
}
