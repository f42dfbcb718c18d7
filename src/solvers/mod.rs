//! Curve fitters for the supported model families.

mod descent;
mod gaussian;
mod polynomial;
mod sinusoidal;
mod traits;

pub use descent::{batch_gradient_descent, DescentModel, DescentOutcome};
pub use gaussian::GaussianFitter;
pub use polynomial::PolynomialFitter;
pub use sinusoidal::SinusoidalFitter;
pub use traits::{CurveFitter, FitError};

use crate::core::{FitOptions, FitResult, ModelKind};
use faer::Col;

/// Fit `model` to the series with default options.
pub fn fit(model: ModelKind, x: &Col<f64>, y: &Col<f64>) -> Result<FitResult, FitError> {
    fit_with_options(model, x, y, &FitOptions::default())
}

/// Fit `model` to the series with the given options.
///
/// The options are validated before any work is done.
pub fn fit_with_options(
    model: ModelKind,
    x: &Col<f64>,
    y: &Col<f64>,
    options: &FitOptions,
) -> Result<FitResult, FitError> {
    options.validate()?;
    let result = match model {
        ModelKind::Linear => PolynomialFitter::linear()
            .with_options(options.clone())
            .fit(x, y),
        ModelKind::Quadratic => PolynomialFitter::quadratic()
            .with_options(options.clone())
            .fit(x, y),
        ModelKind::Sinusoidal => SinusoidalFitter::new()
            .with_options(options.clone())
            .fit(x, y),
        ModelKind::Gaussian => GaussianFitter::new()
            .with_options(options.clone())
            .fit(x, y),
    }?;
    log::debug!("{} complete: {}", result.label(), result);
    Ok(result)
}
