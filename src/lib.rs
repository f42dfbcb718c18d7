//! Curve fitting and descriptive statistics for plotted numeric series.
//!
//! Given paired samples `(x, y)`, this library fits one of four parametric
//! models (straight line, parabola, sinusoid, Gaussian peak), reports the
//! residuals and coefficient of determination of the fit, and summarises a
//! series with descriptive statistics.
//!
//! # Example
//!
//! ```rust,ignore
//! use plotfit::prelude::*;
//! use faer::Col;
//!
//! let x = Col::from_fn(5, |i| i as f64);
//! let y = Col::from_fn(5, |i| 3.0 + 2.0 * i as f64);
//!
//! let result = fit(ModelKind::Linear, &x, &y)?;
//! println!("{result}");                       // y = 3.000 + 2.000*x
//! println!("R² = {}", result.goodness_of_fit(&y));
//!
//! let summary = compute_statistics(&y)?;
//! println!("median = {}", summary.median);
//! ```

pub mod core;
pub mod descriptive;
pub mod diagnostics;
pub mod solvers;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{FitOptions, FitOptionsBuilder, FitResult, ModelKind, OptionsError};
    pub use crate::descriptive::{compute_statistics, StatisticsSummary};
    pub use crate::diagnostics::{
        adjusted_r_squared, compute_residuals, r_squared, residual_bounds, residual_outliers,
        rmse, standardized_residuals,
    };
    pub use crate::solvers::{
        fit, fit_with_options, CurveFitter, FitError, GaussianFitter, PolynomialFitter,
        SinusoidalFitter,
    };
}

pub use crate::core::{FitOptions, FitResult, ModelKind, OptionsError};
pub use crate::descriptive::{compute_statistics, StatisticsSummary};
pub use crate::solvers::{fit, fit_with_options, CurveFitter, FitError};
