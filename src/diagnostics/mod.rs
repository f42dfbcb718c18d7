//! Fit evaluation diagnostics (residuals, R², residual chart helpers).
//!
//! This module provides tools for judging a fitted curve:
//!
//! - **Goodness of fit**: R², adjusted R², MSE and RMSE
//! - **Residuals**: raw and standardized residuals for outlier detection
//! - **Residual chart**: vertical bounds for plotting residual bars
//!
//! # Example
//!
//! ```rust,ignore
//! use plotfit::diagnostics::{r_squared, residual_outliers, standardized_residuals};
//!
//! // After fitting a model
//! let r2 = r_squared(&y, fit.residuals());
//! let standardized = standardized_residuals(fit.residuals());
//! let outliers = residual_outliers(&standardized, 2.0);
//! ```

mod goodness;
mod residuals;

// Re-export main functions
pub use goodness::{adjusted_r_squared, mse, r_squared, rmse, total_sum_of_squares};
pub use residuals::{
    compute_residuals, residual_bounds, residual_outliers, standardized_residuals,
};
