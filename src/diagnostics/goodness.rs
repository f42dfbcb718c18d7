//! Goodness-of-fit measures.

use faer::Col;

/// Total sum of squares of `y` around its mean.
pub fn total_sum_of_squares(y: &Col<f64>) -> f64 {
    let n = y.nrows();
    if n == 0 {
        return 0.0;
    }
    let y_mean: f64 = y.iter().sum::<f64>() / n as f64;
    y.iter().map(|&yi| (yi - y_mean).powi(2)).sum()
}

/// Coefficient of determination: `1 - SS_res / SS_tot`.
///
/// A series with zero total variance has R² = 0 by convention.
pub fn r_squared(y: &Col<f64>, residuals: &Col<f64>) -> f64 {
    debug_assert_eq!(y.nrows(), residuals.nrows());

    let tss = total_sum_of_squares(y);
    let rss: f64 = residuals.iter().map(|&r| r.powi(2)).sum();

    if tss > 0.0 {
        1.0 - rss / tss
    } else {
        0.0
    }
}

/// Adjusted R² for a model with `n_parameters` fitted parameters.
///
/// NaN when there are no residual degrees of freedom.
pub fn adjusted_r_squared(r_squared: f64, n_observations: usize, n_parameters: usize) -> f64 {
    if n_observations <= n_parameters || n_observations < 2 {
        return f64::NAN;
    }
    let df_total = (n_observations - 1) as f64;
    let df_resid = (n_observations - n_parameters) as f64;
    1.0 - (1.0 - r_squared) * df_total / df_resid
}

/// Mean squared residual (`SS_res / n`). NaN for an empty series.
pub fn mse(residuals: &Col<f64>) -> f64 {
    let n = residuals.nrows();
    if n == 0 {
        return f64::NAN;
    }
    residuals.iter().map(|&r| r.powi(2)).sum::<f64>() / n as f64
}

/// Root mean squared residual.
pub fn rmse(residuals: &Col<f64>) -> f64 {
    mse(residuals).sqrt()
}
