//! Residuals and residual-chart helpers.

use crate::core::ModelKind;
use crate::solvers::FitError;
use crate::utils::ensure_same_length;
use faer::Col;

/// Compute `y[i] - f(x[i])` for a model and its parameters.
///
/// # Errors
/// `DimensionMismatch` if `x` and `y` differ in length.
///
/// # Panics
///
/// If `params` does not hold `model.n_parameters()` values.
pub fn compute_residuals(
    model: ModelKind,
    params: &Col<f64>,
    x: &Col<f64>,
    y: &Col<f64>,
) -> Result<Col<f64>, FitError> {
    assert_eq!(
        params.nrows(),
        model.n_parameters(),
        "{model} takes {} parameters",
        model.n_parameters()
    );
    ensure_same_length(x, y)?;
    Ok(Col::from_fn(y.nrows(), |i| y[i] - model.evaluate(params, x[i])))
}

/// Scale residuals by their root mean square.
///
/// A perfect fit yields zeros. Any nonzero residual of a series whose
/// RMS is zero or non-finite maps to NaN.
pub fn standardized_residuals(residuals: &Col<f64>) -> Col<f64> {
    let scale = super::rmse(residuals);
    if scale > 0.0 && scale.is_finite() {
        Col::from_fn(residuals.nrows(), |i| residuals[i] / scale)
    } else {
        Col::from_fn(residuals.nrows(), |i| match residuals[i] {
            r if r.abs() < 1e-14 => 0.0,
            _ => f64::NAN,
        })
    }
}

/// Indices of samples whose standardized residual exceeds `threshold` in
/// magnitude.
pub fn residual_outliers(standardized: &Col<f64>, threshold: f64) -> Vec<usize> {
    (0..standardized.nrows())
        .filter(|&i| standardized[i].abs() > threshold)
        .collect()
}

/// Vertical extent of a residual chart: `(min, max)` of the residuals,
/// widened by 0.1 on each side when they span less than 1e-10.
///
/// Returns `None` for an empty series.
pub fn residual_bounds(residuals: &Col<f64>) -> Option<(f64, f64)> {
    if residuals.nrows() == 0 {
        return None;
    }
    let (mut lo, mut hi) = residuals
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &r| {
            (lo.min(r), hi.max(r))
        });
    if (hi - lo).abs() < 1e-10 {
        lo -= 0.1;
        hi += 0.1;
    }
    Some((lo, hi))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_residuals() {
        let x = Col::from_fn(4, |i| i as f64);
        let y = Col::from_fn(4, |i| [1.0, 3.5, 5.0, 7.0][i]);
        let params = Col::from_fn(2, |i| [1.0, 2.0][i]);

        let residuals = compute_residuals(ModelKind::Linear, &params, &x, &y).unwrap();
        assert_eq!(residuals.nrows(), 4);
        assert!((residuals[0]).abs() < 1e-12);
        assert!((residuals[1] - 0.5).abs() < 1e-12);
        assert!((residuals[3]).abs() < 1e-12);
    }

    #[test]
    fn test_compute_residuals_length_mismatch() {
        let x = Col::from_fn(3, |i| i as f64);
        let y = Col::from_fn(4, |i| i as f64);
        let params = Col::from_fn(2, |i| [0.0, 1.0][i]);

        assert!(matches!(
            compute_residuals(ModelKind::Linear, &params, &x, &y),
            Err(FitError::DimensionMismatch { x_len: 3, y_len: 4 })
        ));
    }

    #[test]
    #[should_panic(expected = "quadratic takes 3 parameters")]
    fn test_compute_residuals_wrong_parameter_count() {
        let x = Col::from_fn(3, |i| i as f64);
        let params = Col::from_fn(2, |i| [0.0, 1.0][i]);
        let _ = compute_residuals(ModelKind::Quadratic, &params, &x, &x);
    }

    #[test]
    fn test_standardized_residuals_have_unit_rms() {
        let residuals = Col::from_fn(8, |i| [0.3, -0.2, 0.5, -0.6, 0.1, 0.0, -0.4, 0.3][i]);
        let scaled = standardized_residuals(&residuals);
        let rms = (scaled.iter().map(|r| r * r).sum::<f64>() / 8.0).sqrt();
        assert!((rms - 1.0).abs() < 1e-12);
        assert!(scaled[5] == 0.0);
    }

    #[test]
    fn test_standardized_residuals_perfect_fit() {
        let scaled = standardized_residuals(&Col::zeros(5));
        assert!(scaled.iter().all(|&r| r == 0.0));
    }

    #[test]
    fn test_outliers_by_magnitude() {
        let scaled = Col::from_fn(6, |i| [0.4, -2.5, 1.9, 2.0, -0.1, 3.2][i]);
        assert_eq!(residual_outliers(&scaled, 2.0), vec![1, 5]);
        assert!(residual_outliers(&scaled, 5.0).is_empty());
    }

    #[test]
    fn test_residual_bounds() {
        let residuals = Col::from_fn(3, |i| [-1.0, 0.5, 2.0][i]);
        assert_eq!(residual_bounds(&residuals), Some((-1.0, 2.0)));

        let flat = Col::zeros(4);
        let (lo, hi) = residual_bounds(&flat).unwrap();
        assert!((lo + 0.1).abs() < 1e-12);
        assert!((hi - 0.1).abs() < 1e-12);

        assert_eq!(residual_bounds(&Col::zeros(0)), None);
    }
}
