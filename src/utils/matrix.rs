//! Matrix utility functions.

use crate::solvers::FitError;
use faer::{Col, Mat};

/// Check that `x` and `y` describe the same number of samples.
pub fn ensure_same_length(x: &Col<f64>, y: &Col<f64>) -> Result<(), FitError> {
    if x.nrows() != y.nrows() {
        return Err(FitError::DimensionMismatch {
            x_len: x.nrows(),
            y_len: y.nrows(),
        });
    }
    Ok(())
}

/// Check that every element of `v` is finite.
pub fn ensure_finite(v: &Col<f64>) -> Result<(), FitError> {
    match v.iter().position(|value| !value.is_finite()) {
        Some(index) => Err(FitError::NonFiniteInput { index }),
        None => Ok(()),
    }
}

/// Build the polynomial design matrix `A[i][j] = x[i]^j` for `j` in `0..=degree`.
pub fn design_matrix(x: &Col<f64>, degree: usize) -> Mat<f64> {
    Mat::from_fn(x.nrows(), degree + 1, |i, j| x[i].powi(j as i32))
}

/// Form the normal equations `AᵗA` and `Aᵗy`.
pub fn normal_equations(a: &Mat<f64>, y: &Col<f64>) -> (Mat<f64>, Col<f64>) {
    let n_rows = a.nrows();
    let n_cols = a.ncols();

    let mut ata = Mat::zeros(n_cols, n_cols);
    let mut aty = Col::zeros(n_cols);

    for i in 0..n_cols {
        for j in 0..n_cols {
            let mut sum = 0.0;
            for k in 0..n_rows {
                sum += a[(k, i)] * a[(k, j)];
            }
            ata[(i, j)] = sum;
        }
        let mut sum = 0.0;
        for k in 0..n_rows {
            sum += a[(k, i)] * y[k];
        }
        aty[i] = sum;
    }

    (ata, aty)
}

/// Solve the square system `A·x = b` by Gaussian elimination with partial
/// pivoting.
///
/// `a` and `b` are copied; the caller's values are not modified. A pivot
/// whose magnitude falls below `pivot_tolerance` means the system is
/// numerically singular.
///
/// # Errors
/// `DimensionMismatch` if `a` is not square or `b` does not match it;
/// `SingularSystem` naming the column where elimination broke down.
pub fn solve_linear_system(
    a: &Mat<f64>,
    b: &Col<f64>,
    pivot_tolerance: f64,
) -> Result<Col<f64>, FitError> {
    let m = a.nrows();
    if a.ncols() != m || b.nrows() != m {
        return Err(FitError::DimensionMismatch {
            x_len: a.ncols(),
            y_len: b.nrows(),
        });
    }

    let mut a = a.clone();
    let mut b = b.clone();

    // Forward elimination
    for i in 0..m {
        let mut pivot_row = i;
        for k in (i + 1)..m {
            if a[(k, i)].abs() > a[(pivot_row, i)].abs() {
                pivot_row = k;
            }
        }

        if pivot_row != i {
            for j in 0..m {
                let tmp = a[(i, j)];
                a[(i, j)] = a[(pivot_row, j)];
                a[(pivot_row, j)] = tmp;
            }
            let tmp = b[i];
            b[i] = b[pivot_row];
            b[pivot_row] = tmp;
        }

        let pivot = a[(i, i)];
        if pivot.abs() < pivot_tolerance {
            return Err(FitError::SingularSystem { column: i });
        }

        for k in (i + 1)..m {
            let factor = a[(k, i)] / pivot;
            for j in i..m {
                a[(k, j)] -= factor * a[(i, j)];
            }
            b[k] -= factor * b[i];
        }
    }

    // Back-substitution
    let mut x = Col::zeros(m);
    for i in (0..m).rev() {
        let mut sum = b[i];
        for j in (i + 1)..m {
            sum -= a[(i, j)] * x[j];
        }
        x[i] = sum / a[(i, i)];
    }

    Ok(x)
}
