//! Statistics summary of a sample.

use crate::solvers::FitError;
use crate::utils::ensure_finite;
use faer::Col;
use statrs::statistics::Statistics;
use std::fmt;

/// Summary statistics of one snapshot of a series.
///
/// Variance and standard deviation are population statistics (divided by
/// `n`). Quartiles use lower-biased index selection on the sorted sample
/// (`sorted[n/4]` and `sorted[3n/4]`) rather than interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatisticsSummary {
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    /// Population variance.
    pub variance: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub median: f64,
    /// First quartile.
    pub q1: f64,
    /// Third quartile.
    pub q3: f64,
}

impl StatisticsSummary {
    /// `max - min`.
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Interquartile range `q3 - q1`.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

impl fmt::Display for StatisticsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Count: {}", self.count)?;
        writeln!(f, "Sum: {:.2}", self.sum)?;
        writeln!(f, "Mean: {:.2}", self.mean)?;
        writeln!(f, "Std Dev: {:.2}", self.std_dev)?;
        writeln!(f, "Min: {:.2}", self.min)?;
        writeln!(f, "Max: {:.2}", self.max)?;
        writeln!(f, "Median: {:.2}", self.median)?;
        writeln!(f, "Q1: {:.2}", self.q1)?;
        write!(f, "Q3: {:.2}", self.q3)
    }
}

/// Compute the statistics summary of `samples`.
///
/// The caller's series is left untouched; order statistics are taken from
/// a private sorted copy.
///
/// # Errors
/// `InsufficientData` for an empty series, `NonFiniteInput` if any sample
/// is NaN or infinite.
pub fn compute_statistics(samples: &Col<f64>) -> Result<StatisticsSummary, FitError> {
    let n = samples.nrows();
    if n == 0 {
        return Err(FitError::InsufficientData { needed: 1, got: 0 });
    }
    ensure_finite(samples)?;

    let sum: f64 = samples.iter().sum();
    let mean = sum / n as f64;
    let variance = samples.iter().map(|&v| (v - mean) * (v - mean)).sum::<f64>() / n as f64;

    let mut sorted: Vec<f64> = samples.iter().copied().collect();
    sorted.sort_by(f64::total_cmp);

    let median = if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    };

    Ok(StatisticsSummary {
        count: n,
        sum,
        mean,
        variance,
        std_dev: variance.sqrt(),
        min: Statistics::min(samples.iter()),
        max: Statistics::max(samples.iter()),
        median,
        q1: sorted[n / 4],
        q3: sorted[3 * n / 4],
    })
}
