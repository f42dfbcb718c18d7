//! Descriptive statistics tests.

mod common;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use faer::Col;
use plotfit::{compute_statistics, FitError};

#[test]
fn test_known_sample() {
    let y = common::col(&[1.0, 2.0, 3.0, 4.0]);
    let s = compute_statistics(&y).expect("non-empty sample");

    assert_eq!(s.count, 4);
    assert_relative_eq!(s.sum, 10.0);
    assert_relative_eq!(s.mean, 2.5);
    assert_relative_eq!(s.variance, 1.25);
    assert_relative_eq!(s.std_dev, 1.25f64.sqrt());
    assert_eq!(s.min, 1.0);
    assert_eq!(s.max, 4.0);
    assert_relative_eq!(s.median, 2.5);
    // sorted[1] and sorted[3]
    assert_eq!(s.q1, 2.0);
    assert_eq!(s.q3, 4.0);
}

#[test]
fn test_odd_count_median() {
    let y = common::col(&[9.0, 1.0, 5.0, 3.0, 7.0]);
    let s = compute_statistics(&y).expect("non-empty sample");

    assert_eq!(s.median, 5.0);
    assert_eq!(s.q1, 3.0);
    assert_eq!(s.q3, 7.0);
    assert_eq!(s.range(), 8.0);
    assert_eq!(s.iqr(), 4.0);
}

#[test]
fn test_caller_order_unchanged() {
    let y = common::col(&[3.0, -1.0, 2.0]);
    compute_statistics(&y).expect("non-empty sample");

    assert_eq!(y[0], 3.0);
    assert_eq!(y[1], -1.0);
    assert_eq!(y[2], 2.0);
}

#[test]
fn test_ordering_invariants() {
    let y = common::noise(37, 10.0, 3);
    let s = compute_statistics(&y).expect("non-empty sample");

    assert_eq!(s.count, 37);
    assert!(s.min <= s.q1);
    assert!(s.q1 <= s.median);
    assert!(s.median <= s.q3);
    assert!(s.q3 <= s.max);
    assert!(s.min <= s.mean && s.mean <= s.max);
    assert!(s.variance >= 0.0);
    assert_relative_eq!(s.std_dev * s.std_dev, s.variance, epsilon = 1e-10);
}

#[test]
fn test_constant_sample() {
    let y = Col::from_fn(6, |_| 4.5);
    let s = compute_statistics(&y).expect("non-empty sample");

    assert_eq!(s.min, 4.5);
    assert_eq!(s.max, 4.5);
    assert_eq!(s.median, 4.5);
    assert_eq!(s.q1, 4.5);
    assert_eq!(s.q3, 4.5);
    assert_abs_diff_eq!(s.mean, 4.5, epsilon = 1e-12);
    assert_abs_diff_eq!(s.variance, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(s.std_dev, 0.0, epsilon = 1e-6);
}

#[test]
fn test_single_value() {
    let y = common::col(&[-2.0]);
    let s = compute_statistics(&y).expect("non-empty sample");

    assert_eq!(s.count, 1);
    assert_eq!(s.median, -2.0);
    assert_eq!(s.q1, -2.0);
    assert_eq!(s.q3, -2.0);
    assert_eq!(s.variance, 0.0);
}

#[test]
fn test_empty_sample() {
    let y = Col::<f64>::zeros(0);
    assert_eq!(
        compute_statistics(&y),
        Err(FitError::InsufficientData { needed: 1, got: 0 })
    );
}

#[test]
fn test_non_finite_sample() {
    let y = common::col(&[1.0, f64::INFINITY]);
    assert_eq!(
        compute_statistics(&y),
        Err(FitError::NonFiniteInput { index: 1 })
    );
}

#[test]
fn test_report_format() {
    let y = common::col(&[1.0, 2.0, 3.0, 4.0]);
    let report = compute_statistics(&y).expect("non-empty sample").to_string();

    assert!(report.starts_with("Count: 4\n"));
    assert!(report.contains("Mean: 2.50"));
    assert!(report.ends_with("Q3: 4.00"));
}

#[test]
fn test_noise_helper_spans_both_signs() {
    let s = compute_statistics(&common::noise(200, 1.0, 19)).expect("non-empty sample");

    assert!(s.min < -0.5 && s.max > 0.5);
    assert!(s.min >= -1.0 && s.max <= 1.0);
    assert_abs_diff_eq!(s.mean, 0.0, epsilon = 0.15);
}
