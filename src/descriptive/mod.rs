//! Descriptive statistics over a single numeric series.
//!
//! # Example
//!
//! ```rust,ignore
//! use plotfit::descriptive::compute_statistics;
//! use faer::Col;
//!
//! let y = Col::from_fn(8, |i| (i * i) as f64);
//! let summary = compute_statistics(&y)?;
//! println!("{summary}");
//! ```

mod summary;

pub use summary::{compute_statistics, StatisticsSummary};
