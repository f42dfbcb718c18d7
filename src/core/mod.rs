//! Core types for curve fitting.

pub(crate) mod model;
mod options;
mod result;

pub use model::{ModelKind, ParseModelKindError};
pub use options::{FitOptions, FitOptionsBuilder, OptionsError};
pub use result::FitResult;
