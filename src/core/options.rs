//! Fitting options and configuration.

use thiserror::Error;

/// Configuration options for curve fitting.
///
/// The descent fields drive the sinusoidal and Gaussian optimizers; the
/// pivot tolerance is used by the linear system solver behind polynomial
/// fits.
#[derive(Debug, Clone, PartialEq)]
pub struct FitOptions {
    /// Initial step size for batch gradient descent (default: 0.001).
    pub learning_rate: f64,
    /// Multiplier applied to the learning rate on each decay step (default: 0.95).
    pub decay_factor: f64,
    /// Number of iterations between decay steps (default: 100).
    pub decay_interval: usize,
    /// Maximum descent iterations (default: 1000).
    pub max_iterations: usize,
    /// Convergence tolerance on every parameter update (default: 1e-6).
    pub tolerance: f64,
    /// Smallest pivot magnitude accepted during elimination (default: 1e-10).
    pub pivot_tolerance: f64,
    /// Floor for strictly positive model parameters (default: 0.1).
    pub parameter_floor: f64,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            learning_rate: 0.001,
            decay_factor: 0.95,
            decay_interval: 100,
            max_iterations: 1000,
            tolerance: 1e-6,
            pivot_tolerance: 1e-10,
            parameter_floor: 0.1,
        }
    }
}

/// Errors that can occur when validating fit options.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptionsError {
    #[error("learning_rate must be positive and finite, got {0}")]
    InvalidLearningRate(f64),
    #[error("decay_factor must be in (0, 1], got {0}")]
    InvalidDecayFactor(f64),
    #[error("decay_interval must be at least 1, got {0}")]
    InvalidDecayInterval(usize),
    #[error("max_iterations must be at least 1, got {0}")]
    InvalidMaxIterations(usize),
    #[error("tolerance must be positive, got {0}")]
    InvalidTolerance(f64),
    #[error("pivot_tolerance must be positive, got {0}")]
    InvalidPivotTolerance(f64),
    #[error("parameter_floor must be positive, got {0}")]
    InvalidParameterFloor(f64),
}

impl FitOptions {
    /// Create a new builder for fit options.
    pub fn builder() -> FitOptionsBuilder {
        FitOptionsBuilder::default()
    }

    /// Default options with a reduced iteration budget.
    pub fn quick(max_iterations: usize) -> Self {
        Self {
            max_iterations,
            ..Default::default()
        }
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !(self.learning_rate > 0.0 && self.learning_rate.is_finite()) {
            return Err(OptionsError::InvalidLearningRate(self.learning_rate));
        }
        if !(self.decay_factor > 0.0 && self.decay_factor <= 1.0) {
            return Err(OptionsError::InvalidDecayFactor(self.decay_factor));
        }
        if self.decay_interval < 1 {
            return Err(OptionsError::InvalidDecayInterval(self.decay_interval));
        }
        if self.max_iterations < 1 {
            return Err(OptionsError::InvalidMaxIterations(self.max_iterations));
        }
        if !(self.tolerance > 0.0) {
            return Err(OptionsError::InvalidTolerance(self.tolerance));
        }
        if !(self.pivot_tolerance > 0.0) {
            return Err(OptionsError::InvalidPivotTolerance(self.pivot_tolerance));
        }
        if !(self.parameter_floor > 0.0) {
            return Err(OptionsError::InvalidParameterFloor(self.parameter_floor));
        }
        Ok(())
    }
}

/// Builder for `FitOptions`.
#[derive(Debug, Clone, Default)]
pub struct FitOptionsBuilder {
    options: FitOptions,
}

impl FitOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial learning rate.
    pub fn learning_rate(mut self, rate: f64) -> Self {
        self.options.learning_rate = rate;
        self
    }

    /// Set the learning-rate decay factor.
    pub fn decay_factor(mut self, factor: f64) -> Self {
        self.options.decay_factor = factor;
        self
    }

    /// Set how many iterations pass between decay steps.
    pub fn decay_interval(mut self, interval: usize) -> Self {
        self.options.decay_interval = interval;
        self
    }

    /// Set the maximum iterations for the descent optimizers.
    pub fn max_iterations(mut self, max_iter: usize) -> Self {
        self.options.max_iterations = max_iter;
        self
    }

    /// Set the convergence tolerance.
    pub fn tolerance(mut self, tol: f64) -> Self {
        self.options.tolerance = tol;
        self
    }

    /// Set the singular pivot threshold for the linear solver.
    pub fn pivot_tolerance(mut self, tol: f64) -> Self {
        self.options.pivot_tolerance = tol;
        self
    }

    /// Set the floor for strictly positive parameters.
    pub fn parameter_floor(mut self, floor: f64) -> Self {
        self.options.parameter_floor = floor;
        self
    }

    /// Build and validate the options.
    pub fn build(self) -> Result<FitOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }

    /// Build the options without validation.
    pub fn build_unchecked(self) -> FitOptions {
        self.options
    }
}
