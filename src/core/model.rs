//! Parametric model kinds and their prediction formulas.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;
use thiserror::Error;

/// The family of curves a fit is drawn from.
///
/// Parameters are always stored in a fixed order:
///
/// | Kind | Parameters | Formula |
/// |---|---|---|
/// | `Linear` | `c0, c1` | `c0 + c1·x` |
/// | `Quadratic` | `c0, c1, c2` | `c0 + c1·x + c2·x²` |
/// | `Sinusoidal` | `A, B, C, D` | `A·sin(B·x + C) + D` |
/// | `Gaussian` | `A, B, C` | `A·exp(−((x − B)/C)²)` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    /// Degree-1 polynomial.
    Linear,
    /// Degree-2 polynomial.
    Quadratic,
    /// Four-parameter sinusoid.
    Sinusoidal,
    /// Three-parameter Gaussian bump.
    Gaussian,
}

impl ModelKind {
    /// All model kinds, in selector order.
    pub const ALL: [ModelKind; 4] = [
        ModelKind::Linear,
        ModelKind::Quadratic,
        ModelKind::Sinusoidal,
        ModelKind::Gaussian,
    ];

    /// Number of parameters the model carries.
    pub fn n_parameters(self) -> usize {
        match self {
            ModelKind::Linear => 2,
            ModelKind::Quadratic => 3,
            ModelKind::Sinusoidal => 4,
            ModelKind::Gaussian => 3,
        }
    }

    /// Minimum number of samples a fit of this kind accepts.
    pub fn min_observations(self) -> usize {
        match self {
            ModelKind::Linear => 2,
            ModelKind::Quadratic => 3,
            ModelKind::Sinusoidal => 4,
            ModelKind::Gaussian => 3,
        }
    }

    /// Polynomial degree for the polynomial kinds.
    pub fn polynomial_degree(self) -> Option<usize> {
        match self {
            ModelKind::Linear => Some(1),
            ModelKind::Quadratic => Some(2),
            ModelKind::Sinusoidal | ModelKind::Gaussian => None,
        }
    }

    /// The polynomial kind of the given degree, if there is one.
    pub fn from_polynomial_degree(degree: usize) -> Option<Self> {
        match degree {
            1 => Some(ModelKind::Linear),
            2 => Some(ModelKind::Quadratic),
            _ => None,
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            ModelKind::Linear => "Linear fit",
            ModelKind::Quadratic => "Quadratic fit",
            ModelKind::Sinusoidal => "Sinusoidal fit",
            ModelKind::Gaussian => "Gaussian fit",
        }
    }

    /// Names of the parameters, in storage order.
    pub fn parameter_names(self) -> &'static [&'static str] {
        match self {
            ModelKind::Linear => &["constant", "linear"],
            ModelKind::Quadratic => &["constant", "linear", "quadratic"],
            ModelKind::Sinusoidal => &["amplitude", "frequency", "phase", "offset"],
            ModelKind::Gaussian => &["amplitude", "center", "width"],
        }
    }

    /// Evaluate the model at `x` for the given parameters.
    ///
    /// `params` must hold at least `n_parameters()` values.
    pub fn evaluate<P>(self, params: &P, x: f64) -> f64
    where
        P: Index<usize, Output = f64> + ?Sized,
    {
        match self {
            ModelKind::Linear | ModelKind::Quadratic => (0..self.n_parameters())
                .rev()
                .fold(0.0, |acc, k| acc * x + params[k]),
            ModelKind::Sinusoidal => sinusoid(params[0], params[1], params[2], params[3], x),
            ModelKind::Gaussian => gaussian(params[0], params[1], params[2], x),
        }
    }
}

/// `a·sin(b·x + c) + d`
#[inline]
pub(crate) fn sinusoid(a: f64, b: f64, c: f64, d: f64, x: f64) -> f64 {
    a * (b * x + c).sin() + d
}

/// `a·exp(−((x − b)/c)²)`
#[inline]
pub(crate) fn gaussian(a: f64, b: f64, c: f64, x: f64) -> f64 {
    let u = (x - b) / c;
    a * (-u * u).exp()
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModelKind::Linear => "linear",
            ModelKind::Quadratic => "quadratic",
            ModelKind::Sinusoidal => "sinusoidal",
            ModelKind::Gaussian => "gaussian",
        };
        f.write_str(name)
    }
}

/// Error returned when a model name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown model kind: {0:?}")]
pub struct ParseModelKindError(pub String);

impl FromStr for ModelKind {
    type Err = ParseModelKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" | "poly1" => Ok(ModelKind::Linear),
            "quadratic" | "poly2" => Ok(ModelKind::Quadratic),
            "sinusoidal" | "sine" => Ok(ModelKind::Sinusoidal),
            "gaussian" | "gauss" => Ok(ModelKind::Gaussian),
            _ => Err(ParseModelKindError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_counts_match_names() {
        for kind in ModelKind::ALL {
            assert_eq!(kind.parameter_names().len(), kind.n_parameters());
            assert!(kind.min_observations() >= 2);
        }
    }

    #[test]
    fn test_polynomial_evaluation() {
        // 3 + 2x - x²
        let params = [3.0, 2.0, -1.0];
        assert!((ModelKind::Quadratic.evaluate(&params[..], 2.0) - 3.0).abs() < 1e-12);
        assert!((ModelKind::Linear.evaluate(&params[..2], 4.0) - 11.0).abs() < 1e-12);
    }

    #[test]
    fn test_sinusoid_and_gaussian_evaluation() {
        let sine = [2.0, 1.0, 0.0, 1.0];
        let at = std::f64::consts::FRAC_PI_2;
        assert!((ModelKind::Sinusoidal.evaluate(&sine[..], at) - 3.0).abs() < 1e-12);

        let bump = [4.0, 1.0, 2.0];
        assert!((ModelKind::Gaussian.evaluate(&bump[..], 1.0) - 4.0).abs() < 1e-12);
        let expected = 4.0 * (-1.0f64).exp();
        assert!((ModelKind::Gaussian.evaluate(&bump[..], 3.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_parse_round_trip() {
        for kind in ModelKind::ALL {
            assert_eq!(kind.to_string().parse::<ModelKind>(), Ok(kind));
        }
        assert_eq!(" Gauss ".parse::<ModelKind>(), Ok(ModelKind::Gaussian));
        assert_eq!("POLY2".parse::<ModelKind>(), Ok(ModelKind::Quadratic));
        assert!("cubic".parse::<ModelKind>().is_err());
    }

    #[test]
    fn test_polynomial_degree() {
        assert_eq!(ModelKind::Linear.polynomial_degree(), Some(1));
        assert_eq!(ModelKind::Quadratic.polynomial_degree(), Some(2));
        assert_eq!(ModelKind::Gaussian.polynomial_degree(), None);
        for kind in [ModelKind::Linear, ModelKind::Quadratic] {
            let degree = kind.polynomial_degree().unwrap();
            assert_eq!(ModelKind::from_polynomial_degree(degree), Some(kind));
        }
        assert_eq!(ModelKind::from_polynomial_degree(0), None);
        assert_eq!(ModelKind::from_polynomial_degree(3), None);
    }
}
