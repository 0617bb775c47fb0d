use thiserror::Error;

/// Raised when an input lies outside the domain on which a potential is defined.
///
/// Evaluation never clamps or extrapolates; every violated precondition surfaces
/// as one of these variants.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DomainError {
    #[error("Distance must be non-negative, got {0}")]
    NegativeDistance(f64),

    #[error("Position must be strictly positive, got {0}")]
    NonPositivePosition(f64),

    #[error("Input coordinate is NaN")]
    NotANumber,

    #[error("Constant '{name}' must be strictly positive and finite, got {value}")]
    NonPositiveConstant { name: &'static str, value: f64 },

    #[error("Coefficient '{name}' must be finite, got {value}")]
    NonFiniteCoefficient { name: &'static str, value: f64 },

    #[error("Coefficient '{0}' is zero; the critical point is undefined")]
    ZeroCoefficient(&'static str),

    #[error("No finite positive critical point exists for A = {a}, B = {b}")]
    NoPositiveCriticalPoint { a: f64, b: f64 },
}

impl DomainError {
    pub(crate) fn check_constant(name: &'static str, value: f64) -> Result<f64, Self> {
        (value.is_finite() && value > 0.0)
            .then_some(value)
            .ok_or(Self::NonPositiveConstant { name, value })
    }

    pub(crate) fn check_coefficient(name: &'static str, value: f64) -> Result<f64, Self> {
        value
            .is_finite()
            .then_some(value)
            .ok_or(Self::NonFiniteCoefficient { name, value })
    }
}
