use super::error::DomainError;
use super::extremum::CriticalPoint;
use super::potentials;

/// The two-term potential `V(x) = A/x³ − B/x` on `x > 0`.
///
/// Derivatives are closed-form:
///
/// ```text
/// V'(x)  = -3A/x⁴ + B/x²
/// V''(x) = 12A/x⁵ − 2B/x³
/// ```
///
/// `V'(x) = 0` has the single positive root `x_c = √(3A/B)` whenever `3A/B > 0`,
/// so the stationary point is located without any search.
///
/// Limits, for `A, B > 0`: `V(x) → +∞` as `x → 0⁺` since `A/x³` dominates, and
/// `V(x) → 0` as `x → ∞`. Whether `V` approaches zero from above or below at
/// large `x` depends on `A` and `B` and is not asserted here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RationalPotential {
    a: f64,
    b: f64,
}

impl RationalPotential {
    pub fn new(a: f64, b: f64) -> Result<Self, DomainError> {
        Ok(Self {
            a: DomainError::check_coefficient("A", a)?,
            b: DomainError::check_coefficient("B", b)?,
        })
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    fn check_position(x: f64) -> Result<f64, DomainError> {
        if x.is_nan() {
            return Err(DomainError::NotANumber);
        }
        if x <= 0.0 {
            return Err(DomainError::NonPositivePosition(x));
        }
        Ok(x)
    }

    pub fn potential(&self, x: f64) -> Result<f64, DomainError> {
        let x = Self::check_position(x)?;
        Ok(potentials::inverse_cubic_minus_inverse(x, self.a, self.b))
    }

    pub fn first_derivative(&self, x: f64) -> Result<f64, DomainError> {
        let x = Self::check_position(x)?;
        Ok(potentials::inverse_cubic_minus_inverse_first_derivative(
            x, self.a, self.b,
        ))
    }

    pub fn second_derivative(&self, x: f64) -> Result<f64, DomainError> {
        let x = Self::check_position(x)?;
        Ok(potentials::inverse_cubic_minus_inverse_second_derivative(
            x, self.a, self.b,
        ))
    }

    /// Position of the stationary point, `√(3A/B)`.
    pub fn critical_position(&self) -> Result<f64, DomainError> {
        if self.b == 0.0 {
            return Err(DomainError::ZeroCoefficient("B"));
        }
        let ratio = 3.0 * self.a / self.b;
        if !(ratio > 0.0) {
            return Err(DomainError::NoPositiveCriticalPoint {
                a: self.a,
                b: self.b,
            });
        }
        let position = ratio.sqrt();
        if !position.is_finite() {
            return Err(DomainError::NoPositiveCriticalPoint {
                a: self.a,
                b: self.b,
            });
        }
        Ok(position)
    }

    pub fn critical_point(&self) -> Result<CriticalPoint, DomainError> {
        let position = self.critical_position()?;
        let value = self.potential(position)?;
        let curvature = self.second_derivative(position)?;
        Ok(CriticalPoint::new(position, value, curvature))
    }
}
