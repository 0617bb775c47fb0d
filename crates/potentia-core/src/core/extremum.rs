use std::fmt;

/// Nature of a stationary point, read off the sign of the second derivative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CriticalKind {
    Minimum,
    Maximum,
    Indeterminate,
}

impl CriticalKind {
    /// A curvature of exactly zero gives no verdict; it is reported as
    /// [`CriticalKind::Indeterminate`] rather than guessed.
    pub fn from_curvature(curvature: f64) -> Self {
        if curvature > 0.0 {
            Self::Minimum
        } else if curvature < 0.0 {
            Self::Maximum
        } else {
            Self::Indeterminate
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Minimum => "local minimum (stable equilibrium)",
            Self::Maximum => "local maximum (unstable equilibrium)",
            Self::Indeterminate => "indeterminate (second derivative vanishes)",
        }
    }
}

impl fmt::Display for CriticalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Minimum => "Minimum",
            Self::Maximum => "Maximum",
            Self::Indeterminate => "Indeterminate",
        };
        f.write_str(name)
    }
}

/// An analytically located stationary point of a one-dimensional potential.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriticalPoint {
    pub position: f64,
    pub value: f64,
    pub curvature: f64,
    pub kind: CriticalKind,
}

impl CriticalPoint {
    pub fn new(position: f64, value: f64, curvature: f64) -> Self {
        Self {
            position,
            value,
            curvature,
            kind: CriticalKind::from_curvature(curvature),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_curvature_is_a_minimum() {
        assert_eq!(CriticalKind::from_curvature(0.136), CriticalKind::Minimum);
    }

    #[test]
    fn negative_curvature_is_a_maximum() {
        assert_eq!(CriticalKind::from_curvature(-1e-300), CriticalKind::Maximum);
    }

    #[test]
    fn zero_curvature_is_indeterminate() {
        assert_eq!(CriticalKind::from_curvature(0.0), CriticalKind::Indeterminate);
        assert_eq!(CriticalKind::from_curvature(-0.0), CriticalKind::Indeterminate);
    }

    #[test]
    fn nan_curvature_is_indeterminate() {
        assert_eq!(
            CriticalKind::from_curvature(f64::NAN),
            CriticalKind::Indeterminate
        );
    }

    #[test]
    fn new_classifies_from_curvature() {
        let point = CriticalPoint::new(2.0, -0.5, -3.0);
        assert_eq!(point.kind, CriticalKind::Maximum);
        assert_eq!(point.position, 2.0);
        assert_eq!(point.value, -0.5);
    }

    #[test]
    fn descriptions_mention_stability() {
        assert!(CriticalKind::Minimum.description().contains("stable"));
        assert!(CriticalKind::Maximum.description().contains("unstable"));
    }
}
